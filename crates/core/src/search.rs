//! Search parameters extracted from chat messages and listing summaries

use serde::{Deserialize, Serialize};

/// Structured property-search parameters pulled out of a free-form message.
///
/// Every field is optional; a field is either absent or a non-empty string.
/// The numeric-looking fields (`price_range`, `area`, `rooms`) hold the raw
/// matched substring such as "500 الف", not a parsed number — numeric
/// comparison is a downstream concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Property kind, e.g. "شقة" or "فيلا".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// "بيع" or "إيجار".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<String>,
}

impl SearchParams {
    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.type_.is_none()
            && self.purpose.is_none()
            && self.location.is_none()
            && self.price_range.is_none()
            && self.area.is_none()
            && self.rooms.is_none()
    }
}

/// The listing fields returned to the chat caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub purpose: String,
    pub area: f64,
    #[serde(rename = "mainImage")]
    pub main_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params() {
        assert!(SearchParams::default().is_empty());

        let params = SearchParams {
            location: Some("المعادي".to_string()),
            ..Default::default()
        };
        assert!(!params.is_empty());
    }

    #[test]
    fn wire_field_names() {
        let params = SearchParams {
            type_: Some("شقة".to_string()),
            price_range: Some("500 الف".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "شقة");
        assert_eq!(json["priceRange"], "500 الف");
        assert!(json.get("purpose").is_none());
    }
}
