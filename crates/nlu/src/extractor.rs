//! Entity extraction
//!
//! Derives [`SearchParams`] from a chat message: property type and purpose
//! via ordered synonym dictionaries, location via a gazetteer scan with a
//! marker-phrase fallback, and the numeric fields via regex passes that
//! keep the raw matched substring.
//!
//! Every step is a pure function of the input string — extracting twice
//! from the same message yields identical parameters.

use regex::Regex;
use std::sync::Arc;

use aqarkam_config::ExtractionConfig;
use aqarkam_core::SearchParams;

/// Marker-fallback bounds: how many extra characters to keep past the
/// first whitespace, and the accepted location length range.
const MARKER_TAIL_CHARS: usize = 8;
const MIN_LOCATION_CHARS: usize = 2;
const MAX_LOCATION_CHARS: usize = 25;

/// Property-parameter extractor.
pub struct EntityExtractor {
    config: Arc<ExtractionConfig>,
    price_re: Regex,
    area_re: Regex,
    rooms_re: Regex,
}

impl EntityExtractor {
    pub fn new(config: Arc<ExtractionConfig>) -> Self {
        Self {
            config,
            price_re: Regex::new(r"(\d+)\s*(الف|ألف|مليون|جنيه|جنية|ج\.?م\.?)").unwrap(),
            area_re: Regex::new(r"(\d+)\s*(متر|م2|م٢|م ٢)").unwrap(),
            rooms_re: Regex::new(r"(\d+)\s*(غرف|غرفة|غرفه|غرف نوم|غرفة نوم|غرفه نوم)").unwrap(),
        }
    }

    /// Extract all parameters present in the message.
    pub fn extract(&self, message: &str) -> SearchParams {
        let lowered = message.to_lowercase();

        SearchParams {
            type_: self.extract_type(&lowered),
            purpose: self.extract_purpose(&lowered),
            location: self.extract_location(&lowered),
            price_range: self.price_re.find(message).map(|m| m.as_str().to_string()),
            area: self.area_re.find(message).map(|m| m.as_str().to_string()),
            rooms: self.rooms_re.find(message).map(|m| m.as_str().to_string()),
        }
    }

    /// First property type with a synonym occurring in the message.
    fn extract_type(&self, lowered: &str) -> Option<String> {
        self.config
            .property_types
            .iter()
            .find(|entry| entry.synonyms.iter().any(|s| lowered.contains(s.as_str())))
            .map(|entry| entry.canonical.clone())
    }

    /// First purpose with a synonym occurring in the message. Independent
    /// of type extraction — either, both or neither may be set.
    fn extract_purpose(&self, lowered: &str) -> Option<String> {
        self.config
            .purposes
            .iter()
            .find(|entry| entry.synonyms.iter().any(|s| lowered.contains(s.as_str())))
            .map(|entry| entry.canonical.clone())
    }

    /// Phase 1: gazetteer scan in declaration order. Phase 2: marker-phrase
    /// fallback, only consulted when the gazetteer found nothing.
    fn extract_location(&self, lowered: &str) -> Option<String> {
        for location in &self.config.locations {
            if lowered.contains(&location.to_lowercase()) {
                return Some(location.clone());
            }
        }

        for marker in &self.config.location_markers {
            if let Some(location) = location_after_marker(lowered, marker) {
                return Some(location);
            }
        }
        None
    }
}

/// Take the text following the marker up to the next whitespace boundary,
/// extended by up to [`MARKER_TAIL_CHARS`] characters, and accept it only
/// when its character length is strictly inside the configured bounds.
fn location_after_marker(lowered: &str, marker: &str) -> Option<String> {
    let start = lowered.find(marker)? + marker.len();
    let tail = lowered[start..].trim();
    if tail.is_empty() {
        return None;
    }

    let chars: Vec<char> = tail.chars().collect();
    let candidate: String = match chars.iter().position(|c| *c == ' ') {
        Some(space) if space > 0 => chars.iter().take(space + MARKER_TAIL_CHARS).collect(),
        _ => tail.to_string(),
    };

    let len = candidate.chars().count();
    (len > MIN_LOCATION_CHARS && len < MAX_LOCATION_CHARS).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(Arc::new(ExtractionConfig::default()))
    }

    #[test]
    fn full_search_message() {
        let params = extractor().extract("أريد شقة للإيجار في المعادي بسعر 500 الف");
        assert_eq!(
            params,
            SearchParams {
                type_: Some("شقة".to_string()),
                purpose: Some("إيجار".to_string()),
                location: Some("المعادي".to_string()),
                price_range: Some("500 الف".to_string()),
                area: None,
                rooms: None,
            }
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let message = "فيلا للبيع بشارع الجمهورية 250 متر 4 غرف نوم";
        let first = extractor().extract(message);
        let second = extractor().extract(message);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn synonyms_map_to_canonical_type() {
        let params = extractor().extract("ابحث عن دكان صغير");
        assert_eq!(params.type_.as_deref(), Some("محل"));

        let params = extractor().extract("looking for an apartment");
        assert_eq!(params.type_.as_deref(), Some("شقة"));
    }

    #[test]
    fn purpose_is_independent_of_type() {
        let params = extractor().extract("اريد شراء");
        assert_eq!(params.purpose.as_deref(), Some("بيع"));
        assert_eq!(params.type_, None);
    }

    #[test]
    fn gazetteer_beats_marker_fallback() {
        let params = extractor().extract("شقة في منطقة المهندسين للايجار");
        assert_eq!(params.location.as_deref(), Some("المهندسين"));
    }

    #[test]
    fn marker_fallback_captures_unknown_area() {
        let params = extractor().extract("ابحث عن شقة في منطقة الصفا الجديدة");
        assert_eq!(params.location.as_deref(), Some("الصفا الجديدة"));
    }

    #[test]
    fn marker_fallback_rejects_too_short() {
        // A single trailing letter after the marker is not a location.
        let params = extractor().extract("ابحث عن شقة بحي ال");
        assert_eq!(params.location, None);
    }

    #[test]
    fn numeric_fields_keep_raw_substrings() {
        let params = extractor().extract("مطلوب ارض 300 م2 بسعر 2 مليون و3 غرف");
        assert_eq!(params.area.as_deref(), Some("300 م2"));
        assert_eq!(params.price_range.as_deref(), Some("2 مليون"));
        assert_eq!(params.rooms.as_deref(), Some("3 غرف"));
    }

    #[test]
    fn empty_message_extracts_nothing() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("كيف حالك اليوم؟").is_empty());
    }
}
