//! Intent labels and classification results

use serde::{Deserialize, Serialize};

/// Semantic category assigned to a user message.
///
/// The set is closed: resolution always produces exactly one of these
/// labels, falling back to [`IntentLabel::Default`] when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    /// User greeting
    Greetings,
    /// Buying (or selling) a property
    Buy,
    /// Renting a property
    Rent,
    /// Price inquiry
    Price,
    /// Contact details request
    Contact,
    /// Offered services inquiry
    Services,
    /// Location/area inquiry
    Location,
    /// Mentions of a property kind
    PropertyType,
    /// User reporting a technical problem
    Error,
    /// Nothing recognized
    #[default]
    Default,
}

impl IntentLabel {
    /// Every label, in lexicon declaration order.
    pub const ALL: [IntentLabel; 10] = [
        IntentLabel::Greetings,
        IntentLabel::Buy,
        IntentLabel::Rent,
        IntentLabel::Price,
        IntentLabel::Contact,
        IntentLabel::Services,
        IntentLabel::Location,
        IntentLabel::PropertyType,
        IntentLabel::Error,
        IntentLabel::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Greetings => "greetings",
            IntentLabel::Buy => "buy",
            IntentLabel::Rent => "rent",
            IntentLabel::Price => "price",
            IntentLabel::Contact => "contact",
            IntentLabel::Services => "services",
            IntentLabel::Location => "location",
            IntentLabel::PropertyType => "property_type",
            IntentLabel::Error => "error",
            IntentLabel::Default => "default",
        }
    }

    /// Parse a label string as produced by `as_str()` / the model file.
    pub fn from_label(label: &str) -> Option<Self> {
        IntentLabel::ALL.iter().copied().find(|l| l.as_str() == label)
    }
}

impl std::fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intent plus the confidence the classifier assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: IntentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn new(intent: IntentLabel, confidence: f32) -> Self {
        Self {
            intent,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Result of an untrained or unsure classifier.
    pub fn unknown() -> Self {
        Self::new(IntentLabel::Default, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for label in IntentLabel::ALL {
            assert_eq!(IntentLabel::from_label(label.as_str()), Some(label));
        }
        assert_eq!(IntentLabel::from_label("unknown"), None);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(ClassificationResult::new(IntentLabel::Buy, 1.7).confidence, 1.0);
        assert_eq!(ClassificationResult::new(IntentLabel::Buy, -0.3).confidence, 0.0);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&IntentLabel::PropertyType).unwrap();
        assert_eq!(json, "\"property_type\"");
    }
}
