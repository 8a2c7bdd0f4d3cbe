//! Intent resolution pipeline
//!
//! Fixed priority chain, short-circuiting at the first confident stage:
//!
//! 1. statistical classifier, only when trained and confidence > threshold
//! 2. keyword analyzer, only when some keyword scored
//! 3. legacy ordered substring chain, first match wins
//! 4. "default"
//!
//! Resolution is total: any internal fault is logged and resolved to
//! `default`, never raised to the caller.

use std::sync::Arc;

use aqarkam_config::LexiconConfig;
use aqarkam_core::{IntentLabel, Result};

use crate::classifier::IntentClassifier;
use crate::keywords::KeywordAnalyzer;

/// The full classifier → keywords → legacy → default chain.
pub struct IntentResolver {
    classifier: Arc<IntentClassifier>,
    keywords: KeywordAnalyzer,
    lexicon: Arc<LexiconConfig>,
    /// Classifier verdicts at or below this confidence are ignored.
    threshold: f32,
}

impl IntentResolver {
    pub fn new(classifier: Arc<IntentClassifier>, lexicon: Arc<LexiconConfig>, threshold: f32) -> Self {
        Self {
            classifier,
            keywords: KeywordAnalyzer::new(lexicon.clone()),
            lexicon,
            threshold,
        }
    }

    /// Resolve a message to exactly one intent. Never fails.
    pub fn resolve(&self, message: &str) -> IntentLabel {
        match self.resolve_inner(message) {
            Ok(intent) => intent,
            Err(e) => {
                tracing::error!("intent resolution fault, falling back to default: {e}");
                IntentLabel::Default
            }
        }
    }

    fn resolve_inner(&self, message: &str) -> Result<IntentLabel> {
        // 1. Trained classifier, gated on confidence.
        let classified = self.classifier.classify(message);
        if classified.confidence > self.threshold {
            tracing::debug!(
                intent = %classified.intent,
                confidence = classified.confidence,
                "classifier resolved intent"
            );
            return Ok(classified.intent);
        }

        // 2. Keyword occurrence scoring.
        let (intent, score) = self.keywords.analyze(message);
        if score > 0 {
            tracing::debug!(intent = %intent, score, "keyword analyzer resolved intent");
            return Ok(intent);
        }

        // 3. Legacy substring chain.
        let lowered = message.to_lowercase();
        for entry in &self.lexicon.legacy_phrases {
            if entry.phrases.iter().any(|p| lowered.contains(p.as_str())) {
                tracing::debug!(intent = %entry.intent, "legacy chain resolved intent");
                return Ok(entry.intent);
            }
        }

        Ok(IntentLabel::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untrained_resolver() -> IntentResolver {
        IntentResolver::new(
            Arc::new(IntentClassifier::new("unused-model.json")),
            Arc::new(LexiconConfig::default()),
            0.5,
        )
    }

    fn trained_resolver() -> IntentResolver {
        let classifier = IntentClassifier::new("unused-model.json");
        classifier
            .train(&aqarkam_config::TrainingCorpus::default())
            .unwrap();
        IntentResolver::new(Arc::new(classifier), Arc::new(LexiconConfig::default()), 0.5)
    }

    #[test]
    fn greeting_resolves_without_classifier() {
        // Untrained classifier reports confidence 0, so the keyword
        // analyzer must carry this one.
        assert_eq!(untrained_resolver().resolve("مرحبا"), IntentLabel::Greetings);
    }

    #[test]
    fn unknown_text_resolves_to_default() {
        assert_eq!(untrained_resolver().resolve("abcdef xyz"), IntentLabel::Default);
        assert_eq!(untrained_resolver().resolve(""), IntentLabel::Default);
    }

    #[test]
    fn classifier_wins_when_confident() {
        assert_eq!(trained_resolver().resolve("ابحث عن عقار للشراء"), IntentLabel::Buy);
    }

    #[test]
    fn unsure_classifier_falls_through_to_keywords() {
        // No training utterance occurs in this message, so the trained
        // classifier stays at or below the gate and the error keywords
        // decide.
        assert_eq!(trained_resolver().resolve("حدث عطل وانقطاع"), IntentLabel::Error);
    }

    #[test]
    fn error_intent_comes_from_keywords_only() {
        // "مشكلة" and "عطل" are error triggers but neither training
        // utterances nor legacy phrases.
        assert_eq!(untrained_resolver().resolve("حدث عطل ومشكلة"), IntentLabel::Error);
    }

    #[test]
    fn rent_message_resolves_to_rent() {
        assert_eq!(untrained_resolver().resolve("اريد ايجار شقة"), IntentLabel::Rent);
    }
}
