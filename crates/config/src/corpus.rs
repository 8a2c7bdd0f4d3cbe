//! Classifier training corpus
//!
//! The fixed labeled utterances the statistical classifier is trained from
//! at startup. Five examples per trained intent; the corpus is small on
//! purpose and never grows at runtime.

use serde::{Deserialize, Serialize};

use aqarkam_core::IntentLabel;

/// One labeled utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub intent: IntentLabel,
}

/// The whole training corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingCorpus {
    pub examples: Vec<TrainingExample>,
}

fn example(text: &str, intent: IntentLabel) -> TrainingExample {
    TrainingExample {
        text: text.to_string(),
        intent,
    }
}

impl Default for TrainingCorpus {
    fn default() -> Self {
        use IntentLabel::*;
        Self {
            examples: vec![
                example("مرحبا", Greetings),
                example("اهلا", Greetings),
                example("السلام عليكم", Greetings),
                example("صباح الخير", Greetings),
                example("مساء الخير", Greetings),
                example("شراء", Buy),
                example("اشتري", Buy),
                example("بيع", Buy),
                example("ابحث عن عقار للشراء", Buy),
                example("اريد شراء", Buy),
                example("ايجار", Rent),
                example("استئجار", Rent),
                example("أبحث عن ايجار", Rent),
                example("اريد استئجار", Rent),
                example("استأجر", Rent),
                example("سعر", Price),
                example("تكلفة", Price),
                example("ثمن", Price),
                example("كم يكلف", Price),
                example("اسعار", Price),
                example("اتصال", Contact),
                example("تواصل", Contact),
                example("هاتف", Contact),
                example("رقم", Contact),
                example("تليفون", Contact),
                example("خدمة", Services),
                example("خدمات", Services),
                example("تقدمون", Services),
                example("تقدم", Services),
                example("تعملون", Services),
                example("مكان", Location),
                example("موقع", Location),
                example("منطقة", Location),
                example("حي", Location),
                example("شارع", Location),
                example("شقة", PropertyType),
                example("فيلا", PropertyType),
                example("محل", PropertyType),
                example("أرض", PropertyType),
                example("دكان", PropertyType),
            ],
        }
    }
}

impl TrainingCorpus {
    /// Number of examples carrying the given label.
    pub fn count_for(&self, intent: IntentLabel) -> usize {
        self.examples.iter().filter(|e| e.intent == intent).count()
    }
}
