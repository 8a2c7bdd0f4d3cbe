//! Trigger lexicon and legacy phrase chain
//!
//! The lexicon drives the keyword analyzer: per intent, an ordered list of
//! trigger keywords counted as substrings of the normalized message. Entry
//! order matters — score ties resolve to the first-declared intent. The
//! legacy phrases are the older, shorter substring chain kept as the final
//! fallback before "default".

use serde::{Deserialize, Serialize};

use aqarkam_core::IntentLabel;

/// One intent with its trigger keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub intent: IntentLabel,
    pub keywords: Vec<String>,
}

/// One intent with its legacy fallback phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub intent: IntentLabel,
    pub phrases: Vec<String>,
}

/// Trigger lexicon plus the legacy substring chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Ordered: ties break to the earlier entry.
    pub triggers: Vec<LexiconEntry>,
    /// Ordered: the first entry with a matching phrase wins.
    pub legacy_phrases: Vec<PhraseEntry>,
}

fn entry(intent: IntentLabel, keywords: &[&str]) -> LexiconEntry {
    LexiconEntry {
        intent,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn phrases(intent: IntentLabel, phrases: &[&str]) -> PhraseEntry {
    PhraseEntry {
        intent,
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            triggers: vec![
                entry(
                    IntentLabel::Greetings,
                    &["مرحبا", "اهلا", "السلام", "صباح", "مساء", "هاي", "هلا"],
                ),
                entry(
                    IntentLabel::Buy,
                    &["شراء", "اشتري", "بيع", "ابيع", "أشتري", "أبيع", "أريد شراء", "ابحث عن شراء"],
                ),
                entry(
                    IntentLabel::Rent,
                    &["ايجار", "استأجر", "أستأجر", "استئجار", "اجار", "أبحث عن ايجار"],
                ),
                entry(
                    IntentLabel::Price,
                    &["سعر", "ثمن", "تكلفة", "كم يكلف", "اسعار", "أسعار", "المبلغ", "التكاليف"],
                ),
                entry(
                    IntentLabel::Contact,
                    &["اتصال", "تواصل", "هاتف", "رقم", "الاتصال", "التواصل", "تليفون"],
                ),
                entry(
                    IntentLabel::Services,
                    &["خدمة", "خدمات", "تقدمون", "تقدم", "تعملون"],
                ),
                entry(
                    IntentLabel::Location,
                    &["مكان", "موقع", "منطقة", "حي", "شارع", "مدينة", "قرية", "المكان", "الموقع"],
                ),
                entry(
                    IntentLabel::Error,
                    &[
                        "خطأ", "مشكلة", "عطل", "فشل", "لا يعمل", "اتصال", "انقطع", "انقطاع",
                        "توقف", "محاولة", "فشلت",
                    ],
                ),
            ],
            legacy_phrases: vec![
                phrases(IntentLabel::Greetings, &["مرحبا", "اهلا", "السلام عليكم"]),
                phrases(IntentLabel::Buy, &["شراء", "اشتري", "بيع"]),
                phrases(IntentLabel::Rent, &["ايجار", "استئجار"]),
                phrases(IntentLabel::Price, &["سعر", "تكلفة", "ثمن"]),
                phrases(IntentLabel::Contact, &["اتصال", "تواصل", "هاتف", "رقم"]),
                phrases(IntentLabel::Services, &["خدمة", "خدمات"]),
                phrases(IntentLabel::Location, &["مكان", "موقع", "منطقة", "حي"]),
            ],
        }
    }
}
