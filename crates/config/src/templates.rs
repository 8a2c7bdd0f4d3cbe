//! Response template pools and quick-reply options
//!
//! Templates use `{count}`, `{type}`, `{purpose}` and `{location}`
//! placeholders; the generator substitutes them before replying. Pools per
//! intent hold the general replies; the results / no-results pools are used
//! whenever search parameters were extracted.

use serde::{Deserialize, Serialize};

use aqarkam_core::IntentLabel;

/// One intent's reply pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePool {
    pub intent: IntentLabel,
    pub replies: Vec<String>,
}

/// One intent's quick-reply options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickReplyEntry {
    pub intent: IntentLabel,
    pub options: Vec<String>,
}

/// All reply text the generator can produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// General pools; intents without a pool fall back to `default_replies`.
    pub pools: Vec<TemplatePool>,
    /// Used when nothing matched or an intent has no dedicated pool.
    pub default_replies: Vec<String>,
    /// Used when a search returned listings.
    pub results_templates: Vec<String>,
    /// Used when parameters were extracted but the search came back empty.
    pub no_results_templates: Vec<String>,
    /// Interactive options per intent; intents not listed get none.
    pub quick_replies: Vec<QuickReplyEntry>,
    /// Fills `{type}` when no property type was extracted.
    pub fallback_type: String,
    /// Fills `{purpose}` when no purpose was extracted.
    pub fallback_purpose: String,
    /// Fills `{location}` when no location was extracted.
    pub fallback_location: String,
}

fn pool(intent: IntentLabel, replies: &[&str]) -> TemplatePool {
    TemplatePool {
        intent,
        replies: replies.iter().map(|r| r.to_string()).collect(),
    }
}

fn quick(intent: IntentLabel, options: &[&str]) -> QuickReplyEntry {
    QuickReplyEntry {
        intent,
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            pools: vec![
                pool(
                    IntentLabel::Greetings,
                    &[
                        "مرحبا! كيف يمكنني مساعدتك في البحث عن عقار؟",
                        "أهلاً بك في عقار كام! هل تبحث عن عقار للشراء أو للإيجار؟",
                        "مرحباً! أنا هنا للمساعدة في استفساراتك العقارية",
                    ],
                ),
                pool(
                    IntentLabel::Buy,
                    &[
                        "نحن نقدم مجموعة واسعة من العقارات للبيع. هل تبحث عن منطقة معينة؟",
                        "يمكنك تصفح العقارات المتاحة للبيع من خلال صفحة العقارات. هل ترغب في تحديد ميزانية معينة؟",
                    ],
                ),
                pool(
                    IntentLabel::Rent,
                    &[
                        "لدينا العديد من الخيارات للإيجار. هل تفضل شقة أم فيلا؟",
                        "يمكنك العثور على عقارات للإيجار في مختلف مناطق أسيوط. هل لديك منطقة معينة في ذهنك؟",
                    ],
                ),
                pool(
                    IntentLabel::Price,
                    &[
                        "الأسعار تختلف حسب الموقع والمساحة. يمكنك استخدام فلاتر البحث لتحديد نطاق السعر المناسب لك.",
                        "يمكنك استخدام أداة الحاسبة في موقعنا لتقدير تكلفة العقار والرسوم المرتبطة به.",
                    ],
                ),
                pool(
                    IntentLabel::Contact,
                    &[
                        "يمكنك التواصل معنا عبر صفحة اتصل بنا أو عبر الهاتف على الرقم 01XXXXXXXXX.",
                        "فريق خدمة العملاء متاح للرد على استفساراتك من السبت إلى الخميس من 9 صباحًا حتى 6 مساءً.",
                    ],
                ),
                pool(
                    IntentLabel::Services,
                    &[
                        "نقدم خدمات البيع والشراء والإيجار، بالإضافة إلى الاستشارات العقارية والتقييم.",
                        "نساعدك في جميع مراحل المعاملات العقارية من البحث حتى توثيق العقود.",
                    ],
                ),
                pool(
                    IntentLabel::Location,
                    &[
                        "نحن نغطي معظم مناطق أسيوط، بما في ذلك وسط المدينة، الأربعين، شارع الجمهورية، والمناطق الجديدة.",
                        "يمكنك تحديد المنطقة المفضلة لديك في خيارات البحث لتصفية النتائج.",
                    ],
                ),
                pool(
                    IntentLabel::Error,
                    &[
                        "عذراً، يبدو أن هناك مشكلة في الاتصال. سنقوم بإصلاح هذا في أقرب وقت، يمكنك المحاولة مرة أخرى بعد قليل.",
                        "نواجه بعض المشكلات الفنية حالياً. يرجى المحاولة مرة أخرى لاحقاً، أو يمكنك التواصل معنا على 01XXXXXXXXX.",
                        "نعتذر، هناك مشكلة في الاتصال بقاعدة البيانات. يرجى إبلاغ مسؤول النظام.",
                        "نعتذر عن الانقطاع المؤقت في الخدمة. نحن نعمل على استعادة الاتصال بشكل كامل. شكراً لصبرك.",
                        "أعتذر عن المشكلة التقنية. هل يمكنك تحديث الصفحة والمحاولة مرة أخرى؟",
                    ],
                ),
            ],
            default_replies: vec![
                "عذراً، لم أفهم استفسارك. هل يمكنك إعادة صياغته بطريقة أخرى؟".to_string(),
                "للحصول على مساعدة أكثر تخصصاً، يمكنك التواصل مع فريق خدمة العملاء.".to_string(),
            ],
            results_templates: vec![
                "وجدت {count} من {type} {purpose} في {location}. يمكنك الاطلاع على التفاصيل أدناه.".to_string(),
                "يتوفر لدينا {count} خيارات تناسب بحثك عن {type} في {location}. ألق نظرة على النتائج التالية!".to_string(),
                "بناءً على بحثك، هذه بعض {type} المتاحة {purpose} في {location}.".to_string(),
            ],
            no_results_templates: vec![
                "للأسف، لم نجد {type} {purpose} في {location}. يمكنك تجربة البحث في مناطق قريبة أو تعديل معايير البحث.".to_string(),
                "لم يتم العثور حاليًا على {type} في {location}. هل ترغب في توسيع نطاق البحث أو تغيير المنطقة؟".to_string(),
                "نأسف، لا يوجد لدينا حاليًا {type} {purpose} في {location}. يمكننا إخطارك عند توفر عقارات جديدة تناسب بحثك.".to_string(),
            ],
            quick_replies: vec![
                quick(
                    IntentLabel::Greetings,
                    &["أبحث عن عقار للشراء", "أبحث عن عقار للإيجار", "أريد معرفة الأسعار"],
                ),
                quick(
                    IntentLabel::Buy,
                    &[
                        "أبحث عن شقة للشراء",
                        "أبحث عن فيلا للشراء",
                        "أريد معرفة أسعار العقارات في وسط المدينة",
                    ],
                ),
                quick(
                    IntentLabel::Rent,
                    &[
                        "أبحث عن شقة للإيجار",
                        "أبحث عن محل للإيجار",
                        "ما هي متوسط أسعار الإيجارات؟",
                    ],
                ),
                quick(
                    IntentLabel::Price,
                    &[
                        "كيف يمكنني حساب تكلفة العقار؟",
                        "ما هي الرسوم الإضافية للشراء؟",
                        "أريد مقارنة أسعار العقارات في مناطق مختلفة",
                    ],
                ),
                quick(
                    IntentLabel::Error,
                    &["تحديث الصفحة", "العودة للصفحة الرئيسية", "اتصل بفريق الدعم الفني"],
                ),
            ],
            fallback_type: "عقار".to_string(),
            fallback_purpose: "متاح".to_string(),
            fallback_location: "المنطقة التي تبحث عنها".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Pool for an intent, or the default pool when it has none.
    pub fn pool_for(&self, intent: IntentLabel) -> &[String] {
        self.pools
            .iter()
            .find(|p| p.intent == intent)
            .map(|p| p.replies.as_slice())
            .unwrap_or(&self.default_replies)
    }

    /// Quick-reply options for an intent; empty for most intents.
    pub fn options_for(&self, intent: IntentLabel) -> &[String] {
        self.quick_replies
            .iter()
            .find(|q| q.intent == intent)
            .map(|q| q.options.as_slice())
            .unwrap_or(&[])
    }
}
