//! Response generation
//!
//! Chooses a template pool by intent and by whether search results or
//! parameters exist, substitutes the `{count}`/`{type}`/`{purpose}`/
//! `{location}` placeholders, and looks up the quick-reply options.
//! Template choice goes through the [`Picker`] trait so tests can pin the
//! selection and assert exact strings.

use std::sync::Arc;

use rand::Rng;

use aqarkam_config::TemplateConfig;
use aqarkam_core::{IntentLabel, ListingSummary, SearchParams};

/// Uniform "pick one of N" source.
pub trait Picker: Send + Sync {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic picker for tests: always the same index, clamped.
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Template-based reply generator.
pub struct ResponseGenerator {
    templates: Arc<TemplateConfig>,
    picker: Box<dyn Picker>,
}

impl ResponseGenerator {
    pub fn new(templates: Arc<TemplateConfig>) -> Self {
        Self::with_picker(templates, Box::new(ThreadRngPicker))
    }

    pub fn with_picker(templates: Arc<TemplateConfig>, picker: Box<dyn Picker>) -> Self {
        Self { templates, picker }
    }

    /// Produce the reply text for one processed message.
    pub fn generate(
        &self,
        intent: IntentLabel,
        params: &SearchParams,
        results: &[ListingSummary],
    ) -> String {
        if !results.is_empty() {
            let template = self.pick_from(&self.templates.results_templates);
            return self.render(&template, results.len(), params);
        }

        if !params.is_empty() {
            let template = self.pick_from(&self.templates.no_results_templates);
            return self.render(&template, 0, params);
        }

        self.pick_from(self.templates.pool_for(intent))
    }

    /// Quick-reply options for the intent; empty for most intents.
    pub fn options(&self, intent: IntentLabel) -> Vec<String> {
        self.templates.options_for(intent).to_vec()
    }

    fn pick_from(&self, pool: &[String]) -> String {
        let pool = if pool.is_empty() {
            &self.templates.default_replies
        } else {
            pool
        };
        pool[self.picker.pick(pool.len())].clone()
    }

    fn render(&self, template: &str, count: usize, params: &SearchParams) -> String {
        let type_ = params
            .type_
            .as_deref()
            .unwrap_or_else(|| self.templates.fallback_type.as_str());
        let purpose = match params.purpose.as_deref() {
            Some("بيع") => "للبيع",
            Some(_) => "للإيجار",
            None => self.templates.fallback_purpose.as_str(),
        };
        let location = params
            .location
            .as_deref()
            .unwrap_or_else(|| self.templates.fallback_location.as_str());

        template
            .replace("{count}", &count.to_string())
            .replace("{type}", type_)
            .replace("{purpose}", purpose)
            .replace("{location}", location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(index: usize) -> ResponseGenerator {
        ResponseGenerator::with_picker(
            Arc::new(TemplateConfig::default()),
            Box::new(FixedPicker(index)),
        )
    }

    fn summary() -> ListingSummary {
        ListingSummary {
            title: "شقة للإيجار بالمعادي".to_string(),
            price: 9000.0,
            location: "المعادي".to_string(),
            type_: "شقة".to_string(),
            purpose: "إيجار".to_string(),
            area: 110.0,
            main_image: "/uploads/flat.jpg".to_string(),
        }
    }

    #[test]
    fn results_reply_substitutes_parameters() {
        let params = SearchParams {
            type_: Some("شقة".to_string()),
            purpose: Some("إيجار".to_string()),
            location: Some("المعادي".to_string()),
            ..Default::default()
        };
        let reply = generator(0).generate(IntentLabel::Rent, &params, &[summary()]);
        assert_eq!(
            reply,
            "وجدت 1 من شقة للإيجار في المعادي. يمكنك الاطلاع على التفاصيل أدناه."
        );
    }

    #[test]
    fn no_results_reply_uses_fallback_values() {
        let params = SearchParams {
            location: Some("حلوان".to_string()),
            ..Default::default()
        };
        let reply = generator(1).generate(IntentLabel::Default, &params, &[]);
        assert_eq!(
            reply,
            "لم يتم العثور حاليًا على عقار في حلوان. هل ترغب في توسيع نطاق البحث أو تغيير المنطقة؟"
        );
    }

    #[test]
    fn sale_purpose_renders_sale_phrase() {
        let params = SearchParams {
            type_: Some("فيلا".to_string()),
            purpose: Some("بيع".to_string()),
            ..Default::default()
        };
        let reply = generator(0).generate(IntentLabel::Buy, &params, &[]);
        assert!(reply.contains("للبيع"), "reply was: {reply}");
        assert!(reply.contains("المنطقة التي تبحث عنها"));
    }

    #[test]
    fn plain_intents_use_their_pool() {
        let reply = generator(0).generate(IntentLabel::Greetings, &SearchParams::default(), &[]);
        assert_eq!(reply, "مرحبا! كيف يمكنني مساعدتك في البحث عن عقار؟");
    }

    #[test]
    fn reply_is_never_empty_for_any_intent() {
        for intent in IntentLabel::ALL {
            for index in 0..5 {
                let reply = generator(index).generate(intent, &SearchParams::default(), &[]);
                assert!(!reply.is_empty(), "empty reply for {intent}");
            }
        }
    }

    #[test]
    fn options_match_intent_table() {
        let generator = generator(0);
        assert!(generator
            .options(IntentLabel::Greetings)
            .contains(&"أبحث عن عقار للشراء".to_string()));
        assert_eq!(generator.options(IntentLabel::Greetings).len(), 3);
        assert!(generator.options(IntentLabel::Services).is_empty());
        assert!(generator.options(IntentLabel::Default).is_empty());
    }
}
