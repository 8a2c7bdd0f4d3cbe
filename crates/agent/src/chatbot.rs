//! The chatbot service
//!
//! Handles one message end to end: validate, resolve the intent and
//! extract parameters independently, query the search gateway when
//! parameters exist, update the user's conversation context, and produce
//! the reply with its quick-reply options.
//!
//! Besides input validation, nothing here ever fails the caller: gateway
//! faults collapse to empty results and resolution faults to the default
//! intent, both logged only.

use std::sync::Arc;

use aqarkam_config::{ChatConfig, NluConfig, TrainingCorpus};
use aqarkam_core::{ConversationContext, Error, ListingSummary, Result, SearchGateway};
use aqarkam_nlu::{EntityExtractor, IntentClassifier, IntentResolver};

use crate::context::ContextStore;
use crate::responder::{Picker, ResponseGenerator};

/// Fixed rejection sent when a request carries no message.
pub const VALIDATION_MESSAGE: &str = "الرجاء إرسال رسالة للرد عليها";

/// What one processed message produces.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    pub options: Vec<String>,
    /// Up to three matching listings; empty when the search found nothing,
    /// failed, or never ran.
    pub properties: Vec<ListingSummary>,
}

/// The conversational service.
pub struct Chatbot {
    classifier: Arc<IntentClassifier>,
    resolver: IntentResolver,
    extractor: EntityExtractor,
    contexts: ContextStore,
    responder: ResponseGenerator,
    templates: Arc<aqarkam_config::TemplateConfig>,
    gateway: Arc<dyn SearchGateway>,
    corpus: TrainingCorpus,
}

impl Chatbot {
    pub fn new(chat: &ChatConfig, nlu: NluConfig, gateway: Arc<dyn SearchGateway>) -> Self {
        let NluConfig {
            lexicon,
            extraction,
            templates,
            corpus,
        } = nlu;
        let lexicon = Arc::new(lexicon);
        let templates = Arc::new(templates);
        let classifier = Arc::new(IntentClassifier::new(&chat.model_path));

        Self {
            resolver: IntentResolver::new(classifier.clone(), lexicon, chat.classifier_threshold),
            extractor: EntityExtractor::new(Arc::new(extraction)),
            contexts: ContextStore::new(chat.history_limit),
            responder: ResponseGenerator::new(templates.clone()),
            templates,
            gateway,
            classifier,
            corpus,
        }
    }

    /// Replace the template picker (deterministic in tests).
    pub fn with_picker(mut self, picker: Box<dyn Picker>) -> Self {
        self.responder = ResponseGenerator::with_picker(self.templates.clone(), picker);
        self
    }

    /// Best-effort classifier initialization; run once from a background
    /// task at startup. Until it completes, resolution works in
    /// fallback-only mode.
    pub fn train_classifier(&self) {
        self.classifier.initialize(&self.corpus);
    }

    pub fn classifier_ready(&self) -> bool {
        self.classifier.is_ready()
    }

    /// Snapshot of a user's conversation context.
    pub fn context_for(&self, user_id: &str) -> Option<ConversationContext> {
        self.contexts.get(user_id)
    }

    /// Process one chat message for a user.
    pub async fn handle(&self, message: &str, user_id: &str) -> Result<ChatReply> {
        if message.trim().is_empty() {
            return Err(Error::InvalidInput(VALIDATION_MESSAGE.to_string()));
        }

        let intent = self.resolver.resolve(message);
        let params = self.extractor.extract(message);
        tracing::debug!(user_id, intent = %intent, "message analyzed");

        let properties = if params.is_empty() {
            Vec::new()
        } else {
            match self.gateway.search(&params).await {
                Ok(results) => results,
                Err(e) => {
                    tracing::error!("listing search failed, replying without results: {e}");
                    Vec::new()
                }
            }
        };

        self.contexts.record_message(user_id, intent, &params);

        Ok(ChatReply {
            message: self.responder.generate(intent, &params, &properties),
            options: self.responder.options(intent),
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aqarkam_core::{IntentLabel, SearchParams};

    struct EmptyGateway;

    #[async_trait]
    impl SearchGateway for EmptyGateway {
        async fn search(&self, _params: &SearchParams) -> Result<Vec<ListingSummary>> {
            Ok(Vec::new())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl SearchGateway for FailingGateway {
        async fn search(&self, _params: &SearchParams) -> Result<Vec<ListingSummary>> {
            Err(Error::Search("datastore unreachable".to_string()))
        }
    }

    struct OneListingGateway;

    #[async_trait]
    impl SearchGateway for OneListingGateway {
        async fn search(&self, _params: &SearchParams) -> Result<Vec<ListingSummary>> {
            Ok(vec![ListingSummary {
                title: "شقة حديثة بالمعادي".to_string(),
                price: 7500.0,
                location: "المعادي".to_string(),
                type_: "شقة".to_string(),
                purpose: "إيجار".to_string(),
                area: 95.0,
                main_image: "/uploads/flat.jpg".to_string(),
            }])
        }
    }

    fn bot(gateway: Arc<dyn SearchGateway>) -> Chatbot {
        Chatbot::new(&ChatConfig::default(), NluConfig::default(), gateway)
    }

    #[tokio::test]
    async fn greeting_reply_with_options() {
        let bot = bot(Arc::new(EmptyGateway));
        let reply = bot.handle("مرحبا", "user-1").await.unwrap();

        assert!(!reply.message.is_empty());
        assert!(reply.options.contains(&"أبحث عن عقار للشراء".to_string()));
        assert!(reply.properties.is_empty());
        assert_eq!(bot.context_for("user-1").unwrap().last_intent, IntentLabel::Greetings);
    }

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_processing() {
        let bot = bot(Arc::new(EmptyGateway));
        let err = bot.handle("   ", "user-1").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
        // Rejected before context bookkeeping.
        assert!(bot.context_for("user-1").is_none());
    }

    #[tokio::test]
    async fn gateway_failure_still_produces_a_reply() {
        let bot = bot(Arc::new(FailingGateway));
        let reply = bot
            .handle("أريد شقة للإيجار في المعادي بسعر 500 الف", "user-1")
            .await
            .unwrap();

        assert!(!reply.message.is_empty());
        assert!(reply.properties.is_empty());
        // The search attempt is still remembered in the context history.
        assert_eq!(bot.context_for("user-1").unwrap().search_history.len(), 1);
    }

    #[tokio::test]
    async fn results_are_attached_to_the_reply() {
        let bot = bot(Arc::new(OneListingGateway));
        let reply = bot.handle("ابحث عن شقة للايجار", "user-1").await.unwrap();

        assert_eq!(reply.properties.len(), 1);
        assert_eq!(reply.properties[0].title, "شقة حديثة بالمعادي");
        assert!(reply.message.contains("المعادي") || reply.message.contains("شقة"));
    }

    #[tokio::test]
    async fn six_searches_keep_the_last_five() {
        let bot = bot(Arc::new(EmptyGateway));
        let areas = ["المعادي", "حلوان", "شبرا", "الهرم", "فيصل", "المقطم"];
        for area in areas {
            bot.handle(&format!("ابحث عن شقة في {area}"), "user-9")
                .await
                .unwrap();
        }

        let ctx = bot.context_for("user-9").unwrap();
        assert_eq!(ctx.search_history.len(), 5);
        let first = ctx.search_history.front().unwrap();
        assert_eq!(first.params.location.as_deref(), Some("حلوان"));
        let last = ctx.search_history.back().unwrap();
        assert_eq!(last.params.location.as_deref(), Some("المقطم"));
    }

    #[tokio::test]
    async fn pinned_picker_makes_replies_deterministic() {
        let bot = bot(Arc::new(EmptyGateway)).with_picker(Box::new(crate::FixedPicker(0)));
        let reply = bot.handle("مرحبا", "user-1").await.unwrap();
        assert_eq!(reply.message, "مرحبا! كيف يمكنني مساعدتك في البحث عن عقار؟");
    }

    #[tokio::test]
    async fn messages_without_parameters_skip_the_gateway() {
        // A failing gateway is never consulted when nothing was extracted.
        let bot = bot(Arc::new(FailingGateway));
        let reply = bot.handle("كم يكلف؟", "user-1").await.unwrap();
        assert!(!reply.message.is_empty());
        assert!(reply.properties.is_empty());
    }
}
