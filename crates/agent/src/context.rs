//! Conversation context store
//!
//! One process-wide map from user id to [`ConversationContext`] with
//! get-or-create semantics. Each key is updated under its own map entry, so
//! two users never contend on a shared lock. Contexts are never expired —
//! they live as long as the process; only the per-user search history is
//! bounded.

use chrono::Utc;
use dashmap::DashMap;

use aqarkam_core::{ConversationContext, IntentLabel, SearchParams};

/// Process-wide per-user context store.
pub struct ContextStore {
    contexts: DashMap<String, ConversationContext>,
    history_limit: usize,
}

impl ContextStore {
    pub fn new(history_limit: usize) -> Self {
        Self {
            contexts: DashMap::new(),
            history_limit,
        }
    }

    /// Record one processed message for a user, creating the context on
    /// first contact. The read-modify-write happens under the entry lock.
    pub fn record_message(&self, user_id: &str, intent: IntentLabel, params: &SearchParams) {
        let now = Utc::now();
        let mut entry = self
            .contexts
            .entry(user_id.to_string())
            .or_insert_with(|| ConversationContext::new(self.history_limit, now));
        entry.record(intent, params, now);
    }

    /// Snapshot of a user's context, if one exists yet.
    pub fn get(&self, user_id: &str) -> Option<ConversationContext> {
        self.contexts.get(user_id).map(|c| c.clone())
    }

    /// Number of tracked users.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(location: &str) -> SearchParams {
        SearchParams {
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn contexts_are_created_lazily() {
        let store = ContextStore::new(5);
        assert!(store.get("user-1").is_none());

        store.record_message("user-1", IntentLabel::Greetings, &SearchParams::default());
        let ctx = store.get("user-1").unwrap();
        assert_eq!(ctx.last_intent, IntentLabel::Greetings);
        assert!(ctx.search_history.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn history_keeps_the_last_five_searches() {
        let store = ContextStore::new(5);
        for i in 1..=6 {
            store.record_message("user-1", IntentLabel::Buy, &params(&format!("منطقة {i}")));
        }

        let ctx = store.get("user-1").unwrap();
        assert_eq!(ctx.search_history.len(), 5);
        let locations: Vec<_> = ctx
            .search_history
            .iter()
            .map(|r| r.params.location.clone().unwrap())
            .collect();
        assert_eq!(
            locations,
            vec!["منطقة 2", "منطقة 3", "منطقة 4", "منطقة 5", "منطقة 6"]
        );
    }

    #[test]
    fn users_do_not_share_history() {
        let store = ContextStore::new(5);
        store.record_message("a", IntentLabel::Buy, &params("المعادي"));
        store.record_message("b", IntentLabel::Rent, &params("حلوان"));

        assert_eq!(store.get("a").unwrap().search_history.len(), 1);
        assert_eq!(store.get("b").unwrap().last_intent, IntentLabel::Rent);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_params_do_not_touch_history() {
        let store = ContextStore::new(5);
        store.record_message("a", IntentLabel::Buy, &params("المعادي"));
        store.record_message("a", IntentLabel::Price, &SearchParams::default());

        let ctx = store.get("a").unwrap();
        assert_eq!(ctx.last_intent, IntentLabel::Price);
        assert_eq!(ctx.search_history.len(), 1);
    }
}
