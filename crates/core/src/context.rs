//! Per-user conversation context

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::intent::IntentLabel;
use crate::search::SearchParams;

/// One remembered search from a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub params: SearchParams,
    pub timestamp: DateTime<Utc>,
}

/// State tracked for one user across messages within a process lifetime.
///
/// Contexts are created lazily on a user's first message and are never
/// expired; the history is the only bounded part (at most
/// [`ConversationContext::history_limit`] entries, oldest evicted first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    pub last_intent: IntentLabel,
    pub search_history: VecDeque<SearchRecord>,
    pub last_message_time: DateTime<Utc>,
    history_limit: usize,
}

impl ConversationContext {
    pub fn new(history_limit: usize, now: DateTime<Utc>) -> Self {
        Self {
            last_intent: IntentLabel::Default,
            search_history: VecDeque::new(),
            last_message_time: now,
            history_limit,
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Record one processed message: intent and timestamp unconditionally,
    /// search history only when parameters were extracted.
    pub fn record(&mut self, intent: IntentLabel, params: &SearchParams, now: DateTime<Utc>) {
        self.last_intent = intent;
        self.last_message_time = now;

        if !params.is_empty() {
            self.search_history.push_back(SearchRecord {
                params: params.clone(),
                timestamp: now,
            });
            while self.search_history.len() > self.history_limit {
                self.search_history.pop_front();
            }
        }
    }
}
