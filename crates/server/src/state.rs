//! Application state
//!
//! Shared across all handlers.

use std::sync::Arc;

use aqarkam_agent::Chatbot;
use aqarkam_config::Settings;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub chatbot: Arc<Chatbot>,
}

impl AppState {
    pub fn new(settings: Settings, chatbot: Arc<Chatbot>) -> Self {
        Self {
            settings: Arc::new(settings),
            chatbot,
        }
    }
}
