//! Chat orchestration
//!
//! Owns the per-user conversation context store, the template-based
//! response generator, and the [`Chatbot`] service tying the NLU pipeline,
//! the search gateway and both of the above together for one message.

pub mod chatbot;
pub mod context;
pub mod responder;

pub use chatbot::{ChatReply, Chatbot, VALIDATION_MESSAGE};
pub use context::ContextStore;
pub use responder::{FixedPicker, Picker, ResponseGenerator, ThreadRngPicker};
