//! HTTP server for the aqarkam chat service
//!
//! Exposes the chatbot over a small REST surface and wires the application
//! state together: settings, the seeded listing store, and the chatbot
//! with its background-trained classifier.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
