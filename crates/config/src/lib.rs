//! Runtime settings and static NLU configuration data
//!
//! Two kinds of configuration live here:
//! - [`Settings`]: deployment knobs (bind address, CORS, model path, the
//!   anonymous user id) loaded from files and `AQARKAM_` environment
//!   variables at startup.
//! - [`NluConfig`]: the immutable language data the chat pipeline runs on —
//!   trigger lexicon, synonym dictionaries, location gazetteer, response
//!   template pools and the training corpus. Built-in defaults carry the
//!   production Arabic tables; a YAML file can override them wholesale.
//!
//! Both are loaded once at startup and never mutated afterwards.

pub mod corpus;
pub mod extraction;
pub mod lexicon;
pub mod nlu;
pub mod settings;
pub mod templates;

pub use corpus::{TrainingCorpus, TrainingExample};
pub use extraction::{ExtractionConfig, SynonymEntry};
pub use lexicon::{LexiconConfig, LexiconEntry, PhraseEntry};
pub use nlu::NluConfig;
pub use settings::{ChatConfig, ServerConfig, Settings, load_settings};
pub use templates::TemplateConfig;
