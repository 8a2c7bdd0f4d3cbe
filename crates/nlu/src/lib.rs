//! Arabic NLU pipeline
//!
//! Turns a free-form Arabic chat message into a resolved intent and a set
//! of structured property-search parameters:
//!
//! - [`normalize`]: diacritic stripping and whitespace cleanup
//! - [`IntentClassifier`]: naive-Bayes model trained at startup, persisted
//!   to disk, consulted first when ready
//! - [`KeywordAnalyzer`]: deterministic lexicon-occurrence scoring
//! - [`IntentResolver`]: the full priority chain, total over any input
//! - [`EntityExtractor`]: synonym/gazetteer/regex parameter extraction

pub mod classifier;
pub mod extractor;
pub mod keywords;
pub mod normalize;
pub mod resolver;

pub use classifier::IntentClassifier;
pub use extractor::EntityExtractor;
pub use keywords::KeywordAnalyzer;
pub use normalize::normalize;
pub use resolver::IntentResolver;
