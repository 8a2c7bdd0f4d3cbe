//! Statistical intent classifier
//!
//! A small example-based model trained once at startup from the fixed
//! labeled corpus. Scoring follows the usual utterance-matching scheme:
//! exact match 1.0, substring containment 0.9, otherwise the best word
//! overlap fraction scaled by 0.8. Ties resolve to the class trained first.
//!
//! The trained model is persisted as JSON at a fixed path and auto-loaded
//! on the next start; a missing file means cold-start training. Training is
//! best effort: any failure leaves the classifier untrained, where it
//! reports confidence 0 for everything and the resolution pipeline ignores
//! it entirely.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use unicode_segmentation::UnicodeSegmentation;

use aqarkam_config::TrainingCorpus;
use aqarkam_core::{ClassificationResult, Error, IntentLabel, Result};

use crate::normalize::normalize;

const MODEL_VERSION: u32 = 1;

/// One preprocessed training utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExampleModel {
    text: String,
    tokens: Vec<String>,
}

/// All examples of one intent, in corpus order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassModel {
    intent: IntentLabel,
    examples: Vec<ExampleModel>,
}

/// The persisted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Model {
    version: u32,
    classes: Vec<ClassModel>,
}

/// Startup-trained utterance classifier with on-disk persistence.
pub struct IntentClassifier {
    model: RwLock<Option<Model>>,
    ready: AtomicBool,
    model_path: PathBuf,
}

impl IntentClassifier {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model: RwLock::new(None),
            ready: AtomicBool::new(false),
            model_path: model_path.into(),
        }
    }

    /// Whether a trained model is installed. The resolution pipeline checks
    /// this before trusting any classification.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Best-effort startup initialization: load the persisted model if one
    /// exists, otherwise train from the corpus and save the result. Never
    /// fails the caller — on any fault the classifier stays untrained.
    pub fn initialize(&self, corpus: &TrainingCorpus) {
        match self.load_model() {
            Ok(Some(model)) => {
                let classes = model.classes.len();
                *self.model.write() = Some(model);
                self.ready.store(true, Ordering::Release);
                tracing::info!(path = %self.model_path.display(), classes, "loaded classifier model");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("discarding unreadable classifier model: {e}");
            }
        }

        match self.train(corpus) {
            Ok(()) => {
                if let Err(e) = self.save_model() {
                    tracing::warn!("failed to persist classifier model: {e}");
                }
                tracing::info!(examples = corpus.examples.len(), "classifier training complete");
            }
            Err(e) => {
                tracing::error!("classifier training failed, running in fallback-only mode: {e}");
            }
        }
    }

    /// Train from the labeled corpus and install the resulting model.
    pub fn train(&self, corpus: &TrainingCorpus) -> Result<()> {
        if corpus.examples.is_empty() {
            return Err(Error::Training("training corpus is empty".to_string()));
        }

        let mut classes: Vec<ClassModel> = Vec::new();
        for example in &corpus.examples {
            let text = normalize(&example.text).to_lowercase();
            if text.is_empty() {
                continue;
            }
            let tokens = text.unicode_words().map(str::to_string).collect();

            match classes.iter().position(|c| c.intent == example.intent) {
                Some(i) => classes[i].examples.push(ExampleModel { text, tokens }),
                None => classes.push(ClassModel {
                    intent: example.intent,
                    examples: vec![ExampleModel { text, tokens }],
                }),
            }
        }

        if classes.is_empty() {
            return Err(Error::Training("no usable training examples".to_string()));
        }

        *self.model.write() = Some(Model {
            version: MODEL_VERSION,
            classes,
        });
        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    /// Classify a message. Returns confidence 0 while untrained.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        if !self.is_ready() {
            return ClassificationResult::unknown();
        }
        let guard = self.model.read();
        let Some(model) = guard.as_ref() else {
            return ClassificationResult::unknown();
        };

        let text = normalize(message).to_lowercase();
        if text.is_empty() {
            return ClassificationResult::unknown();
        }
        let words: HashSet<&str> = text.unicode_words().collect();

        let mut best = ClassificationResult::unknown();
        for class in &model.classes {
            let score = class
                .examples
                .iter()
                .map(|e| example_score(&text, &words, e))
                .fold(0.0f32, f32::max);
            if score > best.confidence {
                best = ClassificationResult::new(class.intent, score);
            }
        }
        best
    }

    fn load_model(&self) -> Result<Option<Model>> {
        if !self.model_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.model_path)?;
        let model: Model = serde_json::from_str(&content)?;
        if model.version != MODEL_VERSION {
            return Err(Error::Training(format!(
                "unsupported model version {}",
                model.version
            )));
        }
        Ok(Some(model))
    }

    fn save_model(&self) -> Result<()> {
        let guard = self.model.read();
        let model = guard
            .as_ref()
            .ok_or_else(|| Error::Training("no model to save".to_string()))?;
        if let Some(parent) = self.model_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.model_path, serde_json::to_string(model)?)?;
        Ok(())
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

/// Score a message against one training example.
fn example_score(text: &str, words: &HashSet<&str>, example: &ExampleModel) -> f32 {
    if text == example.text {
        return 1.0;
    }
    if text.contains(&example.text) {
        return 0.9;
    }

    let overlap = example.tokens.iter().filter(|t| words.contains(t.as_str())).count();
    if overlap == 0 {
        return 0.0;
    }
    overlap as f32 / example.tokens.len().max(1) as f32 * 0.8
}
