//! Entity recognition used by the profile extractor.
//!
//! The extractor only sees the `EntityRecognizer` trait. The rule-based recognizer
//! is the default wired in at startup; building with the `bert-ner` feature swaps
//! in the transformer model.

#[cfg(feature = "bert-ner")]
pub mod bert;
pub mod recognizer;

#[cfg(feature = "bert-ner")]
pub use bert::BertRecognizer;
pub use recognizer::{Entity, EntityLabel, EntityRecognizer, RuleBasedRecognizer};
