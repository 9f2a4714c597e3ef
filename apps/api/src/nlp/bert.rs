//! Transformer-backed recognizer built on rust-bert's CoNLL-03 NER pipeline.
//! Compiled only with the `bert-ner` feature; the model downloads on first use.

use std::sync::Mutex;

use rust_bert::pipelines::ner::NERModel;

use super::recognizer::{Entity, EntityLabel, EntityRecognizer, RecognizerError};

pub struct BertRecognizer {
    model: Mutex<NERModel>,
}

impl BertRecognizer {
    pub fn new() -> Result<Self, RecognizerError> {
        let model = NERModel::new(Default::default())
            .map_err(|e| RecognizerError::Unavailable(e.to_string()))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl EntityRecognizer for BertRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let model = self
            .model
            .lock()
            .map_err(|_| RecognizerError::Unavailable("NER model lock poisoned".to_string()))?;

        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        Ok(model
            .predict_full_entities(&lines)
            .into_iter()
            .flatten()
            .map(|e| Entity::new(e.word, conll_label(&e.label)))
            .collect())
    }
}

/// Maps CoNLL-03 tags ("ORG", "I-ORG", ...) onto entity labels.
pub fn conll_label(tag: &str) -> EntityLabel {
    let tag = tag
        .strip_prefix("B-")
        .or_else(|| tag.strip_prefix("I-"))
        .unwrap_or(tag);
    match tag {
        "ORG" => EntityLabel::Organization,
        "MISC" => EntityLabel::Product,
        "PER" => EntityLabel::Person,
        "LOC" => EntityLabel::Location,
        _ => EntityLabel::Other,
    }
}
