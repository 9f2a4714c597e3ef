//! Lexical scoring: bag-of-unique-words overlap between raw resume and JD text.
//!
//! Independent of the skill vocabulary: every word counts, curated or not.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// A scoring strategy over raw, unstructured text. Carried in `AppState` as
/// `Arc<dyn TextScorer>` so the `/score` endpoint can swap implementations.
pub trait TextScorer: Send + Sync {
    /// Match score in `[0, 100]`.
    fn score(&self, resume: &str, job_description: &str) -> f64;

    /// Backend name reported in logs.
    fn backend(&self) -> &'static str;
}

/// Percentage of distinct JD words that also appear in the resume.
pub struct LexicalOverlapScorer;

impl TextScorer for LexicalOverlapScorer {
    fn score(&self, resume: &str, job_description: &str) -> f64 {
        lexical_overlap(resume, job_description)
    }

    fn backend(&self) -> &'static str {
        "lexical"
    }
}

pub fn lexical_overlap(resume: &str, job_description: &str) -> f64 {
    let jd_words = word_set(job_description);
    if jd_words.is_empty() {
        return 0.0;
    }
    let resume_words = word_set(resume);
    let matching = resume_words.intersection(&jd_words).count();
    matching as f64 / jd_words.len() as f64 * 100.0
}

fn word_set(text: &str) -> HashSet<String> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let word = WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"));
    let lower = text.to_lowercase();
    word.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}
