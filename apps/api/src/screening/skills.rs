//! Skill Matcher: phrase-level, case-insensitive matching of a fixed skill vocabulary.
//!
//! Matching works on tokens, not substrings: a phrase only matches when all of its
//! tokens appear contiguously in the text. "AI" never matches inside "Air".

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Skills recognised when no `SKILL_VOCABULARY` override is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "SQL",
    "Pandas",
    "NumPy",
    "Scikit-Learn",
    "PyTorch",
    "TensorFlow",
    "Machine Learning",
    "Data Visualization",
    "Deep Learning",
    "Tableau",
    "Excel",
    "Git",
    "GitHub",
    "FastAPI",
    "Streamlit",
    "NLP",
    "AI",
    "Data Science",
];

/// Ordered list of distinct skill phrases. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    phrases: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, dropping blank phrases and case-insensitive duplicates
    /// (the first spelling wins).
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let phrases = phrases
            .into_iter()
            .map(|p| {
                let p: String = p.into();
                p.trim().to_string()
            })
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.to_lowercase()))
            .collect();
        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

/// Set of canonical (title-cased) skill phrases, iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        self.0.insert(skill.into())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of skills present in both sets.
    pub fn overlap(&self, other: &SkillSet) -> usize {
        other.0.iter().filter(|s| self.contains(s)).count()
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

struct CompiledPhrase {
    tokens: Vec<String>,
    canonical: String,
}

/// Matcher compiled once from a vocabulary and shared read-only across requests.
pub struct SkillMatcher {
    phrases: Vec<CompiledPhrase>,
    /// first lowercase token → indices into `phrases`
    by_first_token: HashMap<String, Vec<usize>>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary) -> Self {
        let mut phrases = Vec::with_capacity(vocabulary.len());
        let mut by_first_token: HashMap<String, Vec<usize>> = HashMap::new();

        for phrase in vocabulary.phrases() {
            let tokens = tokenize_lowercase(phrase);
            let Some(first) = tokens.first().cloned() else {
                continue;
            };
            by_first_token.entry(first).or_default().push(phrases.len());
            phrases.push(CompiledPhrase {
                tokens,
                canonical: title_case(phrase),
            });
        }

        Self {
            phrases,
            by_first_token,
        }
    }

    /// Returns every vocabulary phrase present in `text`. Empty text yields an empty set.
    pub fn find_skills(&self, text: &str) -> SkillSet {
        let tokens = tokenize_lowercase(text);
        let mut found = SkillSet::new();

        for (start, token) in tokens.iter().enumerate() {
            let Some(candidates) = self.by_first_token.get(token) else {
                continue;
            };
            for &idx in candidates {
                let phrase = &self.phrases[idx];
                let end = start + phrase.tokens.len();
                if end <= tokens.len() && tokens[start..end] == phrase.tokens[..] {
                    found.insert(phrase.canonical.clone());
                }
            }
        }

        found
    }
}

/// Splits text into lowercase tokens: runs of alphanumeric characters, with every
/// other non-whitespace character standing as a token of its own.
fn tokenize_lowercase(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            current.extend(c.to_lowercase());
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !c.is_whitespace() {
            tokens.push(c.to_lowercase().collect());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Word-wise title case: a letter is upper-cased when the previous character is not
/// a letter, lower-cased otherwise.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
