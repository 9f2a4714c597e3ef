use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Organization,
    Product,
    Person,
    Location,
    Other,
}

/// A labelled span of text, in the order the recognizer emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("Recognizer unavailable: {0}")]
    Unavailable(String),
}

/// Named-entity recognition capability: text in, labelled spans out.
///
/// Implementations must be safe to call concurrently from several extraction tasks.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError>;
}

/// Words that mark a capitalised run as an organisation name. A designator only
/// counts as the last word of the run ("Acme Corp") or directly before "of"
/// ("University of Toronto"), so job titles like "Labs Manager" stay unlabelled.
const ORG_DESIGNATORS: &[&str] = &[
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "llc",
    "llp",
    "ltd",
    "limited",
    "plc",
    "gmbh",
    "co",
    "company",
    "holdings",
    "partners",
    "technologies",
    "labs",
    "laboratories",
    "bank",
    "agency",
    "foundation",
    "association",
    "university",
    "college",
    "institute",
    "school",
    "academy",
];

/// Lowercase words allowed inside a capitalised run ("University of Toronto").
const CONNECTORS: &[&str] = &["of", "and", "for", "the", "&"];

/// Words that introduce an employer: "Engineer at Google".
const EMPLOYER_CUES: &[&str] = &["at"];

/// Rule-based organisation recognizer.
///
/// Scans each line for runs of capitalised words. A run is emitted as an
/// `Organization` span when it ends in an organisation designator (Inc, LLC,
/// University, ...) or directly follows an employer cue such as "at" or "@".
/// Everything else is ignored, so the output is precise but not exhaustive.
pub struct RuleBasedRecognizer {
    run: Regex,
    word: Regex,
}

impl RuleBasedRecognizer {
    pub fn new() -> Result<Self, RecognizerError> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| RecognizerError::Unavailable(format!("invalid pattern: {e}")))
        };
        Ok(Self {
            run: compile(r"\b[A-Z][\w&.'-]*(?:[ \t]+(?:(?:of|and|for|the)\b|&|[A-Z][\w&.'-]*))*")?,
            word: compile(r"\S+")?,
        })
    }

    fn organisation_span<'a>(&self, run: &'a str, after_cue: bool) -> Option<&'a str> {
        let words: Vec<regex::Match<'a>> = self.word.find_iter(run).collect();

        // A run never ends on a connector: "Acme Labs and" -> "Acme Labs".
        let mut end = words.len();
        while end > 0 && is_connector(words[end - 1].as_str()) {
            end -= 1;
        }
        let words = &words[..end];
        let (first, last) = (words.first()?, words.last()?);

        if !after_cue {
            let designated = words.iter().enumerate().any(|(i, w)| {
                is_designator(w.as_str())
                    && (i + 1 == words.len()
                        || words[i + 1].as_str().eq_ignore_ascii_case("of"))
            });
            // A designator on its own ("University") is a heading, not a name.
            if !designated || words.len() < 2 {
                return None;
            }
        }

        Some(run[first.start()..last.end()].trim_end_matches(','))
    }
}

fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word.to_lowercase().as_str())
}

fn is_designator(word: &str) -> bool {
    let bare = word.trim_end_matches(['.', '\'']).to_lowercase();
    ORG_DESIGNATORS.contains(&bare.as_str())
}

/// True when the text before a run ends with an employer cue word or "@".
fn follows_employer_cue(prefix: &str) -> bool {
    let prefix = prefix.trim_end();
    if prefix.ends_with('@') {
        return true;
    }
    prefix
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .is_some_and(|w| EMPLOYER_CUES.contains(&w.to_lowercase().as_str()))
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let mut entities = Vec::new();
        for line in text.lines() {
            for m in self.run.find_iter(line) {
                let after_cue = follows_employer_cue(&line[..m.start()]);
                if let Some(span) = self.organisation_span(m.as_str(), after_cue) {
                    entities.push(Entity::new(span, EntityLabel::Organization));
                }
            }
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs(text: &str) -> Vec<String> {
        RuleBasedRecognizer::new()
            .unwrap()
            .recognize(text)
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn test_detects_company_with_designator() {
        assert_eq!(orgs("Worked at Acme Corp as an engineer"), vec!["Acme Corp"]);
    }

    #[test]
    fn test_detects_university_with_connector() {
        assert_eq!(
            orgs("BSc, University of Toronto, 2019"),
            vec!["University of Toronto"]
        );
    }

    #[test]
    fn test_ignores_capitalised_runs_without_designator() {
        assert!(orgs("Senior Data Scientist\nNew York").is_empty());
    }

    #[test]
    fn test_connector_must_be_whole_word() {
        assert_eq!(orgs("Initech Corp offers training"), vec!["Initech Corp"]);
    }

    #[test]
    fn test_trailing_connector_trimmed() {
        assert_eq!(orgs("Globex Labs and partners"), vec!["Globex Labs"]);
    }

    #[test]
    fn test_preserves_text_order_across_lines() {
        let text = "Initech LLC 2020-2022\nStanford University\nHooli Inc.";
        assert_eq!(
            orgs(text),
            vec!["Initech LLC", "Stanford University", "Hooli Inc."]
        );
    }

    #[test]
    fn test_bare_heading_is_not_an_entity() {
        assert!(orgs("Education\nUniversity\n").is_empty());
    }

    #[test]
    fn test_job_title_is_not_an_employer() {
        assert_eq!(orgs("Software Engineer at Acme Corp"), vec!["Acme Corp"]);
        assert!(orgs("Solutions Architect\nSystems Administrator").is_empty());
    }

    #[test]
    fn test_designator_must_end_the_name() {
        assert!(orgs("Labs Manager, 2021").is_empty());
        assert_eq!(orgs("Bank of America"), vec!["Bank of America"]);
    }

    #[test]
    fn test_employer_after_cue_needs_no_designator() {
        let text = "Software Engineer at Google, 2019-2023\nAnalyst @ Goldman Sachs";
        assert_eq!(orgs(text), vec!["Google", "Goldman Sachs"]);
    }

    #[test]
    fn test_cue_must_be_whole_word() {
        assert!(orgs("Chat Support").is_empty());
        assert!(orgs("flat Rate").is_empty());
    }

    #[test]
    fn test_span_ends_at_last_kept_word() {
        // "A" also occurs inside the trimmed "And"
        assert_eq!(orgs("BSc, University of A And more"), vec!["University of A"]);
    }

    #[test]
    fn test_entity_label_serializes_upper_case() {
        let json = serde_json::to_string(&EntityLabel::Organization).unwrap();
        assert_eq!(json, r#""ORGANIZATION""#);
    }
}
