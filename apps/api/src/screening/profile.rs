//! Profile Extractor: turns raw resume text into a structured candidate profile.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::nlp::{Entity, EntityLabel, EntityRecognizer};
use crate::screening::skills::{SkillMatcher, SkillSet};

pub const NO_EXPERIENCE: &str = "Could not automatically extract experience.";
pub const NO_EDUCATION: &str = "Could not automatically extract education.";
pub const NO_PROJECTS: &str = "No projects section found.";

const EDUCATION_KEYWORDS: &[&str] = &["university", "college", "institute"];

/// Captures everything after a projects header up to a blank line followed by the
/// next known header, or the end of the text. Both headers match case-insensitively.
const PROJECTS_PATTERN: &str = r"(?is)(?:projects|portfolio|personal projects)\s*\n(.*?)(?:\n\n\s*(?:skills|experience|education)|$)";

/// Structured record derived from one candidate document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: SkillSet,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
}

/// Extracts profiles with an injected skill matcher and entity recognizer.
pub struct ProfileExtractor {
    matcher: Arc<SkillMatcher>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl ProfileExtractor {
    pub fn new(matcher: Arc<SkillMatcher>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            matcher,
            recognizer,
        }
    }

    /// Skills of a job description, using the same vocabulary as resumes.
    pub fn job_skills(&self, text: &str) -> SkillSet {
        self.matcher.find_skills(text)
    }

    /// Builds the full profile for one resume. Never fails: a recognizer error
    /// degrades experience and education to their sentinel entries.
    pub fn extract(&self, name: impl Into<String>, text: &str) -> CandidateProfile {
        let name = name.into();
        let entities = match self.recognizer.recognize(text) {
            Ok(entities) => entities,
            Err(e) => {
                warn!("Entity recognition failed for '{name}': {e}");
                Vec::new()
            }
        };

        CandidateProfile {
            skills: self.matcher.find_skills(text),
            experience: extract_experience(&entities),
            education: extract_education(&entities),
            projects: extract_projects(text),
            name,
        }
    }
}

/// One "Worked at" entry per organisation, in recognizer order.
pub fn extract_experience(entities: &[Entity]) -> Vec<String> {
    let experience: Vec<String> = entities
        .iter()
        .filter(|e| e.label == EntityLabel::Organization)
        .map(|e| format!("Worked at: {}", e.text))
        .collect();
    or_sentinel(experience, NO_EXPERIENCE)
}

/// Organisations or products whose name mentions a university, college or institute.
pub fn extract_education(entities: &[Entity]) -> Vec<String> {
    let education: Vec<String> = entities
        .iter()
        .filter(|e| matches!(e.label, EntityLabel::Organization | EntityLabel::Product))
        .filter(|e| {
            let lower = e.text.to_lowercase();
            EDUCATION_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(|e| format!("Studied at: {}", e.text))
        .collect();
    or_sentinel(education, NO_EDUCATION)
}

/// One trimmed block per projects header found in the text.
pub fn extract_projects(text: &str) -> Vec<String> {
    let projects: Vec<String> = projects_regex()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();
    or_sentinel(projects, NO_PROJECTS)
}

fn projects_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROJECTS_PATTERN).expect("projects pattern is valid"))
}

fn or_sentinel(entries: Vec<String>, sentinel: &str) -> Vec<String> {
    if entries.is_empty() {
        vec![sentinel.to_string()]
    } else {
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::recognizer::RecognizerError;
    use crate::nlp::RuleBasedRecognizer;
    use crate::screening::skills::SkillVocabulary;

    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenRecognizer;

    impl EntityRecognizer for BrokenRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
            Err(RecognizerError::Unavailable("model not loaded".to_string()))
        }
    }

    fn extractor(recognizer: Arc<dyn EntityRecognizer>) -> ProfileExtractor {
        let matcher = Arc::new(SkillMatcher::new(&SkillVocabulary::default()));
        ProfileExtractor::new(matcher, recognizer)
    }

    #[test]
    fn test_empty_text_yields_sentinels() {
        let profile = extractor(Arc::new(FixedRecognizer(vec![]))).extract("empty.pdf", "");
        assert_eq!(profile.name, "empty.pdf");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience, vec![NO_EXPERIENCE]);
        assert_eq!(profile.education, vec![NO_EDUCATION]);
        assert_eq!(profile.projects, vec![NO_PROJECTS]);
    }

    #[test]
    fn test_recognizer_failure_degrades_to_sentinels() {
        let profile = extractor(Arc::new(BrokenRecognizer)).extract("a.pdf", "Python at Acme Corp");
        assert!(profile.skills.contains("Python"));
        assert_eq!(profile.experience, vec![NO_EXPERIENCE]);
        assert_eq!(profile.education, vec![NO_EDUCATION]);
    }

    #[test]
    fn test_experience_keeps_recognizer_order() {
        let entities = vec![
            Entity::new("Globex", EntityLabel::Organization),
            Entity::new("Jane Doe", EntityLabel::Person),
            Entity::new("Acme", EntityLabel::Organization),
        ];
        assert_eq!(
            extract_experience(&entities),
            vec!["Worked at: Globex", "Worked at: Acme"]
        );
    }

    #[test]
    fn test_education_filters_by_label_and_keyword() {
        let entities = vec![
            Entity::new("Acme Corp", EntityLabel::Organization),
            Entity::new("MIT Media Institute", EntityLabel::Product),
            Entity::new("Boston College", EntityLabel::Location),
            Entity::new("State University", EntityLabel::Organization),
        ];
        assert_eq!(
            extract_education(&entities),
            vec!["Studied at: MIT Media Institute", "Studied at: State University"]
        );
    }

    #[test]
    fn test_project_block_stops_before_skills_header() {
        let text = "Projects\nBuilt X\nBuilt Y\n\nSkills\nPython";
        assert_eq!(extract_projects(text), vec!["Built X\nBuilt Y"]);
    }

    #[test]
    fn test_project_block_runs_to_end_of_text() {
        let text = "Summary\n\nPORTFOLIO\n  Chess engine in Rust  \n";
        assert_eq!(extract_projects(text), vec!["Chess engine in Rust"]);
    }

    #[test]
    fn test_each_projects_header_produces_a_block() {
        let text = "Projects\nA\n\nExperience\nAcme\nPortfolio\nB\n\nEducation\nMIT";
        assert_eq!(extract_projects(text), vec!["A", "B"]);
    }

    #[test]
    fn test_terminating_header_is_case_insensitive() {
        let text = "projects\nDashboard\n\nSKILLS\nSQL";
        assert_eq!(extract_projects(text), vec!["Dashboard"]);
    }

    #[test]
    fn test_no_projects_header() {
        assert_eq!(extract_projects("Experience\nAcme"), vec![NO_PROJECTS]);
    }

    #[test]
    fn test_rule_based_experience_skips_job_titles() {
        let recognizer = Arc::new(RuleBasedRecognizer::new().unwrap());
        let text = "Software Engineer at Acme Corp\nSolutions Architect, 2020\nBSc, University of Leeds";
        let profile = extractor(recognizer).extract("cv.pdf", text);
        assert_eq!(
            profile.experience,
            vec!["Worked at: Acme Corp", "Worked at: University of Leeds"]
        );
        assert_eq!(profile.education, vec!["Studied at: University of Leeds"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let entities = vec![Entity::new("Oxford University", EntityLabel::Organization)];
        let ex = extractor(Arc::new(FixedRecognizer(entities)));
        let text = "Python and SQL\nProjects\nETL pipeline";
        assert_eq!(ex.extract("c.docx", text), ex.extract("c.docx", text));
    }
}
