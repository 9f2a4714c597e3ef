//! Analysis pipeline: documents in, ranked candidates and chat context out.
//!
//! Document read failures never abort the batch: the document is skipped and a
//! warning is returned alongside the ranking.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::documents::{extract_text, UploadedDocument};
use crate::screening::profile::{CandidateProfile, ProfileExtractor};
use crate::screening::ranking::{rank_candidates, RankedCandidate};
use crate::screening::skills::SkillSet;

/// A document whose text is already available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub job_skills: SkillSet,
    pub candidates: Vec<RankedCandidate>,
    pub warnings: Vec<String>,
    /// Job description plus every readable resume, for the chat feature.
    #[serde(skip)]
    pub qa_context: String,
}

/// Reads every uploaded document, then ranks the readable resumes.
pub fn analyze_uploads(
    extractor: &ProfileExtractor,
    job_description: &UploadedDocument,
    resumes: &[UploadedDocument],
) -> AnalysisReport {
    let mut warnings = Vec::new();

    let jd_text = match extract_text(job_description) {
        Ok(text) => text,
        Err(e) => {
            warn!("Job description unreadable, continuing with empty text: {e}");
            warnings.push(e.to_string());
            String::new()
        }
    };

    let mut readable = Vec::with_capacity(resumes.len());
    for resume in resumes {
        match extract_text(resume) {
            Ok(text) => readable.push(TextDocument {
                name: resume.name.clone(),
                text,
            }),
            Err(e) => {
                warn!("Skipping resume: {e}");
                warnings.push(format!("{e}. Skipping."));
            }
        }
    }

    let mut report = analyze_texts(extractor, &jd_text, &readable);
    warnings.append(&mut report.warnings);
    report.warnings = warnings;
    report
}

/// Ranks resumes whose text is already extracted. Resumes with empty text are skipped.
pub fn analyze_texts(
    extractor: &ProfileExtractor,
    job_description: &str,
    resumes: &[TextDocument],
) -> AnalysisReport {
    let job_skills = extractor.job_skills(job_description);
    let mut qa_context = format!("**JOB DESCRIPTION:**\n{job_description}");

    let mut profiles: Vec<CandidateProfile> = Vec::with_capacity(resumes.len());
    for resume in resumes.iter().filter(|r| !r.text.is_empty()) {
        profiles.push(extractor.extract(resume.name.as_str(), &resume.text));
        qa_context.push_str(&format!(
            "\n\n--- RESUME: {} ---\n{}",
            resume.name, resume.text
        ));
    }

    let candidates = rank_candidates(&job_skills, profiles);
    info!(
        "Ranked {} candidates against {} job skills",
        candidates.len(),
        job_skills.len()
    );

    AnalysisReport {
        job_skills,
        candidates,
        warnings: Vec::new(),
        qa_context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::recognizer::RecognizerError;
    use crate::nlp::{Entity, EntityLabel, EntityRecognizer};
    use crate::screening::skills::{SkillMatcher, SkillVocabulary};
    use bytes::Bytes;
    use std::sync::Arc;

    struct OrgPerLine;

    impl EntityRecognizer for OrgPerLine {
        fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
            Ok(text
                .lines()
                .filter(|l| l.starts_with("Org:"))
                .map(|l| Entity::new(l.trim_start_matches("Org:").trim(), EntityLabel::Organization))
                .collect())
        }
    }

    fn extractor() -> ProfileExtractor {
        let matcher = Arc::new(SkillMatcher::new(&SkillVocabulary::default()));
        ProfileExtractor::new(matcher, Arc::new(OrgPerLine))
    }

    fn doc(name: &str, text: &str) -> TextDocument {
        TextDocument {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_ranks_by_skill_overlap() {
        let jd = "We need Python, SQL and Tableau.";
        let resumes = vec![
            doc("low.pdf", "Excel and Tableau"),
            doc("high.pdf", "Python, SQL, Tableau\nOrg: Acme Corp"),
        ];
        let report = analyze_texts(&extractor(), jd, &resumes);

        assert_eq!(report.job_skills.len(), 3);
        assert_eq!(report.candidates[0].profile.name, "high.pdf");
        assert_eq!(report.candidates[0].match_score, 3);
        assert_eq!(report.candidates[0].profile.experience, vec!["Worked at: Acme Corp"]);
        assert_eq!(report.candidates[1].match_score, 1);
    }

    #[test]
    fn test_qa_context_layout() {
        let report = analyze_texts(&extractor(), "JD text", &[doc("a.pdf", "Resume A")]);
        assert_eq!(
            report.qa_context,
            "**JOB DESCRIPTION:**\nJD text\n\n--- RESUME: a.pdf ---\nResume A"
        );
    }

    #[test]
    fn test_empty_resumes_are_skipped() {
        let report = analyze_texts(&extractor(), "Python", &[doc("blank.pdf", ""), doc("a.pdf", "Python")]);
        assert_eq!(report.candidates.len(), 1);
        assert!(!report.qa_context.contains("blank.pdf"));
    }

    #[test]
    fn test_unreadable_uploads_become_warnings() {
        let jd = UploadedDocument::new("jd.pdf", Some("application/pdf"), Bytes::from_static(b"junk"));
        let resumes = vec![UploadedDocument::new(
            "cv.pdf",
            Some("application/pdf"),
            Bytes::from_static(b"junk"),
        )];
        let report = analyze_uploads(&extractor(), &jd, &resumes);

        assert!(report.candidates.is_empty());
        assert!(report.job_skills.is_empty());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[1].contains("cv.pdf"));
    }
}
