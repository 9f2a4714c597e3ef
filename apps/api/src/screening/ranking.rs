//! Candidate Ranker: skill-overlap scoring of profiles against the job's skills.

use serde::{Deserialize, Serialize};

use crate::screening::profile::CandidateProfile;
use crate::screening::skills::SkillSet;

/// A profile together with its score against one job description.
///
/// Scores only exist on this type, so an unranked `CandidateProfile` can never
/// carry a stale score from a previous run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    /// |job skills ∩ candidate skills|
    pub match_score: usize,
    /// In [0, 100]
    pub match_percentage: f64,
}

/// Scores every candidate and orders them by descending match percentage.
///
/// The sort is stable: candidates with equal percentages keep their input order.
pub fn rank_candidates(
    job_skills: &SkillSet,
    candidates: Vec<CandidateProfile>,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|profile| score_candidate(job_skills, profile))
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    ranked
}

fn score_candidate(job_skills: &SkillSet, profile: CandidateProfile) -> RankedCandidate {
    let match_score = job_skills.overlap(&profile.skills);
    let match_percentage = if job_skills.is_empty() {
        0.0
    } else {
        match_score as f64 / job_skills.len() as f64 * 100.0
    };

    RankedCandidate {
        profile,
        match_score,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            name: name.to_string(),
            skills: skills.iter().copied().collect(),
            experience: vec![],
            education: vec![],
            projects: vec![],
        }
    }

    fn names(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|r| r.profile.name.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_input_order() {
        // 5 job skills: A and B match 3 (60%), C matches 4 (80%)
        let job: SkillSet = ["Python", "Sql", "Git", "Excel", "Tableau"].into_iter().collect();
        let candidates = vec![
            candidate("A", &["Python", "Sql", "Git"]),
            candidate("B", &["Excel", "Tableau", "Git", "Pandas"]),
            candidate("C", &["Python", "Sql", "Git", "Excel"]),
        ];

        let ranked = rank_candidates(&job, candidates);
        assert_eq!(names(&ranked), vec!["C", "A", "B"]);
        assert!((ranked[0].match_percentage - 80.0).abs() < 1e-9);
        assert!((ranked[1].match_percentage - 60.0).abs() < 1e-9);
        assert!((ranked[2].match_percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_job_skills_scores_zero_and_keeps_order() {
        let candidates = vec![candidate("A", &["Python"]), candidate("B", &["Sql"])];
        let ranked = rank_candidates(&SkillSet::new(), candidates);
        assert_eq!(names(&ranked), vec!["A", "B"]);
        assert!(ranked.iter().all(|r| r.match_score == 0 && r.match_percentage == 0.0));
    }

    #[test]
    fn test_zero_candidates() {
        let job: SkillSet = ["Python"].into_iter().collect();
        assert!(rank_candidates(&job, vec![]).is_empty());
    }

    #[test]
    fn test_score_bounds() {
        let job: SkillSet = ["Python", "Sql"].into_iter().collect();
        let candidates = vec![
            candidate("all", &["Python", "Sql", "Git", "Excel"]),
            candidate("none", &["Excel"]),
            candidate("empty", &[]),
        ];
        for r in rank_candidates(&job, candidates) {
            assert!((0.0..=100.0).contains(&r.match_percentage));
            assert!(r.match_score <= job.len());
            assert!(r.match_score <= r.profile.skills.len());
            assert_eq!(r.match_percentage == 0.0, r.match_score == 0);
        }
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let job: SkillSet = ["Python", "Sql", "Git"].into_iter().collect();
        let candidates = vec![
            candidate("A", &["Git"]),
            candidate("B", &["Python", "Sql"]),
            candidate("C", &["Sql"]),
        ];
        let first = rank_candidates(&job, candidates.clone());
        let second = rank_candidates(&job, candidates);
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ranked_candidate_serializes_flat() {
        let job: SkillSet = ["Python"].into_iter().collect();
        let ranked = rank_candidates(&job, vec![candidate("cv.pdf", &["Python"])]);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["name"], "cv.pdf");
        assert_eq!(json["skills"][0], "Python");
        assert_eq!(json["match_score"], 1);
        assert_eq!(json["match_percentage"], 100.0);
    }
}
