//! Match orchestration: extracts skills for both sides once per run, scores
//! every stored opportunity, filters by threshold, and ranks the survivors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::extractor::{extract_opportunity_skills, extract_profile_skills};
use crate::matching::scoring::{compute_match_score, MatchBreakdown, ScoreWeights};
use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;
use crate::nlp::{Embedder, EntityRecognizer};

/// Extraction parameters for one matching run.
#[derive(Debug, Clone, Copy)]
pub struct MatchParams {
    /// Minimum final score to keep a result (inclusive).
    pub threshold: f64,
    pub fuzzy_cutoff: f64,
    pub weights: ScoreWeights,
}

/// A profile with its derived skill set. Computed once per run instead of
/// annotating the profile record in place, so input data is never mutated.
#[derive(Debug, Clone)]
pub struct ProfileSkillView {
    pub profile: StudentProfile,
    pub skills: BTreeSet<String>,
}

impl ProfileSkillView {
    pub async fn compute(recognizer: &dyn EntityRecognizer, profile: StudentProfile) -> Self {
        let skills = extract_profile_skills(recognizer, &profile).await;
        Self { profile, skills }
    }
}

/// An opportunity with its derived skill set, keyed by its storage filename.
#[derive(Debug, Clone)]
pub struct OpportunitySkillView {
    pub file: String,
    pub opportunity: Opportunity,
    pub skills: BTreeSet<String>,
}

impl OpportunitySkillView {
    pub async fn compute(
        recognizer: &dyn EntityRecognizer,
        file: String,
        opportunity: Opportunity,
    ) -> Self {
        let skills = extract_opportunity_skills(recognizer, &opportunity).await;
        Self {
            file,
            opportunity,
            skills,
        }
    }
}

/// One ranked match. Ephemeral: recomputed per query, ordered by
/// `score` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub file: String,
    pub title: String,
    pub score: f64,
    pub reason: String,
    pub details: MatchBreakdown,
}

/// Scores the student against every opportunity view, keeps those at or above
/// the threshold, and sorts descending by final score. The sort is stable:
/// ties keep the enumeration order of `opportunities`.
pub fn rank_matches(
    student: &ProfileSkillView,
    opportunities: &[OpportunitySkillView],
    params: MatchParams,
    embedder: &dyn Embedder,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = opportunities
        .iter()
        .filter_map(|opp| {
            let details = compute_match_score(
                &student.skills,
                &student.profile.certifications,
                &opp.skills,
                &opp.opportunity.mandatory_certifications,
                params.weights,
                params.fuzzy_cutoff,
                embedder,
            );
            debug!(
                file = %opp.file,
                final_score = details.final_score,
                "scored opportunity"
            );
            if details.final_score >= params.threshold {
                Some(MatchResult {
                    file: opp.file.clone(),
                    title: opp.opportunity.title.clone(),
                    score: details.final_score,
                    reason: format!(
                        "Your profile matches {}% with this opportunity.",
                        (details.final_score * 100.0).round() as i64
                    ),
                    details,
                })
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Full run: one sequential pass over all opportunity records. Skill views
/// are the per-run memoization of extraction — the student view is computed
/// once, each opportunity view once.
pub async fn find_best_matches(
    recognizer: &dyn EntityRecognizer,
    embedder: &dyn Embedder,
    profile: StudentProfile,
    opportunities: Vec<(String, Opportunity)>,
    params: MatchParams,
) -> Vec<MatchResult> {
    let student = ProfileSkillView::compute(recognizer, profile).await;

    let mut views = Vec::with_capacity(opportunities.len());
    for (file, opportunity) in opportunities {
        views.push(OpportunitySkillView::compute(recognizer, file, opportunity).await);
    }

    rank_matches(&student, &views, params, embedder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::nlp::embedding::HashEmbedder;
    use crate::nlp::{Entity, RecognizerError};

    struct NoEntities;

    #[async_trait]
    impl EntityRecognizer for NoEntities {
        async fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
            Ok(Vec::new())
        }
    }

    fn params(threshold: f64) -> MatchParams {
        MatchParams {
            threshold,
            fuzzy_cutoff: 0.8,
            weights: ScoreWeights::default(),
        }
    }

    fn profile(skills: &[&str]) -> StudentProfile {
        StudentProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn opportunity(title: &str, required: &[&str]) -> Opportunity {
        Opportunity {
            title: title.to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn results_are_sorted_descending_by_score() {
        let matches = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["Python", "SQL"]),
            vec![
                ("partial.json".to_string(), opportunity("Partial", &["Python", "AWS"])),
                ("full.json".to_string(), opportunity("Full", &["Python", "SQL"])),
            ],
            params(0.0),
        )
        .await;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].file, "full.json");
        assert!(matches[0].score > matches[1].score);
    }

    #[tokio::test]
    async fn threshold_boundary_is_inclusive() {
        // One required skill fully matched, no certs anywhere:
        // 0.6*1.0 + 0.3*1.0 + 0.1*0.5 = 0.95 exactly.
        let opportunities =
            vec![("match.json".to_string(), opportunity("Match", &["Python"]))];

        let included = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["Python"]),
            opportunities.clone(),
            params(0.95),
        )
        .await;
        assert_eq!(included.len(), 1, "score equal to threshold must be kept");

        let excluded = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["Python"]),
            opportunities,
            params(0.951),
        )
        .await;
        assert!(excluded.is_empty(), "score below threshold must be dropped");
    }

    #[tokio::test]
    async fn tied_scores_keep_enumeration_order() {
        let matches = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["Python"]),
            vec![
                ("b_first.json".to_string(), opportunity("B", &["Python"])),
                ("a_second.json".to_string(), opportunity("A", &["Python"])),
            ],
            params(0.5),
        )
        .await;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, matches[1].score);
        assert_eq!(matches[0].file, "b_first.json");
        assert_eq!(matches[1].file, "a_second.json");
    }

    #[tokio::test]
    async fn no_strong_matches_yields_empty_list() {
        let matches = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["figma"]),
            vec![("ml.json".to_string(), opportunity("ML", &["Python", "TensorFlow"]))],
            params(0.60),
        )
        .await;
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn reason_reports_percentage() {
        let matches = find_best_matches(
            &NoEntities,
            &HashEmbedder::default(),
            profile(&["Python"]),
            vec![("p.json".to_string(), opportunity("P", &["Python"]))],
            params(0.60),
        )
        .await;
        assert_eq!(matches[0].reason, "Your profile matches 95% with this opportunity.");
    }
}
