//! Axum route handler for the matching endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::errors::AppError;
use crate::matching::orchestrator::{find_best_matches, MatchParams, MatchResult};
use crate::models::profile::StudentProfile;
use crate::state::AppState;
use crate::suggestions::ScoredOpportunity;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Profile as produced by the external document-field-extraction
    /// collaborator.
    pub profile: StudentProfile,
    /// Overrides the configured match threshold for this request.
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
    pub suggestions: String,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if let Some(reason) = &req.profile.error {
        return Err(AppError::UnprocessableEntity(format!(
            "Resume extraction failed upstream: {reason}"
        )));
    }
    if req.profile.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Profile contains no usable fields".to_string(),
        ));
    }

    let opportunities = state.store.list()?;
    let by_file: HashMap<String, _> = opportunities
        .iter()
        .map(|(file, opp)| (file.clone(), opp.clone()))
        .collect();

    let params = MatchParams {
        threshold: req.threshold.unwrap_or(state.config.match_threshold),
        fuzzy_cutoff: state.config.fuzzy_cutoff,
        weights: state.config.score_weights,
    };

    let matches = find_best_matches(
        state.recognizer.as_ref(),
        state.embedder.as_ref(),
        req.profile.clone(),
        opportunities,
        params,
    )
    .await;

    info!(
        candidate_count = by_file.len(),
        match_count = matches.len(),
        "matching run complete"
    );

    let top: Vec<ScoredOpportunity> = matches
        .iter()
        .filter_map(|m| {
            by_file.get(&m.file).map(|opportunity| ScoredOpportunity {
                opportunity: opportunity.clone(),
                match_score: m.score,
            })
        })
        .collect();

    let suggestions = state.suggestions.generate(&req.profile, &top).await;

    Ok(Json(MatchResponse {
        matches,
        suggestions,
    }))
}
