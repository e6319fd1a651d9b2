//! Axum route handlers for posting and browsing opportunities.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostOpportunityResponse {
    pub file: String,
}

#[derive(Debug, Serialize)]
pub struct StoredOpportunity {
    pub file: String,
    pub opportunity: Opportunity,
}

#[derive(Debug, Serialize)]
pub struct ListOpportunitiesResponse {
    pub opportunities: Vec<StoredOpportunity>,
}

/// POST /api/v1/opportunities
pub async fn handle_post_opportunity(
    State(state): State<AppState>,
    Json(opportunity): Json<Opportunity>,
) -> Result<(StatusCode, Json<PostOpportunityResponse>), AppError> {
    let missing = opportunity.missing_required_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let file = state.store.save(&opportunity)?;
    info!(file = %file, title = %opportunity.title, "opportunity posted");
    Ok((StatusCode::CREATED, Json(PostOpportunityResponse { file })))
}

/// GET /api/v1/opportunities
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
) -> Result<Json<ListOpportunitiesResponse>, AppError> {
    let opportunities = state
        .store
        .list()?
        .into_iter()
        .map(|(file, opportunity)| StoredOpportunity { file, opportunity })
        .collect();
    Ok(Json(ListOpportunitiesResponse { opportunities }))
}
