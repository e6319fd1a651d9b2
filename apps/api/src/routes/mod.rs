pub mod health;
pub mod opportunities;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers::handle_match;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(handle_match))
        .route(
            "/api/v1/opportunities",
            get(opportunities::handle_list_opportunities)
                .post(opportunities::handle_post_opportunity),
        )
        .with_state(state)
}
