use std::sync::Arc;

use crate::config::Config;
use crate::nlp::{Embedder, EntityRecognizer};
use crate::storage::OpportunityStore;
use crate::suggestions::SuggestionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity-recognition capability. Swappable: handlers only see the trait.
    pub recognizer: Arc<dyn EntityRecognizer>,
    /// Sentence-embedding capability used for certification similarity.
    pub embedder: Arc<dyn Embedder>,
    pub suggestions: SuggestionClient,
    pub store: OpportunityStore,
}
