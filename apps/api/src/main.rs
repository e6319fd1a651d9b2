mod config;
mod errors;
mod matching;
mod models;
mod nlp;
mod routes;
mod state;
mod storage;
mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::nlp::azure::AzureEntityRecognizer;
use crate::nlp::embedding::HashEmbedder;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::OpportunityStore;
use crate::suggestions::SuggestionClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillConnect API v{}", env!("CARGO_PKG_VERSION"));

    // Open the opportunity store
    let store = OpportunityStore::open(&config.opportunity_dir)?;
    info!("Opportunity store: {}", config.opportunity_dir.display());

    // Initialize the entity-recognition client
    let recognizer = Arc::new(AzureEntityRecognizer::new(
        config.azure_text_endpoint.clone(),
        config.azure_text_key.clone(),
    ));
    info!("Entity recognizer initialized");

    // Initialize the embedding backend
    let embedder = Arc::new(HashEmbedder::new(config.embedding_dimension));
    info!("Embedder initialized (dimension: {})", config.embedding_dimension);

    // Initialize the suggestion client
    let suggestions = SuggestionClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    info!("Suggestion client initialized (model: {})", config.ollama_model);

    let state = AppState {
        config: config.clone(),
        recognizer,
        embedder,
        suggestions,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
