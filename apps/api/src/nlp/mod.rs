//! Narrow interfaces over the external NLP capabilities (entity recognition
//! and sentence embedding), so the matching core is testable with stub
//! implementations and never depends on a specific provider.

pub mod azure;
pub mod embedding;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entity categories the extractor treats as skill candidates. Anything else
/// (Person, Location, DateTime, ...) is discarded.
pub const SKILL_CANDIDATE_CATEGORIES: [&str; 5] =
    ["Skill", "Product", "Organization", "Event", "Other"];

/// A named entity returned by the recognition service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub category: String,
}

impl Entity {
    pub fn is_skill_candidate(&self) -> bool {
        SKILL_CANDIDATE_CATEGORIES.contains(&self.category.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Service flagged document as error: {0}")]
    Document(String),
}

/// The entity-recognition capability. Callers must treat failures as an
/// empty result set rather than propagating them (extraction degrades
/// gracefully to dictionary-only matching).
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError>;
}

/// The sentence-embedding capability: maps a string to a fixed-dimension
/// dense vector. Implementations must be deterministic for a given input.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f32>;
    fn dimension(&self) -> usize;
}
