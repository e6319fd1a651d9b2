//! Suggestion generation — hands the top-ranked opportunities and the student
//! profile to an external text-generation collaborator (an Ollama-compatible
//! endpoint) and returns a bulleted recommendation string. Best-effort: a
//! failure here never fails the match response.

pub mod prompts;

use std::collections::BTreeSet;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;
use self::prompts::render_suggestion_prompt;

/// Returned without an LLM call when the match list is empty.
pub const NO_MATCH_SUGGESTION: &str = "No strong matches found to generate suggestions. \
     Try enhancing your resume or updating your skills and certifications.";

const UNAVAILABLE_FALLBACK: &str =
    "Suggestions are unavailable right now. Please try again later.";

/// Below this final score a match is considered weak; when every top match is
/// weak the advisor sees one generalized opportunity instead of the best one.
const LOW_SCORE_BAND: f64 = 0.7;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// An opportunity paired with the final score it earned in the current run.
#[derive(Debug, Clone)]
pub struct ScoredOpportunity {
    pub opportunity: Opportunity,
    pub match_score: f64,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Picks what the advisor should look at: the single best match, or — when
/// every top match scores below the weak-match band — one generalized
/// opportunity over the union of their requirements.
fn select_payload(top: &[ScoredOpportunity]) -> Option<(Opportunity, f64)> {
    let best = top
        .iter()
        .max_by(|a, b| a.match_score.total_cmp(&b.match_score))?;

    if top.iter().all(|o| o.match_score < LOW_SCORE_BAND) {
        let skills: BTreeSet<String> = top
            .iter()
            .flat_map(|o| o.opportunity.required_skills.iter().cloned())
            .collect();
        let certifications: BTreeSet<String> = top
            .iter()
            .flat_map(|o| o.opportunity.mandatory_certifications.iter().cloned())
            .collect();
        let combined = Opportunity {
            title: "Top Opportunities (Generalized)".to_string(),
            organization: "Multiple".to_string(),
            role: "Various".to_string(),
            required_skills: skills.into_iter().collect(),
            mandatory_certifications: certifications.into_iter().collect(),
            ..Default::default()
        };
        return Some((combined, best.match_score));
    }

    Some((best.opportunity.clone(), best.match_score))
}

/// Client for the external text-generation collaborator.
#[derive(Clone)]
pub struct SuggestionClient {
    client: Client,
    base_url: String,
    model: String,
}

impl SuggestionClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Generates improvement suggestions for the student. Never fails: an
    /// empty match list and any generation error both produce a fixed,
    /// user-visible string.
    pub async fn generate(
        &self,
        profile: &StudentProfile,
        top_matches: &[ScoredOpportunity],
    ) -> String {
        let Some((opportunity, score)) = select_payload(top_matches) else {
            return NO_MATCH_SUGGESTION.to_string();
        };

        let prompt = render_suggestion_prompt(profile, &opportunity, score);
        match self.call(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Suggestion generation failed: {e}");
                UNAVAILABLE_FALLBACK.to_string()
            }
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, SuggestionError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        debug!("Suggestion generation returned {} bytes", parsed.response.len());
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(title: &str, skills: &[&str], certs: &[&str], score: f64) -> ScoredOpportunity {
        ScoredOpportunity {
            opportunity: Opportunity {
                title: title.to_string(),
                required_skills: skills.iter().map(|s| s.to_string()).collect(),
                mandatory_certifications: certs.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            match_score: score,
        }
    }

    #[test]
    fn empty_match_list_selects_nothing() {
        assert!(select_payload(&[]).is_none());
    }

    #[test]
    fn all_weak_matches_are_generalized() {
        let top = vec![
            scored("A", &["python", "sql"], &["cert a"], 0.62),
            scored("B", &["sql", "aws"], &[], 0.65),
        ];
        let (opportunity, score) = select_payload(&top).unwrap();
        assert_eq!(opportunity.title, "Top Opportunities (Generalized)");
        assert_eq!(opportunity.organization, "Multiple");
        assert_eq!(opportunity.required_skills, vec!["aws", "python", "sql"]);
        assert_eq!(opportunity.mandatory_certifications, vec!["cert a"]);
        assert_eq!(score, 0.65);
    }

    #[test]
    fn one_strong_match_selects_the_best() {
        let top = vec![
            scored("Weak", &["sql"], &[], 0.61),
            scored("Strong", &["python"], &[], 0.82),
        ];
        let (opportunity, score) = select_payload(&top).unwrap();
        assert_eq!(opportunity.title, "Strong");
        assert_eq!(score, 0.82);
    }

    #[test]
    fn boundary_score_is_not_weak() {
        let top = vec![scored("Edge", &["python"], &[], LOW_SCORE_BAND)];
        let (opportunity, _) = select_payload(&top).unwrap();
        assert_eq!(opportunity.title, "Edge");
    }
}
