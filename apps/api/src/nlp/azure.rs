//! Azure Text Analytics entity-recognition client.
//!
//! The single point of entry for all entity-recognition calls; no other
//! module may talk to the service directly.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Entity, EntityRecognizer, RecognizerError};

const RECOGNITION_PATH: &str = "/text/analytics/v3.1/entities/recognition/general";
/// Conservative cap on a single blocking recognition call.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct RecognitionRequest<'a> {
    documents: Vec<RequestDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestDocument<'a> {
    id: &'a str,
    language: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    documents: Vec<ResponseDocument>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseDocument {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Entity recognizer backed by the Azure Text Analytics REST API.
#[derive(Clone)]
pub struct AzureEntityRecognizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AzureEntityRecognizer {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl EntityRecognizer for AzureEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let body = RecognitionRequest {
            documents: vec![RequestDocument {
                id: "1",
                language: "en",
                text,
            }],
        };

        let response = self
            .client
            .post(format!("{}{}", self.endpoint, RECOGNITION_PATH))
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecognizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: RecognitionResponse = response.json().await?;
        if let Some(err) = parsed.errors.first() {
            return Err(RecognizerError::Document(err.error.message.clone()));
        }

        let entities: Vec<Entity> = parsed
            .documents
            .into_iter()
            .flat_map(|d| d.entities)
            .collect();
        debug!("Entity recognition returned {} entities", entities.len());
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_entities_deserializes() {
        let json = r#"{
            "documents": [{
                "id": "1",
                "entities": [
                    {"text": "Python", "category": "Skill", "confidenceScore": 0.98},
                    {"text": "Microsoft", "category": "Organization", "confidenceScore": 0.91}
                ]
            }],
            "errors": [],
            "modelVersion": "2023-09-01"
        }"#;
        let parsed: RecognitionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.documents.len(), 1);
        assert_eq!(parsed.documents[0].entities.len(), 2);
        assert_eq!(parsed.documents[0].entities[0].text, "Python");
        assert_eq!(parsed.documents[0].entities[1].category, "Organization");
    }

    #[test]
    fn document_error_flag_deserializes() {
        let json = r#"{
            "documents": [],
            "errors": [{"id": "1", "error": {"code": "InvalidDocument", "message": "too long"}}]
        }"#;
        let parsed: RecognitionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].error.message, "too long");
    }
}
