//! AI search: one generateContent call per query, grounded with Google Search

use crate::config::SearchConfig;
use crate::error::{QoogleError, Result};
use async_trait::async_trait;
use qoogle_types::{GroundingChunk, SearchResult, WebSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

const MOCK_RESPONSE: &str = "This is a mock response because the API key is not configured. \
To enable real search, please provide your Google Gemini API key as an environment variable.";

/// Canned answer used when no API key is configured
pub fn mock_result() -> SearchResult {
    SearchResult {
        text: MOCK_RESPONSE.to_string(),
        sources: vec![
            GroundingChunk::web("https://ai.google.dev/", "Google AI for Developers"),
            GroundingChunk::web(
                "https://blog.google/technology/ai/google-gemini-ai/",
                "Introducing Gemini: our largest and most capable AI model",
            ),
        ],
    }
}

/// Remote text generator
#[async_trait(?Send)]
pub trait SearchBackend {
    async fn generate(&self, prompt: &str) -> Result<SearchResult>;
}

/// Search entry point used by both front-ends
pub struct SearchService {
    backend: Option<Box<dyn SearchBackend>>,
}

impl SearchService {
    /// Gemini-backed service, or the canned fallback when the config has no key
    pub fn from_config(config: &SearchConfig) -> Self {
        if !config.has_api_key() {
            warn!("API_KEY environment variable not set. Search will return a mock response.");
            return Self { backend: None };
        }
        Self::with_backend(GeminiClient::new(config.clone()))
    }

    pub fn with_backend(backend: impl SearchBackend + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    pub fn is_mock(&self) -> bool {
        self.backend.is_none()
    }

    pub async fn search(&self, prompt: &str) -> Result<SearchResult> {
        if prompt.trim().is_empty() {
            return Err(QoogleError::EmptyPrompt);
        }

        let Some(backend) = &self.backend else {
            return Ok(mock_result());
        };

        debug!("Running search for {:?}", prompt);
        backend.generate(prompt).await.map_err(|e| match e {
            QoogleError::Upstream(_) => e,
            other => {
                error!("Error calling Gemini API: {}", other);
                QoogleError::Upstream(other.to_string())
            }
        })
    }
}

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl GeminiClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl SearchBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<SearchResult> {
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::grounded(prompt))
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API returned {}: {}", status, body);
            return Err(QoogleError::Upstream(format!("status {}", status)));
        }

        let body: GenerateContentResponse = response.json().await.map_err(upstream)?;
        Ok(body.into_result())
    }
}

fn upstream(e: reqwest::Error) -> QoogleError {
    error!("Error calling Gemini API: {}", e);
    QoogleError::Upstream(e.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

impl GenerateContentRequest {
    fn grounded(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            tools: vec![Tool {
                google_search: serde_json::Map::new(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<RawGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct RawGroundingChunk {
    #[serde(default)]
    web: Option<RawWebSource>,
}

#[derive(Debug, Deserialize)]
struct RawWebSource {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

impl GenerateContentResponse {
    fn into_result(self) -> SearchResult {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return SearchResult::default();
        };

        let text = candidate
            .content
            .unwrap_or_default()
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<String>();

        let sources = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .map(|web| GroundingChunk {
                web: WebSource {
                    uri: web.uri,
                    title: web.title,
                },
            })
            .collect();

        SearchResult { text, sources }
    }
}
