//! REST client for a hosted text-classification endpoint.
//!
//! Wraps the inference HTTP API using [`reqwest`]. `{ "inputs": text }` is
//! POSTed to the configured endpoint URL as-is. The endpoint answers with
//! either a nested list (`[[{label, score}, ...]]`, one list per input) or a
//! flat list of label scores.

use std::time::Duration;

use serde::Deserialize;

/// HTTP client for one hosted model.
#[derive(Debug, Clone)]
pub struct InferenceApi {
    client: reqwest::Client,
    endpoint: String,
    /// Only used to name the classifier; not part of the request.
    model: String,
    token: Option<String>,
}

/// One label/score pair reported by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

/// Errors from the inference REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Inference API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The endpoint answered 2xx with no label scores.
    #[error("Inference API returned no label scores")]
    EmptyResponse,
}

impl InferenceApi {
    #[cfg(test)]
    fn new(endpoint: String, model: String) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, model)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// * `endpoint` - Full model URL, e.g.
    ///   `https://api-inference.huggingface.co/models/bhadresh-savani/bert-base-uncased-emotion`.
    /// * `model` - Display name stored with each entry as `remote:{model}`.
    pub fn with_client(client: reqwest::Client, endpoint: String, model: String) -> Self {
        Self {
            client,
            endpoint,
            model,
            token: None,
        }
    }

    /// Send `Authorization: Bearer {token}` with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Build a [`reqwest::Client`] with a per-request timeout.
    pub fn build_client(timeout: Duration) -> Result<reqwest::Client, InferenceError> {
        Ok(reqwest::Client::builder().timeout(timeout).build()?)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify a single text, returning every label score the model
    /// reported.
    pub async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        let body = serde_json::json!({ "inputs": text });

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let parsed: ClassifyResponse = Self::parse_response(response).await?;
        let scores = match parsed {
            ClassifyResponse::Nested(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            ClassifyResponse::Flat(scores) => scores,
        };

        if scores.is_empty() {
            return Err(InferenceError::EmptyResponse);
        }
        Ok(scores)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InferenceError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, InferenceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
