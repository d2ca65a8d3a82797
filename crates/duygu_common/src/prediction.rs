//! Prediction service client
//!
//! The remote service answers `GET <endpoint>?sentence=<text>` with
//! `{"sentence": ..., "sentiment_score": 0.87, "sentiment": "positive"}`.
//!
//! Production code uses `HttpPredictionService`. Tests use
//! `FakePredictionService` with scripted responses.

use crate::config::ServiceConfig;
use crate::error::PredictionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "sentiment_score")]
    pub score: f64,

    /// Label as returned by the service ("positive" / "negative")
    #[serde(rename = "sentiment")]
    pub label: String,
}

impl Prediction {
    pub fn new(score: f64, label: impl Into<String>) -> Self {
        Self {
            score,
            label: label.into(),
        }
    }

    /// Parse a response body. Extra fields are ignored.
    pub fn from_json(body: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(body).map_err(|e| PredictionError::InvalidBody(e.to_string()))
    }
}

// ============================================================================
// Prediction Service Trait
// ============================================================================

/// One request, one outcome. Implementations must not retry.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, sentence: &str) -> Result<Prediction, PredictionError>;
}

// ============================================================================
// HTTP Prediction Service (Production)
// ============================================================================

pub struct HttpPredictionService {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpPredictionService {
    pub fn new(endpoint: &str) -> Result<Self, PredictionError> {
        let endpoint =
            reqwest::Url::parse(endpoint).map_err(|e| PredictionError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, PredictionError> {
        Self::new(&config.endpoint)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Endpoint with the sentence appended as the `sentence` query parameter
    pub fn request_url(&self, sentence: &str) -> reqwest::Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("sentence", sentence);
        url
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, sentence: &str) -> Result<Prediction, PredictionError> {
        let url = self.request_url(sentence);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Transport(format!("Failed to read body: {}", e)))?;

        Prediction::from_json(&body)
    }
}

// ============================================================================
// Fake Prediction Service (Testing)
// ============================================================================

/// Fake prediction service for testing
pub struct FakePredictionService {
    responses: Mutex<Vec<Result<Prediction, PredictionError>>>,
    requests: Mutex<Vec<String>>,
}

impl FakePredictionService {
    /// Create a fake service with scripted responses.
    /// A single response is returned forever; several are returned in order.
    pub fn new(responses: Vec<Result<Prediction, PredictionError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always_ok(prediction: Prediction) -> Self {
        Self::new(vec![Ok(prediction)])
    }

    pub fn always_error(error: PredictionError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of predict calls made
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Sentences received, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PredictionService for FakePredictionService {
    async fn predict(&self, sentence: &str) -> Result<Prediction, PredictionError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(sentence.to_string());
        }

        let mut responses = self
            .responses
            .lock()
            .map_err(|_| PredictionError::Transport("fake service poisoned".into()))?;

        match responses.len() {
            0 => Err(PredictionError::Transport("no scripted response".into())),
            1 => responses[0].clone(),
            _ => responses.remove(0),
        }
    }
}
