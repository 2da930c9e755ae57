//! Client for the external ML scoring microservice.
//!
//! The service exposes:
//!   POST /score   {molecule, disease} → AnalyzeResponse JSON
//!   GET  /health  → 2xx when up
//!
//! One request per call, no retries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use theranova_common::{AnalyzeRequest, AnalyzeResponse};
use tracing::{debug, warn};

use crate::error::{Result, ScoringError};

/// Upper bound on a `/health` probe, independent of the scoring timeout.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Score a molecule/disease pair. The returned verdict is whatever the
    /// remote sent; callers re-derive it.
    async fn score(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse>;

    /// Probe the remote `/health` endpoint.
    async fn health_check(&self) -> Result<bool>;

    fn base_url(&self) -> &str;
}

// ── HTTP implementation ───────────────────────────────────────────────────────

pub struct HttpScoringClient {
    base_url: String,
    client: Client,
}

impl HttpScoringClient {
    /// Build a client for `base_url`. With `timeout = None` reqwest's default
    /// applies, i.e. the call waits for the remote indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScoringError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ScoringClient for HttpScoringClient {
    async fn score(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let url = format!("{}/score", self.base_url);
        debug!(
            url = %url,
            molecule = request.molecule.as_deref().unwrap_or_default(),
            disease = request.disease.as_deref().unwrap_or_default(),
            "Calling scoring service"
        );

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ScoringError::from_transport)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(ScoringError::from_transport)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(status = status.as_u16(), "Scoring service rejected request");
            return Err(ScoringError::Status { status: status.as_u16(), body });
        }

        let scored: AnalyzeResponse = serde_json::from_slice(&body)?;
        debug!(score = scored.repurpose_score, analysis_id = %scored.analysis_id, "Scoring service answered");
        Ok(scored)
    }

    async fn health_check(&self) -> Result<bool> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(ScoringError::from_transport)?;

        Ok(resp.status().is_success())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ── Mock implementation for testing ───────────────────────────────────────────

/// Failure modes the mock can be told to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Unavailable,
    Timeout,
    Malformed,
}

/// In-process scorer with canned responses keyed by (molecule, disease).
pub struct MockScoringClient {
    responses: HashMap<(String, String), AnalyzeResponse>,
    failure: Option<MockFailure>,
    healthy: bool,
    calls: AtomicUsize,
}

impl MockScoringClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failure: None,
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Register the response returned for `response.molecule` / `response.disease`.
    pub fn with(mut self, response: AnalyzeResponse) -> Self {
        self.responses
            .insert((response.molecule.clone(), response.disease.clone()), response);
        self
    }

    /// Shorthand for a response carrying only a score and an id.
    pub fn with_score(self, molecule: &str, disease: &str, score: f64) -> Self {
        self.with(AnalyzeResponse {
            molecule: molecule.to_string(),
            disease: disease.to_string(),
            repurpose_score: score,
            analysis_id: format!("mock-{}-{}", molecule.to_lowercase(), disease.to_lowercase()),
            ..Default::default()
        })
    }

    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Number of `score` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockScoringClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoringClient for MockScoringClient {
    async fn score(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.failure {
            Some(MockFailure::Unavailable) => {
                return Err(ScoringError::Unavailable("connection refused".to_string()))
            }
            Some(MockFailure::Timeout) => {
                return Err(ScoringError::Timeout("operation timed out".to_string()))
            }
            Some(MockFailure::Malformed) => {
                return serde_json::from_str::<AnalyzeResponse>("<html>Bad Gateway</html>")
                    .map_err(ScoringError::from);
            }
            None => {}
        }

        let key = (
            request.molecule.clone().unwrap_or_default(),
            request.disease.clone().unwrap_or_default(),
        );
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| ScoringError::Status {
                status: 404,
                body: format!("no mock score for {} / {}", key.0, key.1),
            })
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.healthy)
    }

    fn base_url(&self) -> &str {
        "mock://scoring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::{get, post}, Json, Router};
    use serde_json::{json, Value};

    /// Serve `app` on an ephemeral port and return its base URL.
    async fn spawn_scorer(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo_score(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "molecule": body["molecule"],
            "disease": body["disease"],
            "repurposeScore": 0.62,
            "overallVerdict": "Moderate potential - further investigation warranted",
            "analysisId": "0d6c1f4e9a8b4e0f8f1b2c3d4e5f6a7b",
            "trials": [],
            "competitors": [],
            "evidenceHighlights": ["No existing trials found that directly link the molecule and disease."]
        }))
    }

    #[tokio::test]
    async fn test_score_posts_request_and_parses_response() {
        let base = spawn_scorer(Router::new().route("/score", post(echo_score))).await;
        let client = HttpScoringClient::new(format!("{}/", base), None).unwrap();
        assert_eq!(client.base_url(), base);

        let resp = client
            .score(&AnalyzeRequest::new("Metformin", "Parkinson"))
            .await
            .unwrap();
        assert_eq!(resp.molecule, "Metformin");
        assert_eq!(resp.disease, "Parkinson");
        assert_eq!(resp.repurpose_score, 0.62);
        assert_eq!(resp.analysis_id, "0d6c1f4e9a8b4e0f8f1b2c3d4e5f6a7b");
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_error() {
        let app = Router::new().route(
            "/score",
            post(|| async { Json(json!({ "molecule": "X", "repurposeScore": "high" })) }),
        );
        let base = spawn_scorer(app).await;
        let client = HttpScoringClient::new(base, None).unwrap();

        let err = client.score(&AnalyzeRequest::new("X", "Y")).await.unwrap_err();
        assert!(matches!(err, ScoringError::Deserialization(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let app = Router::new().route(
            "/score",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
        );
        let base = spawn_scorer(app).await;
        let client = HttpScoringClient::new(base, None).unwrap();

        match client.score(&AnalyzeRequest::new("X", "Y")).await {
            Err(ScoringError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "model crashed");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpScoringClient::new(format!("http://{}", addr), None).unwrap();
        let err = client.score(&AnalyzeRequest::new("X", "Y")).await.unwrap_err();
        assert!(matches!(err, ScoringError::Unavailable(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_slow_remote_times_out() {
        let app = Router::new().route(
            "/score",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base = spawn_scorer(app).await;
        let client = HttpScoringClient::new(base, Some(Duration::from_millis(100))).unwrap();

        let err = client.score(&AnalyzeRequest::new("X", "Y")).await.unwrap_err();
        assert!(matches!(err, ScoringError::Timeout(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = Router::new().route("/health", get(|| async { Json(json!({ "status": "ok" })) }));
        let base = spawn_scorer(app).await;
        let client = HttpScoringClient::new(base, None).unwrap();
        assert!(client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_scorer() {
        let mock = MockScoringClient::new().with_score("Aspirin", "Cancer", 0.9);
        let resp = mock.score(&AnalyzeRequest::new("Aspirin", "Cancer")).await.unwrap();
        assert_eq!(resp.repurpose_score, 0.9);
        assert_eq!(mock.calls(), 1);

        let missing = mock.score(&AnalyzeRequest::new("Aspirin", "Gout")).await;
        assert!(matches!(missing, Err(ScoringError::Status { status: 404, .. })));

        let broken = MockScoringClient::new().failing(MockFailure::Malformed);
        let err = broken.score(&AnalyzeRequest::new("A", "B")).await.unwrap_err();
        assert!(matches!(err, ScoringError::Deserialization(_)));
    }
}
