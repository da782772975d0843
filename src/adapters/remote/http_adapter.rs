//! HTTP adapter for the career backend.
//!
//! Implements `RemoteDataSource` over the backend's JSON routes. Transport timeouts are
//! applied here through the reqwest client; the core never times out on its own.

use crate::adapters::remote::mapper;
use crate::domain::{
    AdviceKind, AdvicePayload, DomainError, Record, RecordKind, RoadmapStage, UserId,
};
use crate::ports::RemoteDataSource;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

const INTERNSHIPS_PATH: &str = "/get_internships";
const MILESTONES_PATH: &str = "/get_milestones";
const CAREER_ADVICE_PATH: &str = "/api/career-advice";
const RESUME_FEEDBACK_PATH: &str = "/api/resume-feedback";
const ROADMAP_PATH: &str = "/api/detailed-roadmap";

/// Max characters of an error body kept in `DomainError::Status`.
const ERROR_BODY_LIMIT: usize = 200;

/// reqwest-backed data source.
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Backend root (e.g., "http://127.0.0.1:5000"); a trailing slash is ignored
    /// * `timeout` - Per-request timeout applied by the HTTP client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check status and decode the body as JSON.
    async fn read_json(response: reqwest::Response) -> Result<Value, DomainError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "backend returned error");
            return Err(DomainError::Status {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::Decode(format!("invalid JSON body: {}", e)))
    }

    async fn get_records(
        &self,
        path: &str,
        kind: RecordKind,
        user: &UserId,
    ) -> Result<Vec<Record>, DomainError> {
        let response = self
            .client
            .get(self.url(path))
            .query(&[("email", user.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        let body = Self::read_json(response).await?;
        let records = mapper::value_to_records(kind, &body)?;
        debug!(path, count = records.len(), "records received");
        Ok(records)
    }

    async fn post_json(&self, path: &str, payload: &AdvicePayload) -> Result<Value, DomainError> {
        info!(path, fields = payload.len(), "requesting advice from backend");
        let response = self
            .client
            .post(self.url(path))
            .json(payload)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;
        Self::read_json(response).await
    }
}

#[async_trait::async_trait]
impl RemoteDataSource for HttpDataSource {
    async fn fetch_internships(&self, user: &UserId) -> Result<Vec<Record>, DomainError> {
        self.get_records(INTERNSHIPS_PATH, RecordKind::Internship, user)
            .await
    }

    async fn fetch_milestones(&self, user: &UserId) -> Result<Vec<Record>, DomainError> {
        self.get_records(MILESTONES_PATH, RecordKind::Milestone, user)
            .await
    }

    async fn request_advice(
        &self,
        kind: AdviceKind,
        payload: &AdvicePayload,
    ) -> Result<HashMap<String, String>, DomainError> {
        let path = match kind {
            AdviceKind::CareerAdvice => CAREER_ADVICE_PATH,
            AdviceKind::ResumeFeedback => RESUME_FEEDBACK_PATH,
            AdviceKind::Roadmap => {
                return Err(DomainError::Decode(
                    "roadmap advice is a stage list; use request_roadmap".to_string(),
                ));
            }
        };
        let body = self.post_json(path, payload).await?;
        mapper::value_to_sections(&body)
    }

    async fn request_roadmap(
        &self,
        payload: &AdvicePayload,
    ) -> Result<Vec<RoadmapStage>, DomainError> {
        let body = self.post_json(ROADMAP_PATH, payload).await?;
        mapper::value_to_stages(&body)
    }
}
