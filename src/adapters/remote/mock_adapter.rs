//! Mock data source for offline runs and tests.
//!
//! Returns sample records and advice without network access. Latency and failures are
//! configurable per operation so callers can force any completion order.

use crate::domain::entities::{fields, sections};
use crate::domain::{AdviceKind, AdvicePayload, DomainError, Record, RoadmapStage, UserId};
use crate::ports::RemoteDataSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock backend.
///
/// `None` in an advice slot means the endpoint is unreachable and the call fails with a
/// transport error.
pub struct MockDataSource {
    internships: Option<Vec<Record>>,
    milestones: Option<Vec<Record>>,
    internships_delay: Duration,
    milestones_delay: Duration,
    advice_delay: Duration,
    advice: HashMap<AdviceKind, HashMap<String, String>>,
    roadmap: Option<Vec<RoadmapStage>>,
    advice_calls: AtomicUsize,
}

impl MockDataSource {
    /// Sample profile and sample advice with the default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Sample profile and sample advice with a custom delay on every operation.
    pub fn with_delay(delay_ms: u64) -> Self {
        let delay = Duration::from_millis(delay_ms);
        Self {
            internships: Some(sample_internships()),
            milestones: Some(sample_milestones()),
            internships_delay: delay,
            milestones_delay: delay,
            advice_delay: delay,
            advice: sample_advice(),
            roadmap: Some(vec![
                RoadmapStage::new(
                    "[MOCK] Junior Developer",
                    "Simulated roadmap stage. Configure a backend URL for real guidance.",
                ),
                RoadmapStage::new(
                    "[MOCK] Senior Developer",
                    "Simulated roadmap stage returned by the mock data source.",
                ),
            ]),
            advice_calls: AtomicUsize::new(0),
        }
    }

    /// No records, no delay, every advice endpoint unreachable.
    pub fn empty() -> Self {
        Self {
            internships: Some(Vec::new()),
            milestones: Some(Vec::new()),
            internships_delay: Duration::ZERO,
            milestones_delay: Duration::ZERO,
            advice_delay: Duration::ZERO,
            advice: HashMap::new(),
            roadmap: None,
            advice_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_internships(mut self, records: Vec<Record>) -> Self {
        self.internships = Some(records);
        self
    }

    pub fn with_milestones(mut self, records: Vec<Record>) -> Self {
        self.milestones = Some(records);
        self
    }

    /// Make the internship fetch fail with a transport error.
    pub fn failing_internships(mut self) -> Self {
        self.internships = None;
        self
    }

    /// Make the milestone fetch fail with a transport error.
    pub fn failing_milestones(mut self) -> Self {
        self.milestones = None;
        self
    }

    pub fn with_fetch_delays(mut self, internships: Duration, milestones: Duration) -> Self {
        self.internships_delay = internships;
        self.milestones_delay = milestones;
        self
    }

    /// Answer `kind` with the given section map.
    pub fn with_advice(mut self, kind: AdviceKind, response: HashMap<String, String>) -> Self {
        self.advice.insert(kind, response);
        self
    }

    pub fn with_roadmap(mut self, stages: Vec<RoadmapStage>) -> Self {
        self.roadmap = Some(stages);
        self
    }

    /// Number of advice/roadmap requests served so far.
    pub fn advice_calls(&self) -> usize {
        self.advice_calls.load(Ordering::SeqCst)
    }

    async fn respond<T: Clone>(
        &self,
        delay: Duration,
        what: &str,
        response: Option<&T>,
    ) -> Result<T, DomainError> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
            .cloned()
            .ok_or_else(|| DomainError::Transport(format!("[MOCK] {} unavailable", what)))
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RemoteDataSource for MockDataSource {
    async fn fetch_internships(&self, user: &UserId) -> Result<Vec<Record>, DomainError> {
        info!(user = %user, "[MOCK] fetching internships");
        self.respond(self.internships_delay, "internships", self.internships.as_ref())
            .await
    }

    async fn fetch_milestones(&self, user: &UserId) -> Result<Vec<Record>, DomainError> {
        info!(user = %user, "[MOCK] fetching milestones");
        self.respond(self.milestones_delay, "milestones", self.milestones.as_ref())
            .await
    }

    async fn request_advice(
        &self,
        kind: AdviceKind,
        payload: &AdvicePayload,
    ) -> Result<HashMap<String, String>, DomainError> {
        self.advice_calls.fetch_add(1, Ordering::SeqCst);
        info!(kind = %kind, fields = payload.len(), "[MOCK] simulating advice request");
        self.respond(self.advice_delay, kind.slug(), self.advice.get(&kind))
            .await
    }

    async fn request_roadmap(
        &self,
        payload: &AdvicePayload,
    ) -> Result<Vec<RoadmapStage>, DomainError> {
        self.advice_calls.fetch_add(1, Ordering::SeqCst);
        info!(fields = payload.len(), "[MOCK] simulating roadmap request");
        self.respond(self.advice_delay, "roadmap", self.roadmap.as_ref())
            .await
    }
}

fn sample_internships() -> Vec<Record> {
    vec![
        Record::internship()
            .with(fields::ID, "1")
            .with(fields::COMPANY, "Acme Mobile")
            .with(fields::ROLE, "Android Intern")
            .with(fields::DATES, "Jun 2024 - Aug 2024")
            .with(
                fields::DESCRIPTION,
                "Built Kotlin features for the Android app, wired Firebase sync and Git-based CI/CD.",
            ),
        Record::internship()
            .with(fields::ID, "2")
            .with(fields::COMPANY, "Globex")
            .with(fields::ROLE, "Backend Intern")
            .with(fields::DATES, "Jan 2024 - Mar 2024")
            .with(fields::DESCRIPTION, "REST API endpoints backed by SQL and Docker."),
    ]
}

fn sample_milestones() -> Vec<Record> {
    vec![
        Record::milestone()
            .with(fields::ID, "1")
            .with(fields::TITLE, "Published first app")
            .with(fields::DATE, "2024-09-01"),
        Record::milestone()
            .with(fields::ID, "2")
            .with(fields::TITLE, "Hackathon finalist")
            .with(fields::DATE, "2024-11-15"),
    ]
}

fn sample_advice() -> HashMap<AdviceKind, HashMap<String, String>> {
    let map = |pairs: &[(&str, &str)]| -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };
    HashMap::from([
        (
            AdviceKind::CareerAdvice,
            map(&[
                (sections::CERTIFICATIONS, "[MOCK] • Simulated certification"),
                (sections::SKILLS, "[MOCK] • Simulated skill"),
                (sections::TIPS, "[MOCK] • Simulated tip"),
            ]),
        ),
        (
            AdviceKind::ResumeFeedback,
            map(&[
                (sections::GENERAL, "[MOCK] Simulated general feedback."),
                (sections::STRENGTHS, "[MOCK] • Simulated strength"),
                (sections::IMPROVEMENTS, "[MOCK] • Simulated improvement"),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sample_profile() {
        let source = MockDataSource::with_delay(1);
        let user = UserId::new("student@example.com");

        let internships = source.fetch_internships(&user).await.unwrap();
        let milestones = source.fetch_milestones(&user).await.unwrap();

        assert_eq!(internships.len(), 2);
        assert_eq!(milestones.len(), 2);
        assert!(internships.iter().all(|r| r.description().is_some()));
    }

    #[tokio::test]
    async fn test_mock_failures() {
        let source = MockDataSource::empty().failing_milestones();
        let user = UserId::new("student@example.com");

        assert!(source.fetch_internships(&user).await.unwrap().is_empty());
        assert!(matches!(
            source.fetch_milestones(&user).await,
            Err(DomainError::Transport(_))
        ));
        assert!(
            source
                .request_advice(AdviceKind::CareerAdvice, &AdvicePayload::new())
                .await
                .is_err()
        );
        assert!(source.request_roadmap(&AdvicePayload::new()).await.is_err());
        assert_eq!(source.advice_calls(), 2);
    }
}
