//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AdviceKind, AdvicePayload, DomainError, Record, RoadmapStage, UserId};
use std::collections::HashMap;

/// Career backend. Two independent reads plus the advice endpoints.
#[async_trait::async_trait]
pub trait RemoteDataSource: Send + Sync {
    /// All internships of the user, in backend order.
    async fn fetch_internships(&self, user: &UserId) -> Result<Vec<Record>, DomainError>;

    /// All milestones of the user, in backend order.
    async fn fetch_milestones(&self, user: &UserId) -> Result<Vec<Record>, DomainError>;

    /// Section map for career advice or resume feedback.
    ///
    /// Sections may be missing from a successful response; callers fill them locally.
    /// Not used for [`AdviceKind::Roadmap`], see [`RemoteDataSource::request_roadmap`].
    async fn request_advice(
        &self,
        kind: AdviceKind,
        payload: &AdvicePayload,
    ) -> Result<HashMap<String, String>, DomainError>;

    /// Ordered roadmap stages.
    async fn request_roadmap(
        &self,
        payload: &AdvicePayload,
    ) -> Result<Vec<RoadmapStage>, DomainError>;
}
