//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod categories;
pub mod entities;
pub mod errors;
pub mod fallback;
pub mod features;

pub use categories::{Category, DecisionTree};
pub use entities::{
    AdviceContent, AdviceKind, AdviceOrigin, AdvicePayload, AdviceResult, FeatureSet,
    FetchOutcome, JoinedSnapshot, Record, RecordKind, RoadmapStage, UserId,
};
pub use errors::DomainError;
pub use features::{CompletionWeights, FeatureExtractor};
