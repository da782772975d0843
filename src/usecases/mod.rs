//! Application use cases. Orchestrate domain logic via ports.

pub mod advice_service;
pub mod aggregator;

pub use advice_service::AdviceService;
pub use aggregator::Aggregator;
