//! career-insights: joins a user's internships and milestones and synthesizes career advice
//! with a deterministic offline fallback. Hexagonal architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
