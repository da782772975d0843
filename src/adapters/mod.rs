//! Infrastructure adapters. Implement outbound ports.
//!
//! Career backend (HTTP or mock) and console UI. Map errors to DomainError.

pub mod remote;
pub mod ui;
