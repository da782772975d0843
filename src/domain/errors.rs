//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. None of them reach the consumer
//! as a failure of `fetch_all` or `synthesize`: fetch errors become empty outcomes and
//! advice errors become fallback content.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network-level failure (connect, timeout, TLS, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success HTTP status.
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    /// A fetch task ended without reporting to the join barrier.
    #[error("Fetch task ended before the join completed")]
    JoinAborted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
