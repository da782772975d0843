//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure
//! - Listener: Called by application back into the consumer when results are ready

pub mod inbound;
pub mod listener;
pub mod outbound;

pub use inbound::InputPort;
pub use listener::InsightsListener;
pub use outbound::RemoteDataSource;
