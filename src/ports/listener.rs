//! Consumer port. The screen/controller that renders aggregation and advice results.

use crate::domain::{AdviceContent, AdviceKind, FeatureSet};
use tracing::error;

/// Callbacks fired by the aggregator and the advice service.
///
/// Implementations are invoked from whichever task completes the work, so they must be
/// cheap and must not block.
pub trait InsightsListener: Send + Sync {
    /// Fired exactly once per `fetch_all` join.
    fn on_data_ready(&self, features: &FeatureSet);

    /// Fired once per `synthesize` call. `degraded` is true when any section is local content.
    fn on_advice_ready(&self, kind: AdviceKind, content: &AdviceContent, degraded: bool);

    /// Fired when aggregation ends without a snapshot (a fetch task died before reporting).
    /// Feature extraction itself is total and never triggers it.
    fn on_error(&self, message: &str) {
        error!(message, "insights error");
    }
}
