//! Aggregator use case: fetch internships and milestones concurrently and join them once.
//!
//! Each `fetch_all` spawns two independent tasks. Their completion handlers meet at a
//! per-invocation [`JoinBarrier`]; whichever handler finishes second builds the snapshot,
//! derives features and notifies the listener. A failed fetch counts as an empty result.

use crate::domain::{
    DomainError, FeatureExtractor, FeatureSet, FetchOutcome, JoinedSnapshot, Record, UserId,
};
use crate::ports::{InsightsListener, RemoteDataSource};
use chrono::Utc;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Which of the two collections a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Internships,
    Milestones,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Internships => f.write_str("internships"),
            Side::Milestones => f.write_str("milestones"),
        }
    }
}

/// Result of one fetch as stored in the barrier.
#[derive(Debug)]
struct Slot {
    records: Vec<Record>,
    outcome: FetchOutcome,
}

impl Slot {
    fn from_result(side: Side, result: Result<Vec<Record>, DomainError>) -> Self {
        match result {
            Ok(records) => {
                debug!(side = %side, count = records.len(), "fetch succeeded");
                Self {
                    records,
                    outcome: FetchOutcome::Succeeded,
                }
            }
            Err(e) => {
                warn!(side = %side, error = %e, "fetch failed; joining with empty result");
                Self {
                    records: Vec::new(),
                    outcome: FetchOutcome::Failed,
                }
            }
        }
    }
}

#[derive(Debug, Default)]
struct JoinState {
    internships: Option<Slot>,
    milestones: Option<Slot>,
    fired: bool,
}

/// Two-slot rendezvous. A filled slot doubles as that side's completion flag.
///
/// Storing a result and checking the other slot happen under one lock, so exactly one
/// completion observes both sides done.
#[derive(Debug)]
pub struct JoinBarrier {
    generation: u64,
    state: Mutex<JoinState>,
}

impl JoinBarrier {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            state: Mutex::new(JoinState::default()),
        }
    }

    /// Record one side's result. Returns the snapshot to the completion that closes the join,
    /// `None` to every other caller.
    pub fn complete(
        &self,
        side: Side,
        result: Result<Vec<Record>, DomainError>,
    ) -> Option<JoinedSnapshot> {
        let slot = Slot::from_result(side, result);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match side {
            Side::Internships => state.internships = Some(slot),
            Side::Milestones => state.milestones = Some(slot),
        }

        if state.fired || state.internships.is_none() || state.milestones.is_none() {
            return None;
        }
        state.fired = true;
        let internships = state.internships.take()?;
        let milestones = state.milestones.take()?;

        Some(JoinedSnapshot {
            generation: self.generation,
            internships: internships.records,
            milestones: milestones.records,
            internships_outcome: internships.outcome,
            milestones_outcome: milestones.outcome,
            joined_at: Utc::now(),
        })
    }
}

/// Downstream of the join: store the snapshot, derive features, notify.
struct Publisher {
    latest: Arc<RwLock<Option<Arc<JoinedSnapshot>>>>,
    listener: Arc<dyn InsightsListener>,
    extractor: FeatureExtractor,
    reply: Mutex<Option<oneshot::Sender<FeatureSet>>>,
}

impl Publisher {
    fn publish(&self, snapshot: JoinedSnapshot) {
        let snapshot = Arc::new(snapshot);
        {
            let mut latest = self.latest.write().unwrap_or_else(PoisonError::into_inner);
            // An older invocation that joins late must not replace a newer snapshot.
            if latest
                .as_ref()
                .is_none_or(|current| current.generation <= snapshot.generation)
            {
                *latest = Some(Arc::clone(&snapshot));
            }
        }

        let features = self.extractor.extract(&snapshot);
        info!(
            generation = snapshot.generation,
            internships = snapshot.internships.len(),
            milestones = snapshot.milestones.len(),
            partial = snapshot.is_partial(),
            completion = features.completion_percent,
            "join fired"
        );

        self.listener.on_data_ready(&features);

        let reply = self
            .reply
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(tx) = reply {
            // Receiver gone means the caller stopped waiting; the result is simply dropped.
            let _ = tx.send(features);
        }
    }
}

/// Aggregates the two remote collections of a user into joined snapshots.
pub struct Aggregator {
    source: Arc<dyn RemoteDataSource>,
    listener: Arc<dyn InsightsListener>,
    extractor: FeatureExtractor,
    latest: Arc<RwLock<Option<Arc<JoinedSnapshot>>>>,
    generation: AtomicU64,
}

impl Aggregator {
    pub fn new(source: Arc<dyn RemoteDataSource>, listener: Arc<dyn InsightsListener>) -> Self {
        Self {
            source,
            listener,
            extractor: FeatureExtractor::new(),
            latest: Arc::new(RwLock::new(None)),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the default extractor (e.g. custom completion weights).
    pub fn with_extractor(mut self, extractor: FeatureExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fetch both collections concurrently and wait for the join.
    ///
    /// The listener's `on_data_ready` fires exactly once for this call, before the
    /// features are returned. Fetch failures never surface here; they are joined as
    /// empty collections. Overlapping calls complete independently.
    ///
    /// # Errors
    /// `DomainError::JoinAborted` if a fetch task died without reporting (a panicking
    /// data source).
    pub async fn fetch_all(&self, user: &UserId) -> Result<FeatureSet, DomainError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(user = %user, generation, "fetching internships and milestones");

        let (tx, rx) = oneshot::channel();
        let barrier = Arc::new(JoinBarrier::new(generation));
        let publisher = Arc::new(Publisher {
            latest: Arc::clone(&self.latest),
            listener: Arc::clone(&self.listener),
            extractor: self.extractor,
            reply: Mutex::new(Some(tx)),
        });

        let source = Arc::clone(&self.source);
        let who = user.clone();
        spawn_fetch(
            Side::Internships,
            async move { source.fetch_internships(&who).await },
            Arc::clone(&barrier),
            Arc::clone(&publisher),
        );

        let source = Arc::clone(&self.source);
        let who = user.clone();
        spawn_fetch(
            Side::Milestones,
            async move { source.fetch_milestones(&who).await },
            barrier,
            publisher,
        );

        rx.await.map_err(|_| {
            error!(user = %user, generation, "fetch task ended before the join");
            self.listener
                .on_error("Could not load your internships and milestones");
            DomainError::JoinAborted
        })
    }

    /// Most recent joined snapshot, if any `fetch_all` has completed.
    pub fn latest_snapshot(&self) -> Option<Arc<JoinedSnapshot>> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Features of the most recent snapshot, recomputed on each call.
    pub fn latest_features(&self) -> Option<FeatureSet> {
        self.latest_snapshot()
            .map(|snapshot| self.extractor.extract(&snapshot))
    }
}

/// Run one fetch on its own task and report its completion to the barrier.
fn spawn_fetch<F>(side: Side, fetch: F, barrier: Arc<JoinBarrier>, publisher: Arc<Publisher>)
where
    F: Future<Output = Result<Vec<Record>, DomainError>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = fetch.await;
        if let Some(snapshot) = barrier.complete(side, result) {
            debug!(side = %side, "second completion; publishing snapshot");
            publisher.publish(snapshot);
        }
    });
}
