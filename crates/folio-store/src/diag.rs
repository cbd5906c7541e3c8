//! Structured diagnostics for absorbed read failures.
//!
//! The client never surfaces errors to callers, so every failure it swallows
//! is routed through a [`DiagnosticSink`] instead of ad-hoc logging. The
//! default sink writes to the operational log; tests install a recording
//! sink to assert on what was absorbed.

use std::sync::Mutex;

use folio_core::Category;

use crate::error::StoreError;

/// One absorbed read failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchFailure {
    /// Category whose read failed.
    pub category: Category,
    /// Whether the failure looked transient (see [`StoreError::is_transient`]).
    pub transient: bool,
    /// Human-readable failure description.
    pub detail: String,
}

impl FetchFailure {
    /// Builds a failure event from a store error.
    pub fn from_error(category: Category, error: &StoreError) -> Self {
        Self {
            category,
            transient: error.is_transient(),
            detail: error.to_string(),
        }
    }
}

/// Destination for absorbed failures.
///
/// Implementations must be cheap and infallible; the client calls `record`
/// on its hot path and never inspects a result.
pub trait DiagnosticSink: Send + Sync {
    /// Records one absorbed failure.
    fn record(&self, failure: FetchFailure);
}

/// Default sink: forwards failures to the operational log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, failure: FetchFailure) {
        log::warn!(
            "fetch failed for `{}` (transient: {}): {}",
            failure.category,
            failure.transient,
            failure.detail
        );
    }
}

/// Sink that keeps every failure in memory.
///
/// Used by tests to assert on absorbed failures; also usable as an
/// operator-facing buffer.
#[derive(Debug, Default)]
pub struct RecordingSink {
    failures: Mutex<Vec<FetchFailure>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded failures.
    pub fn failures(&self) -> Vec<FetchFailure> {
        self.failures
            .lock()
            .map(|failures| failures.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, failure: FetchFailure) {
        // A poisoned lock only drops diagnostics, never the read itself.
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(failure);
        }
    }
}
