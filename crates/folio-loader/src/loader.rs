//! Generic fetch-with-fallback section loader.
//!
//! Every content section of the page follows the same behavior: start from a
//! compiled-in fallback dataset, issue exactly one read, replace the fallback
//! wholesale if the response carries content, and otherwise keep the fallback
//! while saying nothing to the user. [`SectionLoader`] implements that
//! behavior once, parametrized over the dataset type and the fetch
//! operation, instead of copying it into every section.
//!
//! # State machine
//!
//! `Loading` (initial) → `Settled`, entered exactly once after the single
//! fetch settles — success, empty, or failure. The current
//! [`SectionState`] is observable through a watch channel, so a rendering
//! layer can swap the "Loading…" placeholder for content the moment the
//! phase flips.
//!
//! # Late responses
//!
//! A fetch has no cancellation path, so a response can arrive after the
//! owning section is torn down. Loads are therefore guarded by a generation
//! token: [`SectionLoader::invalidate`] bumps the generation at teardown and
//! [`SectionLoader::apply`] discards any result carrying a stale token.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use folio_core::Category;

// ============================================================================
// SectionData
// ============================================================================

/// Datasets a section can display.
///
/// `has_content` decides whether a fetched value replaces the fallback:
/// empty collections and absent singletons do not count as content, so both
/// take the identical keep-the-fallback path.
pub trait SectionData: Clone + Send + Sync + 'static {
    /// Returns `true` if this value should replace the fallback.
    fn has_content(&self) -> bool;
}

impl<T: Clone + Send + Sync + 'static> SectionData for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> SectionData for Option<T> {
    fn has_content(&self) -> bool {
        self.is_some()
    }
}

// ============================================================================
// LoadPhase / SectionState
// ============================================================================

/// Phase of a section's single load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// The fetch has not settled; the fallback is displayed behind a
    /// loading placeholder.
    Loading,
    /// Terminal: the fetch settled (success, empty, or failure). Never
    /// re-entered.
    Settled,
}

impl LoadPhase {
    /// Returns `true` once the load attempt has settled.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadPhase::Settled)
    }
}

/// Snapshot of a section: the displayed dataset and the load phase.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionState<T> {
    /// Currently displayed dataset (fallback until a non-empty fetch lands).
    pub data: T,
    /// Load phase; gates the loading placeholder.
    pub phase: LoadPhase,
}

// ============================================================================
// LoadToken
// ============================================================================

/// Generation marker tying a fetch to the section lifetime it was issued in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

// ============================================================================
// SectionLoader
// ============================================================================

/// Per-section fetch-with-fallback state holder.
///
/// Cheap to clone (Arc internals); state changes are broadcast to all
/// subscribers via a watch channel.
#[derive(Clone)]
pub struct SectionLoader<T: SectionData> {
    inner: Arc<SectionLoaderInner<T>>,
}

struct SectionLoaderInner<T> {
    category: Category,
    tx: watch::Sender<SectionState<T>>,
    generation: AtomicU64,
}

impl<T: SectionData> SectionLoader<T> {
    /// Creates a loader displaying `fallback` in the `Loading` phase.
    pub fn new(category: Category, fallback: T) -> Self {
        let (tx, _rx) = watch::channel(SectionState {
            data: fallback,
            phase: LoadPhase::Loading,
        });
        Self {
            inner: Arc::new(SectionLoaderInner {
                category,
                tx,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Category this loader serves.
    pub fn category(&self) -> Category {
        self.inner.category
    }

    /// Current snapshot of the section.
    pub fn state(&self) -> SectionState<T> {
        self.inner.tx.borrow().clone()
    }

    /// Currently displayed dataset.
    pub fn data(&self) -> T {
        self.inner.tx.borrow().data.clone()
    }

    /// Returns `true` while the loading placeholder should show.
    pub fn is_loading(&self) -> bool {
        !self.inner.tx.borrow().phase.is_settled()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SectionState<T>> {
        self.inner.tx.subscribe()
    }

    /// Captures the current generation for a fetch about to be issued.
    pub fn token(&self) -> LoadToken {
        LoadToken {
            generation: self.inner.generation.load(Ordering::Acquire),
        }
    }

    /// Marks the section as torn down: any fetch still in flight becomes
    /// stale and its result will be discarded.
    pub fn invalidate(&self) {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Applies a settled fetch result.
    ///
    /// Replaces the displayed dataset only if `fetched` carries content;
    /// either way the section settles. Returns `false` without touching any
    /// state when the token is stale or the section already settled.
    pub fn apply(&self, token: LoadToken, fetched: T) -> bool {
        if token.generation != self.inner.generation.load(Ordering::Acquire) {
            log::debug!(
                "discarding stale `{}` response (generation {})",
                self.inner.category,
                token.generation
            );
            return false;
        }
        if self.inner.tx.borrow().phase.is_settled() {
            log::debug!("`{}` already settled, ignoring apply", self.inner.category);
            return false;
        }

        self.inner.tx.send_modify(|state| {
            if fetched.has_content() {
                state.data = fetched;
            }
            state.phase = LoadPhase::Settled;
        });
        true
    }

    /// Issues exactly one fetch and applies its result.
    ///
    /// The fallback passed at construction stays displayed unless the fetch
    /// settles with content under a still-current generation.
    pub async fn load_with<F, Fut>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let token = self.token();
        let fetched = fetch().await;
        self.apply(token, fetched)
    }
}
