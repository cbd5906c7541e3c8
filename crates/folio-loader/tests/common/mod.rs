//! Common test utilities for the loader integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::watch;

use folio_store::error::Result as StoreResult;
use folio_store::{DocumentBackend, MemoryBackend, PortfolioClient, RecordingSink};

/// Test harness: a client over canned documents plus a recording
/// diagnostics sink.
pub struct TestHarness {
    /// Client under test.
    pub client: PortfolioClient,
    /// Captures every failure the client absorbs.
    pub sink: Arc<RecordingSink>,
}

impl TestHarness {
    /// Creates a harness over the given backend.
    pub fn new(backend: MemoryBackend) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    /// Creates a harness over an arbitrary backend implementation.
    pub fn with_backend(backend: Arc<dyn DocumentBackend>) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let client = PortfolioClient::with_diagnostics(backend, sink.clone());
        Self { client, sink }
    }

    /// Harness over an empty store: every document absent, every collection
    /// empty.
    pub fn empty() -> Self {
        Self::new(MemoryBackend::new())
    }
}

/// Backend that delays every read until a gate opens, so tests can tear a
/// section down while its fetch is still in flight.
pub struct GatedBackend {
    inner: MemoryBackend,
    gate: watch::Receiver<bool>,
}

impl GatedBackend {
    /// Wraps `inner`; reads block until the paired sender publishes `true`.
    pub fn new(inner: MemoryBackend) -> (watch::Sender<bool>, Self) {
        let (tx, gate) = watch::channel(false);
        (tx, Self { inner, gate })
    }

    async fn wait_for_gate(&self) {
        let mut gate = self.gate.clone();
        let _ = gate.wait_for(|open| *open).await;
    }
}

#[async_trait]
impl DocumentBackend for GatedBackend {
    async fn fetch_document(&self, path: &str) -> StoreResult<Option<Value>> {
        self.wait_for_gate().await;
        self.inner.fetch_document(path).await
    }

    async fn fetch_collection(&self, path: &str, order_by: &str) -> StoreResult<Vec<Value>> {
        self.wait_for_gate().await;
        self.inner.fetch_collection(path, order_by).await
    }

    fn name(&self) -> &str {
        "gated"
    }
}

/// Canned education document.
pub fn education_doc(degree: &str, order: i64) -> Value {
    json!({
        "degree": degree,
        "field": "Software Engineering",
        "institution": "BITS Pilani, IND",
        "period": "2022 – 2024",
        "cgpa": "8.40",
        "order": order,
    })
}

/// Canned achievement document.
pub fn achievement_doc(title: &str, order: i64) -> Value {
    json!({
        "icon": "Trophy",
        "title": title,
        "description": "Recognition",
        "organization": "Walmart Global Tech",
        "date": "Aug '25",
        "color": "from-blue-600 to-pink-600",
        "order": order,
    })
}

/// Canned experience document.
pub fn experience_doc(title: &str, order: i64) -> Value {
    json!({
        "title": title,
        "company": "Walmart Global Tech",
        "location": "Chennai, IND",
        "period": "Feb 2025 – Present",
        "achievements": ["shipped it"],
        "order": order,
    })
}

/// Canned contact document.
pub fn contact_doc() -> Value {
    json!({
        "contactInfo": [
            {"icon": "Mail", "label": "Email", "value": "someone@example.com", "href": "mailto:someone@example.com"}
        ],
        "socialLinks": [
            {"icon": "Github", "label": "GitHub", "href": "https://github.com/someone"}
        ],
    })
}
