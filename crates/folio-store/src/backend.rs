//! Document backend trait and implementations.
//!
//! The backend abstracts over where portfolio documents come from:
//!
//! - [`HttpBackend`]: reads from the hosted document store over HTTPS
//! - [`MemoryBackend`]: canned documents for tests and offline runs
//!
//! Backends are fallible; the absorb-all-failures contract lives one layer
//! up in [`PortfolioClient`](crate::PortfolioClient).

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Abstract read access to the document store.
///
/// Paths are root-relative (`profile`, `data/experiences`); [`HttpBackend`]
/// prefixes the configured portfolio root. Implementations make no ordering
/// guarantees of their own beyond what the underlying store provides; the
/// client re-sorts decoded records to hold the display invariant.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Fetches a single document.
    ///
    /// Returns `Ok(None)` when the document does not exist; `Err` only for
    /// transport, status, or decode failures.
    async fn fetch_document(&self, path: &str) -> Result<Option<Value>>;

    /// Fetches every document in a collection, asking the store to order
    /// them ascending by `order_by`.
    async fn fetch_collection(&self, path: &str, order_by: &str) -> Result<Vec<Value>>;

    /// Backend name for diagnostics.
    fn name(&self) -> &str;
}

// ============================================================================
// HttpBackend
// ============================================================================

/// HTTPS backend against the hosted document store.
///
/// Documents live at `{base_url}/{root}/{path}`; collections take an `orderBy`
/// query parameter for server-side ascending sort. Timeouts are whatever
/// the underlying client defaults to; they are deliberately not configured.
pub struct HttpBackend {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpBackend {
    /// Creates a backend for the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.category_path(path)
        )
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }
        request
    }
}

#[async_trait]
impl DocumentBackend for HttpBackend {
    async fn fetch_document(&self, path: &str) -> Result<Option<Value>> {
        let response = self.request(&self.url(path)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::status(response.status().as_u16(), path));
        }

        let body: Value = response.json().await?;
        // The store serves `null` for a document that was deleted in place.
        if body.is_null() {
            return Ok(None);
        }
        Ok(Some(body))
    }

    async fn fetch_collection(&self, path: &str, order_by: &str) -> Result<Vec<Value>> {
        let response = self
            .request(&self.url(path))
            .query(&[("orderBy", order_by)])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(StoreError::status(response.status().as_u16(), path));
        }

        let body: Option<Vec<Value>> = response.json().await?;
        Ok(body.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "http"
    }
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory backend serving canned documents.
///
/// Collections are returned in insertion order — this backend does *not*
/// emulate server-side `orderBy`, so tests exercise the client's own sort.
/// Failures can be injected per path to drive the absorb-and-fallback
/// behavior without a network.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: HashMap<String, Value>,
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<String, u16>,
}

impl MemoryBackend {
    /// Creates an empty backend: every document absent, every collection
    /// empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a singleton document at the given path.
    pub fn with_document<S: Into<String>>(mut self, path: S, document: Value) -> Self {
        self.documents.insert(path.into(), document);
        self
    }

    /// Adds a collection at the given path, served in insertion order.
    pub fn with_collection<S: Into<String>>(mut self, path: S, documents: Vec<Value>) -> Self {
        self.collections.insert(path.into(), documents);
        self
    }

    /// Makes every read of the given path fail with HTTP 500.
    pub fn with_failure<S: Into<String>>(self, path: S) -> Self {
        self.with_failure_status(path, 500)
    }

    /// Makes every read of the given path fail with the given status.
    pub fn with_failure_status<S: Into<String>>(mut self, path: S, status: u16) -> Self {
        self.failures.insert(path.into(), status);
        self
    }

    fn check_failure(&self, path: &str) -> Result<()> {
        match self.failures.get(path) {
            Some(status) => Err(StoreError::status(*status, path)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn fetch_document(&self, path: &str) -> Result<Option<Value>> {
        self.check_failure(path)?;
        Ok(self.documents.get(path).cloned())
    }

    async fn fetch_collection(&self, path: &str, _order_by: &str) -> Result<Vec<Value>> {
        self.check_failure(path)?;
        Ok(self.collections.get(path).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_backend_serves_canned_documents() {
        let backend = MemoryBackend::new()
            .with_document("profile", json!({"name": "Vishal"}))
            .with_collection("data/skills", vec![json!({"order": 1})]);

        let doc = backend.fetch_document("profile").await.unwrap();
        assert_eq!(doc.unwrap()["name"], "Vishal");

        let rows = backend
            .fetch_collection("data/skills", "order")
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn memory_backend_absent_paths_are_empty_not_errors() {
        let backend = MemoryBackend::new();
        assert!(backend.fetch_document("profile").await.unwrap().is_none());
        assert!(backend
            .fetch_collection("data/projects", "order")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn memory_backend_injected_failures_surface_as_status_errors() {
        let backend = MemoryBackend::new().with_failure_status("contact", 403);
        let err = backend.fetch_document("contact").await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 403, .. }));
    }

    #[test]
    fn http_backend_rejects_empty_base_url() {
        assert!(HttpBackend::new(StoreConfig::new("")).is_err());
    }

    #[test]
    fn http_backend_prefixes_the_portfolio_root() {
        let backend = HttpBackend::new(StoreConfig::new("https://store.example.com/")).unwrap();
        assert_eq!(
            backend.url("/profile"),
            "https://store.example.com/portfolio/profile"
        );
        assert_eq!(
            backend.url("data/experiences"),
            "https://store.example.com/portfolio/data/experiences"
        );
    }
}
