//! Portfolio client: one no-throw read operation per content category.
//!
//! Every public operation absorbs failures entirely: transport, status, and
//! decode errors are routed to the diagnostics sink and the caller receives
//! an empty collection (or `None` for the two singletons). Callers therefore
//! cannot distinguish "legitimately empty" from "fetch failed" — that is the
//! contract, and the loader layer answers both with fallback content.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use folio_core::record::{
    Achievement, Category, Contact, Education, Experience, Ordered, Profile, Project,
    SkillCategory, sort_by_order,
};

use crate::backend::{DocumentBackend, HttpBackend};
use crate::config::StoreConfig;
use crate::diag::{DiagnosticSink, FetchFailure, LogSink};
use crate::error::Result;

/// Field every collection document is ordered by.
const ORDER_FIELD: &str = "order";

/// All seven categories fetched at once (see [`PortfolioClient::fetch_all`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioData {
    /// Profile document, when present.
    pub profile: Option<Profile>,
    /// Work history, ordered ascending.
    pub experiences: Vec<Experience>,
    /// Featured projects, ordered ascending.
    pub projects: Vec<Project>,
    /// Skill categories, ordered ascending.
    pub skills: Vec<SkillCategory>,
    /// Education entries, ordered ascending.
    pub education: Vec<Education>,
    /// Achievements, ordered ascending.
    pub achievements: Vec<Achievement>,
    /// Contact document, when present.
    pub contact: Option<Contact>,
}

/// Read client for the portfolio document store.
///
/// Cheap to clone; the backend and diagnostics sink are shared.
#[derive(Clone)]
pub struct PortfolioClient {
    backend: Arc<dyn DocumentBackend>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl PortfolioClient {
    /// Creates a client over the given backend, logging absorbed failures.
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self::with_diagnostics(backend, Arc::new(LogSink))
    }

    /// Creates a client routing absorbed failures to a custom sink.
    pub fn with_diagnostics(
        backend: Arc<dyn DocumentBackend>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            backend,
            diagnostics,
        }
    }

    /// Connects to the hosted store described by `config`.
    pub fn connect(config: StoreConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpBackend::new(config)?)))
    }

    /// Fetches the profile document. `None` on absence or any failure.
    pub async fn profile(&self) -> Option<Profile> {
        self.singleton(Category::Profile).await
    }

    /// Fetches work history, ordered ascending. Empty on any failure.
    pub async fn experiences(&self) -> Vec<Experience> {
        self.collection(Category::Experiences).await
    }

    /// Fetches featured projects, ordered ascending. Empty on any failure.
    pub async fn projects(&self) -> Vec<Project> {
        self.collection(Category::Projects).await
    }

    /// Fetches skill categories, ordered ascending. Empty on any failure.
    pub async fn skills(&self) -> Vec<SkillCategory> {
        self.collection(Category::Skills).await
    }

    /// Fetches education entries, ordered ascending. Empty on any failure.
    pub async fn education(&self) -> Vec<Education> {
        self.collection(Category::Education).await
    }

    /// Fetches achievements, ordered ascending. Empty on any failure.
    pub async fn achievements(&self) -> Vec<Achievement> {
        self.collection(Category::Achievements).await
    }

    /// Fetches the contact document. `None` on absence or any failure.
    pub async fn contact(&self) -> Option<Contact> {
        self.singleton(Category::Contact).await
    }

    /// Issues all seven reads concurrently and resolves when all settle.
    ///
    /// Inherits the no-throw contract from its constituents: a category that
    /// fails simply comes back empty while the others carry their data.
    pub async fn fetch_all(&self) -> PortfolioData {
        let (profile, experiences, projects, skills, education, achievements, contact) = tokio::join!(
            self.profile(),
            self.experiences(),
            self.projects(),
            self.skills(),
            self.education(),
            self.achievements(),
            self.contact(),
        );

        PortfolioData {
            profile,
            experiences,
            projects,
            skills,
            education,
            achievements,
            contact,
        }
    }

    /// Root-relative path of a category: singletons live directly under the
    /// root, collections under its `data` document.
    fn path(category: Category) -> String {
        if category.is_singleton() {
            category.as_str().to_string()
        } else {
            format!("data/{category}")
        }
    }

    async fn singleton<T: DeserializeOwned>(&self, category: Category) -> Option<T> {
        match self.try_singleton(category).await {
            Ok(record) => {
                log::debug!(
                    "fetched `{category}` via {} (present: {})",
                    self.backend.name(),
                    record.is_some()
                );
                record
            }
            Err(error) => {
                self.diagnostics
                    .record(FetchFailure::from_error(category, &error));
                None
            }
        }
    }

    async fn collection<T: DeserializeOwned + Ordered>(&self, category: Category) -> Vec<T> {
        match self.try_collection(category).await {
            Ok(records) => {
                log::debug!(
                    "fetched {} `{category}` records via {}",
                    records.len(),
                    self.backend.name()
                );
                records
            }
            Err(error) => {
                self.diagnostics
                    .record(FetchFailure::from_error(category, &error));
                Vec::new()
            }
        }
    }

    async fn try_singleton<T: DeserializeOwned>(&self, category: Category) -> Result<Option<T>> {
        let document = self.backend.fetch_document(&Self::path(category)).await?;
        match document {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn try_collection<T: DeserializeOwned + Ordered>(
        &self,
        category: Category,
    ) -> Result<Vec<T>> {
        let documents = self
            .backend
            .fetch_collection(&Self::path(category), ORDER_FIELD)
            .await?;

        // One malformed document fails the whole read; the category then
        // falls back as a unit instead of rendering partially.
        let mut records = documents
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<T>, _>>()?;

        sort_by_order(&mut records);
        Ok(records)
    }
}
