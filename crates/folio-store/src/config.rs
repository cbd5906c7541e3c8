//! Store connection configuration.
//!
//! Built once at startup and handed to
//! [`HttpBackend`](crate::backend::HttpBackend); never reloaded during the
//! page's lifetime.

use crate::error::{Result, StoreError};

/// Environment variable holding the store base URL.
pub const ENV_STORE_URL: &str = "FOLIO_STORE_URL";
/// Environment variable overriding the portfolio root path.
pub const ENV_STORE_ROOT: &str = "FOLIO_STORE_ROOT";
/// Environment variable holding the optional API credential.
pub const ENV_STORE_API_KEY: &str = "FOLIO_STORE_API_KEY";

/// Default root path under which all portfolio documents live.
pub const DEFAULT_ROOT: &str = "portfolio";

/// Configuration for the remote document store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base URL of the hosted store, without a trailing slash.
    pub base_url: String,
    /// Root path of the portfolio data (default `portfolio`).
    pub root: String,
    /// Optional bearer credential sent with every read.
    pub api_key: Option<String>,
}

impl StoreConfig {
    /// Creates a configuration for the given base URL with the default root.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            root: DEFAULT_ROOT.to_string(),
            api_key: None,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `FOLIO_STORE_URL` is required; `FOLIO_STORE_ROOT` and
    /// `FOLIO_STORE_API_KEY` are optional.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_STORE_URL)
            .map_err(|_| StoreError::config(format!("{ENV_STORE_URL} is not set")))?;
        let root = std::env::var(ENV_STORE_ROOT).unwrap_or_else(|_| DEFAULT_ROOT.to_string());
        let api_key = std::env::var(ENV_STORE_API_KEY).ok();

        let config = Self {
            base_url,
            root,
            api_key,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(StoreError::config("base_url must not be empty"));
        }
        if self.root.trim().is_empty() {
            return Err(StoreError::config("root must not be empty"));
        }
        Ok(())
    }

    /// Full request path for a category: `{root}/{category}`.
    pub fn category_path(&self, category: &str) -> String {
        format!(
            "{}/{}",
            self.root.trim_end_matches('/'),
            category.trim_start_matches('/')
        )
    }
}
