//! Error types for the store client.
//!
//! These errors circulate only inside the crate: every public
//! [`PortfolioClient`](crate::PortfolioClient) operation absorbs them into
//! the empty/absent result and a diagnostic event.

/// Errors that can occur while reading from the document store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("store returned HTTP {status} for `{path}`")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request path that failed.
        path: String,
    },

    /// A document body could not be decoded into the expected record shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client was constructed from an unusable configuration.
    #[error("configuration error: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
    },
}

/// Convenience `Result` type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a status error for the given request path.
    pub fn status<S: Into<String>>(status: u16, path: S) -> Self {
        StoreError::Status {
            status,
            path: path.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        StoreError::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error is plausibly transient.
    ///
    /// Transport failures and 5xx statuses may clear on a later page load;
    /// decode and configuration errors are permanent until content or code
    /// changes.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Transport(_) => true,
            StoreError::Status { status, .. } => *status >= 500,
            StoreError::Decode(_) => false,
            StoreError::Config { .. } => false,
        }
    }
}
