//! # folio-store
//!
//! Read client for the hosted portfolio document store.
//!
//! The store holds a `profile` document, a `contact` document, and five
//! sub-collections (`experiences`, `projects`, `skills`, `education`,
//! `achievements`) under a single fixed root. This crate provides:
//!
//! - [`PortfolioClient`] — one no-throw read operation per category plus a
//!   concurrent fetch-all aggregate
//! - [`DocumentBackend`] — transport seam with HTTP and in-memory
//!   implementations
//! - [`DiagnosticSink`] — structured channel for the failures the client
//!   absorbs
//!
//! Failures never propagate to callers: a failed read is indistinguishable
//! from an empty one, and the page degrades to its compiled-in fallback
//! content (see `folio-loader`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod client;
pub mod config;
pub mod diag;
pub mod error;

pub use backend::{DocumentBackend, HttpBackend, MemoryBackend};
pub use client::{PortfolioClient, PortfolioData};
pub use config::StoreConfig;
pub use diag::{DiagnosticSink, FetchFailure, LogSink, RecordingSink};
pub use error::{Result, StoreError};
