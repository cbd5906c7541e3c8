//! # folio-loader
//!
//! Fetch-with-fallback loaders for the portfolio page.
//!
//! Every content section starts on a compiled-in fallback dataset, issues
//! exactly one read through `folio-store`, replaces the fallback wholesale
//! when the response carries content, and otherwise keeps the fallback with
//! no user-visible error. This crate provides:
//!
//! - [`SectionLoader`] — the loader behavior, generic over dataset type and
//!   fetch operation, with a Loading→Settled phase and a stale-response guard
//! - [`fallback`] — the compiled-in datasets
//! - [`PortfolioPage`] — the seven sections assembled, with concurrent
//!   `load_all`
//!
//! Availability over freshness: the page never shows a broken or empty
//! section.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod fallback;
pub mod loader;
pub mod page;

pub use loader::{LoadPhase, LoadToken, SectionData, SectionLoader, SectionState};
pub use page::PortfolioPage;
