//! Folio Core — shared record types and the icon symbol table.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`record`]: Portfolio record types, category names, and ordering
//! - [`icon`]: Symbolic icon names and their fixed glyph set

pub mod icon;
pub mod record;

// Re-export key types at crate root for convenience
pub use icon::Glyph;
pub use record::{
    Achievement, Category, Contact, ContactInfo, Education, Experience, Ordered, Profile, Project,
    SkillCategory, SocialLink, sort_by_order,
};
