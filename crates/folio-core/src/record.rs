//! Portfolio record types.
//!
//! One struct per content category, matching the document shapes stored in
//! the remote portfolio root. Wire names are camelCase; collection records
//! carry an integer `order` used for ascending display sort plus the
//! server-assigned document id when one exists.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// The seven content categories served from the portfolio root.
///
/// `Profile` and `Contact` are singleton documents; the rest are
/// sub-collections ordered by their `order` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Singleton profile document.
    Profile,
    /// Work history entries.
    Experiences,
    /// Featured projects.
    Projects,
    /// Skill categories.
    Skills,
    /// Education entries.
    Education,
    /// Awards and recognitions.
    Achievements,
    /// Singleton contact document.
    Contact,
}

impl Category {
    /// All categories, in page order.
    pub const ALL: [Category; 7] = [
        Category::Profile,
        Category::Experiences,
        Category::Projects,
        Category::Skills,
        Category::Education,
        Category::Achievements,
        Category::Contact,
    ];

    /// Path segment of this category under the portfolio root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Profile => "profile",
            Category::Experiences => "experiences",
            Category::Projects => "projects",
            Category::Skills => "skills",
            Category::Education => "education",
            Category::Achievements => "achievements",
            Category::Contact => "contact",
        }
    }

    /// Returns `true` for the two singleton-document categories.
    pub fn is_singleton(&self) -> bool {
        matches!(self, Category::Profile | Category::Contact)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Records that carry a display `order` field.
pub trait Ordered {
    /// Ascending sort key for display.
    fn order(&self) -> i64;
}

/// Sorts records ascending by their `order` field.
///
/// The sort is stable: records with equal `order` values keep the order the
/// source returned them in.
pub fn sort_by_order<T: Ordered>(records: &mut [T]) {
    records.sort_by_key(Ordered::order);
}

// ============================================================================
// Record types
// ============================================================================

/// Singleton profile document: the hero/introduction content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Professional title line.
    pub title: String,
    /// Short introduction paragraph.
    pub description: String,
    /// Link to the hosted resume.
    pub resume_url: String,
}

/// One work-history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Server-assigned document id, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role title.
    pub title: String,
    /// Employer name.
    pub company: String,
    /// Office location.
    pub location: String,
    /// Human-readable employment period.
    pub period: String,
    /// Bullet-point accomplishments, in display order.
    pub achievements: Vec<String>,
    /// Ascending display order.
    pub order: i64,
}

impl Ordered for Experience {
    fn order(&self) -> i64 {
        self.order
    }
}

/// One featured project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned document id, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Project name.
    pub title: String,
    /// Short description (typically the owning organization).
    pub description: String,
    /// Technology stack badges, in display order.
    pub tech: Vec<String>,
    /// Bullet-point highlights, in display order.
    pub highlights: Vec<String>,
    /// Symbolic icon name, resolved through [`crate::icon::Glyph`].
    pub icon: String,
    /// Ascending display order.
    pub order: i64,
}

impl Ordered for Project {
    fn order(&self) -> i64 {
        self.order
    }
}

/// One skill category with its skill badges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Server-assigned document id, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Category heading.
    pub title: String,
    /// Symbolic icon name, resolved through [`crate::icon::Glyph`].
    pub icon: String,
    /// Skill names, in display order.
    pub skills: Vec<String>,
    /// Ascending display order.
    pub order: i64,
}

impl Ordered for SkillCategory {
    fn order(&self) -> i64 {
        self.order
    }
}

/// One education entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Server-assigned document id, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Degree awarded.
    pub degree: String,
    /// Field of study.
    pub field: String,
    /// Awarding institution.
    pub institution: String,
    /// Human-readable study period.
    pub period: String,
    /// Grade, as displayed.
    pub cgpa: String,
    /// Ascending display order.
    pub order: i64,
}

impl Ordered for Education {
    fn order(&self) -> i64 {
        self.order
    }
}

/// One award or recognition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Server-assigned document id, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Symbolic icon name, resolved through [`crate::icon::Glyph`].
    pub icon: String,
    /// Award title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Awarding organization.
    pub organization: String,
    /// Human-readable award date.
    pub date: String,
    /// Accent gradient class for the card.
    pub color: String,
    /// Ascending display order.
    pub order: i64,
}

impl Ordered for Achievement {
    fn order(&self) -> i64 {
        self.order
    }
}

/// One row of the contact grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Symbolic icon name, resolved through [`crate::icon::Glyph`].
    pub icon: String,
    /// Row label (e.g. "Email").
    pub label: String,
    /// Displayed value.
    pub value: String,
    /// Optional link target; plain text when null or absent.
    #[serde(default)]
    pub href: Option<String>,
}

/// One social-profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Symbolic icon name, resolved through [`crate::icon::Glyph`].
    pub icon: String,
    /// Link label (e.g. "GitHub").
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Singleton contact document: contact rows plus social links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact rows, in display order.
    pub contact_info: Vec<ContactInfo>,
    /// Social links, in display order.
    pub social_links: Vec<SocialLink>,
}
