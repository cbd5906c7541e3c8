//! Page assembly: one loader per content section.
//!
//! Mirrors the page composition: hero/profile, experience, projects, skills,
//! education, achievements, contact. Each section owns its loader and can
//! succeed or fail without affecting the others; `load_all` only makes the
//! seven independent reads start together.

use folio_core::Category;
use folio_core::record::{
    Achievement, Contact, Education, Experience, Profile, Project, SkillCategory,
};
use folio_store::{PortfolioClient, PortfolioData};

use crate::fallback;
use crate::loader::SectionLoader;

/// All section loaders of the portfolio page, pre-seeded with the
/// compiled-in fallback datasets.
#[derive(Clone)]
pub struct PortfolioPage {
    /// Hero/profile section.
    pub profile: SectionLoader<Option<Profile>>,
    /// Work-history section.
    pub experiences: SectionLoader<Vec<Experience>>,
    /// Featured-projects section.
    pub projects: SectionLoader<Vec<Project>>,
    /// Skills section.
    pub skills: SectionLoader<Vec<SkillCategory>>,
    /// Education section.
    pub education: SectionLoader<Vec<Education>>,
    /// Achievements section.
    pub achievements: SectionLoader<Vec<Achievement>>,
    /// Contact section.
    pub contact: SectionLoader<Option<Contact>>,
}

impl PortfolioPage {
    /// Creates the page with every section in `Loading`, displaying its
    /// fallback dataset.
    pub fn new() -> Self {
        Self {
            profile: SectionLoader::new(Category::Profile, Some(fallback::PROFILE.clone())),
            experiences: SectionLoader::new(Category::Experiences, fallback::EXPERIENCES.clone()),
            projects: SectionLoader::new(Category::Projects, fallback::PROJECTS.clone()),
            skills: SectionLoader::new(Category::Skills, fallback::SKILLS.clone()),
            education: SectionLoader::new(Category::Education, fallback::EDUCATION.clone()),
            achievements: SectionLoader::new(
                Category::Achievements,
                fallback::ACHIEVEMENTS.clone(),
            ),
            contact: SectionLoader::new(Category::Contact, Some(fallback::CONTACT.clone())),
        }
    }

    /// Drives every section's single fetch concurrently and returns when
    /// all have settled.
    ///
    /// Each loader still awaits only its own category read; a failing
    /// category settles on its fallback while the others carry fetched data.
    pub async fn load_all(&self, client: &PortfolioClient) {
        tokio::join!(
            self.profile.load_with(|| client.profile()),
            self.experiences.load_with(|| client.experiences()),
            self.projects.load_with(|| client.projects()),
            self.skills.load_with(|| client.skills()),
            self.education.load_with(|| client.education()),
            self.achievements.load_with(|| client.achievements()),
            self.contact.load_with(|| client.contact()),
        );
    }

    /// Returns `true` while any section still shows its loading placeholder.
    pub fn is_loading(&self) -> bool {
        self.profile.is_loading()
            || self.experiences.is_loading()
            || self.projects.is_loading()
            || self.skills.is_loading()
            || self.education.is_loading()
            || self.achievements.is_loading()
            || self.contact.is_loading()
    }

    /// Marks every section as torn down; in-flight responses are discarded.
    pub fn invalidate(&self) {
        self.profile.invalidate();
        self.experiences.invalidate();
        self.projects.invalidate();
        self.skills.invalidate();
        self.education.invalidate();
        self.achievements.invalidate();
        self.contact.invalidate();
    }

    /// Snapshot of the currently displayed datasets across all sections.
    pub fn snapshot(&self) -> PortfolioData {
        PortfolioData {
            profile: self.profile.data(),
            experiences: self.experiences.data(),
            projects: self.projects.data(),
            skills: self.skills.data(),
            education: self.education.data(),
            achievements: self.achievements.data(),
            contact: self.contact.data(),
        }
    }
}

impl Default for PortfolioPage {
    fn default() -> Self {
        Self::new()
    }
}
