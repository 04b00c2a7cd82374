//! Static portfolio content: project case studies, résumé and home sections.
//!
//! Everything here is data defined at build time. Per-project presentation
//! tweaks live on the [`Project`] record itself as an [`ImageTreatment`].

pub mod projects;
pub mod resume;

pub use projects::{all_projects, featured_projects, project_url, Category, Crop, ImageTreatment, Project};
pub use resume::{education, experience, EducationEntry, ExperienceEntry};

/// Sections of the home view, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Portfolio,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Portfolio, Section::Resume, Section::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Resume => "Résumé",
            Section::Contact => "Contact",
        }
    }

    /// Section bound to the number keys `1`..`4`
    pub fn from_digit(c: char) -> Option<Section> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Short biography shown in the About section
pub const ABOUT_TEXT: &str = "Front-end developer focused on accessible, high-performance sites for \
higher education, fitness brands and local businesses. Fifteen years of turning designs into \
maintainable, standards-compliant interfaces.";
