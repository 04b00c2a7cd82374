//! Résumé entries

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub credential: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Front-End Dev Specialist",
        organization: "General Services Administration (GSA)",
        period: "Oct 2024 - Apr 2025",
        highlights: &[
            "Content management and content design support across GSA web properties",
            "Quality assurance reviews against web style guidelines",
            "Section 508 and W3C compliance for cross-browser and mobile interfaces",
        ],
        technologies: &["HTML", "CSS", "JavaScript", "Section 508", "Drupal"],
    },
    ExperienceEntry {
        role: "Senior Front End Web Developer",
        organization: "Academic Partnerships",
        period: "Oct 2018 - May 2024",
        highlights: &[
            "Custom WordPress sites for multiple higher education brands",
            "Migrated legacy ASP.NET and static sites to WordPress",
            "SASS-based design system shared across multi-site deployments",
            "A/B testing and data-driven conversion optimization",
        ],
        technologies: &["WordPress", "C#", "JavaScript", "PHP", "Git"],
    },
    ExperienceEntry {
        role: "Front End Web Developer",
        organization: "Jacober Creative",
        period: "Jan 2010 - Aug 2018",
        highlights: &[
            "Converted Photoshop designs into precise HTML and CSS",
            "CMS integration and staff training",
            "Weekly email campaigns for local businesses",
        ],
        technologies: &["HTML", "CSS", "Photoshop", "CMS Integration"],
    },
];

const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        credential: "Trusted Tester Certification",
        institution: "U.S. Department of Homeland Security",
        period: "Dec 2024",
    },
    EducationEntry {
        credential: "Digital Marketing",
        institution: "Miami Institute of Art and Design",
        period: "Oct 2005 - Jan 2007",
    },
];

/// Work history, most recent first
pub fn experience() -> &'static [ExperienceEntry] {
    EXPERIENCE
}

pub fn education() -> &'static [EducationEntry] {
    EDUCATION
}
