//! Project case studies

use serde::{Deserialize, Serialize};

/// Project category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    FitnessWellness,
    Education,
    LocalBusiness,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::FitnessWellness => "Fitness & Wellness",
            Category::Education => "Education",
            Category::LocalBusiness => "Local Business",
        }
    }
}

/// Which part of the hero image stays in frame when it is cropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Crop {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Per-project hero image adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTreatment {
    pub crop: Crop,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for ImageTreatment {
    fn default() -> Self {
        Self {
            crop: Crop::Center,
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

impl ImageTreatment {
    const fn new(crop: Crop, brightness: f32, contrast: f32) -> Self {
        Self {
            crop,
            brightness,
            contrast,
        }
    }

    /// Whether the hero should be rendered dimmed behind its caption
    pub fn is_dimmed(&self) -> bool {
        self.brightness < 0.9
    }
}

/// A portfolio project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub tech: Vec<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub treatment: ImageTreatment,
}

struct RawProject {
    id: u32,
    title: &'static str,
    category: Category,
    description: &'static str,
    tech: &'static [&'static str],
    url: Option<&'static str>,
    image: Option<&'static str>,
    treatment: ImageTreatment,
}

const RAW_PROJECTS: &[RawProject] = &[
    RawProject {
        id: 1,
        title: "Lamar University",
        category: Category::Education,
        description: "Complete digital transformation of university degree program pages with advanced search \
capabilities, interactive program pathways, and seamless enrollment integration.",
        tech: &["WordPress", "PHP", "JavaScript", "CSS", "MySQL"],
        url: Some("degree.lamar.edu"),
        image: Some("assets/lamar-hero.png"),
        treatment: ImageTreatment::new(Crop::Top, 0.8, 1.1),
    },
    RawProject {
        id: 2,
        title: "Vixen Workout",
        category: Category::FitnessWellness,
        description: "Fitness platform combining immersive workout experiences with modern web technologies. \
Features dynamic motion design and community engagement tools.",
        tech: &["React", "Node.js", "WebGL", "Motion Design"],
        url: Some("vixenworkout.com"),
        image: Some("assets/vixen-parallax-hero.png"),
        treatment: ImageTreatment::new(Crop::Center, 0.85, 1.05),
    },
    RawProject {
        id: 3,
        title: "Arkansas State University",
        category: Category::Education,
        description: "University website redesign focusing on user experience and academic program \
presentation. Implemented a comprehensive content management system.",
        tech: &["WordPress", "PHP", "JavaScript", "CSS"],
        url: Some("https://degree.astate.edu"),
        image: Some("assets/arkansas-state-hero.png"),
        treatment: ImageTreatment::new(Crop::Top, 0.9, 1.0),
    },
    RawProject {
        id: 4,
        title: "Texas A&M International",
        category: Category::Education,
        description: "University platform focusing on online education programs and student engagement. \
Features an advanced program finder and application management system.",
        tech: &["WordPress", "PHP", "JavaScript", "CSS"],
        url: Some("online.tamiu.edu"),
        image: Some("assets/tamiu-hero.png"),
        treatment: ImageTreatment::new(Crop::Center, 0.8, 1.1),
    },
    RawProject {
        id: 5,
        title: "Exodus Construction",
        category: Category::LocalBusiness,
        description: "Construction company website featuring dynamic project galleries, service portfolios, \
client testimonials, and responsive design optimized for lead generation.",
        tech: &["PHP", "JavaScript", "CSS", "MySQL"],
        url: Some("exodusconstruction.net"),
        image: Some("assets/exodus-hero.png"),
        treatment: ImageTreatment::new(Crop::Bottom, 0.85, 1.1),
    },
    RawProject {
        id: 6,
        title: "Pizza Rox",
        category: Category::LocalBusiness,
        description: "Restaurant website with integrated online ordering, interactive menu management, \
customer engagement features, and mobile-optimized design.",
        tech: &["WordPress", "PHP", "JavaScript", "CSS"],
        url: Some("pizzarox.com"),
        image: Some("assets/pizza-rox-hero.png"),
        treatment: ImageTreatment::new(Crop::Center, 0.95, 1.0),
    },
    RawProject {
        id: 7,
        title: "Artesano",
        category: Category::LocalBusiness,
        description: "Artisan marketplace showcasing handcrafted goods with integrated e-commerce, artist \
portfolio management, and immersive product galleries.",
        tech: &["Shopify", "Liquid", "JavaScript", "CSS", "Shopify API"],
        url: Some("https://artesano.net"),
        image: Some("assets/artesano-hero.png"),
        treatment: ImageTreatment::new(Crop::Center, 0.9, 1.05),
    },
    RawProject {
        id: 8,
        title: "UTA",
        category: Category::Education,
        description: "Online education platform for the University of Texas at Arlington, featuring academic \
partnerships, program discovery tools, and streamlined enrollment pathways for distance learners.",
        tech: &["WordPress", "PHP", "JavaScript", "CSS", "Academic CRM"],
        url: Some("academicpartnerships.uta.edu"),
        image: Some("assets/uta-hero.png"),
        treatment: ImageTreatment::new(Crop::Top, 0.85, 1.1),
    },
];

impl From<&RawProject> for Project {
    fn from(raw: &RawProject) -> Self {
        Self {
            id: raw.id,
            title: raw.title.to_string(),
            category: raw.category,
            description: raw.description.to_string(),
            tech: raw.tech.iter().map(|t| t.to_string()).collect(),
            url: raw.url.map(str::to_string),
            image: raw.image.map(str::to_string),
            treatment: raw.treatment,
        }
    }
}

/// All projects, sorted by category display order then alphabetically by title
pub fn all_projects() -> Vec<Project> {
    let mut projects: Vec<Project> = RAW_PROJECTS.iter().map(Project::from).collect();
    projects.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
    projects
}

/// The first `count` projects in display order, for the home portfolio section
pub fn featured_projects(count: usize) -> Vec<Project> {
    all_projects().into_iter().take(count).collect()
}

/// Project URL with an `https://` scheme added when the record omits one
pub fn project_url(project: &Project) -> Option<String> {
    project.url.as_ref().map(|url| {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.clone()
        } else {
            format!("https://{}", url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_sorted_by_category_then_title() {
        let projects = all_projects();
        assert_eq!(projects.len(), RAW_PROJECTS.len());
        assert_eq!(projects[0].title, "Vixen Workout");
        assert_eq!(projects[1].title, "Arkansas State University");
        assert_eq!(projects.last().map(|p| p.title.as_str()), Some("Pizza Rox"));
        for pair in projects.windows(2) {
            assert!(pair[0].category <= pair[1].category);
        }
    }

    #[test]
    fn test_project_ids_are_unique() {
        let mut ids: Vec<u32> = all_projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RAW_PROJECTS.len());
    }

    #[test]
    fn test_project_url_adds_scheme() {
        let projects = all_projects();
        let lamar = projects.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(project_url(lamar).as_deref(), Some("https://degree.lamar.edu"));
        let astate = projects.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(project_url(astate).as_deref(), Some("https://degree.astate.edu"));
    }
}
