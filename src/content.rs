use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Harsh Koundal";
pub const ALIAS: &str = "CodeRage Harsh";
pub const ROLE: &str = "Full Stack MERN Developer & Creative Technologist";
pub const EMAIL: &str = "aharsh3039@gmail.com";

/// Scroll offset (px) after which the header gets a solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Distance (px) from the top of the viewport used to pick the active section.
pub const NAV_PROBE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Experience => "#experience",
            Self::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

/// First section whose vertical bounds contain the probe line.
pub fn active_section<I>(bounds: I, probe: f64) -> Option<Section>
where
    I: IntoIterator<Item = (Section, f64, f64)>,
{
    bounds
        .into_iter()
        .find(|(_, top, bottom)| *top <= probe && *bottom >= probe)
        .map(|(section, _, _)| section)
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React.js", level: 95 },
    Skill { name: "Node.js", level: 90 },
    Skill { name: "MongoDB", level: 85 },
    Skill { name: "JavaScript", level: 96 },
    Skill { name: "Express.js", level: 88 },
    Skill { name: "Three.js", level: 80 },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "StudyVault",
        description: "A smart learning platform where users can upload, organize, and share educational materials securely. Includes real-time document previews, category filters, and user profiles.",
        image: "https://images.unsplash.com/photo-1581090700227-1e37b190418e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        tech: &["React", "Node.js", "MongoDB", "Express", "Tailwind CSS"],
        github: "https://github.com/Harsh-Koundal/studyvault",
        demo: Some("https://studyvault-2.onrender.com/"),
    },
    Project {
        title: "NerathiX digital agency",
        description: "A modern website for a digital agency showcasing services, portfolio, team members, and client testimonials with smooth animations and responsive design.",
        image: "https://images.unsplash.com/photo-1629904853716-f0bc54eea481?auto=format&fit=crop&q=80&w=2070",
        tech: &["React", "Node.js", "Tailwind CSS", "MongoDB", "Express"],
        github: "https://github.com/Harsh-Koundal",
        demo: Some("https://nerathix.onrender.com/"),
    },
    Project {
        title: "Voting System",
        description: "A secure online voting platform allowing users to cast votes, view live results, and prevent duplicate submissions using authentication and database validation.",
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        tech: &["React", "Node.js", "Tailwind CSS", "MongoDB", "Express"],
        github: "https://github.com/Harsh-Koundal/voting-system",
        demo: None,
    },
    Project {
        title: "Recipe Finder",
        description: "A web app that helps users discover recipes based on ingredients they have. Includes API integration, filtering by cuisine, and responsive card-based design.",
        image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        tech: &["React", "API Integration", "CSS3", "JavaScript"],
        github: "https://github.com/Harsh-Koundal/recipe-finder",
        demo: None,
    },
    Project {
        title: "Expense Tracker",
        description: "A smart budgeting tool that tracks daily expenses, visualizes spending trends, and helps manage finances efficiently with local storage support.",
        image: "https://images.unsplash.com/photo-1560221328-12fe60f83ab8?auto=format&fit=crop&q=80&w=1174",
        tech: &["React", "Chart.js", "Local Storage", "CSS Modules"],
        github: "https://github.com/Harsh-Koundal/expense-tracker",
        demo: None,
    },
];

pub struct Role {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const ROLES: &[Role] = &[
    Role {
        year: "2024",
        title: "Full Stack MERN Developer",
        company: "Freelance",
        description: "Building modern web applications with React, Node.js, and MongoDB. Focus on creating responsive, performant, and user-friendly experiences.",
        icon: "💻",
    },
    Role {
        year: "2023",
        title: "Frontend Developer",
        company: "Tech Startup",
        description: "Developed interactive UIs using React and implemented complex animations with Three.js and Framer Motion.",
        icon: "🎨",
    },
    Role {
        year: "2022",
        title: "Backend Developer",
        company: "Digital Agency",
        description: "Created RESTful APIs, managed databases, and implemented authentication systems using Node.js and Express.",
        icon: "🗄️",
    },
];

pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "React.js", icon: "devicon-react-original", color: "#61DAFB" },
    Technology { name: "Node.js", icon: "devicon-nodejs-plain", color: "#339933" },
    Technology { name: "MongoDB", icon: "devicon-mongodb-plain", color: "#47A248" },
    Technology { name: "Express", icon: "devicon-express-original", color: "#000000" },
    Technology { name: "Three.js", icon: "devicon-threejs-original", color: "#000000" },
    Technology { name: "TypeScript", icon: "devicon-typescript-plain", color: "#3178C6" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Harsh-Koundal",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        label: "Email",
        href: "mailto:aharsh3039@gmail.com",
        icon: "extra-email",
    },
];

/// Year stamped by the build script, so server and browser render the same
/// copyright line.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_are_unique_anchors() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::ALL.len());
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn test_active_section_uses_probe_line() {
        let bounds = [
            (Section::Home, -900.0, -100.0),
            (Section::About, -100.0, 700.0),
            (Section::Projects, 700.0, 1500.0),
        ];
        assert_eq!(active_section(bounds, NAV_PROBE), Some(Section::About));
        assert_eq!(active_section(bounds, 700.0), Some(Section::About));
        assert_eq!(active_section(bounds, 800.0), Some(Section::Projects));
        assert_eq!(active_section(bounds, 5000.0), None);
        assert_eq!(active_section([], NAV_PROBE), None);
    }

    #[test]
    fn test_static_content_is_well_formed() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
        assert!(PROJECTS
            .iter()
            .filter_map(|p| p.demo)
            .all(|d| d.starts_with("https://")));
        assert!(TECHNOLOGIES.iter().all(|t| t.color.starts_with('#')));
    }

    #[test]
    fn test_copyright_year_comes_from_build() {
        assert!(copyright_year() >= 2024);
    }
}
