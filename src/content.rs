//! Static copy shown on the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Code,
    Sparkles,
    Star,
    Rocket,
    Pointer,
    Github,
    Linkedin,
    Mail,
    Phone,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Zap => "⚡",
            Icon::Code => "💻",
            Icon::Sparkles => "✨",
            Icon::Star => "⭐",
            Icon::Rocket => "🚀",
            Icon::Pointer => "🖱️",
            Icon::Github => "🐙",
            Icon::Linkedin => "💼",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
        }
    }
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        skills: &["JavaScript", "Java", "HTML", "CSS", "EJS"],
    },
    SkillCategory {
        name: "Frameworks & Libraries",
        skills: &["Node.js", "Express", "React.js", "Next.js", "Bootstrap", "Axios", "Leaflet"],
    },
    SkillCategory {
        name: "Databases & Caching",
        skills: &["MongoDB (Atlas)", "Redis", "SQL", "Google Sheets API"],
    },
    SkillCategory {
        name: "Backend & Auth",
        skills: &["REST APIs", "JWT Authentication", "Session Management", "Role-based Access Control"],
    },
    SkillCategory {
        name: "Core CS Concepts",
        skills: &["Data Structures & Algorithms", "Microservices", "Asynchronous Programming"],
    },
    SkillCategory {
        name: "Deployment & Tools",
        skills: &["Railway", "Render", "Hostinger", "Git", "GitHub", "GitHub Actions", "Postman", "VS Code"],
    },
    SkillCategory {
        name: "DevOps Tools",
        skills: &["Docker", "Kubernetes", "Jenkins", "Ansible", "AWS", "Linux", "Shell Scripting"],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &["Problem Solving", "Communication", "Team Collaboration", "Fast Learning"],
    },
];

/// Gradient used for a project's status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub from: &'static str,
    pub to: &'static str,
}

impl Theme {
    pub fn gradient(&self) -> String {
        format!("background: linear-gradient(90deg, {}, {});", self.from, self.to)
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: &'static str,
    pub theme: Theme,
    pub icon: Icon,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GrowthAffinity - MLM System",
        description: "Live project with binary tree placement, BV calculation, and reward system. Features microservices architecture, API Gateway, Redis caching, and secure JWT authentication.",
        tech: &["Node.js", "Express", "MongoDB", "Redis", "JWT"],
        status: "Live Project",
        theme: Theme { from: "#f97316", to: "#eab308" },
        icon: Icon::Zap,
    },
    Project {
        title: "Zoom-Style Video Calling App",
        description: "Real-time video calling application with WebRTC signaling, dynamic room features, and glassmorphism UI design with authentication pages.",
        tech: &["React.js", "Node.js", "WebRTC", "Socket.IO", "MySQL"],
        status: "Completed",
        theme: Theme { from: "#3b82f6", to: "#a855f7" },
        icon: Icon::Code,
    },
    Project {
        title: "E-commerce App with RBAC",
        description: "Full-stack e-commerce platform with role-based access control for customers and admins. Deployed with complete DevOps pipeline.",
        tech: &["MERN Stack", "Prisma", "Docker", "Kubernetes"],
        status: "Completed",
        theme: Theme { from: "#22c55e", to: "#14b8a6" },
        icon: Icon::Sparkles,
    },
    Project {
        title: "Wanderlust (Airbnb Replica)",
        description: "Property booking platform with interactive maps for property search, Cloudinary image management, and session-based authentication.",
        tech: &["Node.js", "Express", "EJS", "Bootstrap", "Leaflet"],
        status: "Completed",
        theme: Theme { from: "#ec4899", to: "#ef4444" },
        icon: Icon::Star,
    },
    Project {
        title: "CI/CD Pipeline with Docker & Kubernetes",
        description: "Automated build and deployment pipeline with scalable cloud infrastructure, featuring containerization and orchestration.",
        tech: &["Docker", "Kubernetes", "Jenkins", "AWS"],
        status: "Completed",
        theme: Theme { from: "#6366f1", to: "#3b82f6" },
        icon: Icon::Rocket,
    },
    Project {
        title: "Portfolio Website",
        description: "Responsive portfolio website with smooth animations, built using modern web technologies and deployed with optimized performance.",
        tech: &["Next.js", "TailwindCSS", "Framer Motion"],
        status: "Live",
        theme: Theme { from: "#eab308", to: "#f97316" },
        icon: Icon::Pointer,
    },
];

pub struct Education {
    pub qualification: &'static str,
    pub institution: &'static str,
    pub score: &'static str,
    pub score_color: &'static str,
    /// Degree still in progress: (label, value) shown next to the score.
    pub expected: Option<(&'static str, &'static str)>,
}

pub const EDUCATION: &[Education] = &[
    Education {
        qualification: "Bachelor of Computer Applications (BCA)",
        institution: "Patna College (Patna University), Bihar",
        score: "8.89/10",
        score_color: "#f97316",
        expected: Some(("Expected Graduation", "May 2026")),
    },
    Education {
        qualification: "Higher Secondary Education (12th)",
        institution: "ISC 2023",
        score: "79.80%",
        score_color: "#22c55e",
        expected: None,
    },
    Education {
        qualification: "Secondary Education (10th)",
        institution: "BSEB 2021",
        score: "90.80%",
        score_color: "#3b82f6",
        expected: None,
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "6+", label: "Projects", color: "#f97316" },
    Stat { value: "8.89", label: "SGPA", color: "#eab308" },
    Stat { value: "2026", label: "Graduate", color: "#22c55e" },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl ContactChannel {
    /// Web links open in a new tab; `mailto:` and `tel:` open in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        subtitle: "aman9534577@gmail.com",
        href: "mailto:aman9534577@gmail.com",
        icon: Icon::Mail,
    },
    ContactChannel {
        title: "Phone",
        subtitle: "+91-7858925358",
        href: "tel:+917858925358",
        icon: Icon::Phone,
    },
    ContactChannel {
        title: "LinkedIn",
        subtitle: "md-aman-7941a0355",
        href: "https://linkedin.com/in/md-aman-7941a0355",
        icon: Icon::Linkedin,
    },
    ContactChannel {
        title: "GitHub",
        subtitle: "Md-Aman45",
        href: "https://github.com/Md-Aman45",
        icon: Icon::Github,
    },
];

/// Channels shown as floating buttons under the hero image.
pub fn social_links() -> impl Iterator<Item = &'static ContactChannel> {
    ["GitHub", "LinkedIn", "Email"]
        .into_iter()
        .filter_map(|title| CONTACT_CHANNELS.iter().find(|c| c.title == title))
}

pub const ABOUT: &[&str] = &[
    "Enthusiastic software engineering student pursuing BCA at Patna University (expected May 2026) with a strong academic record of 8.89/10 SGPA.",
    "Passionate about backend development and scalable systems, I bring hands-on experience in building robust web applications and automating deployments. My journey spans from achieving 90.80% in 10th grade to 79.80% in 12th grade, culminating in my current focus on cutting-edge development technologies.",
    "I thrive on solving complex problems and creating digital solutions that make a real impact. Whether it's architecting microservices, implementing DevOps pipelines, or crafting intuitive user interfaces, I'm always eager to push the boundaries of what's possible.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(EDUCATION.len(), 3);
        assert!(SKILLS.iter().all(|c| !c.skills.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn only_web_links_are_external() {
        let external: Vec<_> = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.title)
            .collect();
        assert_eq!(external, ["LinkedIn", "GitHub"]);
    }

    #[test]
    fn social_links_resolve_in_order() {
        let titles: Vec<_> = social_links().map(|c| c.title).collect();
        assert_eq!(titles, ["GitHub", "LinkedIn", "Email"]);
    }
}
