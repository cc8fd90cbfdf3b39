use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Database,
    Layers,
    Wrench,
    Users,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Database => "⛁",
            Icon::Layers => "◫",
            Icon::Wrench => "⚙",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    WebApp,
    Blockchain,
    Tool,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::Blockchain => "Blockchain",
            ProjectCategory::Tool => "Tool",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: SkillCategory,
    pub icon: Icon,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub logo: &'static str,
}

#[derive(Debug, Clone)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub major: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
    pub honors: &'static [&'static str],
    pub coursework: &'static [&'static str],
    pub logo: &'static str,
}

#[derive(Debug, Clone)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: &'static str,
    pub badge: &'static str,
    /// Tailwind gradient stops, e.g. `from-orange-400 to-red-500`.
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech_stack: &'static [&'static str],
    pub category: ProjectCategory,
    pub featured: bool,
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Alex Nova",
    handle: "AlexNova",
    role: "Full Stack Developer & UI/UX Designer",
    tagline: "Crafting digital experiences with cutting-edge technologies. Specializing in React, Node.js, and creating beautiful, performant web applications that users love.",
    email: "alex.nova@email.com",
    location: "San Francisco, CA",
};

pub static SKILLS: &[Skill] = &[
    Skill { name: "React", level: 95, category: SkillCategory::Frontend, icon: Icon::Code },
    Skill { name: "TypeScript", level: 90, category: SkillCategory::Frontend, icon: Icon::Code },
    Skill { name: "Next.js", level: 88, category: SkillCategory::Frontend, icon: Icon::Code },
    Skill { name: "Tailwind CSS", level: 92, category: SkillCategory::Frontend, icon: Icon::Layers },
    Skill { name: "Node.js", level: 85, category: SkillCategory::Backend, icon: Icon::Database },
    Skill { name: "PostgreSQL", level: 80, category: SkillCategory::Backend, icon: Icon::Database },
    Skill { name: "MongoDB", level: 82, category: SkillCategory::Backend, icon: Icon::Database },
    Skill { name: "GraphQL", level: 78, category: SkillCategory::Backend, icon: Icon::Zap },
    Skill { name: "Docker", level: 75, category: SkillCategory::Tools, icon: Icon::Wrench },
    Skill { name: "Git", level: 90, category: SkillCategory::Tools, icon: Icon::Wrench },
    Skill { name: "AWS", level: 70, category: SkillCategory::Tools, icon: Icon::Wrench },
    Skill { name: "Figma", level: 85, category: SkillCategory::Tools, icon: Icon::Layers },
    Skill { name: "Leadership", level: 88, category: SkillCategory::SoftSkills, icon: Icon::Users },
    Skill { name: "Communication", level: 92, category: SkillCategory::SoftSkills, icon: Icon::Users },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        company: "TechCorp Inc.",
        position: "Senior Full Stack Developer",
        period: "Jan 2023 - Present",
        location: "San Francisco, CA",
        description: "Leading development of cloud-native applications",
        achievements: &[
            "Architected and deployed microservices handling 1M+ daily requests",
            "Reduced application load time by 65% through optimization",
            "Mentored team of 5 junior developers",
        ],
        tech_stack: &["React", "Node.js", "AWS", "Docker", "PostgreSQL"],
        logo: "🚀",
    },
    Experience {
        company: "Digital Solutions Ltd",
        position: "Full Stack Developer",
        period: "Jun 2021 - Dec 2022",
        location: "New York, NY",
        description: "Developed enterprise web applications for Fortune 500 clients",
        achievements: &[
            "Built custom CRM system serving 10,000+ users",
            "Implemented real-time analytics dashboard",
            "Improved test coverage from 45% to 90%",
        ],
        tech_stack: &["TypeScript", "Next.js", "GraphQL", "MongoDB"],
        logo: "💼",
    },
    Experience {
        company: "StartupXYZ",
        position: "Frontend Developer",
        period: "Jan 2020 - May 2021",
        location: "Remote",
        description: "Created responsive and accessible user interfaces",
        achievements: &[
            "Redesigned product UI improving user engagement by 40%",
            "Established component library used across 5+ projects",
            "Led migration from Vue to React",
        ],
        tech_stack: &["React", "Tailwind", "Figma", "Jest"],
        logo: "⚡",
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        institution: "Massachusetts Institute of Technology",
        degree: "Master of Science",
        major: "Computer Science",
        period: "2018 - 2020",
        gpa: "3.9/4.0",
        honors: &["Dean's List", "Outstanding Graduate Award"],
        coursework: &[
            "Advanced Algorithms",
            "Distributed Systems",
            "Machine Learning",
            "Computer Graphics",
            "Database Systems",
        ],
        logo: "🎓",
    },
    Education {
        institution: "University of California, Berkeley",
        degree: "Bachelor of Science",
        major: "Software Engineering",
        period: "2014 - 2018",
        gpa: "3.8/4.0",
        honors: &["Summa Cum Laude", "Hackathon Winner 2017"],
        coursework: &[
            "Data Structures",
            "Operating Systems",
            "Web Development",
            "Software Architecture",
            "Mobile Development",
        ],
        logo: "🏛️",
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "Dec 2023",
        credential_id: "AWS-123456",
        badge: "☁️",
        color: "from-orange-400 to-red-500",
    },
    Certification {
        name: "Google Cloud Professional",
        issuer: "Google Cloud",
        date: "Oct 2023",
        credential_id: "GCP-789012",
        badge: "🌐",
        color: "from-blue-400 to-cyan-500",
    },
    Certification {
        name: "Kubernetes Administrator",
        issuer: "CNCF",
        date: "Aug 2023",
        credential_id: "CKA-345678",
        badge: "⚙️",
        color: "from-cyan-400 to-blue-600",
    },
    Certification {
        name: "React Advanced Certification",
        issuer: "Meta",
        date: "Jun 2023",
        credential_id: "META-901234",
        badge: "⚛️",
        color: "from-cyan-300 to-blue-500",
    },
    Certification {
        name: "MongoDB Certified Developer",
        issuer: "MongoDB University",
        date: "Apr 2023",
        credential_id: "MDB-567890",
        badge: "🍃",
        color: "from-green-400 to-emerald-600",
    },
    Certification {
        name: "Cybersecurity Specialist",
        issuer: "CompTIA",
        date: "Feb 2023",
        credential_id: "SEC-234567",
        badge: "🔒",
        color: "from-purple-400 to-pink-500",
    },
];

pub static CERTIFICATION_STATS: &[Stat] = &[
    Stat { label: "Certifications", value: "6+" },
    Stat { label: "Training Hours", value: "500+" },
    Stat { label: "Platforms", value: "10+" },
    Stat { label: "Success Rate", value: "100%" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Analytics Dashboard",
        description: "Real-time analytics platform with ML-driven insights and predictive analytics. Handles 1M+ events per day with sub-second query performance.",
        image: "📊",
        tech_stack: &["React", "TypeScript", "Python", "TensorFlow", "PostgreSQL"],
        category: ProjectCategory::WebApp,
        featured: true,
        github: Some("#"),
        live: Some("#"),
    },
    Project {
        title: "Blockchain DeFi Platform",
        description: "Decentralized finance platform for crypto trading with smart contract integration and real-time market data.",
        image: "🪙",
        tech_stack: &["Next.js", "Solidity", "Web3.js", "Node.js"],
        category: ProjectCategory::Blockchain,
        featured: true,
        github: Some("#"),
        live: Some("#"),
    },
    Project {
        title: "Social Media Automation Tool",
        description: "Multi-platform social media management tool with AI-powered content scheduling and analytics.",
        image: "📱",
        tech_stack: &["React", "Node.js", "MongoDB", "Redis"],
        category: ProjectCategory::WebApp,
        featured: true,
        github: Some("#"),
        live: Some("#"),
    },
    Project {
        title: "E-Commerce Marketplace",
        description: "Full-featured marketplace with payment processing, inventory management, and seller analytics.",
        image: "🛒",
        tech_stack: &["Vue.js", "GraphQL", "Stripe", "AWS"],
        category: ProjectCategory::WebApp,
        featured: false,
        github: Some("#"),
        live: None,
    },
    Project {
        title: "Developer Portfolio Builder",
        description: "No-code platform for developers to create stunning portfolio websites in minutes.",
        image: "🎨",
        tech_stack: &["React", "Tailwind", "Supabase"],
        category: ProjectCategory::Tool,
        featured: false,
        github: Some("#"),
        live: Some("#"),
    },
    Project {
        title: "Real-time Chat Application",
        description: "Scalable chat app with end-to-end encryption, file sharing, and video calls.",
        image: "💬",
        tech_stack: &["Socket.io", "WebRTC", "Express", "MongoDB"],
        category: ProjectCategory::WebApp,
        featured: false,
        github: Some("#"),
        live: None,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "#",
        icon_class: "devicon-github-plain",
        color: "from-gray-400 to-gray-600",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon_class: "devicon-linkedin-plain",
        color: "from-blue-400 to-blue-600",
    },
    SocialLink {
        label: "Twitter",
        href: "#",
        icon_class: "devicon-twitter-original",
        color: "from-cyan-400 to-blue-500",
    },
];

/// Served from `public/` by the static file fallback.
pub const FAVICON: &str = "/favicon.svg";

pub static BUILT_WITH: &[&str] = &["Rust", "Leptos", "Tailwind", "WASM"];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

/// schema.org `Person` emitted as JSON-LD in the page head.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    email: String,
    address: &'static str,
    knows_about: Vec<&'static str>,
    same_as: Vec<&'static str>,
}

pub fn person_json_ld() -> Result<String, serde_json::Error> {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.role,
        email: format!("mailto:{}", PROFILE.email),
        address: PROFILE.location,
        knows_about: SKILLS.iter().map(|s| s.name).collect(),
        // placeholder links are left out
        same_as: SOCIAL_LINKS
            .iter()
            .filter(|l| l.href != "#")
            .map(|l| l.href)
            .collect(),
    };
    serde_json::to_string(&person)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_populated() {
        assert!(!SKILLS.is_empty());
        assert!(!EXPERIENCES.is_empty());
        assert!(!EDUCATION.is_empty());
        assert!(!CERTIFICATIONS.is_empty());
        assert!(!CERTIFICATION_STATS.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!SOCIAL_LINKS.is_empty());
        for exp in EXPERIENCES {
            assert!(!exp.achievements.is_empty(), "{} has no achievements", exp.company);
            assert!(!exp.tech_stack.is_empty(), "{} has no tech stack", exp.company);
        }
        for edu in EDUCATION {
            assert!(!edu.honors.is_empty());
            assert!(!edu.coursework.is_empty());
        }
        for project in PROJECTS {
            assert!(!project.tech_stack.is_empty(), "{} has no tech stack", project.title);
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} is over 100%", skill.name);
        }
    }

    #[test]
    fn test_every_skill_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(
                skills_in(category).next().is_some(),
                "{} has no skills",
                category.label()
            );
        }
        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(*c).count())
            .sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn test_credential_ids_are_unique() {
        let mut ids = CERTIFICATIONS
            .iter()
            .map(|c| c.credential_id)
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CERTIFICATIONS.len());
    }

    #[test]
    fn test_favicon_is_shipped() {
        let asset = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        assert!(asset.is_file(), "{} is missing", asset.display());
    }

    #[test]
    fn test_project_category_labels() {
        assert_eq!(ProjectCategory::WebApp.label(), "Web App");
        assert_eq!(ProjectCategory::Blockchain.label(), "Blockchain");
        assert_eq!(ProjectCategory::Tool.label(), "Tool");
    }

    #[test]
    fn test_person_json_ld() {
        let json = person_json_ld().expect("person should serialize");
        let doc: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["jobTitle"], PROFILE.role);
        assert_eq!(doc["email"], format!("mailto:{}", PROFILE.email));
        assert_eq!(doc["name"], PROFILE.name);
        assert_eq!(
            doc["knowsAbout"].as_array().map(|a| a.len()),
            Some(SKILLS.len())
        );
        // placeholder links are left out
        assert_eq!(doc["sameAs"].as_array().map(|a| a.len()), Some(0));
    }
}
