use chrono::{DateTime, Datelike};

pub struct SkillCategory {
    pub title: &'static str,
    pub gradient: &'static str,
    pub skills: &'static [&'static str],
}

pub struct ExperienceItem {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub accent: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub gradient: &'static str,
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

pub struct SocialLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const TITLE_LABEL: &str = "PORTFOLIO 2025";

pub const HERO_TAGLINES: [&str; 2] = [
    "Bachelor's Degree in Computer Science from York University.",
    "Full-Stack Developer & Data Engineer crafting scalable solutions with AI & modern tech.",
];

pub const ABOUT: &str = "I'm a Full-Stack Developer who loves building the 'brain' behind an application. My interest lies at the intersection of web development and AI, combining solid engineering principles with machine learning to automate workflows and solve hard problems. Whether I'm optimizing a database query or fine-tuning a UI, I focus on building software that is fast, reliable, and actually enjoyable to use.";

pub const BADGES: [&str; 2] = [
    "BSc Computer Science, York University",
    "Full-Stack Developer",
];

pub const KEYWORDS: [&str; 11] = [
    "Calvin Kattathara",
    "Full-Stack Developer",
    "Data Engineer",
    "Computer Science",
    "York University",
    "Software Engineer",
    "React",
    "Python",
    "Java",
    "AI",
    "Machine Learning",
];

pub const AVATAR: &str = "/hero/avatar.webp";

pub static SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        title: "Data Science & ML",
        gradient: "from-blue-500 to-cyan-500",
        skills: &["Python", "NumPy", "Pandas", "Scikit-learn", "LangChain"],
    },
    SkillCategory {
        title: "Backend & APIs",
        gradient: "from-purple-500 to-pink-500",
        skills: &["Java", "Node.js", "Spring Boot", "FastAPI", "SQL"],
    },
    SkillCategory {
        title: "Frontend & UI",
        gradient: "from-pink-500 to-orange-500",
        skills: &["React", "Tailwind CSS", "Redux", "Next.js", "Figma"],
    },
];

pub static EXPERIENCE: [ExperienceItem; 4] = [
    ExperienceItem {
        year: "2021",
        role: "Honors Bachelor of Computer Science",
        company: "York University",
        period: "September 2021 – August 2025",
        description: "Honors Bachelor of Computer Science with a focus on Full-Stack Development, Data Engineering, and AI/ML.",
        highlights: &[],
        tech_stack: &[],
        accent: "from-orange-500 to-amber-500",
    },
    ExperienceItem {
        year: "2024",
        role: "Machine Learning & AI Intern",
        company: "Kyndryl",
        period: "May 2024 – January 2025",
        description: "Developed an automated E-Form Parser System that streamlined banking data extraction, reducing manual workflow time by 30%.",
        highlights: &[
            "Built a scalable system using Python Flask, PostgreSQL, and React to digitize and analyze financial forms.",
            "Wrote SQL queries unifying disparate data sources into master tables for deeper analysis.",
            "Implemented CI/CD pipelines via GitHub Actions and integrated AG Grid for frontend data visualization.",
        ],
        tech_stack: &["Python (Flask)", "React", "PostgreSQL", "SQL", "Docker", "CI/CD", "AG Grid"],
        accent: "from-blue-500 to-sky-600",
    },
    ExperienceItem {
        year: "2025",
        role: "Full-Stack Developer",
        company: "MidnaTech",
        period: "April 2025 – Present",
        description: "Built an end-to-end data platform for carrier safety analytics, from raw data ingestion to user-facing dashboards.",
        highlights: &[
            "Architected ETL pipelines scraping FMCSA SMS data into structured JSON for PostgreSQL storage.",
            "Developed RESTful APIs featuring dynamic filtering and search.",
            "Designed responsive dashboards visualizing safety and compliance metrics.",
            "Led black box and white box testing across backends and frontends.",
        ],
        tech_stack: &["JavaScript", "React", "Node.js", "PostgreSQL", "ETL", "REST APIs"],
        accent: "from-violet-500 to-purple-600",
    },
    ExperienceItem {
        year: "∞",
        role: "Lifelong Learner",
        company: "Continuous Growth",
        period: "Always",
        description: "In this fast-paced field I keep learning every day, exploring new opportunities and staying current with emerging technologies.",
        highlights: &[],
        tech_stack: &[],
        accent: "from-sky-500 to-cyan-500",
    },
];

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Marketplace System",
        description: "Scalable auction platform with Dutch Auctions, real-time bidding, and secure RESTful APIs.",
        technologies: &["Java", "Spring Boot", "REST API", "SQL", "Docker", "React.js", "PostgreSQL", "JPA/Hibernate", "Tailwind CSS"],
        gradient: "from-blue-500 to-cyan-500",
        github_url: Some("https://github.com/Calvinjkatt/SpringBootAuction"),
        live_url: None,
    },
    Project {
        title: "MediaDL Web Application",
        description: "High-performance media platform with mobile-first design and optimized architecture.",
        technologies: &["JavaScript", "Node.js", "React", "Tailwind CSS", "Redis", "Bootstrap", "PM2"],
        gradient: "from-purple-500 to-pink-500",
        github_url: None,
        live_url: Some("https://mediadl.app/en"),
    },
    Project {
        title: "Etsy AI Agent Automation",
        description: "End-to-end AI-powered automation system for Etsy product creation and listing.",
        technologies: &["OpenAI", "n8n", "REST API", "Gelato", "Etsy API"],
        gradient: "from-pink-500 to-orange-500",
        github_url: None,
        live_url: None,
    },
    Project {
        title: "S&P 500 Machine Learning Project",
        description: "Predictive ML model that forecasts S&P 500 index values.",
        technologies: &["Python", "Jupyter", "Pandas", "NumPy", "Seaborn", "Matplotlib", "Machine Learning"],
        gradient: "from-violet-500 to-indigo-500",
        github_url: Some("https://github.com/Calvinjkatt/MachineLearningStock"),
        live_url: None,
    },
];

pub static SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        handle: "github.com/Calvinjkatt",
        href: "https://github.com/Calvinjkatt",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        handle: "linkedin.com/in/calvin-k",
        href: "https://www.linkedin.com/in/calvin-k-2502a5261/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Email",
        handle: "calvinjkatt@gmail.com",
        href: "mailto:calvinjkatt@gmail.com",
        icon: "extra-email",
    },
];

/// Year for the footer notice, taken from the `BUILD_TIME` stamp so server
/// and client render the same value.
pub fn copyright_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2026-03-01T12:00:00+00:00"), Some(2026));
        assert_eq!(copyright_year("not a date"), None);
        assert!(copyright_year(env!("BUILD_TIME")).is_some());
    }

    #[test]
    fn test_projects_have_unique_titles() {
        let mut titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
