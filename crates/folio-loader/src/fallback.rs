//! Compiled-in fallback datasets.
//!
//! Shown as the initial paint before any network round trip completes, and
//! kept on screen whenever the remote store is empty or unreachable. Built
//! once at first use, immutable for the lifetime of the process.

use std::sync::LazyLock;

use folio_core::record::{
    Achievement, Contact, ContactInfo, Education, Experience, Profile, Project, SkillCategory,
    SocialLink,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Fallback profile for the hero section.
pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    name: "Vishal Kumar".to_string(),
    title: "Full Stack Engineer | AI-Powered Web Apps".to_string(),
    description: "Building scalable, distributed cloud-native systems and AI-powered applications"
        .to_string(),
    resume_url: "/resume.pdf".to_string(),
});

/// Fallback work history.
pub static EXPERIENCES: LazyLock<Vec<Experience>> = LazyLock::new(|| {
    vec![
        Experience {
            id: None,
            title: "Software Engineer 3".to_string(),
            company: "Walmart Global Tech".to_string(),
            location: "Chennai, IND".to_string(),
            period: "Feb 2025 – Present".to_string(),
            achievements: strings(&[
                "Developed a full-stack web application Prudence to detect insurance claim frauds using AI Agents (Pydantic AI), improving detection speed by 60%",
                "Built a web-based report generation tool RAP to create insightful dashboards with AI chatbot support, used by 1000+ internal users",
                "Wrote Functional and E2E tests using Playwright, achieving 75% overall test coverage",
            ]),
            order: 1,
        },
        Experience {
            id: None,
            title: "Mid-level Software Engineer".to_string(),
            company: "NielsenIQ".to_string(),
            location: "Chennai, IND".to_string(),
            period: "Jan 2021 – Jan 2025".to_string(),
            achievements: strings(&[
                "Minerva Engine – Developed a multi-AI capable web framework (REST API) to integrate GenAI experiences with OGRDS search apps using Java and FastAPI (Python)",
                "OmniSearch – Built a full-stack internal search platform using Angular + Spring Boot, improving operations performance by 75%",
                "Led redesign of RD Cross Coding UI using Angular, MongoDB, and Java",
                "Authored JUnit tests to help achieve 75% coverage in legacy systems",
                "Resolved log4j vulnerabilities, ensuring 100% compliance with updated security standards",
                "Migrated internal DB from Couchbase → MongoDB, cutting cloud costs by 10%",
            ]),
            order: 2,
        },
    ]
});

/// Fallback featured projects.
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: None,
            title: "RAP (Reporting Agentic Platform)".to_string(),
            description: "Walmart Global Tech".to_string(),
            tech: strings(&[
                "FastAPI",
                "FastMCP",
                "PydanticAI",
                "React.js",
                "AlloyDB",
                "Google BigQuery",
            ]),
            highlights: strings(&[
                "Built a micro-frontend report generation tool like Tableau/PowerBI, cutting license costs by 20%",
                "Added AI chatbot to query data conversationally, reducing manual reporting time by 40%",
            ]),
            icon: "Zap".to_string(),
            order: 1,
        },
        Project {
            id: None,
            title: "Prudence".to_string(),
            description: "Walmart Global Tech".to_string(),
            tech: strings(&[
                "Spring Boot",
                "React.js",
                "Azure SQL Server",
                "Google BigQuery",
            ]),
            highlights: strings(&[
                "AI-powered insurance claims management tool handling 2B+ cases annually",
                "Implemented multi-agent fraud detection pipeline, improving investigator efficiency by 72%",
            ]),
            icon: "Database".to_string(),
            order: 2,
        },
        Project {
            id: None,
            title: "OmniSearch".to_string(),
            description: "NielsenIQ".to_string(),
            tech: strings(&["Java", "Spring Boot", "Angular", "MongoDB"]),
            highlights: strings(&[
                "Developed a REST-based search engine for item description matching, boosting operational efficiency by 75%",
            ]),
            icon: "Code2".to_string(),
            order: 3,
        },
    ]
});

/// Fallback skill categories.
pub static SKILLS: LazyLock<Vec<SkillCategory>> = LazyLock::new(|| {
    vec![
        SkillCategory {
            id: None,
            title: "Languages".to_string(),
            icon: "Code".to_string(),
            skills: strings(&[
                "Java",
                "JavaScript",
                "TypeScript",
                "HTML",
                "CSS",
                "Python",
                "Node.js",
                "REST APIs",
            ]),
            order: 1,
        },
        SkillCategory {
            id: None,
            title: "Frameworks".to_string(),
            icon: "Layers".to_string(),
            skills: strings(&[
                "Angular",
                "React",
                "J2EE",
                "Jest",
                "Spring",
                "Spring Boot",
                "JPA",
                "Hibernate",
                "JUnit",
                "FastAPI",
                "Pydantic AI",
                "FastMCP",
            ]),
            order: 2,
        },
        SkillCategory {
            id: None,
            title: "Databases".to_string(),
            icon: "Database".to_string(),
            skills: strings(&[
                "MongoDB",
                "Oracle",
                "SQLite",
                "Azure SQL Server",
                "AlloyDB",
                "BigQuery",
            ]),
            order: 3,
        },
        SkillCategory {
            id: None,
            title: "Cloud & DevOps".to_string(),
            icon: "Cloud".to_string(),
            skills: strings(&[
                "Microsoft Azure",
                "Google Cloud Platform (GCP)",
                "Docker",
                "Kubernetes",
                "CI/CD Pipelines",
            ]),
            order: 4,
        },
        SkillCategory {
            id: None,
            title: "Tools".to_string(),
            icon: "Wrench".to_string(),
            skills: strings(&[
                "Git",
                "Jira",
                "Jenkins",
                "Microservices",
                "Vibe Coding",
                "Windsurf",
                "Cursor",
            ]),
            order: 5,
        },
    ]
});

/// Fallback education entries.
pub static EDUCATION: LazyLock<Vec<Education>> = LazyLock::new(|| {
    vec![
        Education {
            id: None,
            degree: "Master of Technology".to_string(),
            field: "Software Engineering".to_string(),
            institution: "BITS Pilani, IND".to_string(),
            period: "July 2022 – May 2024".to_string(),
            cgpa: "8.40".to_string(),
            order: 1,
        },
        Education {
            id: None,
            degree: "Bachelor of Technology".to_string(),
            field: "Computer Science and Engineering".to_string(),
            institution: "Vellore Institute of Technology, IND".to_string(),
            period: "July 2017 – May 2021".to_string(),
            cgpa: "9.13".to_string(),
            order: 2,
        },
    ]
});

/// Fallback achievements.
pub static ACHIEVEMENTS: LazyLock<Vec<Achievement>> = LazyLock::new(|| {
    vec![
        Achievement {
            id: None,
            icon: "Trophy".to_string(),
            title: "Bravo Award".to_string(),
            description: "Org-wide recognition for outstanding work".to_string(),
            organization: "Walmart Global Tech".to_string(),
            date: "Aug '25".to_string(),
            color: "from-blue-600 to-pink-600".to_string(),
            order: 1,
        },
        Achievement {
            id: None,
            icon: "Rocket".to_string(),
            title: "Disruptor Award".to_string(),
            description: "Recognition for exemplary innovation".to_string(),
            organization: "Walmart Global Tech".to_string(),
            date: "Mar '25".to_string(),
            color: "from-blue-600 to-pink-600".to_string(),
            order: 2,
        },
        Achievement {
            id: None,
            icon: "Award".to_string(),
            title: "HackFest 2024 Winner".to_string(),
            description: "Organization-wide hackathon".to_string(),
            organization: "NielsenIQ".to_string(),
            date: "Apr '24".to_string(),
            color: "from-blue-600 to-pink-600".to_string(),
            order: 3,
        },
        Achievement {
            id: None,
            icon: "Zap".to_string(),
            title: "HackFest 2023 Winner".to_string(),
            description: "Organization-wide hackathon".to_string(),
            organization: "NielsenIQ".to_string(),
            date: "Oct '23".to_string(),
            color: "from-blue-600 to-pink-600".to_string(),
            order: 4,
        },
    ]
});

/// Fallback contact document.
pub static CONTACT: LazyLock<Contact> = LazyLock::new(|| Contact {
    contact_info: vec![
        ContactInfo {
            icon: "Mail".to_string(),
            label: "Email".to_string(),
            value: "vishal.s.kumar99@gmail.com".to_string(),
            href: Some("mailto:vishal.s.kumar99@gmail.com".to_string()),
        },
        ContactInfo {
            icon: "Phone".to_string(),
            label: "Phone".to_string(),
            value: "+91 9840476167".to_string(),
            href: Some("tel:+919840476167".to_string()),
        },
        ContactInfo {
            icon: "MapPin".to_string(),
            label: "Location".to_string(),
            value: "Chennai, India".to_string(),
            href: None,
        },
    ],
    social_links: vec![
        SocialLink {
            icon: "Github".to_string(),
            label: "GitHub".to_string(),
            href: "https://github.com/nightmare99".to_string(),
        },
        SocialLink {
            icon: "Linkedin".to_string(),
            label: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/mnq-/".to_string(),
        },
    ],
});
