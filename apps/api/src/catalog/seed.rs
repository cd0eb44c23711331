//! Bundled job listings loaded at startup when no `CATALOG_PATH` is configured.

use chrono::NaiveDate;

use super::models::{ExperienceLevel, Job};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            category: "Frontend Development".to_string(),
            experience_level: ExperienceLevel::Senior,
            salary: "$120,000 - $150,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: true,
            description: "We are looking for a Senior Frontend Developer to join our team. You will be responsible for building user-facing features and ensuring the best user experience.".to_string(),
            requirements: strings(&[
                "5+ years of experience with React",
                "Strong knowledge of JavaScript ES6+",
                "Experience with TypeScript",
                "Familiarity with modern build tools",
            ]),
            benefits: strings(&[
                "Health insurance",
                "401k matching",
                "Flexible work hours",
                "Remote work options",
            ]),
            posted_date: date(2025, 9, 20),
            application_deadline: date(2025, 10, 20),
        },
        Job {
            id: 2,
            title: "Backend Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "New York, NY".to_string(),
            category: "Backend Development".to_string(),
            experience_level: ExperienceLevel::MidLevel,
            salary: "$90,000 - $110,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: false,
            description: "Join our growing team as a Backend Developer. You'll work on scalable server-side applications and APIs.".to_string(),
            requirements: strings(&[
                "3+ years of experience with Node.js",
                "Experience with databases (PostgreSQL, MongoDB)",
                "Knowledge of RESTful APIs",
                "Experience with cloud platforms",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Stock options",
                "Learning budget",
                "Team events",
            ]),
            posted_date: date(2025, 9, 19),
            application_deadline: date(2025, 10, 19),
        },
        Job {
            id: 3,
            title: "UI/UX Designer".to_string(),
            company: "DesignStudio".to_string(),
            location: "Austin, TX".to_string(),
            category: "Design".to_string(),
            experience_level: ExperienceLevel::MidLevel,
            salary: "$70,000 - $90,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: true,
            description: "We're seeking a creative UI/UX Designer to create beautiful and intuitive user experiences.".to_string(),
            requirements: strings(&[
                "3+ years of UI/UX design experience",
                "Proficiency in Figma, Sketch, or Adobe XD",
                "Strong portfolio of design work",
                "Understanding of user research methods",
            ]),
            benefits: strings(&[
                "Flexible schedule",
                "Design tools budget",
                "Conference attendance",
                "Health benefits",
            ]),
            posted_date: date(2025, 9, 18),
            application_deadline: date(2025, 10, 18),
        },
        Job {
            id: 4,
            title: "DevOps Engineer".to_string(),
            company: "CloudTech Solutions".to_string(),
            location: "Seattle, WA".to_string(),
            category: "DevOps".to_string(),
            experience_level: ExperienceLevel::Senior,
            salary: "$130,000 - $160,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: true,
            description: "Looking for a DevOps Engineer to help us scale our infrastructure and improve our deployment processes.".to_string(),
            requirements: strings(&[
                "5+ years of DevOps experience",
                "Experience with AWS, Azure, or GCP",
                "Knowledge of Docker and Kubernetes",
                "Experience with CI/CD pipelines",
            ]),
            benefits: strings(&[
                "Top-tier health insurance",
                "Unlimited PTO",
                "Home office stipend",
                "Professional development",
            ]),
            posted_date: date(2025, 9, 17),
            application_deadline: date(2025, 10, 17),
        },
        Job {
            id: 5,
            title: "Junior React Developer".to_string(),
            company: "WebAgency".to_string(),
            location: "Chicago, IL".to_string(),
            category: "Frontend Development".to_string(),
            experience_level: ExperienceLevel::EntryLevel,
            salary: "$50,000 - $65,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: false,
            description: "Perfect opportunity for a junior developer to start their frontend career in React development.".to_string(),
            requirements: strings(&[
                "1+ years of React experience",
                "Basic knowledge of JavaScript",
                "Understanding of HTML/CSS",
                "Eagerness to learn",
            ]),
            benefits: strings(&[
                "Mentorship program",
                "Learning resources",
                "Career growth opportunities",
                "Team building activities",
            ]),
            posted_date: date(2025, 9, 16),
            application_deadline: date(2025, 10, 16),
        },
        Job {
            id: 6,
            title: "Data Scientist".to_string(),
            company: "DataInsights Co.".to_string(),
            location: "Boston, MA".to_string(),
            category: "Data Science".to_string(),
            experience_level: ExperienceLevel::MidLevel,
            salary: "$100,000 - $130,000".to_string(),
            employment_type: "Full-time".to_string(),
            remote: true,
            description: "Join our data science team to extract insights from large datasets and build predictive models.".to_string(),
            requirements: strings(&[
                "3+ years of data science experience",
                "Proficiency in Python and R",
                "Experience with machine learning",
                "Knowledge of SQL and databases",
            ]),
            benefits: strings(&[
                "Research opportunities",
                "Conference presentations",
                "Flexible work arrangements",
                "Competitive benefits",
            ]),
            posted_date: date(2025, 9, 15),
            application_deadline: date(2025, 10, 15),
        },
    ]
}
