use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry-Level")]
    EntryLevel,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    #[serde(rename = "Senior")]
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::EntryLevel,
        ExperienceLevel::MidLevel,
        ExperienceLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry-Level",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

/// A single job listing. Read-only once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub experience_level: ExperienceLevel,
    /// Display string, e.g. "$90,000 - $110,000".
    pub salary: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_date: NaiveDate,
    pub application_deadline: NaiveDate,
}

/// Enumerated values for each filterable dimension, sentinel first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_wire_names() {
        for level in ExperienceLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_job_uses_camel_case_and_type_key() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Platform Engineer",
            "company": "Acme",
            "location": "Austin, TX",
            "category": "DevOps",
            "experienceLevel": "Mid-Level",
            "salary": "$1",
            "type": "Contract",
            "remote": false,
            "description": "Keeps the lights on.",
            "requirements": ["Linux"],
            "benefits": [],
            "postedDate": "2025-09-01",
            "applicationDeadline": "2025-10-01"
        }))
        .unwrap();

        assert_eq!(job.employment_type, "Contract");
        assert_eq!(job.experience_level, ExperienceLevel::MidLevel);

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["experienceLevel"], "Mid-Level");
        assert_eq!(back["postedDate"], "2025-09-01");
        assert!(back.get("employment_type").is_none());
    }
}
