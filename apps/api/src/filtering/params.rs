use serde::{Deserialize, Serialize};

use super::{facet_active, FilterSpec};
use crate::catalog::{ALL_CATEGORIES, ALL_LEVELS, ALL_LOCATIONS};

/// Query string of `GET /api/jobs`. Every parameter is optional; absent, empty
/// or sentinel values disable that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn facet_or(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel.to_string(),
    }
}

fn non_sentinel(value: &str, sentinel: &str) -> Option<String> {
    facet_active(value, sentinel).then(|| value.to_string())
}

impl From<JobsQuery> for FilterSpec {
    fn from(q: JobsQuery) -> Self {
        FilterSpec {
            category: facet_or(q.category, ALL_CATEGORIES),
            location: facet_or(q.location, ALL_LOCATIONS),
            experience_level: facet_or(q.experience_level, ALL_LEVELS),
            search_term: q.search.unwrap_or_default(),
            // Only the literal "true" enables the flag
            remote: q.remote.as_deref() == Some("true"),
        }
    }
}

impl From<&FilterSpec> for JobsQuery {
    fn from(spec: &FilterSpec) -> Self {
        let search = spec.search_term.trim();
        JobsQuery {
            category: non_sentinel(&spec.category, ALL_CATEGORIES),
            location: non_sentinel(&spec.location, ALL_LOCATIONS),
            experience_level: non_sentinel(&spec.experience_level, ALL_LEVELS),
            remote: spec.remote.then(|| "true".to_string()),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}
