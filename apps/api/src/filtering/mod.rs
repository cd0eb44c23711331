//! Filter/query engine shared by the `GET /api/jobs` handler and the client's
//! offline fallback. Both paths must call [`query`] so their results cannot drift.
//!
//! All predicates are conjunctive:
//! 1. category: sentinel (or empty) passes, else exact match
//! 2. location: sentinel (or empty) passes, `Remote` means `job.remote`, else exact match
//! 3. experience level: sentinel (or empty) passes, else exact match
//! 4. remote-only flag: `job.remote` (independent of rule 2)
//! 5. search: trimmed, case-insensitive substring of title, company or description

pub mod params;

use serde::{Deserialize, Serialize};

use crate::catalog::{Job, ALL_CATEGORIES, ALL_LEVELS, ALL_LOCATIONS, REMOTE_LOCATION};

pub use params::JobsQuery;

/// The user's current filter selection. Unknown facet values are kept as
/// literal strings and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub category: String,
    pub location: String,
    pub experience_level: String,
    pub search_term: String,
    pub remote: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            location: ALL_LOCATIONS.to_string(),
            experience_level: ALL_LEVELS.to_string(),
            search_term: String::new(),
            remote: false,
        }
    }
}

/// A partial edit of a [`FilterSpec`]; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    pub category: Option<String>,
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub search_term: Option<String>,
    pub remote: Option<bool>,
}

impl FilterPatch {
    pub fn category(value: impl Into<String>) -> Self {
        Self {
            category: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn location(value: impl Into<String>) -> Self {
        Self {
            location: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn experience_level(value: impl Into<String>) -> Self {
        Self {
            experience_level: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn search(value: impl Into<String>) -> Self {
        Self {
            search_term: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn remote(value: bool) -> Self {
        Self {
            remote: Some(value),
            ..Self::default()
        }
    }
}

impl FilterSpec {
    /// Shallow merge: every field present in the patch replaces the current one.
    pub fn merged(&self, patch: FilterPatch) -> Self {
        Self {
            category: patch.category.unwrap_or_else(|| self.category.clone()),
            location: patch.location.unwrap_or_else(|| self.location.clone()),
            experience_level: patch
                .experience_level
                .unwrap_or_else(|| self.experience_level.clone()),
            search_term: patch.search_term.unwrap_or_else(|| self.search_term.clone()),
            remote: patch.remote.unwrap_or(self.remote),
        }
    }

    pub fn is_default(&self) -> bool {
        !facet_active(&self.category, ALL_CATEGORIES)
            && !facet_active(&self.location, ALL_LOCATIONS)
            && !facet_active(&self.experience_level, ALL_LEVELS)
            && self.search_term.trim().is_empty()
            && !self.remote
    }
}

/// An empty facet value is the same as its sentinel, as in the query string.
pub(crate) fn facet_active(value: &str, sentinel: &str) -> bool {
    !value.is_empty() && value != sentinel
}

/// Returns `true` if `job` passes every predicate in `spec`.
pub fn matches(job: &Job, spec: &FilterSpec) -> bool {
    if facet_active(&spec.category, ALL_CATEGORIES) && job.category != spec.category {
        return false;
    }

    if facet_active(&spec.location, ALL_LOCATIONS) {
        let location_ok = if spec.location == REMOTE_LOCATION {
            job.remote
        } else {
            job.location == spec.location
        };
        if !location_ok {
            return false;
        }
    }

    if facet_active(&spec.experience_level, ALL_LEVELS)
        && job.experience_level.as_str() != spec.experience_level
    {
        return false;
    }

    if spec.remote && !job.remote {
        return false;
    }

    let term = spec.search_term.trim();
    if !term.is_empty() {
        let term = term.to_lowercase();
        let hit = job.title.to_lowercase().contains(&term)
            || job.company.to_lowercase().contains(&term)
            || job.description.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    true
}

/// Stable filter over `catalog`: the full matching subset in catalog order.
pub fn query(catalog: &[Job], spec: &FilterSpec) -> Vec<Job> {
    catalog
        .iter()
        .filter(|job| matches(job, spec))
        .cloned()
        .collect()
}
