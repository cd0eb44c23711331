// Job catalog: the read-only set of listings served to clients, plus the
// facet vocabulary the filter bar is built from.

pub mod handlers;
pub mod models;
pub mod seed;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use models::{ExperienceLevel, Facets, Job};

pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_LOCATIONS: &str = "All Locations";
pub const ALL_LEVELS: &str = "All Levels";
/// Pseudo-location matching every job with `remote == true`.
pub const REMOTE_LOCATION: &str = "Remote";

pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Frontend Development",
    "Backend Development",
    "Full Stack Development",
    "DevOps",
    "Data Science",
    "Design",
    "Product Management",
    "Marketing",
    "Sales",
];

pub const LOCATIONS: &[&str] = &[
    ALL_LOCATIONS,
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Chicago, IL",
    "Boston, MA",
    REMOTE_LOCATION,
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate job id {0} in catalog")]
    DuplicateId(u32),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory job catalog. Job ids are unique and order is preserved.
#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    pub fn new(jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                return Err(CatalogError::DuplicateId(job.id));
            }
        }
        Ok(Self { jobs })
    }

    /// The bundled catalog. Also used by clients as the offline fallback.
    pub fn seeded() -> Self {
        Self {
            jobs: seed::seed_jobs(),
        }
    }

    /// Loads a JSON array of jobs, e.g. from `CATALOG_PATH`.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let jobs: Vec<Job> = serde_json::from_str(&raw)?;
        let catalog = Self::new(jobs)?;
        info!(
            "Loaded {} jobs from catalog file {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn facets() -> Facets {
        let mut experience_levels = vec![ALL_LEVELS.to_string()];
        experience_levels.extend(ExperienceLevel::ALL.iter().map(|l| l.as_str().to_string()));

        Facets {
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            locations: LOCATIONS.iter().map(|l| l.to_string()).collect(),
            experience_levels,
        }
    }
}
