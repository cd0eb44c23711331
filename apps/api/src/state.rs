use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared without locking.
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }
}
