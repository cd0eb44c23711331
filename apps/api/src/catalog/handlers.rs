//! Axum route handlers for the job listing API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Facets, Job};
use crate::errors::AppError;
use crate::filtering::{query, FilterSpec, JobsQuery};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub success: bool,
    pub data: Vec<Job>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub success: bool,
    pub data: Facets,
}

/// GET /api/jobs
///
/// Returns every job matching the query-string filters, in catalog order.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    params: Result<Query<JobsQuery>, QueryRejection>,
) -> Result<Json<JobsResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if !state.config.jobs_latency.is_zero() {
        tokio::time::sleep(state.config.jobs_latency).await;
    }

    let spec = FilterSpec::from(params);
    let data = query(state.catalog.jobs(), &spec);
    debug!("{} of {} jobs match {:?}", data.len(), state.catalog.len(), spec);

    Ok(Json(JobsResponse {
        success: true,
        total: data.len(),
        data,
    }))
}

/// GET /api/jobs/facets
///
/// Option lists for the category, location and experience level selectors.
pub async fn handle_facets() -> Json<FacetsResponse> {
    Json(FacetsResponse {
        success: true,
        data: Catalog::facets(),
    })
}
