//! Axum route handlers for the application intake API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::applications::intake::{submit, SUBMITTED_MESSAGE};
use crate::applications::models::{ApplicationPayload, ApplicationResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/applications
///
/// Validates the payload and answers 201 with the acknowledged application,
/// or 400 with the first validation failure. Nothing is stored.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    payload: Result<Json<ApplicationPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApplicationResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let acknowledged = {
        let mut rng = rand::thread_rng();
        submit(payload, Utc::now(), &mut rng).inspect_err(|e| {
            info!("Rejected application: {e}");
        })?
    };

    if !state.config.applications_latency.is_zero() {
        tokio::time::sleep(state.config.applications_latency).await;
    }

    info!(
        "Accepted application {} for job {}",
        acknowledged.id,
        acknowledged.payload.job_id.as_deref().unwrap_or_default()
    );

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse {
            success: true,
            application_id: acknowledged.id.clone(),
            message: SUBMITTED_MESSAGE.to_string(),
            data: acknowledged,
        }),
    ))
}
