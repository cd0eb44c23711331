//! Typed HTTP access to the job board endpoints.
//!
//! The session talks to the backend only through [`JobBoardApi`], so tests
//! and alternative transports can be swapped in without touching it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::applications::{ApplicationPayload, ApplicationResponse};
use crate::catalog::handlers::{FacetsResponse, JobsResponse};
use crate::catalog::{Facets, Job};
use crate::filtering::{FilterSpec, JobsQuery};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Client session is closed")]
    SessionClosed,
}

impl ClientError {
    /// Server-provided message for a rejected request, if there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } | ClientError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

#[async_trait]
pub trait JobBoardApi: Send + Sync {
    /// Jobs matching `spec`, filtered server-side.
    async fn fetch_jobs(&self, spec: &FilterSpec) -> Result<Vec<Job>, ClientError>;

    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ApplicationResponse, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// reqwest-backed [`JobBoardApi`]. `base_url` points at the `/api` prefix,
/// e.g. `http://localhost:8080/api`.
#[derive(Clone)]
pub struct HttpJobBoardClient {
    client: Client,
    base_url: String,
}

impl HttpJobBoardClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_facets(&self) -> Result<Facets, ClientError> {
        let response = self
            .client
            .get(format!("{}/jobs/facets", self.base_url))
            .send()
            .await?;
        let body: FacetsResponse = check_status(response).await?.json().await?;
        if !body.success {
            return Err(ClientError::Rejected("Failed to fetch facets".to_string()));
        }
        Ok(body.data)
    }
}

/// Turns a non-2xx response into `ClientError::Api`, preferring the
/// server's `error` / `message` fields over the raw body.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or(body);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl JobBoardApi for HttpJobBoardClient {
    async fn fetch_jobs(&self, spec: &FilterSpec) -> Result<Vec<Job>, ClientError> {
        let params = JobsQuery::from(spec);
        let response = self
            .client
            .get(format!("{}/jobs", self.base_url))
            .query(&params)
            .send()
            .await?;

        let body: JobsResponse = check_status(response).await?.json().await?;
        if !body.success {
            return Err(ClientError::Rejected("Failed to fetch jobs".to_string()));
        }

        debug!("Fetched {} jobs for {:?}", body.total, params);
        Ok(body.data)
    }

    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ApplicationResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/applications", self.base_url))
            .json(payload)
            .send()
            .await?;

        let body: ApplicationResponse = check_status(response).await?.json().await?;
        if !body.success {
            return Err(ClientError::Rejected(body.message));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::filtering::FilterPatch;
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Serves the real router on an ephemeral port and returns its `/api` base URL.
    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(AppState::new(Catalog::seeded(), Config::default()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            first_name: Some("Margaret".to_string()),
            last_name: Some("Hamilton".to_string()),
            email: Some("margaret@example.com".to_string()),
            phone: Some("555-0142".to_string()),
            cover_letter: Some(
                "I wrote the onboard flight software for Apollo and enjoy hard problems."
                    .to_string(),
            ),
            job_id: Some("2".to_string()),
            ..ApplicationPayload::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_jobs_encodes_filters() {
        let client = HttpJobBoardClient::new(spawn_server().await).unwrap();

        let all = client.fetch_jobs(&FilterSpec::default()).await.unwrap();
        assert_eq!(all.len(), 6);

        let spec = FilterSpec::default().merged(FilterPatch {
            location: Some("Remote".to_string()),
            search_term: Some("  engineer ".to_string()),
            ..FilterPatch::default()
        });
        let jobs = client.fetch_jobs(&spec).await.unwrap();
        let ids: Vec<u32> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[tokio::test]
    async fn test_fetch_facets() {
        let client = HttpJobBoardClient::new(spawn_server().await).unwrap();
        assert_eq!(client.fetch_facets().await.unwrap(), Catalog::facets());
    }

    #[tokio::test]
    async fn test_submit_application_round_trip() {
        let client = HttpJobBoardClient::new(spawn_server().await).unwrap();
        let response = client.submit_application(&payload()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.application_id, response.data.id);
        assert_eq!(response.data.payload.first_name.as_deref(), Some("Margaret"));
    }

    #[tokio::test]
    async fn test_validation_failure_surfaces_server_message() {
        let client = HttpJobBoardClient::new(spawn_server().await).unwrap();
        let mut p = payload();
        p.phone = None;
        match client.submit_application(&p).await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "phone is required");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpJobBoardClient::new(format!("http://{addr}/api/")).unwrap();
        assert_eq!(client.base_url(), format!("http://{addr}/api"));
        let err = client.fetch_jobs(&FilterSpec::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
