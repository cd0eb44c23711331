//! Client state as an immutable value and the single transition function
//! that produces the next one. Only the session task calls [`reduce`].

use serde::Serialize;

use crate::applications::AcknowledgedApplication;
use crate::catalog::Job;
use crate::filtering::{query, FilterPatch, FilterSpec};

pub const CACHED_DATA_ADVISORY: &str = "Unable to fetch live data. Showing cached job listings.";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit application. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted {
        application_id: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientState {
    /// Last-known full catalog. Never replaced by a filtered subset.
    pub catalog: Vec<Job>,
    /// What the user currently sees.
    pub jobs: Vec<Job>,
    pub filters: FilterSpec,
    pub loading: bool,
    /// Set once the initial catalog load has finished, live or fallback.
    pub initialized: bool,
    /// Dismissible banner text.
    pub advisory: Option<String>,
    pub applications: Vec<AcknowledgedApplication>,
    pub submission: SubmissionState,
    /// Submissions sent and not yet answered.
    pub submissions_in_flight: usize,
    /// Sequence number of the most recently issued filter request.
    pub latest_seq: u64,
    /// Sequence number of the newest filter result shown in `jobs`.
    pub applied_seq: u64,
}

#[derive(Debug, Clone)]
pub enum Action {
    LoadStarted,
    CatalogLoaded(Vec<Job>),
    /// Live catalog unavailable; show the bundled copy instead.
    CatalogUnavailable { fallback: Vec<Job> },
    FiltersChanged(FilterPatch),
    FilterResults { seq: u64, jobs: Vec<Job> },
    /// The server could not filter; run the same query locally.
    FilterFailed { seq: u64, spec: FilterSpec },
    FiltersCleared,
    AdvisoryDismissed,
    SubmissionStarted,
    SubmissionSucceeded(AcknowledgedApplication),
    SubmissionFailed,
    /// Only resets the submission it was scheduled for.
    SubmissionReset { application_id: String },
}

impl ClientState {
    /// Results for `seq` are applied unless something newer already was.
    pub fn accepts(&self, seq: u64) -> bool {
        seq >= self.applied_seq
    }
}

pub fn reduce(state: ClientState, action: Action) -> ClientState {
    match action {
        Action::LoadStarted => ClientState {
            loading: true,
            ..state
        },

        Action::CatalogLoaded(catalog) => {
            let jobs = query(&catalog, &state.filters);
            ClientState {
                catalog,
                jobs,
                loading: false,
                initialized: true,
                ..state
            }
        }

        Action::CatalogUnavailable { fallback } => {
            let jobs = query(&fallback, &state.filters);
            ClientState {
                catalog: fallback,
                jobs,
                loading: false,
                initialized: true,
                advisory: Some(CACHED_DATA_ADVISORY.to_string()),
                ..state
            }
        }

        Action::FiltersChanged(patch) => ClientState {
            filters: state.filters.merged(patch),
            latest_seq: state.latest_seq + 1,
            ..state
        },

        Action::FilterResults { seq, jobs } => {
            if !state.accepts(seq) {
                return state;
            }
            ClientState {
                jobs,
                applied_seq: seq,
                ..state
            }
        }

        Action::FilterFailed { seq, spec } => {
            if !state.accepts(seq) {
                return state;
            }
            let jobs = query(&state.catalog, &spec);
            ClientState {
                jobs,
                applied_seq: seq,
                ..state
            }
        }

        Action::FiltersCleared => {
            // Supersedes every in-flight filter request
            let seq = state.latest_seq + 1;
            ClientState {
                filters: FilterSpec::default(),
                jobs: state.catalog.clone(),
                latest_seq: seq,
                applied_seq: seq,
                ..state
            }
        }

        Action::AdvisoryDismissed => ClientState {
            advisory: None,
            ..state
        },

        Action::SubmissionStarted => ClientState {
            submission: SubmissionState::Submitting,
            submissions_in_flight: state.submissions_in_flight + 1,
            ..state
        },

        Action::SubmissionSucceeded(application) => {
            let in_flight = state.submissions_in_flight.saturating_sub(1);
            // Stay in Submitting while another submission is outstanding
            let submission = if in_flight > 0 {
                SubmissionState::Submitting
            } else {
                SubmissionState::Submitted {
                    application_id: application.id.clone(),
                }
            };
            let mut applications = state.applications;
            applications.push(application);
            ClientState {
                applications,
                submission,
                submissions_in_flight: in_flight,
                ..state
            }
        }

        Action::SubmissionFailed => {
            let in_flight = state.submissions_in_flight.saturating_sub(1);
            let submission = if in_flight > 0 {
                SubmissionState::Submitting
            } else {
                SubmissionState::Failed {
                    message: SUBMISSION_FAILED_MESSAGE.to_string(),
                }
            };
            ClientState {
                submission,
                submissions_in_flight: in_flight,
                ..state
            }
        }

        Action::SubmissionReset { application_id } => {
            let scheduled_for_current = matches!(
                &state.submission,
                SubmissionState::Submitted { application_id: shown } if *shown == application_id
            );
            if !scheduled_for_current {
                return state;
            }
            ClientState {
                submission: SubmissionState::Idle,
                ..state
            }
        }
    }
}
