//! Per-user client session.
//!
//! One task owns the [`ClientState`] and is its only writer. Callers send
//! commands through a [`SessionHandle`]; network calls run as spawned tasks
//! that post their outcome back into the same queue, so every transition
//! goes through [`reduce`] in arrival order. Filter results carry the
//! sequence number of the request that produced them and are dropped if a
//! newer result has already been shown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::applications::{ApplicationPayload, ApplicationResponse};
use crate::catalog::{Catalog, Job};
use crate::client::api::{ClientError, JobBoardApi};
use crate::client::delayed::DelayedTask;
use crate::client::store::{reduce, Action, ClientState, SubmissionState};
use crate::filtering::{FilterPatch, FilterSpec};

pub const DEFAULT_SUBMISSION_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Shown when the live catalog cannot be fetched.
    pub fallback_catalog: Vec<Job>,
    /// How long a successful submission stays visible before resetting.
    pub submission_reset_after: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_catalog: Catalog::seeded().jobs().to_vec(),
            submission_reset_after: DEFAULT_SUBMISSION_RESET,
        }
    }
}

type SubmitReply = oneshot::Sender<Result<ApplicationResponse, ClientError>>;

enum Event {
    SetFilters(FilterPatch),
    ClearFilters,
    DismissAdvisory,
    Submit {
        payload: ApplicationPayload,
        reply: SubmitReply,
    },
    SubmissionFinished {
        result: Result<ApplicationResponse, ClientError>,
        reply: SubmitReply,
    },
    Apply(Action),
}

/// Caller side of a session. Dropping it (or calling [`shutdown`]) ends the
/// session and aborts its pending delayed tasks.
///
/// [`shutdown`]: SessionHandle::shutdown
pub struct SessionHandle {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<ClientState>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Starts the session task and kicks off the initial catalog load.
    pub fn spawn(api: Arc<dyn JobBoardApi>, config: SessionConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (publisher, state) = watch::channel(ClientState::default());

        let session = Session {
            api,
            config,
            state: ClientState::default(),
            events: rx,
            loopback: tx.downgrade(),
            publisher,
            pending_reset: None,
        };
        let task = tokio::spawn(session.run());

        Self {
            events: tx,
            state,
            task,
        }
    }

    pub fn set_filters(&self, patch: FilterPatch) {
        self.send(Event::SetFilters(patch));
    }

    pub fn clear_filters(&self) {
        self.send(Event::ClearFilters);
    }

    pub fn dismiss_advisory(&self) {
        self.send(Event::DismissAdvisory);
    }

    /// Submits an application and waits for the outcome. The session state
    /// already reflects the outcome when this returns.
    pub async fn submit(
        &self,
        payload: ApplicationPayload,
    ) -> Result<ApplicationResponse, ClientError> {
        let (reply, outcome) = oneshot::channel();
        self.events
            .send(Event::Submit { payload, reply })
            .map_err(|_| ClientError::SessionClosed)?;
        outcome.await.map_err(|_| ClientError::SessionClosed)?
    }

    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.clone()
    }

    /// Waits until the published state satisfies `predicate`.
    pub async fn wait_until<F>(&self, predicate: F) -> Result<ClientState, ClientError>
    where
        F: FnMut(&ClientState) -> bool,
    {
        let mut rx = self.state.clone();
        let state = rx
            .wait_for(predicate)
            .await
            .map_err(|_| ClientError::SessionClosed)?;
        Ok(state.clone())
    }

    pub async fn shutdown(self) {
        let SessionHandle { events, task, .. } = self;
        drop(events);
        if let Err(e) = task.await {
            warn!("Client session task ended abnormally: {e}");
        }
    }

    fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            warn!("Client session is closed; command ignored");
        }
    }
}

struct Session {
    api: Arc<dyn JobBoardApi>,
    config: SessionConfig,
    state: ClientState,
    events: mpsc::UnboundedReceiver<Event>,
    /// Weak so in-flight requests and timers never keep the session alive.
    loopback: mpsc::WeakUnboundedSender<Event>,
    publisher: watch::Sender<ClientState>,
    pending_reset: Option<DelayedTask>,
}

impl Session {
    async fn run(mut self) {
        self.start_initial_load();

        while let Some(event) = self.events.recv().await {
            self.handle(event);
        }

        debug!("Client session closed");
        // `pending_reset` is dropped with `self`, which aborts it
    }

    fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        self.publisher.send_replace(self.state.clone());
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::SetFilters(patch) => {
                self.dispatch(Action::FiltersChanged(patch));
                self.spawn_filter_fetch(self.state.latest_seq, self.state.filters.clone());
            }
            Event::ClearFilters => self.dispatch(Action::FiltersCleared),
            Event::DismissAdvisory => self.dispatch(Action::AdvisoryDismissed),
            Event::Submit { payload, reply } => {
                self.pending_reset = None;
                self.dispatch(Action::SubmissionStarted);
                self.spawn_submission(payload, reply);
            }
            Event::SubmissionFinished { result, reply } => {
                match &result {
                    Ok(response) => {
                        info!("Application {} submitted", response.application_id);
                        self.dispatch(Action::SubmissionSucceeded(response.data.clone()));
                        if let SubmissionState::Submitted { application_id } =
                            self.state.submission.clone()
                        {
                            self.schedule_submission_reset(application_id);
                        }
                    }
                    Err(e) => {
                        warn!("Application submission failed: {e}");
                        self.dispatch(Action::SubmissionFailed);
                    }
                }
                // Caller may have stopped waiting
                let _ = reply.send(result);
            }
            Event::Apply(action) => {
                if let Action::FilterResults { seq, .. } | Action::FilterFailed { seq, .. } = &action {
                    if !self.state.accepts(*seq) {
                        debug!(
                            "Dropping stale filter response {seq} (already showing {})",
                            self.state.applied_seq
                        );
                        return;
                    }
                }
                self.dispatch(action);
            }
        }
    }

    fn start_initial_load(&mut self) {
        self.dispatch(Action::LoadStarted);

        let api = self.api.clone();
        let loopback = self.loopback.clone();
        let fallback = self.config.fallback_catalog.clone();
        tokio::spawn(async move {
            let action = match api.fetch_jobs(&FilterSpec::default()).await {
                Ok(jobs) => Action::CatalogLoaded(jobs),
                Err(e) => {
                    warn!("API error, falling back to bundled catalog: {e}");
                    Action::CatalogUnavailable { fallback }
                }
            };
            post(&loopback, Event::Apply(action));
        });
    }

    fn spawn_filter_fetch(&self, seq: u64, spec: FilterSpec) {
        let api = self.api.clone();
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            let action = match api.fetch_jobs(&spec).await {
                Ok(jobs) => Action::FilterResults { seq, jobs },
                Err(e) => {
                    warn!("Error fetching filtered jobs, filtering locally: {e}");
                    Action::FilterFailed { seq, spec }
                }
            };
            post(&loopback, Event::Apply(action));
        });
    }

    fn spawn_submission(&self, payload: ApplicationPayload, reply: SubmitReply) {
        let api = self.api.clone();
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            let result = api.submit_application(&payload).await;
            post(&loopback, Event::SubmissionFinished { result, reply });
        });
    }

    fn schedule_submission_reset(&mut self, application_id: String) {
        let loopback = self.loopback.clone();
        // Replacing the previous task aborts it
        self.pending_reset = Some(DelayedTask::schedule(
            self.config.submission_reset_after,
            async move {
                post(
                    &loopback,
                    Event::Apply(Action::SubmissionReset { application_id }),
                );
            },
        ));
    }
}

fn post(loopback: &mpsc::WeakUnboundedSender<Event>, event: Event) {
    match loopback.upgrade() {
        Some(tx) => {
            let _ = tx.send(event);
        }
        None => debug!("Client session already closed; dropping result"),
    }
}
