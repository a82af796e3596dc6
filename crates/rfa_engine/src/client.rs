use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rfa_core::{
    missing_fields, update, AppState, Effect, FormView, JobConfiguration, Msg, SubmissionState,
};
use rfa_logging::{rfa_debug, rfa_info, rfa_warn};

use crate::{encode, PipelineTransport};

/// Source of "now" for default job names.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Hosts the form state and performs the pipeline request its effects ask for.
///
/// `submit` takes `&mut self`, so a client never has two requests in flight.
pub struct SubmissionClient {
    transport: Arc<dyn PipelineTransport>,
    clock: Clock,
    state: AppState,
}

impl SubmissionClient {
    pub fn new(transport: Arc<dyn PipelineTransport>) -> Self {
        Self {
            transport,
            clock: system_clock(),
            state: AppState::new(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &JobConfiguration {
        self.state.config()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.state.submission()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submission().is_submitting()
    }

    pub fn view(&self) -> FormView {
        self.state.view((self.clock)())
    }

    /// Applies one message and hands back the effects without running them.
    pub fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    /// Applies a message and runs every effect it produces, feeding results back in.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            for effect in self.apply(msg) {
                inbox.push_back(self.run_effect(effect).await);
            }
        }
    }

    /// Submits the current configuration. Does nothing when it is incomplete.
    ///
    /// A `Submitting` state seen here belongs to a `submit` future that was dropped
    /// before its response arrived; it is abandoned so the new request can go out.
    pub async fn submit(&mut self) -> &SubmissionState {
        let missing = missing_fields(self.state.config());
        if !missing.is_empty() {
            rfa_debug!("Submit ignored, missing fields: {:?}", missing);
            return self.state.submission();
        }
        if self.is_submitting() {
            rfa_warn!("Abandoning previous submission that never completed");
            self.apply(Msg::SubmissionAbandoned);
        }
        let now = (self.clock)();
        self.dispatch(Msg::RunClicked { now }).await;
        self.state.submission()
    }

    async fn run_effect(&self, effect: Effect) -> Msg {
        match effect {
            Effect::SubmitJob(request) => {
                let job_name = request.job_name.clone();
                rfa_info!(
                    "Submitting job {} mode={} framework={} ({} bytes) target={} ({} bytes)",
                    job_name,
                    request.mode,
                    request.framework_file.filename,
                    request.framework_file.len(),
                    request.target_file.filename,
                    request.target_file.len()
                );
                let result = self.transport.send(encode(request)).await;
                match &result {
                    Ok(response) => rfa_info!(
                        "Job {} accepted with status {}",
                        job_name,
                        response.status().unwrap_or("<none>")
                    ),
                    Err(err) => rfa_warn!("Job {} failed: {}", job_name, err),
                }
                Msg::SubmissionFinished(result)
            }
        }
    }
}
