use serde_json::Value;
use thiserror::Error;

/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The pipeline answered with a non-2xx status.
    #[error("HTTP {status} - {body}")]
    HttpStatus { status: u16, body: String },
    /// Connectivity, body read, decode or timeout failure.
    #[error("{0}")]
    Unknown(String),
}

impl SubmissionError {
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SubmissionError::Unknown(UNKNOWN_ERROR.to_string())
        } else {
            SubmissionError::Unknown(message)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::HttpStatus { status, .. } => Some(*status),
            SubmissionError::Unknown(_) => None,
        }
    }
}

/// Parsed body of a successful pipeline response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResponse(Value);

impl PipelineResponse {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, SubmissionError> {
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|err| SubmissionError::unknown(format!("invalid response body: {err}")))
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn job_name(&self) -> Option<&str> {
        self.0.pointer("/job/jobName").and_then(Value::as_str)
    }

    pub fn job_id(&self) -> Option<&str> {
        self.0.get("jobId").and_then(Value::as_str)
    }

    /// Pipeline stage that failed, when the backend reports `status: "error"`.
    pub fn stage(&self) -> Option<&str> {
        self.0.get("stage").and_then(Value::as_str)
    }

    pub fn is_stage_error(&self) -> bool {
        self.status() == Some("error")
    }

    /// Download URLs; non-string entries are skipped.
    pub fn artifacts(&self) -> Vec<&str> {
        self.0
            .get("artifacts")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Lifecycle of the single in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(PipelineResponse),
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Drops any previous outcome.
    pub fn begin(&mut self) {
        *self = SubmissionState::Submitting;
    }

    pub fn finish(&mut self, result: Result<PipelineResponse, SubmissionError>) {
        *self = match result {
            Ok(response) => SubmissionState::Succeeded(response),
            Err(err) => SubmissionState::Failed(err),
        };
    }

    /// Back to `Idle` when a request was pending; settled outcomes are kept.
    pub fn abandon(&mut self) {
        if self.is_submitting() {
            *self = SubmissionState::Idle;
        }
    }

    pub fn response(&self) -> Option<&PipelineResponse> {
        match self {
            SubmissionState::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
