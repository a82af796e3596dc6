use crate::SubmissionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the resolved request to the pipeline endpoint.
    SubmitJob(SubmissionRequest),
}
