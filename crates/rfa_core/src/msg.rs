use chrono::{DateTime, Utc};

use crate::{Field, FileSlot, Mode, PipelineResponse, StructureFile, SubmissionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Input gained focus.
    FieldFocused(Field),
    /// User edited a text input.
    FieldChanged { field: Field, value: String },
    /// Input lost focus.
    FieldBlurred(Field),
    ModeSelected(Mode),
    /// File picker or drop target produced a file (or cleared one).
    FileSelected {
        slot: FileSlot,
        file: Option<StructureFile>,
    },
    /// User clicked Run Job; `now` names the job when no name was entered.
    RunClicked { now: DateTime<Utc> },
    /// Outcome of the request started by `Effect::SubmitJob`.
    SubmissionFinished(Result<PipelineResponse, SubmissionError>),
    /// The host stopped waiting for the pending request; clears `Submitting`.
    SubmissionAbandoned,
}
