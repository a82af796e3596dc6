//! RFantibody core: job configuration model, validation and the pure submit state machine.
mod config;
mod effect;
mod field;
mod msg;
mod request;
mod state;
mod submission;
mod update;
mod validate;
mod view_model;

pub use config::{
    generate_default_job_name, parse_design_count, Field, FileSlot, JobConfiguration, Mode,
    ParseModeError, StructureFile, INITIAL_DESIGN_COUNT,
};
pub use effect::Effect;
pub use field::{FieldDefaults, PlaceholderField, DEFAULT_DESIGN_LOOPS, DEFAULT_HOTSPOTS};
pub use msg::Msg;
pub use request::SubmissionRequest;
pub use state::AppState;
pub use submission::{PipelineResponse, SubmissionError, SubmissionState, UNKNOWN_ERROR};
pub use update::update;
pub use validate::{is_complete, missing_fields, MissingField};
pub use view_model::{FieldView, FormView};
