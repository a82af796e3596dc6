use crate::{MissingField, Mode, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub display: String,
    /// Rendered muted when true.
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub job_name_preview: String,
    pub uses_default_job_name: bool,
    pub mode: Mode,
    pub framework_filename: Option<String>,
    pub target_filename: Option<String>,
    pub hotspots: FieldView,
    pub design_loops: FieldView,
    pub ready: bool,
    pub missing: Vec<MissingField>,
    pub submit_enabled: bool,
    pub submission: SubmissionState,
}
