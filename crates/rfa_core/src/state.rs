use chrono::{DateTime, Utc};

use crate::view_model::{FieldView, FormView};
use crate::{
    is_complete, missing_fields, Field, FieldDefaults, FileSlot, JobConfiguration,
    SubmissionState,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) config: JobConfiguration,
    pub(crate) submission: SubmissionState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: FieldDefaults) -> Self {
        Self {
            config: JobConfiguration::new(defaults),
            submission: SubmissionState::Idle,
        }
    }

    pub fn config(&self) -> &JobConfiguration {
        &self.config
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_ready(&self) -> bool {
        is_complete(&self.config)
    }

    pub fn view(&self, now: DateTime<Utc>) -> FormView {
        let config = &self.config;
        let ready = is_complete(config);
        FormView {
            job_name_preview: config.effective_job_name(now),
            uses_default_job_name: config.effective_value(Field::JobName).trim().is_empty(),
            mode: config.mode(),
            framework_filename: config
                .file(FileSlot::Framework)
                .map(|file| file.filename.clone()),
            target_filename: config
                .file(FileSlot::Target)
                .map(|file| file.filename.clone()),
            hotspots: field_view(config, Field::Hotspots),
            design_loops: field_view(config, Field::DesignLoops),
            ready,
            missing: missing_fields(config),
            submit_enabled: ready && !self.submission.is_submitting(),
            submission: self.submission.clone(),
        }
    }
}

fn field_view(config: &JobConfiguration, field: Field) -> FieldView {
    FieldView {
        display: config.effective_value(field).to_string(),
        is_placeholder: config.is_placeholder(field),
    }
}
