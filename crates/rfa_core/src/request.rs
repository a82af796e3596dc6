use chrono::{DateTime, Utc};

use crate::{missing_fields, Field, FileSlot, JobConfiguration, MissingField, Mode, StructureFile};

/// Effective values of a complete configuration, resolved at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub job_name: String,
    pub mode: Mode,
    pub hotspots: String,
    pub design_loops: String,
    pub rf_diffusion_designs: u64,
    pub protein_mpnn_designs: u64,
    pub framework_file: StructureFile,
    pub target_file: StructureFile,
}

impl SubmissionRequest {
    /// Resolves defaults and parses counts, or returns the checklist that blocks submission.
    pub fn resolve(
        config: &JobConfiguration,
        now: DateTime<Utc>,
    ) -> Result<Self, Vec<MissingField>> {
        let missing = missing_fields(config);
        match (
            config.file(FileSlot::Framework),
            config.file(FileSlot::Target),
            config.design_count(Field::RfDiffusionDesigns),
            config.design_count(Field::ProteinMpnnDesigns),
        ) {
            (Some(framework), Some(target), Some(rf_diffusion), Some(protein_mpnn))
                if missing.is_empty() =>
            {
                Ok(Self {
                    job_name: config.effective_job_name(now),
                    mode: config.mode(),
                    hotspots: config.effective_value(Field::Hotspots).trim().to_string(),
                    design_loops: config
                        .effective_value(Field::DesignLoops)
                        .trim()
                        .to_string(),
                    rf_diffusion_designs: rf_diffusion,
                    protein_mpnn_designs: protein_mpnn,
                    framework_file: framework.clone(),
                    target_file: target.clone(),
                })
            }
            _ => Err(missing),
        }
    }
}
