use crate::{Field, FileSlot, JobConfiguration};

/// Required inputs that currently block submission, in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    FrameworkStructure,
    TargetStructure,
    Hotspots,
    RfDiffusionDesigns,
    ProteinMpnnDesigns,
}

impl MissingField {
    pub fn label(self) -> &'static str {
        match self {
            MissingField::FrameworkStructure => "Framework Structure",
            MissingField::TargetStructure => "Target Structure",
            MissingField::Hotspots => "Hotspots",
            MissingField::RfDiffusionDesigns => "RFdiffusion Backbone Designs",
            MissingField::ProteinMpnnDesigns => "ProteinMPNN Designs",
        }
    }
}

/// Checklist of every failing requirement. Empty means the job can be submitted.
pub fn missing_fields(config: &JobConfiguration) -> Vec<MissingField> {
    let checks = [
        (
            config.file(FileSlot::Framework).is_some(),
            MissingField::FrameworkStructure,
        ),
        (
            config.file(FileSlot::Target).is_some(),
            MissingField::TargetStructure,
        ),
        (
            !config.effective_value(Field::Hotspots).trim().is_empty(),
            MissingField::Hotspots,
        ),
        (
            config.design_count(Field::RfDiffusionDesigns).is_some(),
            MissingField::RfDiffusionDesigns,
        ),
        (
            config.design_count(Field::ProteinMpnnDesigns).is_some(),
            MissingField::ProteinMpnnDesigns,
        ),
    ];

    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, missing)| missing)
        .collect()
}

pub fn is_complete(config: &JobConfiguration) -> bool {
    missing_fields(config).is_empty()
}
