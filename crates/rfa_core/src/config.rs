use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::field::{FieldDefaults, PlaceholderField};

/// Design counts start at one backbone and one sequence per backbone.
pub const INITIAL_DESIGN_COUNT: &str = "1";

const JOB_NAME_PREFIX: &str = "RFantibody_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Antibody,
    Nanobody,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Antibody => "Antibody",
            Mode::Nanobody => "Nanobody",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?} (expected Antibody or Nanobody)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "antibody" => Ok(Mode::Antibody),
            "nanobody" => Ok(Mode::Nanobody),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// A structure file handed over by the file-acquisition collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl StructureFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text inputs of the job form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobName,
    Hotspots,
    DesignLoops,
    RfDiffusionDesigns,
    ProteinMpnnDesigns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    Framework,
    Target,
}

/// Raw form state plus the rules that derive effective values from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfiguration {
    defaults: FieldDefaults,
    job_name: String,
    mode: Mode,
    framework_file: Option<StructureFile>,
    target_file: Option<StructureFile>,
    hotspots: PlaceholderField,
    design_loops: PlaceholderField,
    rf_diffusion_designs: String,
    protein_mpnn_designs: String,
}

impl Default for JobConfiguration {
    fn default() -> Self {
        Self::new(FieldDefaults::default())
    }
}

impl JobConfiguration {
    pub fn new(defaults: FieldDefaults) -> Self {
        Self {
            defaults,
            job_name: String::new(),
            mode: Mode::default(),
            framework_file: None,
            target_file: None,
            hotspots: PlaceholderField::Default,
            design_loops: PlaceholderField::Default,
            rf_diffusion_designs: INITIAL_DESIGN_COUNT.to_string(),
            protein_mpnn_designs: INITIAL_DESIGN_COUNT.to_string(),
        }
    }

    pub fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    /// Stores the raw value; placeholder fields leave placeholder mode.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::JobName => self.job_name = raw,
            Field::Hotspots => self.hotspots.set(raw),
            Field::DesignLoops => self.design_loops.set(raw),
            Field::RfDiffusionDesigns => self.rf_diffusion_designs = raw,
            Field::ProteinMpnnDesigns => self.protein_mpnn_designs = raw,
        }
    }

    pub fn focus(&mut self, field: Field) {
        if let Some(slot) = self.placeholder_mut(field) {
            slot.focus();
        }
    }

    pub fn blur(&mut self, field: Field) {
        if let Some(slot) = self.placeholder_mut(field) {
            slot.blur();
        }
    }

    pub fn is_placeholder(&self, field: Field) -> bool {
        self.placeholder(field)
            .is_some_and(PlaceholderField::is_placeholder)
    }

    /// Untrimmed value the form would submit for `field`.
    ///
    /// For `JobName` this is the raw input; use [`Self::effective_job_name`] for the
    /// name that is actually sent.
    pub fn effective_value(&self, field: Field) -> &str {
        match field {
            Field::JobName => &self.job_name,
            Field::Hotspots => self.hotspots.effective(&self.defaults.hotspots),
            Field::DesignLoops => self.design_loops.effective(&self.defaults.design_loops),
            Field::RfDiffusionDesigns => &self.rf_diffusion_designs,
            Field::ProteinMpnnDesigns => &self.protein_mpnn_designs,
        }
    }

    /// What the user actually typed, ignoring defaults.
    pub fn raw_value(&self, field: Field) -> &str {
        match field {
            Field::Hotspots => self.hotspots.raw(),
            Field::DesignLoops => self.design_loops.raw(),
            other => self.effective_value(other),
        }
    }

    pub fn effective_job_name(&self, now: DateTime<Utc>) -> String {
        let trimmed = self.job_name.trim();
        if trimmed.is_empty() {
            generate_default_job_name(now)
        } else {
            trimmed.to_string()
        }
    }

    /// Parsed design count for one of the two count fields.
    pub fn design_count(&self, field: Field) -> Option<u64> {
        match field {
            Field::RfDiffusionDesigns | Field::ProteinMpnnDesigns => {
                parse_design_count(self.effective_value(field))
            }
            _ => None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn file(&self, slot: FileSlot) -> Option<&StructureFile> {
        match slot {
            FileSlot::Framework => self.framework_file.as_ref(),
            FileSlot::Target => self.target_file.as_ref(),
        }
    }

    pub fn set_file(&mut self, slot: FileSlot, file: Option<StructureFile>) {
        match slot {
            FileSlot::Framework => self.framework_file = file,
            FileSlot::Target => self.target_file = file,
        }
    }

    fn placeholder(&self, field: Field) -> Option<&PlaceholderField> {
        match field {
            Field::Hotspots => Some(&self.hotspots),
            Field::DesignLoops => Some(&self.design_loops),
            _ => None,
        }
    }

    fn placeholder_mut(&mut self, field: Field) -> Option<&mut PlaceholderField> {
        match field {
            Field::Hotspots => Some(&mut self.hotspots),
            Field::DesignLoops => Some(&mut self.design_loops),
            _ => None,
        }
    }
}

/// `RFantibody_` followed by the UTC timestamp at second precision, `:` replaced by `-`.
pub fn generate_default_job_name(now: DateTime<Utc>) -> String {
    format!("{JOB_NAME_PREFIX}{}", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Base-10 count greater than zero; anything else is `None`.
pub fn parse_design_count(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|count| *count > 0)
}
