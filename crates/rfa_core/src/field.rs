/// Hotspot residues shown while the hotspot input is still in placeholder mode.
pub const DEFAULT_HOTSPOTS: &str = "A21, B14-21";

/// CDR loop constraints shown while the design-loop input is still in placeholder mode.
pub const DEFAULT_DESIGN_LOOPS: &str = "H1_, H2.7, H3.5-13, L1.10-15, L2.10-15, L3.10-15";

/// Values a placeholder field resolves to until the user provides their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefaults {
    pub hotspots: String,
    pub design_loops: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            hotspots: DEFAULT_HOTSPOTS.to_string(),
            design_loops: DEFAULT_DESIGN_LOOPS.to_string(),
        }
    }
}

/// Input that shows a non-committal default until the user interacts with it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaceholderField {
    #[default]
    Default,
    UserProvided(String),
}

impl PlaceholderField {
    /// First interaction swaps the ghost default for an empty input.
    pub fn focus(&mut self) {
        if self.is_placeholder() {
            *self = PlaceholderField::UserProvided(String::new());
        }
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        *self = PlaceholderField::UserProvided(raw.into());
    }

    /// Leaving the input blank reverts to the default.
    pub fn blur(&mut self) {
        if let PlaceholderField::UserProvided(raw) = self {
            if raw.trim().is_empty() {
                *self = PlaceholderField::Default;
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PlaceholderField::Default)
    }

    /// What the user typed; empty while in placeholder mode.
    pub fn raw(&self) -> &str {
        match self {
            PlaceholderField::Default => "",
            PlaceholderField::UserProvided(raw) => raw,
        }
    }

    pub fn effective<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            PlaceholderField::Default => default,
            PlaceholderField::UserProvided(raw) => raw,
        }
    }
}
