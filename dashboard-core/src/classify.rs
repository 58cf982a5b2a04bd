//! Free-text classification of vital levels and diagnostic statuses.

use serde::{Deserialize, Serialize};

/// Severity derived from a measurement's level text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Unknown,
    Normal,
    Warning,
    Critical,
}

/// Ordered rules, first match wins. "higher" must stay ahead of "high".
const LEVEL_RULES: [(&[&str], Severity); 4] = [
    (&["normal"], Severity::Normal),
    (&["higher"], Severity::Warning),
    (&["lower"], Severity::Warning),
    (&["critical", "high"], Severity::Critical),
];

/// Classify a measurement's `levels` text.
pub fn classify(levels: Option<&str>) -> Severity {
    let Some(text) = levels.filter(|text| !text.is_empty()) else {
        return Severity::Unknown;
    };
    let lowered = text.to_lowercase();

    LEVEL_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Unknown)
}

/// Display category of a diagnostic list entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticStatus {
    Observation,
    Treated,
    Critical,
    #[default]
    Unspecified,
}

const STATUS_RULES: [(&str, DiagnosticStatus); 3] = [
    ("observation", DiagnosticStatus::Observation),
    ("treated", DiagnosticStatus::Treated),
    ("critical", DiagnosticStatus::Critical),
];

impl DiagnosticStatus {
    /// Matching ignores case and whitespace ("Under Observation" -> "underobservation").
    pub fn from_status(status: Option<&str>) -> Self {
        let compact: String = status
            .unwrap_or_default()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        STATUS_RULES
            .iter()
            .find(|(needle, _)| compact.contains(needle))
            .map(|(_, status)| *status)
            .unwrap_or(DiagnosticStatus::Unspecified)
    }
}
