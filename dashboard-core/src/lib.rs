//! Core pipeline turning a raw patient record into dashboard-ready views.
//!
//! Everything here is pure: no I/O, no clock, no shared state.

mod classify;
mod history;
mod model;
mod normalize;
mod view;

use serde::{Deserialize, Serialize};

pub use classify::{classify, DiagnosticStatus, Severity};
pub use history::{
    aggregate_yearly_bp, history_lines, most_recent, sort_by_recency, HistoryLine,
    YearlyBpAverage,
};
pub use model::{BloodPressure, DiagnosticEntry, Measurement, PatientRecord, Snapshot};
pub use normalize::{
    display_number, display_text, format_date_of_birth, normalize, DiagnosticView,
    NormalizedRecord, PatientProfile, PLACEHOLDER,
};
pub use view::{current_vitals, DashboardView, VitalKind, VitalReading};

/// Dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Patient to display, matched case-insensitively against the record name.
    pub patient_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            patient_name: "Jessica Taylor".to_string(),
        }
    }
}

/// Failures of the layers around the core. The core itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Patient {0:?} not found in the record store response")]
    PatientNotFound(String),
    #[error("Could not read record data: {0}")]
    Parse(String),
    #[error("Unexpected record data shape: {0}")]
    UnexpectedShape(String),
}
