//! Raw patient record as delivered by the record store.
//!
//! Every field is optional: the store is loosely structured and the pipeline
//! has to cope with whatever subset it receives.

use serde::{Deserialize, Serialize};

/// One patient's clinical record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PatientRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub insurance_type: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Dated snapshots in the order the store returned them.
    #[serde(default)]
    pub diagnosis_history: Vec<Snapshot>,
    #[serde(default)]
    pub diagnostic_list: Vec<DiagnosticEntry>,
    /// File names of lab reports.
    #[serde(default)]
    pub lab_results: Vec<String>,
}

/// A dated bundle of vitals.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub month: Option<String>,
    /// `None` and `Some(0)` both mean the year is unknown.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub heart_rate: Option<Measurement>,
    #[serde(default)]
    pub respiratory_rate: Option<Measurement>,
    #[serde(default)]
    pub temperature: Option<Measurement>,
    #[serde(default)]
    pub blood_pressure: Option<BloodPressure>,
}

impl Snapshot {
    /// Year used for ordering, with unknown years collapsed to 0.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    /// Year usable as an aggregation bucket.
    pub fn known_year(&self) -> Option<i32> {
        self.year.filter(|year| *year != 0)
    }

    pub fn systolic_value(&self) -> Option<f64> {
        self.blood_pressure
            .as_ref()
            .and_then(|bp| bp.systolic.as_ref())
            .and_then(|m| m.value)
    }

    pub fn diastolic_value(&self) -> Option<f64> {
        self.blood_pressure
            .as_ref()
            .and_then(|bp| bp.diastolic.as_ref())
            .and_then(|m| m.value)
    }
}

/// A single reading with its qualitative level text (e.g. "Higher than Average").
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Measurement {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub levels: Option<String>,
}

impl Measurement {
    pub fn new(value: f64, levels: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            levels: Some(levels.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BloodPressure {
    #[serde(default)]
    pub systolic: Option<Measurement>,
    #[serde(default)]
    pub diastolic: Option<Measurement>,
}

/// Entry of the patient's diagnostic list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiagnosticEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
