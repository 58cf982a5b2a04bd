//! Display-safe view over a raw [`PatientRecord`].

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::classify::DiagnosticStatus;
use crate::model::{PatientRecord, Snapshot};

/// Sentinel shown wherever a value is missing.
pub const PLACEHOLDER: &str = "—";

/// Patient identity block with every text field resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
    pub profile_picture: Option<String>,
    /// Short line under the profile picture, e.g. `Female • August 23, 1996`.
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticView {
    pub name: String,
    pub description: String,
    pub status: String,
    pub category: DiagnosticStatus,
}

/// Output of [`normalize`]. Owns its data; the input record is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    pub profile: PatientProfile,
    /// Snapshots in the store's original order.
    pub history: Vec<Snapshot>,
    pub diagnostics: Vec<DiagnosticView>,
    pub lab_results: Vec<String>,
}

pub fn normalize(record: &PatientRecord) -> NormalizedRecord {
    let gender = display_text(record.gender.as_deref());
    let date_of_birth = format_date_of_birth(record.date_of_birth.as_deref());
    let bio = format!("{gender} • {date_of_birth}");

    let profile = PatientProfile {
        name: display_text(record.name.as_deref()),
        gender,
        age: record
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        date_of_birth,
        phone_number: display_text(record.phone_number.as_deref()),
        emergency_contact: display_text(record.emergency_contact.as_deref()),
        insurance_type: display_text(record.insurance_type.as_deref()),
        profile_picture: record
            .profile_picture
            .clone()
            .filter(|url| !url.is_empty()),
        bio,
    };

    let diagnostics = record
        .diagnostic_list
        .iter()
        .map(|entry| DiagnosticView {
            name: display_text(entry.name.as_deref()),
            description: entry.description.clone().unwrap_or_default(),
            status: display_text(entry.status.as_deref()),
            category: DiagnosticStatus::from_status(entry.status.as_deref()),
        })
        .collect();

    NormalizedRecord {
        profile,
        history: record.diagnosis_history.clone(),
        diagnostics,
        lab_results: record.lab_results.clone(),
    }
}

/// Text or the placeholder; empty strings count as missing.
pub fn display_text(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Number without a trailing `.0` (`78`, `98.6`), or the placeholder.
pub fn display_number(value: Option<f64>) -> String {
    value
        .map(|number| number.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Long-form date such as `August 23, 1996`.
///
/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY` or an RFC 3339 timestamp. Anything else is
/// returned as-is so the user still sees what the store sent.
pub fn format_date_of_birth(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
