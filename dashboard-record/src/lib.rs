//! Record-store JSON to `DashboardView` adapter.
//!
//! The store returns a loosely typed list of patients. Extraction walks the
//! `serde_json::Value` tree and tolerates missing or oddly typed fields instead
//! of failing the whole payload.

use dashboard_core::{
    display_text, BloodPressure, DashboardConfig, DashboardError, DashboardView,
    DiagnosticEntry, Measurement, PatientRecord, Snapshot,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sidebar entry for one patient of the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSummary {
    pub name: String,
    pub profile_picture: Option<String>,
    /// `Female • 28`
    pub subtitle: String,
    pub active: bool,
}

/// Selected patient's dashboard plus the roster it was picked from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub dashboard: DashboardView,
    pub patients: Vec<PatientSummary>,
}

/// Summarize the store response from a JSON string.
pub fn summarize_patients_str(
    patients_json: &str,
    config: &DashboardConfig,
) -> Result<DashboardSummary, DashboardError> {
    let value: Value = serde_json::from_str(patients_json)
        .map_err(|err| DashboardError::Parse(err.to_string()))?;
    summarize_patients_value(&value, config)
}

/// Summarize the store response from a `serde_json::Value`.
pub fn summarize_patients_value(
    patients: &Value,
    config: &DashboardConfig,
) -> Result<DashboardSummary, DashboardError> {
    let records = parse_patients(patients)?;
    let selected = find_patient(&records, &config.patient_name)?;
    let dashboard = DashboardView::build(selected);

    tracing::debug!(
        patient = %dashboard.profile.name,
        snapshots = dashboard.history.len(),
        years = dashboard.yearly_bp.len(),
        diagnostics = dashboard.diagnostics.len(),
        "built dashboard view"
    );

    let patients = records
        .iter()
        .map(|record| summarize_roster_entry(record, &config.patient_name))
        .collect();

    Ok(DashboardSummary {
        dashboard,
        patients,
    })
}

/// Parse the store payload: an array of patients or a single patient object.
pub fn parse_patients(value: &Value) -> Result<Vec<PatientRecord>, DashboardError> {
    match value {
        Value::Array(entries) => Ok(entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry.as_object() {
                Some(object) => Some(parse_patient(object)),
                None => {
                    tracing::warn!(index, "skipping non-object patient entry");
                    None
                }
            })
            .collect()),
        Value::Object(object) => Ok(vec![parse_patient(object)]),
        other => Err(DashboardError::UnexpectedShape(format!(
            "expected a patient list, received {}",
            json_kind(other)
        ))),
    }
}

/// Case-insensitive exact match on the patient's name.
pub fn find_patient<'a>(
    records: &'a [PatientRecord],
    name: &str,
) -> Result<&'a PatientRecord, DashboardError> {
    let found = records.iter().find(|record| names_match(record, name));

    match found {
        Some(record) => {
            tracing::debug!(patient = name, "patient located");
            Ok(record)
        }
        None => {
            tracing::warn!(patient = name, total = records.len(), "patient not found");
            Err(DashboardError::PatientNotFound(name.to_string()))
        }
    }
}

fn names_match(record: &PatientRecord, name: &str) -> bool {
    record
        .name
        .as_deref()
        .is_some_and(|candidate| candidate.to_lowercase() == name.trim().to_lowercase())
}

fn parse_patient(object: &Map<String, Value>) -> PatientRecord {
    PatientRecord {
        name: extract_string(object.get("name")),
        gender: extract_string(object.get("gender")),
        age: extract_integer(object.get("age")).and_then(|age| u32::try_from(age).ok()),
        date_of_birth: extract_string(object.get("date_of_birth")),
        phone_number: extract_string(object.get("phone_number")),
        emergency_contact: extract_string(object.get("emergency_contact")),
        insurance_type: extract_string(object.get("insurance_type")),
        profile_picture: extract_string(object.get("profile_picture")),
        diagnosis_history: extract_objects(object.get("diagnosis_history"), "diagnosis_history")
            .map(parse_snapshot)
            .collect(),
        diagnostic_list: extract_objects(object.get("diagnostic_list"), "diagnostic_list")
            .map(parse_diagnostic)
            .collect(),
        lab_results: array_items(object.get("lab_results"))
            .iter()
            .filter_map(|item| extract_string(Some(item)))
            .collect(),
    }
}

fn parse_snapshot(object: &Map<String, Value>) -> Snapshot {
    Snapshot {
        month: extract_string(object.get("month")),
        year: extract_integer(object.get("year")).and_then(|year| i32::try_from(year).ok()),
        heart_rate: extract_measurement(object.get("heart_rate")),
        respiratory_rate: extract_measurement(object.get("respiratory_rate")),
        temperature: extract_measurement(object.get("temperature")),
        blood_pressure: object
            .get("blood_pressure")
            .and_then(Value::as_object)
            .map(|bp| BloodPressure {
                systolic: extract_measurement(bp.get("systolic")),
                diastolic: extract_measurement(bp.get("diastolic")),
            }),
    }
}

fn parse_diagnostic(object: &Map<String, Value>) -> DiagnosticEntry {
    DiagnosticEntry {
        name: extract_string(object.get("name")),
        description: extract_string(object.get("description")),
        status: extract_string(object.get("status")),
    }
}

fn extract_measurement(value: Option<&Value>) -> Option<Measurement> {
    let object = value?.as_object()?;
    Some(Measurement {
        value: extract_number(object.get("value")),
        levels: extract_string(object.get("levels")),
    })
}

/// Strings as-is, numbers and booleans stringified, everything else absent.
fn extract_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// JSON numbers, or strings that parse as one (`"98.6"`).
fn extract_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Whole numbers only; `2023.5` or `1e30` are treated as absent.
fn extract_integer(value: Option<&Value>) -> Option<i64> {
    let number = extract_number(value)?;
    if number.fract() != 0.0 || number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

fn array_items(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn extract_objects<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
    array_items(value).iter().filter_map(move |item| {
        let object = item.as_object();
        if object.is_none() {
            tracing::warn!(field, "skipping non-object entry");
        }
        object
    })
}

fn summarize_roster_entry(record: &PatientRecord, active_name: &str) -> PatientSummary {
    let name = display_text(record.name.as_deref());
    let gender = record.gender.clone().unwrap_or_default();
    let age = record.age.map(|age| age.to_string()).unwrap_or_default();

    PatientSummary {
        active: names_match(record, active_name),
        name,
        profile_picture: record.profile_picture.clone(),
        subtitle: format!("{gender} • {age}"),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_may_arrive_as_strings() {
        let patients = json!([{
            "name": "Jessica Taylor",
            "age": "28",
            "diagnosis_history": [{
                "month": "March",
                "year": "2024",
                "temperature": { "value": "98.6", "levels": "Normal" }
            }]
        }]);

        let records = parse_patients(&patients).expect("parse");
        assert_eq!(records[0].age, Some(28));
        let snapshot = &records[0].diagnosis_history[0];
        assert_eq!(snapshot.year, Some(2024));
        assert_eq!(
            snapshot.temperature.as_ref().and_then(|t| t.value),
            Some(98.6)
        );
    }

    #[test]
    fn fractional_or_out_of_range_years_are_unknown() {
        let patients = json!([{
            "name": "Jessica Taylor",
            "age": 28.5,
            "diagnosis_history": [
                { "year": 2023, "blood_pressure": { "systolic": { "value": 120 } } },
                { "year": 2023.5, "blood_pressure": { "systolic": { "value": 140 } } },
                { "year": "1e12", "blood_pressure": { "systolic": { "value": 100 } } },
                { "year": "2022.0", "blood_pressure": { "systolic": { "value": 110 } } }
            ]
        }]);

        let records = parse_patients(&patients).expect("parse");
        let record = &records[0];
        assert_eq!(record.age, None);
        let years: Vec<_> = record.diagnosis_history.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![Some(2023), None, None, Some(2022)]);

        let trend: Vec<_> = DashboardView::build(record)
            .yearly_bp
            .iter()
            .map(|avg| (avg.year, avg.mean_systolic))
            .collect();
        assert_eq!(trend, vec![(2022, 110), (2023, 120)]);
    }

    #[test]
    fn negative_age_is_absent() {
        let records = parse_patients(&json!({ "name": "Jessica Taylor", "age": -3 }))
            .expect("parse");
        assert_eq!(records[0].age, None);
    }

    #[test]
    fn non_object_patients_are_skipped() {
        let records = parse_patients(&json!([1, null, { "name": "Jessica Taylor" }, "x"]))
            .expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Jessica Taylor"));
    }

    #[test]
    fn malformed_collections_become_empty() {
        let patients = json!({
            "name": "Jessica Taylor",
            "diagnosis_history": "n/a",
            "diagnostic_list": [42, { "name": "Asthma", "status": "Cured" }],
            "lab_results": ["CT Scans", null, 7]
        });

        let records = parse_patients(&patients).expect("parse");
        let record = &records[0];
        assert!(record.diagnosis_history.is_empty());
        assert_eq!(record.diagnostic_list.len(), 1);
        assert_eq!(record.lab_results, vec!["CT Scans", "7"]);
    }

    #[test]
    fn scalar_payload_is_rejected() {
        let err = parse_patients(&json!("nope")).expect_err("scalar payload");
        assert!(matches!(err, DashboardError::UnexpectedShape(_)));
    }

    #[test]
    fn lookup_ignores_case() {
        let records = vec![PatientRecord {
            name: Some("JESSICA TAYLOR".into()),
            ..PatientRecord::default()
        }];
        assert!(find_patient(&records, "jessica taylor").is_ok());
        assert!(matches!(
            find_patient(&records, "Emily Williams"),
            Err(DashboardError::PatientNotFound(_))
        ));
    }

    #[test]
    fn roster_marks_active_patient() {
        let patients = json!([
            { "name": "Emily Williams", "gender": "Female", "age": 18 },
            { "name": "Jessica Taylor", "gender": "Female", "age": 28 }
        ]);

        let summary =
            summarize_patients_value(&patients, &DashboardConfig::default()).expect("summary");
        assert_eq!(summary.patients.len(), 2);
        assert!(!summary.patients[0].active);
        assert!(summary.patients[1].active);
        assert_eq!(summary.patients[1].subtitle, "Female • 28");
        assert_eq!(summary.dashboard.profile.name, "Jessica Taylor");
    }
}
