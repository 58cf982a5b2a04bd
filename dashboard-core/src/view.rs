//! Assembled dashboard view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Severity};
use crate::history::{
    aggregate_yearly_bp, history_lines, sort_by_recency, HistoryLine, YearlyBpAverage,
};
use crate::model::{Measurement, PatientRecord, Snapshot};
use crate::normalize::{display_number, display_text, normalize, DiagnosticView, PatientProfile};

/// Which vital a [`VitalReading`] describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    RespiratoryRate,
    Temperature,
    Systolic,
    Diastolic,
}

impl VitalKind {
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::RespiratoryRate => "Respiratory Rate",
            VitalKind::Temperature => "Temperature",
            VitalKind::Systolic => "Systolic",
            VitalKind::Diastolic => "Diastolic",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "bpm",
            VitalKind::RespiratoryRate => "bpm",
            VitalKind::Temperature => "°F",
            VitalKind::Systolic | VitalKind::Diastolic => "mmHg",
        }
    }

    fn measurement(self, snapshot: &Snapshot) -> Option<&Measurement> {
        match self {
            VitalKind::HeartRate => snapshot.heart_rate.as_ref(),
            VitalKind::RespiratoryRate => snapshot.respiratory_rate.as_ref(),
            VitalKind::Temperature => snapshot.temperature.as_ref(),
            VitalKind::Systolic => snapshot
                .blood_pressure
                .as_ref()
                .and_then(|bp| bp.systolic.as_ref()),
            VitalKind::Diastolic => snapshot
                .blood_pressure
                .as_ref()
                .and_then(|bp| bp.diastolic.as_ref()),
        }
    }
}

const CURRENT_VITALS: [VitalKind; 5] = [
    VitalKind::HeartRate,
    VitalKind::RespiratoryRate,
    VitalKind::Temperature,
    VitalKind::Systolic,
    VitalKind::Diastolic,
];

/// One classified measurement of the latest snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalReading {
    pub kind: VitalKind,
    pub label: String,
    pub value: Option<f64>,
    pub display_value: String,
    pub levels: String,
    pub severity: Severity,
}

impl VitalReading {
    pub fn from_snapshot(kind: VitalKind, snapshot: &Snapshot) -> Self {
        let measurement = kind.measurement(snapshot);
        let value = measurement.and_then(|m| m.value);
        let levels = measurement.and_then(|m| m.levels.as_deref());

        Self {
            kind,
            label: kind.label().to_string(),
            value,
            display_value: display_number(value),
            levels: display_text(levels),
            severity: classify(levels),
        }
    }
}

/// Classified vitals for a snapshot; empty when there is none.
pub fn current_vitals(latest: Option<&Snapshot>) -> Vec<VitalReading> {
    let Some(snapshot) = latest else {
        return Vec::new();
    };
    CURRENT_VITALS
        .iter()
        .map(|kind| VitalReading::from_snapshot(*kind, snapshot))
        .collect()
}

/// Everything the dashboard renders for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub profile: PatientProfile,
    pub latest: Option<Snapshot>,
    pub current_vitals: Vec<VitalReading>,
    /// Most recent first.
    pub history: Vec<Snapshot>,
    pub history_lines: Vec<HistoryLine>,
    /// Oldest year first; the x-axis of the trend chart.
    pub yearly_bp: Vec<YearlyBpAverage>,
    pub diagnostics: Vec<DiagnosticView>,
    pub lab_results: Vec<String>,
}

impl DashboardView {
    /// Run the full pipeline over a record. Same input, same output.
    pub fn build(record: &PatientRecord) -> Self {
        let normalized = normalize(record);
        let ordered = sort_by_recency(&normalized.history);
        let latest = ordered.first().map(|snapshot| (*snapshot).clone());

        Self {
            current_vitals: current_vitals(latest.as_ref()),
            history_lines: history_lines(&normalized.history),
            yearly_bp: aggregate_yearly_bp(&normalized.history),
            history: ordered.into_iter().cloned().collect(),
            latest,
            profile: normalized.profile,
            diagnostics: normalized.diagnostics,
            lab_results: normalized.lab_results,
        }
    }

    /// Reading of one vital from the latest snapshot.
    pub fn vital(&self, kind: VitalKind) -> Option<&VitalReading> {
        self.current_vitals.iter().find(|reading| reading.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BloodPressure;

    fn record() -> PatientRecord {
        PatientRecord {
            name: Some("Jessica Taylor".into()),
            diagnosis_history: vec![
                Snapshot {
                    month: Some("February".into()),
                    year: Some(2023),
                    heart_rate: Some(Measurement::new(70.0, "Normal")),
                    ..Snapshot::default()
                },
                Snapshot {
                    month: Some("March".into()),
                    year: Some(2024),
                    heart_rate: Some(Measurement::new(78.0, "Lower than Average")),
                    respiratory_rate: Some(Measurement::new(20.0, "Normal")),
                    temperature: Some(Measurement::new(98.6, "Normal")),
                    blood_pressure: Some(BloodPressure {
                        systolic: Some(Measurement::new(160.0, "Higher than Average")),
                        diastolic: Some(Measurement::new(78.0, "Critical")),
                    }),
                },
            ],
            ..PatientRecord::default()
        }
    }

    #[test]
    fn current_vitals_come_from_most_recent_year() {
        let view = DashboardView::build(&record());

        assert_eq!(view.latest.as_ref().and_then(|s| s.year), Some(2024));
        let heart = view.vital(VitalKind::HeartRate).expect("heart rate");
        assert_eq!(heart.display_value, "78");
        assert_eq!(heart.severity, Severity::Warning);
        assert_eq!(
            view.vital(VitalKind::Temperature).map(|r| r.display_value.as_str()),
            Some("98.6")
        );
        assert_eq!(
            view.vital(VitalKind::Systolic).map(|r| r.severity),
            Some(Severity::Warning)
        );
        assert_eq!(
            view.vital(VitalKind::Diastolic).map(|r| r.severity),
            Some(Severity::Critical)
        );
    }

    #[test]
    fn history_is_most_recent_first_and_chart_ascending() {
        let view = DashboardView::build(&record());

        let years: Vec<_> = view.history.iter().filter_map(|s| s.year).collect();
        assert_eq!(years, vec![2024, 2023]);
        assert_eq!(view.history_lines[0].title, "March 2024");

        let chart_years: Vec<_> = view.yearly_bp.iter().map(|avg| avg.year).collect();
        assert_eq!(chart_years, vec![2023, 2024]);
        assert_eq!(view.yearly_bp[0].mean_systolic, 0);
    }

    #[test]
    fn missing_measurements_classify_as_unknown() {
        let snapshot = Snapshot {
            year: Some(2024),
            ..Snapshot::default()
        };
        let readings = current_vitals(Some(&snapshot));
        assert_eq!(readings.len(), 5);
        assert!(readings
            .iter()
            .all(|r| r.severity == Severity::Unknown && r.display_value == "—"));
    }

    #[test]
    fn empty_record_builds_an_empty_view() {
        let view = DashboardView::build(&PatientRecord::default());
        assert!(view.latest.is_none());
        assert!(view.current_vitals.is_empty());
        assert!(view.history_lines.is_empty());
        assert!(view.yearly_bp.is_empty());
    }

    #[test]
    fn pipeline_is_idempotent() {
        let record = record();
        assert_eq!(DashboardView::build(&record), DashboardView::build(&record));
    }
}
