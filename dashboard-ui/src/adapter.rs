//! Presentation mapping that does not need a browser.

use dashboard_core::{DashboardView, DiagnosticStatus, Severity, YearlyBpAverage};
use serde::{Deserialize, Serialize};

/// CSS class for a vital's level text. `Unknown` gets no marker.
pub fn style_token(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Normal => Some("good"),
        Severity::Warning => Some("warn"),
        Severity::Critical => Some("bad"),
        Severity::Unknown => None,
    }
}

/// CSS class for a diagnostic status badge.
pub fn status_class(status: DiagnosticStatus) -> Option<&'static str> {
    match status {
        DiagnosticStatus::Observation => Some("observation"),
        DiagnosticStatus::Treated => Some("treated"),
        DiagnosticStatus::Critical => Some("critical"),
        DiagnosticStatus::Unspecified => None,
    }
}

/// Two-line trend data, one point per year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub systolic: Vec<i32>,
    pub diastolic: Vec<i32>,
}

impl ChartSeries {
    pub fn from_averages(averages: &[YearlyBpAverage]) -> Self {
        Self {
            labels: averages.iter().map(|avg| avg.year.to_string()).collect(),
            systolic: averages.iter().map(|avg| avg.mean_systolic).collect(),
            diastolic: averages.iter().map(|avg| avg.mean_diastolic).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Vertical range of the trend chart in mmHg, widened to fit outliers.
const SUGGESTED_MIN: i32 = 60;
const SUGGESTED_MAX: i32 = 180;

/// State of one render pass. Built fresh on every render and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSession {
    pub chart: ChartSeries,
    pub width: f64,
    pub height: f64,
    y_min: i32,
    y_max: i32,
}

impl RenderSession {
    pub fn new(view: &DashboardView, width: f64, height: f64) -> Self {
        let chart = ChartSeries::from_averages(&view.yearly_bp);
        let values = chart.systolic.iter().chain(chart.diastolic.iter()).copied();
        let y_min = values.clone().min().unwrap_or(SUGGESTED_MIN).min(SUGGESTED_MIN);
        let y_max = values.max().unwrap_or(SUGGESTED_MAX).max(SUGGESTED_MAX);

        Self {
            chart,
            width,
            height,
            y_min,
            y_max,
        }
    }

    pub fn y_range(&self) -> (i32, i32) {
        (self.y_min, self.y_max)
    }

    /// SVG `points` attribute for one series, spread evenly across the width.
    pub fn polyline_points(&self, series: &[i32]) -> String {
        let span = (f64::from(self.y_max) - f64::from(self.y_min)).max(1.0);
        let step = if series.len() > 1 {
            self.width / (series.len() - 1) as f64
        } else {
            0.0
        };

        series
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let x = if series.len() > 1 {
                    index as f64 * step
                } else {
                    self.width / 2.0
                };
                let offset = f64::from(*value) - f64::from(self.y_min);
                let y = self.height - (offset / span) * self.height;
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{BloodPressure, Measurement, PatientRecord, Snapshot};

    fn view_with(averages: Vec<YearlyBpAverage>) -> DashboardView {
        let mut view = DashboardView::build(&PatientRecord::default());
        view.yearly_bp = averages;
        view
    }

    #[test]
    fn severity_maps_to_style_tokens() {
        assert_eq!(style_token(Severity::Normal), Some("good"));
        assert_eq!(style_token(Severity::Warning), Some("warn"));
        assert_eq!(style_token(Severity::Critical), Some("bad"));
        assert_eq!(style_token(Severity::Unknown), None);
        assert_eq!(status_class(DiagnosticStatus::Treated), Some("treated"));
        assert_eq!(status_class(DiagnosticStatus::Unspecified), None);
    }

    #[test]
    fn chart_series_follow_year_order() {
        let series = ChartSeries::from_averages(&[
            YearlyBpAverage {
                year: 2022,
                mean_systolic: 110,
                mean_diastolic: 70,
            },
            YearlyBpAverage {
                year: 2023,
                mean_systolic: 125,
                mean_diastolic: 85,
            },
        ]);
        assert_eq!(series.labels, vec!["2022", "2023"]);
        assert_eq!(series.systolic, vec![110, 125]);
        assert_eq!(series.diastolic, vec![70, 85]);
    }

    #[test]
    fn range_widens_for_outliers() {
        let session = RenderSession::new(
            &view_with(vec![YearlyBpAverage {
                year: 2024,
                mean_systolic: 210,
                mean_diastolic: 0,
            }]),
            100.0,
            50.0,
        );
        assert_eq!(session.y_range(), (0, 210));

        let empty = RenderSession::new(&view_with(Vec::new()), 100.0, 50.0);
        assert_eq!(empty.y_range(), (SUGGESTED_MIN, SUGGESTED_MAX));
        assert!(empty.chart.is_empty());
    }

    #[test]
    fn polyline_spans_the_width() {
        let session = RenderSession::new(&view_with(Vec::new()), 100.0, 120.0);
        assert_eq!(session.polyline_points(&[60, 180]), "0.0,120.0 100.0,0.0");
        assert_eq!(session.polyline_points(&[120]), "50.0,60.0");
        assert_eq!(session.polyline_points(&[]), "");
    }

    #[test]
    fn extreme_readings_stay_on_the_chart() {
        let session = RenderSession::new(
            &view_with(vec![YearlyBpAverage {
                year: 2024,
                mean_systolic: i32::MIN,
                mean_diastolic: i32::MAX,
            }]),
            100.0,
            100.0,
        );
        assert_eq!(session.y_range(), (i32::MIN, i32::MAX));
        assert_eq!(session.polyline_points(&session.chart.systolic), "50.0,100.0");
        assert_eq!(session.polyline_points(&session.chart.diastolic), "50.0,0.0");
    }

    #[test]
    fn saturated_yearly_mean_renders_without_overflow() {
        let record = PatientRecord {
            diagnosis_history: vec![Snapshot {
                year: Some(2024),
                blood_pressure: Some(BloodPressure {
                    systolic: Some(Measurement::new(-3e9, "Lower than Average")),
                    diastolic: Some(Measurement::new(80.0, "Normal")),
                }),
                ..Snapshot::default()
            }],
            ..PatientRecord::default()
        };
        let view = DashboardView::build(&record);
        let session = RenderSession::new(&view, 100.0, 100.0);

        assert_eq!(session.y_range(), (i32::MIN, SUGGESTED_MAX));
        assert_eq!(session.polyline_points(&session.chart.systolic), "50.0,100.0");
        assert!(!session.polyline_points(&session.chart.diastolic).is_empty());
    }
}
