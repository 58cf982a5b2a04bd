//! Recency ordering and yearly blood-pressure averages over diagnosis history.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Measurement, Snapshot};
use crate::normalize::{display_number, PLACEHOLDER};

/// Mean blood pressure for one calendar year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearlyBpAverage {
    pub year: i32,
    pub mean_systolic: i32,
    pub mean_diastolic: i32,
}

/// Snapshots ordered most recent year first.
///
/// Unknown years sort as 0, i.e. after every known year. The sort is stable so
/// snapshots sharing a year keep their original relative order.
pub fn sort_by_recency(history: &[Snapshot]) -> Vec<&Snapshot> {
    let mut ordered: Vec<&Snapshot> = history.iter().collect();
    ordered.sort_by_key(|snapshot| Reverse(snapshot.sort_year()));
    ordered
}

/// Head of [`sort_by_recency`]; its measurements are the current vitals.
pub fn most_recent(history: &[Snapshot]) -> Option<&Snapshot> {
    sort_by_recency(history).into_iter().next()
}

#[derive(Default)]
struct YearBucket {
    systolic: Vec<f64>,
    diastolic: Vec<f64>,
}

/// Per-year mean systolic and diastolic values, oldest year first.
///
/// Snapshots without a known year are skipped. Each side is averaged over the
/// snapshots that actually report it, and a side with no readings averages to 0.
pub fn aggregate_yearly_bp(history: &[Snapshot]) -> Vec<YearlyBpAverage> {
    let mut buckets: BTreeMap<i32, YearBucket> = BTreeMap::new();

    for snapshot in history {
        let Some(year) = snapshot.known_year() else {
            continue;
        };
        let bucket = buckets.entry(year).or_default();
        if let Some(value) = snapshot.systolic_value() {
            bucket.systolic.push(value);
        }
        if let Some(value) = snapshot.diastolic_value() {
            bucket.diastolic.push(value);
        }
    }

    buckets
        .into_iter()
        .map(|(year, bucket)| YearlyBpAverage {
            year,
            mean_systolic: rounded_mean(&bucket.systolic),
            mean_diastolic: rounded_mean(&bucket.diastolic),
        })
        .collect()
}

/// Rounds halves up, so 122.5 becomes 123.
fn rounded_mean(values: &[f64]) -> i32 {
    if values.is_empty() {
        return 0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean + 0.5).floor() as i32
}

/// One row of the diagnosis history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryLine {
    /// `March 2024`, `2024`, `March` or the placeholder.
    pub title: String,
    /// `120/80`, with the placeholder on a missing side.
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
}

impl HistoryLine {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let month = snapshot.month.as_deref().unwrap_or_default();
        let year = snapshot
            .known_year()
            .map(|year| year.to_string())
            .unwrap_or_default();
        let title = format!("{month} {year}").trim().to_string();

        Self {
            title: if title.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                title
            },
            blood_pressure: format!(
                "{}/{}",
                display_number(snapshot.systolic_value()),
                display_number(snapshot.diastolic_value())
            ),
            heart_rate: measurement_value(snapshot.heart_rate.as_ref()),
            temperature: measurement_value(snapshot.temperature.as_ref()),
        }
    }
}

fn measurement_value(measurement: Option<&Measurement>) -> String {
    display_number(measurement.and_then(|m| m.value))
}

/// History rows in recency order.
pub fn history_lines(history: &[Snapshot]) -> Vec<HistoryLine> {
    sort_by_recency(history)
        .into_iter()
        .map(HistoryLine::from_snapshot)
        .collect()
}
