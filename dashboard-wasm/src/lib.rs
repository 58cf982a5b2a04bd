//! WASM <-> JavaScript bridge for the dashboard pipeline, framework agnostic.

use dashboard_core::{DashboardConfig, DashboardError};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsDashboardConfig {
    #[serde(default)]
    patient_name: Option<String>,
}

impl From<JsDashboardConfig> for DashboardConfig {
    fn from(cfg: JsDashboardConfig) -> Self {
        let mut base = DashboardConfig::default();
        if let Some(name) = cfg.patient_name.filter(|name| !name.trim().is_empty()) {
            base.patient_name = name;
        }
        base
    }
}

/// Build the dashboard summary from the record store's patient list.
#[wasm_bindgen]
pub fn summarize_patients(
    patients: JsValue,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let patients_value = from_value::<serde_json::Value>(patients)
        .map_err(|err| JsValue::from_str(&format!("Could not read patient JSON: {err}")))?;

    let cfg = match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsDashboardConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            DashboardConfig::from(cfg)
        }
        _ => DashboardConfig::default(),
    };

    let summary = dashboard_record::summarize_patients_value(&patients_value, &cfg)
        .map_err(|err| JsValue::from_str(&format_dashboard_error(err)))?;

    to_value(&summary)
        .map_err(|err| JsValue::from_str(&format!("Could not serialize dashboard: {err}")))
}

fn format_dashboard_error(err: DashboardError) -> String {
    format!("Dashboard error: {err}")
}
