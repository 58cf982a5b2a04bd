#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-dashboard-ui]";

/// Default CSS with design tokens that host pages can override.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --dashboard-font-family: 'Manrope', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --dashboard-bg: #0f1720;
  --dashboard-card-bg: #17212c;
  --dashboard-text: #eef2f7;
  --dashboard-muted: #9aa8b8;
  --dashboard-radius: 16px;
  --dashboard-good: #36c48f;
  --dashboard-warn: #f5a524;
  --dashboard-bad: #f04438;
  --dashboard-systolic: #e66fd2;
  --dashboard-diastolic: #8c6fe6;
  --dashboard-grid: rgba(255, 255, 255, 0.06);
}

.dashboard-root {
  display: grid;
  grid-template-columns: minmax(0, 1fr) 320px;
  gap: 24px;
  padding: 24px;
  font-family: var(--dashboard-font-family);
  background: var(--dashboard-bg);
  color: var(--dashboard-text);
}

.dashboard-main > section,
.dashboard-profile {
  background: var(--dashboard-card-bg);
  border-radius: var(--dashboard-radius);
  padding: 20px;
  margin-bottom: 20px;
}

.subtle {
  color: var(--dashboard-muted);
  font-size: 0.875rem;
}

.bp-chart svg {
  width: 100%;
  height: 180px;
  border-bottom: 1px solid var(--dashboard-grid);
}

.bp-chart polyline {
  fill: none;
  stroke-width: 2;
}

.series-systolic {
  stroke: var(--dashboard-systolic);
}

.series-diastolic {
  stroke: var(--dashboard-diastolic);
}

.bp-axis {
  display: flex;
  justify-content: space-between;
  list-style: none;
  padding: 0;
  color: var(--dashboard-muted);
}

.vital-cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 16px;
  margin-bottom: 20px;
}

.vital-card {
  display: flex;
  flex-direction: column;
  gap: 6px;
  background: var(--dashboard-card-bg);
  border-radius: var(--dashboard-radius);
  padding: 16px;
}

.vital-value {
  font-size: 1.75rem;
  font-weight: 700;
}

.vital-value small {
  margin-left: 4px;
  font-size: 0.875rem;
  color: var(--dashboard-muted);
}

.vital-level.good,
.status.treated {
  color: var(--dashboard-good);
}

.vital-level.warn,
.status.observation {
  color: var(--dashboard-warn);
}

.vital-level.bad,
.status.critical {
  color: var(--dashboard-bad);
}

.dx-history ul,
.dx-list ul,
.lab-results {
  list-style: none;
  padding: 0;
  margin: 0;
}

.dx-history li,
.dx-list li,
.lab-results li {
  display: flex;
  justify-content: space-between;
  gap: 12px;
  padding: 10px 0;
  border-bottom: 1px solid var(--dashboard-grid);
}

.dx-history li {
  flex-direction: column;
}

.profile-avatar {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  display: block;
  margin: 0 auto 12px;
}

.profile-facts dt {
  color: var(--dashboard-muted);
  font-size: 0.8rem;
}

.profile-facts dd {
  margin: 0 0 10px;
}

@media (max-width: 960px) {
  .dashboard-root {
    grid-template-columns: 1fr;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-dashboard-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
