//! Dashboard presentation layer for WebAssembly.

mod adapter;

pub use adapter::{status_class, style_token, ChartSeries, RenderSession};

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::adapter::{status_class, style_token, RenderSession};
    use crate::styles;
    use dashboard_core::{DashboardView, DiagnosticView, HistoryLine, VitalReading};
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    const CHART_WIDTH: f64 = 480.0;
    const CHART_HEIGHT: f64 = 180.0;

    #[derive(Properties, PartialEq)]
    pub struct DashboardProps {
        pub view: DashboardView,
    }

    #[function_component(PatientDashboard)]
    fn patient_dashboard(props: &DashboardProps) -> Html {
        let view = &props.view;

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        // One session per render; nothing survives into the next one.
        let session = RenderSession::new(view, CHART_WIDTH, CHART_HEIGHT);

        html! {
            <div class="dashboard-root">
                <section class="dashboard-main">
                    { render_chart(&session) }
                    <div class="vital-cards">
                        { for view.current_vitals.iter().map(render_vital) }
                    </div>
                    { render_history(&view.history_lines) }
                    { render_diagnostics(&view.diagnostics) }
                </section>
                <aside class="dashboard-profile">
                    {
                        view.profile.profile_picture.as_ref().map(|src| html! {
                            <img class="profile-avatar" src={src.clone()} alt={format!("Avatar of {}", view.profile.name)} />
                        }).unwrap_or_default()
                    }
                    <h2>{ view.profile.name.clone() }</h2>
                    <p class="subtle">{ view.profile.bio.clone() }</p>
                    <dl class="profile-facts">
                        <dt>{"Date of birth"}</dt><dd>{ view.profile.date_of_birth.clone() }</dd>
                        <dt>{"Gender"}</dt><dd>{ view.profile.gender.clone() }</dd>
                        <dt>{"Contact"}</dt><dd>{ view.profile.phone_number.clone() }</dd>
                        <dt>{"Emergency contact"}</dt><dd>{ view.profile.emergency_contact.clone() }</dd>
                        <dt>{"Insurance"}</dt><dd>{ view.profile.insurance_type.clone() }</dd>
                    </dl>
                    <h3>{"Lab results"}</h3>
                    <ul class="lab-results">
                        { for view.lab_results.iter().map(|name| html! {
                            <li><span class="file-pill">{"📄"}</span><span>{ name.clone() }</span></li>
                        }) }
                    </ul>
                </aside>
            </div>
        }
    }

    fn render_chart(session: &RenderSession) -> Html {
        if session.chart.is_empty() {
            return html! { <section class="bp-chart bp-chart-empty">{"No blood pressure readings"}</section> };
        }

        let view_box = format!("0 0 {} {}", session.width, session.height);
        html! {
            <section class="bp-chart">
                <h3>{"Blood Pressure"}</h3>
                <svg viewBox={view_box} preserveAspectRatio="none" role="img" aria-label="Blood pressure trend">
                    <polyline class="series-systolic" points={session.polyline_points(&session.chart.systolic)} />
                    <polyline class="series-diastolic" points={session.polyline_points(&session.chart.diastolic)} />
                </svg>
                <ol class="bp-axis">
                    { for session.chart.labels.iter().map(|label| html! { <li>{ label.clone() }</li> }) }
                </ol>
            </section>
        }
    }

    fn render_vital(reading: &VitalReading) -> Html {
        html! {
            <article class="vital-card" data-kind={format!("{:?}", reading.kind).to_lowercase()}>
                <span class="vital-label">{ reading.label.clone() }</span>
                <span class="vital-value">{ reading.display_value.clone() }<small>{ reading.kind.unit() }</small></span>
                <span class={classes!("vital-level", style_token(reading.severity))}>{ reading.levels.clone() }</span>
            </article>
        }
    }

    fn render_history(lines: &[HistoryLine]) -> Html {
        html! {
            <section class="dx-history">
                <h3>{"Diagnosis History"}</h3>
                <ul>
                    { for lines.iter().map(|line| html! {
                        <li>
                            <div><strong>{ line.title.clone() }</strong></div>
                            <div class="subtle">
                                { format!("BP: {} • HR: {} • Temp: {}°F", line.blood_pressure, line.heart_rate, line.temperature) }
                            </div>
                        </li>
                    }) }
                </ul>
            </section>
        }
    }

    fn render_diagnostics(items: &[DiagnosticView]) -> Html {
        html! {
            <section class="dx-list">
                <h3>{"Diagnostic List"}</h3>
                <ul>
                    { for items.iter().map(|item| html! {
                        <li>
                            <div>
                                <div><strong>{ item.name.clone() }</strong></div>
                                <div class="subtle">{ item.description.clone() }</div>
                            </div>
                            <span class={classes!("status", status_class(item.category))}>{ item.status.clone() }</span>
                        </li>
                    }) }
                </ul>
            </section>
        }
    }

    #[wasm_bindgen]
    pub fn mount_dashboard_view(selector: &str, view: JsValue) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Document is not accessible"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let view: DashboardView = from_value(view)?;

        yew::Renderer::<PatientDashboard>::with_root_and_props(target, DashboardProps { view })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard_view(
    _: &str,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "dashboard-ui only supports the wasm32 target",
    ))
}
