//! COVID-19 County Dashboard
//!
//! One page with a month slider, a state dropdown and three panels: a map
//! of county case counts, a mask-use bar chart comparing the state to the
//! US average, and a table of counties ranked by cases.
//!
//! Data flow:
//! 1. On mount, the NYT case CSV, county coordinates and mask-use CSV are
//!    fetched in the browser.
//! 2. They are loaded into an in-memory SQLite database and reduced to a
//!    `DashboardContext` (month-end snapshot plus mask-use aggregates).
//! 3. Control changes are dispatched through the `CallbackRegistry`; each
//!    updated panel is handed to Plotly, unchanged panels are left alone.

use anyhow::Context;
use covid_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MonthSlider, StateSelector,
};
use covid_chart_ui::js_bridge;
use covid_chart_ui::state::AppState;
use covid_charts::callbacks::{CallbackRegistry, ControlId, Dispatch, EventKind, PanelId};
use covid_charts::context::{DashboardContext, Selection};
use covid_charts::render::Render;
use covid_nyt::source::{DataSource, RawDatasets};
use dioxus::prelude::*;
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-dashboard-root"))
        .launch(App);
}

async fn fetch_datasets() -> anyhow::Result<RawDatasets> {
    let mut raw = RawDatasets::default();
    for source in DataSource::ALL {
        let body = js_bridge::fetch_csv(source.url())
            .await
            .with_context(|| format!("Failed to download {}", source.file_name()))?;
        log::info!("fetched {} ({} bytes)", source.file_name(), body.len());
        match source {
            DataSource::Cases => raw.cases = body,
            DataSource::CountyLocations => raw.county_locations = body,
            DataSource::MaskUse => raw.mask_use = body,
        }
    }
    Ok(raw)
}

/// Hand each outcome to Plotly and surface renderer errors.
fn apply_dispatches(mut state: AppState, dispatches: Vec<Dispatch>) {
    let mut errors = Vec::new();
    for dispatch in dispatches {
        let container = dispatch.panel.id();
        match dispatch.outcome {
            Ok(Render::Updated(figure)) => match figure.to_json() {
                Ok(json) => js_bridge::render_figure(container, &json),
                Err(e) => {
                    log::warn!("{} figure did not serialize: {}", container, e);
                    js_bridge::destroy_chart(container);
                    errors.push(format!("{}: {}", container, e));
                }
            },
            Ok(Render::Unchanged) => log::debug!("{} unchanged", container),
            Err(e) => {
                log::warn!("{} failed: {}", container, e);
                js_bridge::destroy_chart(container);
                errors.push(e.to_string());
            }
        }
    }
    if errors.is_empty() {
        if state.render_error.peek().is_some() {
            state.render_error.set(None);
        }
    } else {
        state.render_error.set(Some(errors.join("; ")));
    }
}

/// Run the callbacks bound to `control` against the current selection.
fn on_control_change(state: AppState, registry: &CallbackRegistry, control: ControlId) {
    let Some(ctx) = state.context.peek().as_ref().cloned() else {
        return;
    };
    let selection = Selection::new(*state.selected_month.peek(), state.selected_state.peek().as_str());
    let dispatches = registry.dispatch(control, EventKind::Change, &ctx, &selection);
    apply_dispatches(state, dispatches);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let registry = use_hook(|| Rc::new(CallbackRegistry::dashboard()));

    // Download and derive once on mount
    use_hook(move || {
        js_bridge::init_charts();
        spawn(async move {
            let loaded = match fetch_datasets().await {
                Ok(raw) => DashboardContext::from_datasets(&raw),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(ctx) => {
                    log::info!(
                        "dashboard ready: {} snapshot rows, {} states",
                        ctx.snapshot.len(),
                        ctx.states.len()
                    );
                    if let Some(selection) = ctx.initial_selection() {
                        state.selected_month.set(selection.month);
                        state.selected_state.set(selection.state);
                    }
                    state.months.set(ctx.months.clone());
                    state.states.set(ctx.states.clone());
                    state.context.set(Some(Rc::new(ctx)));
                }
                Err(e) => {
                    log::error!("Failed to load datasets: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let slider_registry = registry.clone();
    use_effect(move || {
        let _month = (state.selected_month)();
        if state.context.read().is_none() {
            return;
        }
        on_control_change(state, &slider_registry, ControlId::MonthsSlider);
    });

    let select_registry = registry.clone();
    use_effect(move || {
        let _state_name = (state.selected_state)();
        if state.context.read().is_none() {
            return;
        }
        on_control_change(state, &select_registry, ControlId::StateSelect);
    });

    rsx! {
        div {
            style: "padding: 16px; min-height: 100vh; background: #1f2630; color: #ffffff; font-family: 'Open Sans', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;",

            h2 {
                style: "margin: 0 0 4px 0;",
                "COVID-19 Cases by County"
            }
            p {
                style: "margin: 0 0 16px 0; color: #7f8ca3; font-size: 13px;",
                "Month-end cumulative cases for 2020, with county-level mask-use survey results."
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, label: "Could not load data".to_string() }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",

                    div {
                        style: "flex: 3 1 560px; min-width: 320px;",
                        MonthSlider {}
                        StateSelector {}
                        ChartHeader {
                            title: "Cases by county".to_string(),
                            subtitle: "Marker size and colour scale with the month-end case count".to_string(),
                        }
                        ChartContainer { panel: PanelId::StateChart }
                    }

                    div {
                        style: "flex: 2 1 360px; min-width: 300px;",
                        ChartHeader {
                            title: "Mask use: state vs US average".to_string(),
                        }
                        ChartContainer { panel: PanelId::MaskChart }
                        ChartHeader {
                            title: "Counties ranked by cases".to_string(),
                        }
                        ChartContainer { panel: PanelId::StateTable }
                    }
                }

                if let Some(err) = (state.render_error)() {
                    ErrorDisplay { message: err, label: "Render error".to_string() }
                }

                Notes {}
            }
        }
    }
}

/// Footnote on missing data and attribution.
#[component]
fn Notes() -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; font-size: 12px; color: #7f8ca3; line-height: 1.5;",
            p {
                "Some month and state combinations have no reported cases. Selecting one keeps the previous map and table on screen."
            }
            p {
                "Data: The New York Times, based on reports from state and local health agencies. "
                "Mask-use estimates come from the NYT/Dynata survey of July 2020."
            }
        }
    }
}
