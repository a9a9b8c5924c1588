//! Dropdown selector for choosing a state.

use crate::state::AppState;
use covid_charts::callbacks::ControlId;
use dioxus::prelude::*;

/// State dropdown (`state-select`).
/// Reads the options from AppState and updates selected_state on change.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = (state.selected_state)();
    let control_id = ControlId::StateSelect.id();

    let on_change = move |evt: Event<FormData>| {
        state.selected_state.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{control_id}",
                style: "font-weight: bold; margin-right: 8px; color: #ffffff;",
                "Select State: "
            }
            select {
                id: "{control_id}",
                onchange: on_change,
                for name in states.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
