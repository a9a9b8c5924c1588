//! Error box for load failures and renderer errors.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Bold prefix, e.g. "Could not load data"
    #[props(default = "Error".to_string())]
    pub label: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #3b1d24; color: #ff8a80; border-radius: 4px; border: 1px solid #7f2f3a; white-space: pre-wrap;",
            strong { "{props.label}: " }
            "{props.message}"
        }
    }
}
