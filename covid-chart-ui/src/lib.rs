//! Shared Dioxus components and Plotly bridge for the COVID dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Plotly glue via `js_sys::eval()`, plus browser `fetch()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (controls, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
