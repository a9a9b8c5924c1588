//! Loading indicator shown while the datasets download.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #7f8ca3;",
            "Downloading case, county and mask-use data..."
        }
    }
}
