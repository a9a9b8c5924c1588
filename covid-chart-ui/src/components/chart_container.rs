//! Panel container that Plotly draws into.

use covid_charts::callbacks::PanelId;
use dioxus::prelude::*;

/// Minimum height of each panel's container, in pixels.
pub fn panel_min_height(panel: PanelId) -> u32 {
    match panel {
        PanelId::StateChart => 500,
        PanelId::MaskChart => 320,
        PanelId::StateTable => 360,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    pub panel: PanelId,
}

/// Dark div with the panel's DOM id, sized for that panel.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let id = props.panel.id();
    let min_height = panel_min_height(props.panel);

    rsx! {
        div {
            id: "{id}",
            style: "min-height: {min_height}px; width: 100%; background: #171b26;",
        }
    }
}
