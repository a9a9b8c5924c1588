//! Control → panel wiring.
//!
//! Each callback names the panel it renders, the controls it reads and a
//! pure handler over the [`DashboardContext`]. The registry indexes
//! callbacks by (control, event) so a control change re-runs exactly the
//! panels that depend on it.

use crate::bar::render_mask_chart;
use crate::context::{DashboardContext, Selection};
use crate::figure::Figure;
use crate::map::render_state_chart;
use crate::render::{Render, RenderError};
use crate::table::render_state_table;
use log::debug;
use std::collections::HashMap;

/// An input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    MonthsSlider,
    StateSelect,
}

impl ControlId {
    /// DOM id of the control.
    pub fn id(&self) -> &'static str {
        match self {
            ControlId::MonthsSlider => "months-slider",
            ControlId::StateSelect => "state-select",
        }
    }
}

/// An output panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    StateChart,
    MaskChart,
    StateTable,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::StateChart, PanelId::MaskChart, PanelId::StateTable];

    /// DOM id of the panel's chart container.
    pub fn id(&self) -> &'static str {
        match self {
            PanelId::StateChart => "state-chart",
            PanelId::MaskChart => "mask-chart",
            PanelId::StateTable => "state-table",
        }
    }

    pub fn from_id(id: &str) -> Option<PanelId> {
        PanelId::ALL.into_iter().find(|p| p.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The control's value changed.
    Change,
}

pub type Handler = fn(&DashboardContext, &Selection) -> Result<Render<Figure>, RenderError>;

pub struct Callback {
    pub output: PanelId,
    pub inputs: Vec<ControlId>,
    pub handler: Handler,
}

/// Outcome of one callback run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub panel: PanelId,
    pub outcome: Result<Render<Figure>, RenderError>,
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
    bindings: HashMap<(ControlId, EventKind), Vec<usize>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to the change event of every control in `inputs`.
    pub fn register(&mut self, output: PanelId, inputs: &[ControlId], handler: Handler) {
        let index = self.callbacks.len();
        for control in inputs {
            self.bindings
                .entry((*control, EventKind::Change))
                .or_default()
                .push(index);
        }
        self.callbacks.push(Callback {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
    }

    /// The dashboard's three panels.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(
            PanelId::StateChart,
            &[ControlId::MonthsSlider, ControlId::StateSelect],
            render_state_chart,
        );
        registry.register(PanelId::MaskChart, &[ControlId::StateSelect], render_mask_chart);
        registry.register(
            PanelId::StateTable,
            &[ControlId::MonthsSlider, ControlId::StateSelect],
            render_state_table,
        );
        registry
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Panels re-rendered by `event` on `control`, in registration order.
    pub fn bound_panels(&self, control: ControlId, event: EventKind) -> Vec<PanelId> {
        self.bindings
            .get(&(control, event))
            .map(|indices| indices.iter().map(|i| self.callbacks[*i].output).collect())
            .unwrap_or_default()
    }

    /// Run every callback bound to (`control`, `event`).
    pub fn dispatch(
        &self,
        control: ControlId,
        event: EventKind,
        ctx: &DashboardContext,
        selection: &Selection,
    ) -> Vec<Dispatch> {
        debug!(
            "dispatch: {} {:?} -> month {} state {}",
            control.id(),
            event,
            selection.month,
            selection.state
        );
        self.bindings
            .get(&(control, event))
            .map(|indices| {
                indices
                    .iter()
                    .map(|i| self.run(&self.callbacks[*i], ctx, selection))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Run every callback once, e.g. for the first render.
    pub fn dispatch_all(&self, ctx: &DashboardContext, selection: &Selection) -> Vec<Dispatch> {
        self.callbacks
            .iter()
            .map(|callback| self.run(callback, ctx, selection))
            .collect()
    }

    fn run(&self, callback: &Callback, ctx: &DashboardContext, selection: &Selection) -> Dispatch {
        Dispatch {
            panel: callback.output,
            outcome: (callback.handler)(ctx, selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn slider_drives_map_and_table() {
        let registry = CallbackRegistry::dashboard();
        assert_eq!(
            registry.bound_panels(ControlId::MonthsSlider, EventKind::Change),
            vec![PanelId::StateChart, PanelId::StateTable]
        );
        assert_eq!(
            registry.bound_panels(ControlId::StateSelect, EventKind::Change),
            vec![PanelId::StateChart, PanelId::MaskChart, PanelId::StateTable]
        );
    }

    #[test]
    fn dispatch_runs_bound_callbacks() {
        let registry = CallbackRegistry::dashboard();
        let ctx = testing::context();
        let results = registry.dispatch(
            ControlId::StateSelect,
            EventKind::Change,
            &ctx,
            &Selection::new(3, "Illinois"),
        );
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|d| matches!(d.outcome, Ok(Render::Updated(_)))));
    }

    #[test]
    fn no_data_month_leaves_map_and_table_unchanged() {
        let registry = CallbackRegistry::dashboard();
        let ctx = testing::context();
        let results = registry.dispatch_all(&ctx, &Selection::new(1, "Illinois"));
        for dispatch in results {
            match dispatch.panel {
                PanelId::MaskChart => assert!(matches!(dispatch.outcome, Ok(Render::Updated(_)))),
                _ => assert_eq!(dispatch.outcome, Ok(Render::Unchanged)),
            }
        }
    }

    #[test]
    fn panel_ids_round_trip() {
        for panel in PanelId::ALL {
            assert_eq!(PanelId::from_id(panel.id()), Some(panel));
        }
        assert_eq!(PanelId::from_id("nope"), None);
    }

    #[test]
    fn empty_registry_dispatches_nothing() {
        let registry = CallbackRegistry::new();
        let ctx = testing::context();
        assert!(registry
            .dispatch(ControlId::MonthsSlider, EventKind::Change, &ctx, &Selection::new(3, "Illinois"))
            .is_empty());
        assert!(registry.callbacks().is_empty());
    }
}
