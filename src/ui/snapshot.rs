use crate::model::{Player, Settlement, Unit};
use crate::state::{Overlay, OverlayKind, OverlayState};
use crate::ui::draw_order::draw_order;
use serde::Serialize;

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Serialize)]
pub struct OverlaySnapshot<'a> {
    pub turn: u32,
    pub player: Option<&'a Player>,
    pub settlement: Option<&'a Settlement>,
    pub unit: Option<&'a Unit>,
    pub showing: Vec<OverlayKind>,
    pub draw_order: Vec<OverlayKind>,
    pub can_iter_settlements_units: bool,
    pub overlays: Vec<&'a Overlay>,
}

impl<'a> OverlaySnapshot<'a> {
    pub fn capture(state: &'a OverlayState) -> Self {
        Self {
            turn: state.current_turn(),
            player: state.current_player(),
            settlement: state.current_settlement(),
            unit: state.selected_unit(),
            showing: state.showing().collect(),
            draw_order: draw_order(state),
            can_iter_settlements_units: state.can_iter_settlements_units(),
            overlays: state.overlays().collect(),
        }
    }
}

pub fn snapshot_to_json(state: &OverlayState) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(OverlaySnapshot::capture(state))
}
