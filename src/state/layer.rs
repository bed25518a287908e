use super::kind::OverlayKind;
use super::overlay::{OverlayState, Transition};

/// Order in which a "back" input peels overlays off the screen.
pub const LAYER_PRECEDENCE: [OverlayKind; 15] = [
    OverlayKind::Night,
    OverlayKind::CloseToVictory,
    OverlayKind::BlessNotif,
    OverlayKind::ConstrNotif,
    OverlayKind::LevelNotif,
    OverlayKind::Warning,
    OverlayKind::Investigation,
    OverlayKind::Controls,
    OverlayKind::Pause,
    OverlayKind::Blessing,
    OverlayKind::SetlClick,
    OverlayKind::Standard,
    OverlayKind::Construction,
    OverlayKind::Unit,
    OverlayKind::Settlement,
];

impl OverlayState {
    /// Closes the topmost removable overlay.
    ///
    /// Returns `Unit` or `Settlement` when one of those was closed so the caller can
    /// drop its own selection pointer. Every other outcome returns `None`.
    pub fn remove_layer(&mut self) -> Option<OverlayKind> {
        let kind = LAYER_PRECEDENCE
            .iter()
            .copied()
            .find(|kind| self.is_showing(*kind))?;
        match self.try_close(kind) {
            Transition::Closed if matches!(kind, OverlayKind::Unit | OverlayKind::Settlement) => {
                Some(kind)
            }
            _ => None,
        }
    }
}
