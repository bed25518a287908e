use crate::state::{OverlayKind, OverlayState};

/// Full-screen overlays. The first one showing hides everything else.
pub const EXCLUSIVE_CHAIN: [OverlayKind; 10] = [
    OverlayKind::Victory,
    OverlayKind::Deployment,
    OverlayKind::Elimination,
    OverlayKind::Night,
    OverlayKind::CloseToVictory,
    OverlayKind::BlessNotif,
    OverlayKind::ConstrNotif,
    OverlayKind::LevelNotif,
    OverlayKind::Warning,
    OverlayKind::Investigation,
];

/// Panels that share the screen, bottom first.
pub const STACKED: [OverlayKind; 12] = [
    OverlayKind::Attack,
    OverlayKind::SetlAttack,
    OverlayKind::SiegeNotif,
    OverlayKind::Settlement,
    OverlayKind::Unit,
    OverlayKind::Construction,
    OverlayKind::Standard,
    OverlayKind::SetlClick,
    OverlayKind::Blessing,
    OverlayKind::Tutorial,
    OverlayKind::Pause,
    OverlayKind::Controls,
];

pub fn draw_order(state: &OverlayState) -> Vec<OverlayKind> {
    if let Some(kind) = EXCLUSIVE_CHAIN
        .iter()
        .copied()
        .find(|kind| state.is_showing(*kind))
    {
        return vec![kind];
    }
    STACKED
        .iter()
        .copied()
        .filter(|kind| state.is_showing(*kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{EXCLUSIVE_CHAIN, STACKED, draw_order};
    use crate::state::{OverlayKind, OverlayState};

    #[test]
    fn chains_cover_every_kind_once() {
        let mut kinds: Vec<_> = EXCLUSIVE_CHAIN.iter().chain(STACKED.iter()).copied().collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), OverlayKind::ALL.len());
    }

    #[test]
    fn exclusive_overlay_is_drawn_alone() {
        let mut state = OverlayState::new();
        state.toggle_standard(1);
        state.toggle_warning(vec![], true, false);
        state.toggle_night(false);
        assert_eq!(draw_order(&state), vec![OverlayKind::Night]);
    }

    #[test]
    fn stacked_overlays_follow_fixed_order() {
        let mut state = OverlayState::new();
        state.toggle_unit(None);
        state.toggle_pause();
        state.toggle_tutorial();
        assert_eq!(
            draw_order(&state),
            vec![OverlayKind::Unit, OverlayKind::Tutorial, OverlayKind::Pause]
        );
    }

    #[test]
    fn nothing_showing_draws_nothing() {
        assert!(draw_order(&OverlayState::new()).is_empty());
    }
}
