use super::kind::OverlayKind;
use super::kind::OverlayKind::{
    BlessNotif, Blessing, ConstrNotif, Construction, Controls, Deployment, Investigation,
    LevelNotif, Pause, SetlClick, Settlement, Standard, Tutorial, Unit, Victory, Warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRule {
    /// Open when closed, close when open, each side subject to its blockers.
    Gated,
    /// A second open while showing replaces the payload instead of closing.
    Coalescing,
    /// Opens once and stays for the rest of the session.
    Terminal,
}

/// Which showing overlays prevent `kind` from opening or closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub rule: ToggleRule,
    pub open_blockers: &'static [OverlayKind],
    pub close_blockers: &'static [OverlayKind],
}

const NONE: &[OverlayKind] = &[];

const STANDARD_OPEN: &[OverlayKind] = &[
    Tutorial,
    LevelNotif,
    ConstrNotif,
    BlessNotif,
    Deployment,
    Warning,
    Pause,
    Controls,
    Victory,
    Construction,
    Blessing,
];

const CONSTRUCTION_OPEN: &[OverlayKind] = &[
    Standard,
    Blessing,
    LevelNotif,
    ConstrNotif,
    BlessNotif,
    Warning,
    Deployment,
    Pause,
    Controls,
    Victory,
];

const BLESSING_OPEN: &[OverlayKind] = &[
    LevelNotif,
    ConstrNotif,
    BlessNotif,
    Deployment,
    Warning,
    Pause,
    Controls,
    Victory,
];

const SETTLEMENT_OPEN: &[OverlayKind] = &[
    Unit,
    Standard,
    SetlClick,
    Blessing,
    LevelNotif,
    ConstrNotif,
    Deployment,
    Warning,
    BlessNotif,
    Pause,
    Controls,
    Victory,
    Investigation,
];

const UNIT_OPEN: &[OverlayKind] = &[
    Settlement,
    Standard,
    SetlClick,
    Blessing,
    LevelNotif,
    ConstrNotif,
    Deployment,
    Warning,
    BlessNotif,
    Pause,
    Controls,
    Victory,
];

const DEPLOYMENT_OPEN: &[OverlayKind] = &[
    Warning,
    BlessNotif,
    ConstrNotif,
    LevelNotif,
    Pause,
    Controls,
    Victory,
];

// Shared by the settlement click and investigation overlays.
const MAP_PROMPT_OPEN: &[OverlayKind] = &[
    Standard,
    Construction,
    Blessing,
    Deployment,
    Tutorial,
    Warning,
    BlessNotif,
    ConstrNotif,
    LevelNotif,
    Pause,
    Controls,
    Victory,
];

const PAUSE_OPEN: &[OverlayKind] = &[Victory, Tutorial];
const CONTROLS_OPEN: &[OverlayKind] = &[Victory];

const STANDARD_CLOSE: &[OverlayKind] = &[Blessing];
const SETTLEMENT_CLOSE: &[OverlayKind] = &[Construction];
const UNIT_CLOSE: &[OverlayKind] = &[SetlClick, Investigation];
const PAUSE_CLOSE: &[OverlayKind] = &[Controls];

/// Overlays that stop the player from cycling through their settlements and units.
pub const ITERATION_BLOCKERS: &[OverlayKind] = &[
    Victory,
    Controls,
    Pause,
    Deployment,
    Warning,
    BlessNotif,
    ConstrNotif,
    LevelNotif,
    Blessing,
    Standard,
    Construction,
    SetlClick,
    Investigation,
];

pub fn gate(kind: OverlayKind) -> Gate {
    let (rule, open_blockers, close_blockers) = match kind {
        OverlayKind::Standard => (ToggleRule::Gated, STANDARD_OPEN, STANDARD_CLOSE),
        OverlayKind::Construction => (ToggleRule::Gated, CONSTRUCTION_OPEN, NONE),
        OverlayKind::Blessing => (ToggleRule::Gated, BLESSING_OPEN, NONE),
        OverlayKind::Settlement => (ToggleRule::Gated, SETTLEMENT_OPEN, SETTLEMENT_CLOSE),
        OverlayKind::Unit => (ToggleRule::Gated, UNIT_OPEN, UNIT_CLOSE),
        OverlayKind::Deployment => (ToggleRule::Gated, DEPLOYMENT_OPEN, NONE),
        OverlayKind::SetlClick | OverlayKind::Investigation => {
            (ToggleRule::Gated, MAP_PROMPT_OPEN, NONE)
        }
        OverlayKind::Pause => (ToggleRule::Gated, PAUSE_OPEN, PAUSE_CLOSE),
        OverlayKind::Controls => (ToggleRule::Gated, CONTROLS_OPEN, NONE),
        OverlayKind::Attack | OverlayKind::SetlAttack => (ToggleRule::Coalescing, NONE, NONE),
        OverlayKind::Victory => (ToggleRule::Terminal, NONE, NONE),
        OverlayKind::Tutorial
        | OverlayKind::Warning
        | OverlayKind::BlessNotif
        | OverlayKind::ConstrNotif
        | OverlayKind::LevelNotif
        | OverlayKind::SiegeNotif
        | OverlayKind::Elimination
        | OverlayKind::CloseToVictory
        | OverlayKind::Night => (ToggleRule::Gated, NONE, NONE),
    };
    Gate {
        rule,
        open_blockers,
        close_blockers,
    }
}

impl Gate {
    pub fn open_blocker(&self, is_showing: impl Fn(OverlayKind) -> bool) -> Option<OverlayKind> {
        first_showing(self.open_blockers, is_showing)
    }

    pub fn close_blocker(&self, is_showing: impl Fn(OverlayKind) -> bool) -> Option<OverlayKind> {
        first_showing(self.close_blockers, is_showing)
    }

    pub fn blocks_opening(&self, other: OverlayKind) -> bool {
        self.open_blockers.contains(&other)
    }
}

fn first_showing(
    candidates: &[OverlayKind],
    is_showing: impl Fn(OverlayKind) -> bool,
) -> Option<OverlayKind> {
    candidates.iter().copied().find(|kind| is_showing(*kind))
}

#[cfg(test)]
mod tests {
    use super::{ToggleRule, gate};
    use crate::state::kind::OverlayKind;

    #[test]
    fn no_kind_blocks_itself() {
        for kind in OverlayKind::ALL {
            assert!(!gate(kind).blocks_opening(kind), "{kind} blocks itself");
        }
    }

    #[test]
    fn settlement_and_unit_exclude_each_other() {
        assert!(gate(OverlayKind::Settlement).blocks_opening(OverlayKind::Unit));
        assert!(gate(OverlayKind::Unit).blocks_opening(OverlayKind::Settlement));
    }

    #[test]
    fn open_blocker_reports_first_showing_entry() {
        let showing = [OverlayKind::Victory, OverlayKind::Warning];
        let blocker = gate(OverlayKind::Standard).open_blocker(|kind| showing.contains(&kind));
        assert_eq!(blocker, Some(OverlayKind::Warning));
    }

    fn sorted(kinds: &[OverlayKind]) -> Vec<OverlayKind> {
        let mut kinds = kinds.to_vec();
        kinds.sort();
        kinds
    }

    #[test]
    fn blocker_table_matches_exclusion_model() {
        use OverlayKind::*;
        let map_prompt: &[OverlayKind] = &[
            Standard,
            Construction,
            Blessing,
            Deployment,
            Tutorial,
            Warning,
            BlessNotif,
            ConstrNotif,
            LevelNotif,
            Pause,
            Controls,
            Victory,
        ];
        let table: [(OverlayKind, &[OverlayKind], &[OverlayKind]); 11] = [
            (
                Standard,
                &[
                    Tutorial,
                    LevelNotif,
                    ConstrNotif,
                    BlessNotif,
                    Deployment,
                    Warning,
                    Pause,
                    Controls,
                    Victory,
                    Construction,
                    Blessing,
                ],
                &[Blessing],
            ),
            (
                Construction,
                &[
                    Standard,
                    Blessing,
                    LevelNotif,
                    ConstrNotif,
                    BlessNotif,
                    Warning,
                    Deployment,
                    Pause,
                    Controls,
                    Victory,
                ],
                &[],
            ),
            (
                Blessing,
                &[
                    LevelNotif,
                    ConstrNotif,
                    BlessNotif,
                    Deployment,
                    Warning,
                    Pause,
                    Controls,
                    Victory,
                ],
                &[],
            ),
            (
                Settlement,
                &[
                    Unit,
                    Standard,
                    SetlClick,
                    Blessing,
                    LevelNotif,
                    ConstrNotif,
                    Deployment,
                    Warning,
                    BlessNotif,
                    Pause,
                    Controls,
                    Victory,
                    Investigation,
                ],
                &[Construction],
            ),
            (
                Unit,
                &[
                    Settlement,
                    Standard,
                    SetlClick,
                    Blessing,
                    LevelNotif,
                    ConstrNotif,
                    Deployment,
                    Warning,
                    BlessNotif,
                    Pause,
                    Controls,
                    Victory,
                ],
                &[SetlClick, Investigation],
            ),
            (
                Deployment,
                &[
                    Warning,
                    BlessNotif,
                    ConstrNotif,
                    LevelNotif,
                    Pause,
                    Controls,
                    Victory,
                ],
                &[],
            ),
            (SetlClick, map_prompt, &[]),
            (Investigation, map_prompt, &[]),
            (Pause, &[Victory, Tutorial], &[Controls]),
            (Controls, &[Victory], &[]),
            (Attack, &[], &[]),
        ];

        for (kind, open, close) in table {
            let gate = gate(kind);
            assert_eq!(
                sorted(gate.open_blockers),
                sorted(open),
                "open blockers of {kind}"
            );
            assert_eq!(
                sorted(gate.close_blockers),
                sorted(close),
                "close blockers of {kind}"
            );
        }

        let listed: Vec<_> = table.iter().map(|(kind, _, _)| *kind).collect();
        for kind in OverlayKind::ALL {
            if !listed.contains(&kind) {
                let gate = gate(kind);
                assert!(gate.open_blockers.is_empty(), "{kind} has open blockers");
                assert!(gate.close_blockers.is_empty(), "{kind} has close blockers");
            }
        }
    }

    #[test]
    fn notifications_toggle_unconditionally() {
        for kind in [
            OverlayKind::Tutorial,
            OverlayKind::BlessNotif,
            OverlayKind::Night,
            OverlayKind::Elimination,
        ] {
            let gate = gate(kind);
            assert_eq!(gate.rule, ToggleRule::Gated);
            assert!(gate.open_blockers.is_empty());
            assert!(gate.close_blockers.is_empty());
        }
    }

    #[test]
    fn special_rules_are_assigned() {
        assert_eq!(gate(OverlayKind::Attack).rule, ToggleRule::Coalescing);
        assert_eq!(gate(OverlayKind::SetlAttack).rule, ToggleRule::Coalescing);
        assert_eq!(gate(OverlayKind::Victory).rule, ToggleRule::Terminal);
    }
}
