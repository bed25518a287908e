use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Standard,
    Construction,
    Blessing,
    Settlement,
    Unit,
    Deployment,
    Tutorial,
    Warning,
    BlessNotif,
    ConstrNotif,
    LevelNotif,
    Attack,
    SetlAttack,
    SiegeNotif,
    Victory,
    SetlClick,
    Pause,
    Controls,
    Elimination,
    CloseToVictory,
    Investigation,
    Night,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 22] = [
        Self::Standard,
        Self::Construction,
        Self::Blessing,
        Self::Settlement,
        Self::Unit,
        Self::Deployment,
        Self::Tutorial,
        Self::Warning,
        Self::BlessNotif,
        Self::ConstrNotif,
        Self::LevelNotif,
        Self::Attack,
        Self::SetlAttack,
        Self::SiegeNotif,
        Self::Victory,
        Self::SetlClick,
        Self::Pause,
        Self::Controls,
        Self::Elimination,
        Self::CloseToVictory,
        Self::Investigation,
        Self::Night,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Construction => "construction",
            Self::Blessing => "blessing",
            Self::Settlement => "settlement",
            Self::Unit => "unit",
            Self::Deployment => "deployment",
            Self::Tutorial => "tutorial",
            Self::Warning => "warning",
            Self::BlessNotif => "blessing notification",
            Self::ConstrNotif => "construction notification",
            Self::LevelNotif => "level up notification",
            Self::Attack => "attack",
            Self::SetlAttack => "settlement attack",
            Self::SiegeNotif => "siege notification",
            Self::Victory => "victory",
            Self::SetlClick => "settlement click",
            Self::Pause => "pause",
            Self::Controls => "controls",
            Self::Elimination => "elimination",
            Self::CloseToVictory => "close to victory",
            Self::Investigation => "investigation",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
