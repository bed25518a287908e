use crate::model::{Blessing, Player, Settlement};
use serde::Serialize;
use std::fmt;

/// Per-turn output of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Yields {
    pub wealth: f64,
    pub harvest: f64,
    pub zeal: f64,
    pub fortune: f64,
}

impl Yields {
    pub fn new(wealth: f64, harvest: f64, zeal: f64, fortune: f64) -> Self {
        Self {
            wealth,
            harvest,
            zeal,
            fortune,
        }
    }
}

impl fmt::Display for Yields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wealth {:+.0}  harvest {:+.0}  zeal {:+.0}  fortune {:+.0}",
            self.wealth, self.harvest, self.zeal, self.fortune
        )
    }
}

/// Game calculations the panels display but the overlay state never stores.
pub trait GameRules {
    fn settlement_totals(&self, player: &Player, settlement: &Settlement, is_night: bool)
    -> Yields;

    /// Names of everything the blessing makes available once complete.
    fn unlocks(&self, blessing: &Blessing) -> Vec<String>;
}
