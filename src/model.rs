use serde::{Deserialize, Serialize};

// ── Players & settlements ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Agriculturists,
    Capitalists,
    Scrutineers,
    Godless,
    Ravenous,
    Fundamentalists,
    Orthodox,
    Concentrated,
    Frontiersmen,
    Imperials,
    Nocturne,
    Infidels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
    pub level: u32,
    pub strength: f64,
    pub satisfaction: f64,
    #[serde(default)]
    pub under_siege: bool,
}

impl Settlement {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            strength: 100.0,
            satisfaction: 50.0,
            under_siege: false,
        }
    }
}

/// The player as seen by the overlay. Owned by the game; the overlay only keeps a copy
/// of what it needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub colour: u8,
    pub faction: Faction,
    pub wealth: f64,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

impl Player {
    pub fn new(name: impl Into<String>, faction: Faction) -> Self {
        Self {
            name: name.into(),
            colour: 0,
            faction,
            wealth: 0.0,
            settlements: Vec::new(),
        }
    }

    pub fn with_settlements(mut self, settlements: Vec<Settlement>) -> Self {
        self.settlements = settlements;
        self
    }
}

// ── Constructions ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

impl Improvement {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Bountiful,
    Economical,
    Magical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub project_type: ProjectType,
}

impl Project {
    pub fn new(name: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            name: name.into(),
            project_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPlan {
    pub name: String,
    pub power: f64,
    pub max_health: f64,
    pub total_stamina: u32,
    pub cost: f64,
}

impl UnitPlan {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            power: 100.0,
            max_health: 100.0,
            total_stamina: 3,
            cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionMenu {
    Improvements,
    Projects,
    Units,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedConstruction {
    pub construction: String,
    pub settlement: String,
}

// ── Units & combat ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub plan: UnitPlan,
    pub health: f64,
    pub remaining_stamina: u32,
    #[serde(default)]
    pub besieging: bool,
}

impl Unit {
    pub fn from_plan(plan: UnitPlan) -> Self {
        Self {
            health: plan.max_health,
            remaining_stamina: plan.total_stamina,
            plan,
            besieging: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackData {
    pub attacker: Unit,
    pub defender: Unit,
    pub damage_to_attacker: f64,
    pub damage_to_defender: f64,
    pub player_attack: bool,
    pub attacker_was_killed: bool,
    pub defender_was_killed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetlAttackData {
    pub attacker: Unit,
    pub settlement: Settlement,
    pub setl_owner: Player,
    pub damage_to_attacker: f64,
    pub damage_to_setl: f64,
    pub player_attack: bool,
    pub attacker_was_killed: bool,
    pub setl_was_taken: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementAttackType {
    Attack,
    Besiege,
}

// ── Blessings, victories & events ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blessing {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

impl Blessing {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryType {
    Elimination,
    Jubilation,
    Gluttony,
    Affluence,
    Vigour,
    Serendipity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Victory {
    pub player: Player,
    pub victory_type: VictoryType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestigationResult {
    Wealth,
    Fortune,
    Vision,
    Health,
    Power,
    Stamina,
    Upkeep,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseOption {
    #[default]
    Resume,
    Save,
    Controls,
    Quit,
}

impl PauseOption {
    pub fn next(self) -> Self {
        match self {
            Self::Resume => Self::Save,
            Self::Save => Self::Controls,
            Self::Controls | Self::Quit => Self::Quit,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Resume | Self::Save => Self::Resume,
            Self::Controls => Self::Save,
            Self::Quit => Self::Controls,
        }
    }
}
