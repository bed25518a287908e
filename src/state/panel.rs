use super::kind::OverlayKind;
use super::scroll::{Direction, ScrollWindow, WindowedList};
use crate::model::{
    AttackData, Blessing, CompletedConstruction, ConstructionMenu, Improvement,
    InvestigationResult, PauseOption, Player, Project, SetlAttackData, Settlement,
    SettlementAttackType, UnitPlan, Victory,
};
use serde::Serialize;

/// One entry of the overlay stack together with the data it draws.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Overlay {
    Standard(StandardPanel),
    Construction(ConstructionPanel),
    Blessing(WindowedList<Blessing>),
    Settlement,
    Unit,
    Deployment,
    Tutorial,
    Warning(WarningPanel),
    BlessNotif(Option<Blessing>),
    ConstrNotif(Vec<CompletedConstruction>),
    LevelNotif(Vec<Settlement>),
    Attack(AttackData),
    SetlAttack(SetlAttackData),
    SiegeNotif {
        settlement: Option<Settlement>,
        sieger: Option<Player>,
    },
    Victory(Victory),
    SetlClick(SetlClickPanel),
    Pause(PausePanel),
    Controls,
    Elimination(Option<Player>),
    CloseToVictory(Vec<Victory>),
    Investigation(Option<InvestigationResult>),
    Night {
        beginning: bool,
    },
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::Standard(_) => OverlayKind::Standard,
            Self::Construction(_) => OverlayKind::Construction,
            Self::Blessing(_) => OverlayKind::Blessing,
            Self::Settlement => OverlayKind::Settlement,
            Self::Unit => OverlayKind::Unit,
            Self::Deployment => OverlayKind::Deployment,
            Self::Tutorial => OverlayKind::Tutorial,
            Self::Warning(_) => OverlayKind::Warning,
            Self::BlessNotif(_) => OverlayKind::BlessNotif,
            Self::ConstrNotif(_) => OverlayKind::ConstrNotif,
            Self::LevelNotif(_) => OverlayKind::LevelNotif,
            Self::Attack(_) => OverlayKind::Attack,
            Self::SetlAttack(_) => OverlayKind::SetlAttack,
            Self::SiegeNotif { .. } => OverlayKind::SiegeNotif,
            Self::Victory(_) => OverlayKind::Victory,
            Self::SetlClick(_) => OverlayKind::SetlClick,
            Self::Pause(_) => OverlayKind::Pause,
            Self::Controls => OverlayKind::Controls,
            Self::Elimination(_) => OverlayKind::Elimination,
            Self::CloseToVictory(_) => OverlayKind::CloseToVictory,
            Self::Investigation(_) => OverlayKind::Investigation,
            Self::Night { .. } => OverlayKind::Night,
        }
    }
}

// ── Standard ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StandardPanel {
    pub(crate) status_window: ScrollWindow,
}

impl StandardPanel {
    pub fn new(status_width: usize) -> Self {
        Self {
            status_window: ScrollWindow::new(status_width),
        }
    }

    pub fn status_window(&self) -> ScrollWindow {
        self.status_window
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstructionRef<'a> {
    Improvement(&'a Improvement),
    Project(&'a Project),
    UnitPlan(&'a UnitPlan),
}

impl ConstructionRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Improvement(improvement) => improvement.name.as_str(),
            Self::Project(project) => project.name.as_str(),
            Self::UnitPlan(plan) => plan.name.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstructionPanel {
    menu: ConstructionMenu,
    improvements: WindowedList<Improvement>,
    projects: WindowedList<Project>,
    unit_plans: WindowedList<UnitPlan>,
}

impl ConstructionPanel {
    pub fn new(
        improvements: Vec<Improvement>,
        projects: Vec<Project>,
        unit_plans: Vec<UnitPlan>,
        width: usize,
    ) -> Self {
        let improvements = WindowedList::new(improvements, width);
        let projects = WindowedList::new(projects, width);
        let unit_plans = WindowedList::new(unit_plans, width);
        let menu = if !improvements.is_empty() {
            ConstructionMenu::Improvements
        } else if !projects.is_empty() || unit_plans.is_empty() {
            ConstructionMenu::Projects
        } else {
            ConstructionMenu::Units
        };
        Self {
            menu,
            improvements,
            projects,
            unit_plans,
        }
    }

    pub fn menu(&self) -> ConstructionMenu {
        self.menu
    }

    pub fn improvements(&self) -> &WindowedList<Improvement> {
        &self.improvements
    }

    pub fn projects(&self) -> &WindowedList<Project> {
        &self.projects
    }

    pub fn unit_plans(&self) -> &WindowedList<UnitPlan> {
        &self.unit_plans
    }

    pub fn construction_window(&self) -> ScrollWindow {
        self.improvements.window()
    }

    pub fn unit_plan_window(&self) -> ScrollWindow {
        self.unit_plans.window()
    }

    pub fn selected(&self) -> Option<ConstructionRef<'_>> {
        match self.menu {
            ConstructionMenu::Improvements => {
                self.improvements.selected().map(ConstructionRef::Improvement)
            }
            ConstructionMenu::Projects => self.projects.selected().map(ConstructionRef::Project),
            ConstructionMenu::Units => self.unit_plans.selected().map(ConstructionRef::UnitPlan),
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        match self.menu {
            ConstructionMenu::Improvements => self.improvements.navigate(direction),
            ConstructionMenu::Projects => self.projects.navigate(direction),
            ConstructionMenu::Units => self.unit_plans.navigate(direction),
        }
    }

    /// Moves between the improvement, project and unit tabs without wrapping. The
    /// improvement tab is skipped while there is nothing to build.
    pub fn switch_menu(&mut self, direction: Direction) -> bool {
        let target = match (self.menu, direction) {
            (ConstructionMenu::Improvements, Direction::Right) => ConstructionMenu::Projects,
            (ConstructionMenu::Projects, Direction::Right) => ConstructionMenu::Units,
            (ConstructionMenu::Projects, Direction::Left) if !self.improvements.is_empty() => {
                ConstructionMenu::Improvements
            }
            (ConstructionMenu::Units, Direction::Left) => ConstructionMenu::Projects,
            _ => return false,
        };
        self.menu = target;
        match target {
            ConstructionMenu::Improvements => self.improvements.select_first(),
            ConstructionMenu::Projects => self.projects.select_first(),
            ConstructionMenu::Units => self.unit_plans.select_first(),
        }
        true
    }
}

// ── Warning ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct WarningPanel {
    pub problematic_settlements: Vec<Settlement>,
    pub has_no_blessing: bool,
    pub will_have_negative_wealth: bool,
}

// ── Settlement click ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SetlClickPanel {
    pub settlement: Option<Settlement>,
    pub owner: Option<Player>,
    option: Option<SettlementAttackType>,
}

impl SetlClickPanel {
    pub fn new(settlement: Option<Settlement>, owner: Option<Player>) -> Self {
        Self {
            settlement,
            owner,
            option: Some(SettlementAttackType::Attack),
        }
    }

    /// `None` means the Cancel button is highlighted.
    pub fn option(&self) -> Option<SettlementAttackType> {
        self.option
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Down => None,
            Direction::Up | Direction::Left => Some(SettlementAttackType::Attack),
            Direction::Right => Some(SettlementAttackType::Besiege),
        };
        let changed = next != self.option;
        self.option = next;
        changed
    }
}

// ── Pause ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct PausePanel {
    option: PauseOption,
    has_saved: bool,
}

impl PausePanel {
    pub fn option(&self) -> PauseOption {
        self.option
    }

    pub fn has_saved(&self) -> bool {
        self.has_saved
    }

    pub fn record_save(&mut self) {
        self.has_saved = true;
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Down => self.option.next(),
            Direction::Up => self.option.prev(),
            Direction::Left | Direction::Right => return false,
        };
        if next == self.option {
            return false;
        }
        if next == PauseOption::Save {
            self.has_saved = false;
        }
        self.option = next;
        true
    }
}
