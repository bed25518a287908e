use super::gate::{ITERATION_BLOCKERS, ToggleRule, gate};
use super::kind::OverlayKind;
use super::panel::{
    ConstructionPanel, Overlay, PausePanel, SetlClickPanel, StandardPanel, WarningPanel,
};
use super::scroll::{Direction, WindowedList};
use crate::config::OverlayConfig;
use crate::model::{
    AttackData, Blessing, CompletedConstruction, Improvement, InvestigationResult, Player,
    Project, SetlAttackData, Settlement, Unit, UnitPlan, Victory,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// What a toggle call did. Callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The overlay stayed open and its payload was replaced.
    Updated,
    /// A showing overlay prevented the change.
    Blocked(OverlayKind),
    Unchanged,
}

/// Which overlays are visible, in the order they were opened, plus the data each
/// one draws.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    showing: IndexMap<OverlayKind, Overlay>,
    config: OverlayConfig,
    current_turn: u32,
    current_player: Option<Player>,
    current_settlement: Option<Settlement>,
    selected_unit: Option<Unit>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OverlayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.current_player = Some(player);
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.showing.contains_key(&kind)
    }

    pub fn showing(&self) -> impl Iterator<Item = OverlayKind> + '_ {
        self.showing.keys().copied()
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.showing.values()
    }

    pub fn get(&self, kind: OverlayKind) -> Option<&Overlay> {
        self.showing.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.showing.is_empty()
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.as_ref()
    }

    pub fn current_settlement(&self) -> Option<&Settlement> {
        self.current_settlement.as_ref()
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        self.selected_unit.as_ref()
    }

    pub fn standard(&self) -> Option<&StandardPanel> {
        match self.showing.get(&OverlayKind::Standard) {
            Some(Overlay::Standard(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn construction(&self) -> Option<&ConstructionPanel> {
        match self.showing.get(&OverlayKind::Construction) {
            Some(Overlay::Construction(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn blessings(&self) -> Option<&WindowedList<Blessing>> {
        match self.showing.get(&OverlayKind::Blessing) {
            Some(Overlay::Blessing(list)) => Some(list),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&WarningPanel> {
        match self.showing.get(&OverlayKind::Warning) {
            Some(Overlay::Warning(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn setl_click(&self) -> Option<&SetlClickPanel> {
        match self.showing.get(&OverlayKind::SetlClick) {
            Some(Overlay::SetlClick(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn pause(&self) -> Option<&PausePanel> {
        match self.showing.get(&OverlayKind::Pause) {
            Some(Overlay::Pause(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn attack_data(&self) -> Option<&AttackData> {
        match self.showing.get(&OverlayKind::Attack) {
            Some(Overlay::Attack(data)) => Some(data),
            _ => None,
        }
    }

    pub fn setl_attack_data(&self) -> Option<&SetlAttackData> {
        match self.showing.get(&OverlayKind::SetlAttack) {
            Some(Overlay::SetlAttack(data)) => Some(data),
            _ => None,
        }
    }

    pub fn current_victory(&self) -> Option<&Victory> {
        match self.showing.get(&OverlayKind::Victory) {
            Some(Overlay::Victory(victory)) => Some(victory),
            _ => None,
        }
    }

    /// Whether the player may cycle through their settlements and units right now.
    pub fn can_iter_settlements_units(&self) -> bool {
        !ITERATION_BLOCKERS.iter().any(|kind| self.is_showing(*kind))
    }

    // ── Session context ───────────────────────────────────────────────────────

    pub fn update_turn(&mut self, turn: u32) {
        self.current_turn = turn;
    }

    pub fn update_settlement(&mut self, settlement: Settlement) {
        self.current_settlement = Some(settlement);
    }

    pub fn update_unit(&mut self, unit: Unit) {
        self.selected_unit = Some(unit);
    }

    // ── Gated toggles ─────────────────────────────────────────────────────────

    pub fn toggle_standard(&mut self, turn: u32) -> Transition {
        let transition = self.toggle(OverlayKind::Standard, |config| {
            Overlay::Standard(StandardPanel::new(config.status_window))
        });
        if transition == Transition::Opened {
            self.current_turn = turn;
        }
        transition
    }

    pub fn toggle_construction(
        &mut self,
        improvements: Vec<Improvement>,
        projects: Vec<Project>,
        unit_plans: Vec<UnitPlan>,
    ) -> Transition {
        self.toggle(OverlayKind::Construction, |config| {
            Overlay::Construction(ConstructionPanel::new(
                improvements,
                projects,
                unit_plans,
                config.list_window,
            ))
        })
    }

    pub fn toggle_blessing(&mut self, blessings: Vec<Blessing>) -> Transition {
        self.toggle(OverlayKind::Blessing, |config| {
            Overlay::Blessing(WindowedList::new(blessings, config.list_window))
        })
    }

    pub fn toggle_settlement(&mut self, settlement: Option<Settlement>, player: Player) -> Transition {
        let transition = self.toggle(OverlayKind::Settlement, |_| Overlay::Settlement);
        if transition == Transition::Opened {
            self.current_settlement = settlement;
            self.current_player = Some(player);
        }
        transition
    }

    pub fn toggle_unit(&mut self, unit: Option<Unit>) -> Transition {
        let transition = self.toggle(OverlayKind::Unit, |_| Overlay::Unit);
        if transition == Transition::Opened {
            self.selected_unit = unit;
        }
        transition
    }

    pub fn toggle_deployment(&mut self) -> Transition {
        self.toggle(OverlayKind::Deployment, |_| Overlay::Deployment)
    }

    pub fn toggle_tutorial(&mut self) -> Transition {
        self.toggle(OverlayKind::Tutorial, |_| Overlay::Tutorial)
    }

    pub fn toggle_warning(
        &mut self,
        settlements: Vec<Settlement>,
        no_blessing: bool,
        will_have_negative_wealth: bool,
    ) -> Transition {
        self.toggle(OverlayKind::Warning, |_| {
            Overlay::Warning(WarningPanel {
                problematic_settlements: settlements,
                has_no_blessing: no_blessing,
                will_have_negative_wealth,
            })
        })
    }

    /// Dismisses the warning if it is up. Any key or click clears it.
    pub fn remove_warning_if_possible(&mut self) -> Transition {
        if self.is_showing(OverlayKind::Warning) {
            self.try_close(OverlayKind::Warning)
        } else {
            Transition::Unchanged
        }
    }

    pub fn toggle_blessing_notification(&mut self, blessing: Option<Blessing>) -> Transition {
        self.toggle(OverlayKind::BlessNotif, |_| Overlay::BlessNotif(blessing))
    }

    pub fn toggle_construction_notification(
        &mut self,
        constructions: Vec<CompletedConstruction>,
    ) -> Transition {
        self.toggle(OverlayKind::ConstrNotif, |_| {
            Overlay::ConstrNotif(constructions)
        })
    }

    pub fn toggle_level_up_notification(&mut self, settlements: Vec<Settlement>) -> Transition {
        self.toggle(OverlayKind::LevelNotif, |_| Overlay::LevelNotif(settlements))
    }

    pub fn toggle_siege_notif(
        &mut self,
        settlement: Option<Settlement>,
        sieger: Option<Player>,
    ) -> Transition {
        self.toggle(OverlayKind::SiegeNotif, |_| Overlay::SiegeNotif {
            settlement,
            sieger,
        })
    }

    pub fn toggle_setl_click(
        &mut self,
        settlement: Option<Settlement>,
        owner: Option<Player>,
    ) -> Transition {
        self.toggle(OverlayKind::SetlClick, |_| {
            Overlay::SetlClick(SetlClickPanel::new(settlement, owner))
        })
    }

    pub fn toggle_pause(&mut self) -> Transition {
        self.toggle(OverlayKind::Pause, |_| Overlay::Pause(PausePanel::default()))
    }

    pub fn toggle_controls(&mut self) -> Transition {
        self.toggle(OverlayKind::Controls, |_| Overlay::Controls)
    }

    pub fn toggle_elimination(&mut self, eliminated: Option<Player>) -> Transition {
        self.toggle(OverlayKind::Elimination, |_| Overlay::Elimination(eliminated))
    }

    pub fn toggle_close_to_vic(&mut self, close_to_vics: Vec<Victory>) -> Transition {
        self.toggle(OverlayKind::CloseToVictory, |_| {
            Overlay::CloseToVictory(close_to_vics)
        })
    }

    pub fn toggle_investigation(&mut self, result: Option<InvestigationResult>) -> Transition {
        self.toggle(OverlayKind::Investigation, |_| Overlay::Investigation(result))
    }

    pub fn toggle_night(&mut self, beginning: bool) -> Transition {
        self.toggle(OverlayKind::Night, |_| Overlay::Night { beginning })
    }

    // ── Special toggles ───────────────────────────────────────────────────────

    /// Victory is terminal: once shown it stays until a new session starts.
    pub fn toggle_victory(&mut self, victory: Victory) -> Transition {
        if self.is_showing(OverlayKind::Victory) {
            return Transition::Unchanged;
        }
        self.try_open(Overlay::Victory(victory))
    }

    /// Repeated attacks while the panel is up replace its contents; `None` dismisses it.
    pub fn toggle_attack(&mut self, data: Option<AttackData>) -> Transition {
        self.coalesce(OverlayKind::Attack, data.map(Overlay::Attack))
    }

    pub fn toggle_setl_attack(&mut self, data: Option<SetlAttackData>) -> Transition {
        self.coalesce(OverlayKind::SetlAttack, data.map(Overlay::SetlAttack))
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Scrolls the settlement status list of the standard overlay. Only lists that
    /// overflow the status window scroll.
    pub fn navigate_standard(&mut self, direction: Direction) -> bool {
        let total = self
            .current_player
            .as_ref()
            .map_or(0, |player| player.settlements.len());
        if total <= self.config.status_scroll_threshold() {
            return false;
        }
        match self.showing.get_mut(&OverlayKind::Standard) {
            Some(Overlay::Standard(panel)) => {
                let moved = panel.status_window.scroll(direction, total);
                trace!(?direction, window = ?panel.status_window.bounds(), "status list scrolled");
                moved
            }
            _ => false,
        }
    }

    pub fn navigate_constructions(&mut self, direction: Direction) -> bool {
        match self.showing.get_mut(&OverlayKind::Construction) {
            Some(Overlay::Construction(panel)) => panel.navigate(direction),
            _ => false,
        }
    }

    pub fn switch_construction_menu(&mut self, direction: Direction) -> bool {
        match self.showing.get_mut(&OverlayKind::Construction) {
            Some(Overlay::Construction(panel)) => {
                let switched = panel.switch_menu(direction);
                if switched {
                    debug!(menu = ?panel.menu(), "construction menu switched");
                }
                switched
            }
            _ => false,
        }
    }

    pub fn navigate_blessings(&mut self, direction: Direction) -> bool {
        match self.showing.get_mut(&OverlayKind::Blessing) {
            Some(Overlay::Blessing(list)) => list.navigate(direction),
            _ => false,
        }
    }

    pub fn navigate_setl_click(&mut self, direction: Direction) -> bool {
        match self.showing.get_mut(&OverlayKind::SetlClick) {
            Some(Overlay::SetlClick(panel)) => panel.navigate(direction),
            _ => false,
        }
    }

    pub fn navigate_pause(&mut self, direction: Direction) -> bool {
        match self.showing.get_mut(&OverlayKind::Pause) {
            Some(Overlay::Pause(panel)) => panel.navigate(direction),
            _ => false,
        }
    }

    /// Marks the game as saved so the pause menu can say so.
    pub fn record_save(&mut self) {
        if let Some(Overlay::Pause(panel)) = self.showing.get_mut(&OverlayKind::Pause) {
            panel.record_save();
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn toggle(
        &mut self,
        kind: OverlayKind,
        build: impl FnOnce(&OverlayConfig) -> Overlay,
    ) -> Transition {
        if self.is_showing(kind) {
            return self.try_close(kind);
        }
        if let Some(blocker) = self.open_blocker(kind) {
            trace!(overlay = %kind, %blocker, "open blocked");
            return Transition::Blocked(blocker);
        }
        let overlay = build(&self.config);
        self.insert(overlay)
    }

    fn coalesce(&mut self, kind: OverlayKind, replacement: Option<Overlay>) -> Transition {
        debug_assert_eq!(gate(kind).rule, ToggleRule::Coalescing);
        if !self.is_showing(kind) {
            return match replacement {
                Some(overlay) => self.try_open(overlay),
                None => Transition::Unchanged,
            };
        }
        match replacement {
            Some(overlay) => {
                self.showing.insert(kind, overlay);
                debug!(overlay = %kind, "overlay updated");
                Transition::Updated
            }
            None => self.try_close(kind),
        }
    }

    fn try_open(&mut self, overlay: Overlay) -> Transition {
        let kind = overlay.kind();
        if let Some(blocker) = self.open_blocker(kind) {
            trace!(overlay = %kind, %blocker, "open blocked");
            return Transition::Blocked(blocker);
        }
        self.insert(overlay)
    }

    fn insert(&mut self, overlay: Overlay) -> Transition {
        let kind = overlay.kind();
        self.showing.insert(kind, overlay);
        debug!(overlay = %kind, depth = self.showing.len(), "overlay opened");
        Transition::Opened
    }

    pub(crate) fn try_close(&mut self, kind: OverlayKind) -> Transition {
        if !self.is_showing(kind) {
            return Transition::Unchanged;
        }
        let gate = gate(kind);
        if gate.rule == ToggleRule::Terminal {
            return Transition::Unchanged;
        }
        if let Some(blocker) = gate.close_blocker(|other| self.is_showing(other)) {
            trace!(overlay = %kind, %blocker, "close blocked");
            return Transition::Blocked(blocker);
        }
        self.showing.shift_remove(&kind);
        debug!(overlay = %kind, depth = self.showing.len(), "overlay closed");
        Transition::Closed
    }

    fn open_blocker(&self, kind: OverlayKind) -> Option<OverlayKind> {
        gate(kind).open_blocker(|other| self.is_showing(other))
    }
}
