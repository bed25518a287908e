use crate::config::OverlayConfig;
use crate::model::{InvestigationResult, PauseOption, SettlementAttackType, Unit};
use crate::runtime::command::Command;
use crate::runtime::demo::DemoWorld;
use crate::state::{Direction, OverlayKind, OverlayState, Transition};
use crate::ui::snapshot_to_json;
use tracing::{debug, info, warn};

const NIGHT_EVERY: u32 = 5;

/// Plays the game's input layer: turns commands into overlay transitions and keeps
/// the selection pointers the overlays do not own.
pub struct Session {
    overlay: OverlayState,
    world: DemoWorld,
    turn: u32,
    is_night: bool,
    selected_settlement: Option<usize>,
    selected_unit: Option<usize>,
    warned_this_turn: bool,
    should_exit: bool,
}

impl Session {
    pub fn new(config: OverlayConfig, world: DemoWorld) -> Self {
        let mut overlay = OverlayState::with_config(config).with_player(world.player.clone());
        overlay.toggle_tutorial();
        Self {
            overlay,
            world,
            turn: 1,
            is_night: false,
            selected_settlement: None,
            selected_unit: None,
            warned_this_turn: false,
            should_exit: false,
        }
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_night(&self) -> bool {
        self.is_night
    }

    pub fn selected_settlement(&self) -> Option<usize> {
        self.selected_settlement
    }

    pub fn selected_unit(&self) -> Option<usize> {
        self.selected_unit
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle(&mut self, command: Command) {
        // Any input dismisses the warning and is otherwise swallowed.
        if self.overlay.remove_warning_if_possible() == Transition::Closed {
            return;
        }
        match command {
            Command::Exit => self.should_exit = true,
            Command::Navigate(direction) => self.navigate(direction),
            Command::Confirm => self.confirm(),
            Command::Back => self.back(),
            Command::TogglePause => {
                self.overlay.toggle_pause();
            }
            Command::ToggleStandard => {
                self.overlay.toggle_standard(self.turn);
            }
            Command::ToggleBlessing => {
                if self.overlay.is_showing(OverlayKind::Standard) {
                    self.overlay.toggle_blessing(self.world.blessings.clone());
                }
            }
            Command::ToggleConstruction => {
                if self.overlay.is_showing(OverlayKind::Settlement) {
                    self.overlay.toggle_construction(
                        self.world.improvements.clone(),
                        self.world.projects.clone(),
                        self.world.unit_plans.clone(),
                    );
                }
            }
            Command::NextSettlement => self.next_settlement(),
            Command::NextUnit => self.next_unit(),
            Command::EndTurn => self.end_turn(),
            Command::Attack => {
                let data = self.world.sample_attack(self.turn);
                self.overlay.toggle_attack(Some(data));
            }
            Command::ClickSettlement => {
                if self.overlay.is_showing(OverlayKind::Unit) {
                    let target = self.world.enemy.settlements.first().cloned();
                    self.overlay
                        .toggle_setl_click(target, Some(self.world.enemy.clone()));
                }
            }
            Command::Investigate => {
                if self.overlay.is_showing(OverlayKind::Unit) {
                    let result = investigation_for_turn(self.turn);
                    self.overlay.toggle_investigation(Some(result));
                }
            }
            Command::DumpSnapshot => match snapshot_to_json(&self.overlay) {
                Ok(json) => info!(snapshot = %json, "overlay snapshot"),
                Err(err) => warn!(%err, "failed to serialise overlay snapshot"),
            },
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let overlay = &mut self.overlay;
        let handled = if overlay.is_showing(OverlayKind::Pause) {
            overlay.navigate_pause(direction)
        } else if overlay.is_showing(OverlayKind::SetlClick) {
            overlay.navigate_setl_click(direction)
        } else if overlay.is_showing(OverlayKind::Blessing) {
            overlay.navigate_blessings(direction)
        } else if overlay.is_showing(OverlayKind::Construction) {
            match direction {
                Direction::Left | Direction::Right => overlay.switch_construction_menu(direction),
                Direction::Up | Direction::Down => overlay.navigate_constructions(direction),
            }
        } else if overlay.is_showing(OverlayKind::Standard) {
            overlay.navigate_standard(direction)
        } else {
            false
        };
        if !handled {
            debug!(?direction, "navigation ignored");
        }
    }

    fn confirm(&mut self) {
        if let Some(option) = self.overlay.pause().map(|pause| pause.option()) {
            match option {
                PauseOption::Resume => {
                    self.overlay.toggle_pause();
                }
                PauseOption::Save => {
                    info!(turn = self.turn, "game saved");
                    self.overlay.record_save();
                }
                PauseOption::Controls => {
                    self.overlay.toggle_controls();
                }
                PauseOption::Quit => self.should_exit = true,
            }
            return;
        }
        if let Some(option) = self.overlay.setl_click().map(|panel| panel.option()) {
            let target = self
                .overlay
                .setl_click()
                .and_then(|panel| panel.settlement.clone());
            self.overlay.toggle_setl_click(None, None);
            match (option, target) {
                (Some(SettlementAttackType::Attack), Some(settlement)) => {
                    let data = self.world.sample_setl_attack(settlement);
                    self.overlay.toggle_setl_attack(Some(data));
                }
                (Some(SettlementAttackType::Besiege), Some(settlement)) => {
                    if let Some(unit) = self.selected_unit_mut() {
                        unit.besieging = true;
                        let unit = unit.clone();
                        self.overlay.update_unit(unit);
                    }
                    self.overlay
                        .toggle_siege_notif(Some(settlement), Some(self.world.player.clone()));
                }
                _ => {}
            }
            return;
        }
        if let Some(blessings) = self.overlay.blessings() {
            if let Some(blessing) = blessings.selected() {
                info!(blessing = %blessing.name, "blessing chosen");
            }
            self.overlay.toggle_blessing(Vec::new());
            return;
        }
        if let Some(panel) = self.overlay.construction() {
            if let Some(selected) = panel.selected() {
                info!(construction = selected.name(), "construction chosen");
            }
            self.overlay.toggle_construction(Vec::new(), Vec::new(), Vec::new());
            return;
        }
        self.back();
    }

    fn back(&mut self) {
        let before = self.overlay.showing().count();
        match self.overlay.remove_layer() {
            Some(OverlayKind::Unit) => self.selected_unit = None,
            Some(OverlayKind::Settlement) => self.selected_settlement = None,
            _ => {}
        }
        if self.overlay.showing().count() == before {
            if self.overlay.is_showing(OverlayKind::Attack) {
                self.overlay.toggle_attack(None);
            } else if self.overlay.is_showing(OverlayKind::SetlAttack) {
                self.overlay.toggle_setl_attack(None);
            } else if self.overlay.is_showing(OverlayKind::SiegeNotif) {
                self.overlay.toggle_siege_notif(None, None);
            } else if self.overlay.is_showing(OverlayKind::Tutorial) {
                self.overlay.toggle_tutorial();
            } else {
                self.overlay.toggle_pause();
            }
        }
    }

    fn next_settlement(&mut self) {
        if !self.overlay.can_iter_settlements_units() {
            return;
        }
        if self.overlay.is_showing(OverlayKind::Unit) {
            self.overlay.toggle_unit(None);
            self.selected_unit = None;
        }
        let count = self.world.player.settlements.len();
        if count == 0 {
            return;
        }
        let next = self.selected_settlement.map_or(0, |idx| (idx + 1) % count);
        let Some(settlement) = self.world.settlement(next).cloned() else {
            return;
        };
        if self.overlay.is_showing(OverlayKind::Settlement) {
            self.overlay.update_settlement(settlement);
            self.selected_settlement = Some(next);
        } else if self.overlay.toggle_settlement(Some(settlement), self.world.player.clone())
            == Transition::Opened
        {
            self.selected_settlement = Some(next);
        }
    }

    fn next_unit(&mut self) {
        if !self.overlay.can_iter_settlements_units() {
            return;
        }
        if self.overlay.is_showing(OverlayKind::Settlement) {
            self.overlay.toggle_settlement(None, self.world.player.clone());
            self.selected_settlement = None;
        }
        let count = self.world.units.len();
        if count == 0 {
            return;
        }
        let next = self.selected_unit.map_or(0, |idx| (idx + 1) % count);
        let Some(unit) = self.world.units.get(next).cloned() else {
            return;
        };
        if self.overlay.is_showing(OverlayKind::Unit) {
            self.overlay.update_unit(unit);
            self.selected_unit = Some(next);
        } else if self.overlay.toggle_unit(Some(unit)) == Transition::Opened {
            self.selected_unit = Some(next);
        }
    }

    fn end_turn(&mut self) {
        if !self.warned_this_turn && !self.overlay.is_showing(OverlayKind::Warning) {
            let idle: Vec<_> = self.world.player.settlements.iter().take(2).cloned().collect();
            let negative = self.world.player.wealth < 0.0;
            self.warned_this_turn = true;
            if self.overlay.toggle_warning(idle, true, negative) == Transition::Opened {
                return;
            }
        }
        self.turn += 1;
        self.warned_this_turn = false;
        self.overlay.update_turn(self.turn);
        info!(turn = self.turn, "turn ended");

        let completed = self.world.completed_constructions(self.turn);
        if !completed.is_empty() {
            self.overlay.toggle_construction_notification(completed);
        }
        if self.turn % NIGHT_EVERY == 0 {
            self.is_night = !self.is_night;
            self.overlay.toggle_night(self.is_night);
        }
        if self.turn == 10 {
            self.overlay.toggle_close_to_vic(self.world.close_to_victory());
        }
    }

    fn selected_unit_mut(&mut self) -> Option<&mut Unit> {
        self.selected_unit
            .and_then(|idx| self.world.units.get_mut(idx))
    }
}

fn investigation_for_turn(turn: u32) -> InvestigationResult {
    const RESULTS: [InvestigationResult; 8] = [
        InvestigationResult::Wealth,
        InvestigationResult::Fortune,
        InvestigationResult::Vision,
        InvestigationResult::Health,
        InvestigationResult::Power,
        InvestigationResult::Stamina,
        InvestigationResult::Upkeep,
        InvestigationResult::Nothing,
    ];
    RESULTS[turn as usize % RESULTS.len()]
}
