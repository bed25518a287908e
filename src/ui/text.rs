use crate::model::{
    AttackData, ConstructionMenu, InvestigationResult, PauseOption, SetlAttackData,
    SettlementAttackType,
};
use crate::rules::GameRules;
use crate::state::scroll::WindowedList;
use crate::state::{Overlay, OverlayKind, OverlayState};
use crate::ui::draw_order::draw_order;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MARKER: &str = "> ";
const PAD: &str = "  ";

/// Draws the visible overlays as plain lines, one block per panel.
pub struct TextRenderer<'a> {
    rules: &'a dyn GameRules,
    width: usize,
    is_night: bool,
}

impl<'a> TextRenderer<'a> {
    pub fn new(rules: &'a dyn GameRules, width: usize) -> Self {
        Self {
            rules,
            width,
            is_night: false,
        }
    }

    pub fn with_night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }

    pub fn render(&self, state: &OverlayState) -> Vec<String> {
        let mut lines = Vec::new();
        for kind in draw_order(state) {
            let Some(overlay) = state.get(kind) else {
                continue;
            };
            lines.push(self.header(kind));
            self.panel(state, overlay, &mut lines);
        }
        lines.into_iter().map(|line| clip_to_width(&line, self.width)).collect()
    }

    fn header(&self, kind: OverlayKind) -> String {
        let title = format!("── {} ", capitalise(kind.label()));
        let used = UnicodeWidthStr::width(title.as_str());
        format!("{}{}", title, "─".repeat(self.width.saturating_sub(used)))
    }

    fn panel(&self, state: &OverlayState, overlay: &Overlay, out: &mut Vec<String>) {
        let player_name = state.current_player().map(|player| player.name.as_str());
        match overlay {
            Overlay::Victory(victory) => {
                if Some(victory.player.name.as_str()) == player_name {
                    out.push(format!("You have won a {:?} victory!", victory.victory_type));
                } else {
                    out.push(format!(
                        "{} has won a {:?} victory!",
                        victory.player.name, victory.victory_type
                    ));
                }
            }
            Overlay::Deployment => out.push("Select a tile to deploy the unit.".to_string()),
            Overlay::Elimination(player) => match player {
                Some(player) if Some(player.name.as_str()) == player_name => {
                    out.push("Game over! You have been eliminated.".to_string());
                }
                Some(player) => out.push(format!("{} has been eliminated.", player.name)),
                None => out.push("A player has been eliminated.".to_string()),
            },
            Overlay::Night { beginning } => {
                if *beginning {
                    out.push("The night has fallen. Vision is reduced.".to_string());
                } else {
                    out.push("The sun rises once again.".to_string());
                }
            }
            Overlay::CloseToVictory(victories) => {
                for victory in victories {
                    out.push(format!(
                        "{} is close to a {:?} victory.",
                        victory.player.name, victory.victory_type
                    ));
                }
            }
            Overlay::BlessNotif(blessing) => {
                if let Some(blessing) = blessing {
                    out.push(format!("Blessing completed: {}", blessing.name));
                    let unlocked = self.rules.unlocks(blessing);
                    if !unlocked.is_empty() {
                        out.push(format!("Unlocked: {}", unlocked.join(", ")));
                    }
                }
            }
            Overlay::ConstrNotif(constructions) => {
                let plural = if constructions.len() > 1 { "s" } else { "" };
                out.push(format!("Construction{plural} completed"));
                for done in constructions {
                    out.push(format!("{PAD}{} in {}", done.construction, done.settlement));
                }
            }
            Overlay::LevelNotif(settlements) => {
                let plural = if settlements.len() > 1 { "s" } else { "" };
                out.push(format!("Settlement{plural} levelled up"));
                for settlement in settlements {
                    out.push(format!("{PAD}{} is now level {}", settlement.name, settlement.level));
                }
            }
            Overlay::Warning(warning) => {
                if warning.will_have_negative_wealth {
                    out.push("Your wealth will be depleted next turn!".to_string());
                }
                if warning.has_no_blessing {
                    out.push("You are not undergoing a blessing.".to_string());
                }
                if !warning.problematic_settlements.is_empty() {
                    let names: Vec<_> = warning
                        .problematic_settlements
                        .iter()
                        .map(|settlement| settlement.name.as_str())
                        .collect();
                    out.push(format!("Idle settlements: {}", names.join(", ")));
                }
            }
            Overlay::Investigation(result) => {
                out.push(investigation_text(*result).to_string());
            }
            Overlay::Attack(data) => out.push(attack_text(data)),
            Overlay::SetlAttack(data) => out.push(setl_attack_text(data)),
            Overlay::SiegeNotif { settlement, sieger } => {
                let setl = settlement.as_ref().map_or("A settlement", |s| s.name.as_str());
                let by = sieger.as_ref().map_or("an enemy", |p| p.name.as_str());
                out.push(format!("{setl} has been placed under siege by {by}!"));
            }
            Overlay::Settlement => self.settlement_panel(state, out),
            Overlay::Unit => {
                if let Some(unit) = state.selected_unit() {
                    out.push(unit.plan.name.clone());
                    out.push(format!(
                        "Health {:.0}/{:.0}  Power {:.0}  Stamina {}/{}",
                        unit.health,
                        unit.plan.max_health,
                        unit.plan.power,
                        unit.remaining_stamina,
                        unit.plan.total_stamina
                    ));
                    if unit.besieging {
                        out.push("Remember: the siege will end if you move!".to_string());
                    }
                }
            }
            Overlay::Construction(panel) => {
                let tab = |menu: ConstructionMenu, name: &str| {
                    if panel.menu() == menu {
                        format!("[{name}]")
                    } else {
                        name.to_string()
                    }
                };
                out.push(format!(
                    "{}  {}  {}",
                    tab(ConstructionMenu::Improvements, "Improvements"),
                    tab(ConstructionMenu::Projects, "Projects"),
                    tab(ConstructionMenu::Units, "Units")
                ));
                match panel.menu() {
                    ConstructionMenu::Improvements => push_list(panel.improvements(), out, |imp| {
                        format!("{} ({:.0})", imp.name, imp.cost)
                    }),
                    ConstructionMenu::Projects => push_list(panel.projects(), out, |project| {
                        format!("{} [{:?}]", project.name, project.project_type)
                    }),
                    ConstructionMenu::Units => push_list(panel.unit_plans(), out, |plan| {
                        format!("{} ({:.0})", plan.name, plan.cost)
                    }),
                }
            }
            Overlay::Standard(panel) => {
                out.push(format!("Turn {}", state.current_turn()));
                if let Some(player) = state.current_player() {
                    out.push(format!("{} ({:?})  wealth {:.0}", player.name, player.faction, player.wealth));
                    let window = panel.status_window();
                    let total = player.settlements.len();
                    let (start, end) = window.visible_range(total);
                    for settlement in &player.settlements[start..end] {
                        let yields = self.rules.settlement_totals(player, settlement, self.is_night);
                        out.push(format!("{PAD}{:<12} {yields}", settlement.name));
                    }
                    if total > self.status_scroll_threshold(state) {
                        if let Some(footer) = window.footer(total) {
                            out.push(footer);
                        }
                    }
                }
            }
            Overlay::SetlClick(panel) => {
                let name = panel.settlement.as_ref().map_or("Unknown", |s| s.name.as_str());
                let owner = panel.owner.as_ref().map_or("nobody", |p| p.name.as_str());
                out.push(format!("{name} (held by {owner})"));
                let option = |label: &str, value: Option<SettlementAttackType>| {
                    if panel.option() == value {
                        format!("{MARKER}{label}")
                    } else {
                        format!("{PAD}{label}")
                    }
                };
                out.push(format!(
                    "{}  {}",
                    option("Attack", Some(SettlementAttackType::Attack)),
                    option("Besiege", Some(SettlementAttackType::Besiege))
                ));
                out.push(option("Cancel", None));
            }
            Overlay::Blessing(list) => push_list(list, out, |blessing| {
                format!("{} ({:.0})", blessing.name, blessing.cost)
            }),
            Overlay::Tutorial => {
                out.push("Click a tile to found your first settlement.".to_string());
            }
            Overlay::Pause(panel) => {
                for (option, label) in [
                    (PauseOption::Resume, "Resume"),
                    (PauseOption::Save, "Save"),
                    (PauseOption::Controls, "Controls"),
                    (PauseOption::Quit, "Quit"),
                ] {
                    let prefix = if panel.option() == option { MARKER } else { PAD };
                    let suffix = if option == PauseOption::Save && panel.has_saved() {
                        " (saved!)"
                    } else {
                        ""
                    };
                    out.push(format!("{prefix}{label}{suffix}"));
                }
            }
            Overlay::Controls => {
                for line in [
                    "arrows  navigate",
                    "enter   select",
                    "esc     back",
                    "s       standard overlay",
                    "p       pause",
                    "q       quit",
                ] {
                    out.push(format!("{PAD}{line}"));
                }
            }
        }
    }

    fn settlement_panel(&self, state: &OverlayState, out: &mut Vec<String>) {
        let (Some(settlement), Some(player)) = (state.current_settlement(), state.current_player())
        else {
            return;
        };
        let siege = if settlement.under_siege { " (under siege)" } else { "" };
        out.push(format!("{} level {}{siege}", settlement.name, settlement.level));
        out.push(format!(
            "Strength {:.0}  Satisfaction {:.0}",
            settlement.strength, settlement.satisfaction
        ));
        let yields = self.rules.settlement_totals(player, settlement, self.is_night);
        out.push(yields.to_string());
    }

    fn status_scroll_threshold(&self, state: &OverlayState) -> usize {
        state.config().status_scroll_threshold()
    }
}

fn push_list<T>(list: &WindowedList<T>, out: &mut Vec<String>, describe: impl Fn(&T) -> String) {
    for (idx, item) in list.visible() {
        let prefix = if list.selected_index() == Some(idx) {
            MARKER
        } else {
            PAD
        };
        out.push(format!("{prefix}{}", describe(item)));
    }
    if let Some(footer) = list.footer() {
        out.push(footer);
    }
    let prefix = if list.selected_index().is_none() {
        MARKER
    } else {
        PAD
    };
    out.push(format!("{prefix}Cancel"));
}

fn attack_text(data: &AttackData) -> String {
    let (attacker, defender) = (&data.attacker.plan.name, &data.defender.plan.name);
    match (data.player_attack, data.attacker_was_killed, data.defender_was_killed) {
        (true, true, _) => format!("Your {attacker} was killed attacking a {defender}."),
        (false, _, true) => format!("Your {defender} was killed by a {attacker}."),
        (false, true, _) => format!("A {attacker} died attacking your {defender}."),
        (true, _, true) => format!("Your {attacker} killed a {defender}."),
        (true, false, false) => format!(
            "Your {attacker} attacked a {defender} (-{:.0} / -{:.0}).",
            data.damage_to_attacker, data.damage_to_defender
        ),
        (false, false, false) => format!(
            "A {attacker} attacked your {defender} (-{:.0} / -{:.0}).",
            data.damage_to_attacker, data.damage_to_defender
        ),
    }
}

fn setl_attack_text(data: &SetlAttackData) -> String {
    let attacker = &data.attacker.plan.name;
    let settlement = &data.settlement.name;
    if data.attacker_was_killed {
        format!("The {attacker} was killed attacking {settlement}.")
    } else if data.setl_was_taken && data.player_attack {
        format!("Your {attacker} took {settlement}!")
    } else if data.setl_was_taken {
        format!("{settlement} was taken by {}.", data.setl_owner.name)
    } else if data.player_attack {
        format!(
            "Your {attacker} attacked {settlement} (-{:.0} / -{:.0}).",
            data.damage_to_attacker, data.damage_to_setl
        )
    } else {
        format!("{settlement} was attacked by a {attacker}.")
    }
}

fn investigation_text(result: Option<InvestigationResult>) -> &'static str {
    match result {
        Some(InvestigationResult::Wealth) => "The relic contained a bounty of wealth.",
        Some(InvestigationResult::Fortune) => "The relic boosted your current blessing.",
        Some(InvestigationResult::Vision) => "The relic revealed the surrounding lands.",
        Some(InvestigationResult::Health) => "The relic healed and strengthened your unit.",
        Some(InvestigationResult::Power) => "The relic increased your unit's power.",
        Some(InvestigationResult::Stamina) => "The relic increased your unit's stamina.",
        Some(InvestigationResult::Upkeep) => "The relic removed your unit's upkeep.",
        Some(InvestigationResult::Nothing) | None => "The relic was empty.",
    }
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}
