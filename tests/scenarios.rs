use microcosm_overlay::model::{
    AttackData, Blessing, ConstructionMenu, Faction, Improvement, PauseOption, Player, Settlement,
    Unit, UnitPlan,
};
use microcosm_overlay::state::{ConstructionRef, Direction, OverlayKind, OverlayState, Transition};

fn attack(defender: &str) -> AttackData {
    AttackData {
        attacker: Unit::from_plan(UnitPlan::new("Warrior", 25.0)),
        defender: Unit::from_plan(UnitPlan::new(defender, 25.0)),
        damage_to_attacker: 4.0,
        damage_to_defender: 9.0,
        player_attack: true,
        attacker_was_killed: false,
        defender_was_killed: false,
    }
}

#[test]
fn construction_list_starts_on_improvements_and_navigates() {
    let mut state = OverlayState::new();
    state.toggle_construction(
        vec![
            Improvement::new("imp1", 10.0),
            Improvement::new("imp2", 20.0),
            Improvement::new("imp3", 30.0),
        ],
        vec![],
        vec![UnitPlan::new("unit1", 15.0)],
    );
    let panel = state.construction().expect("construction showing");
    assert_eq!(panel.menu(), ConstructionMenu::Improvements);
    assert_eq!(panel.selected().map(|c| c.name().to_string()), Some("imp1".to_string()));
    assert_eq!(panel.construction_window().bounds(), (0, 5));

    state.navigate_constructions(Direction::Down);
    state.navigate_constructions(Direction::Down);
    state.navigate_constructions(Direction::Up);
    let selected = state.construction().and_then(|panel| panel.selected());
    assert!(matches!(selected, Some(ConstructionRef::Improvement(imp)) if imp.name == "imp2"));
}

#[test]
fn pause_menu_stops_at_quit() {
    let mut state = OverlayState::new();
    state.toggle_pause();
    assert_eq!(state.pause().map(|p| p.option()), Some(PauseOption::Resume));
    for _ in 0..3 {
        state.navigate_pause(Direction::Down);
    }
    assert_eq!(state.pause().map(|p| p.option()), Some(PauseOption::Quit));
    assert!(!state.navigate_pause(Direction::Down));
    assert_eq!(state.pause().map(|p| p.option()), Some(PauseOption::Quit));
}

#[test]
fn attacks_coalesce_into_one_panel() {
    let mut state = OverlayState::new();
    state.toggle_attack(Some(attack("first")));
    state.toggle_attack(Some(attack("second")));
    let attacks = state
        .showing()
        .filter(|kind| *kind == OverlayKind::Attack)
        .count();
    assert_eq!(attacks, 1);
    assert_eq!(
        state.attack_data().map(|data| data.defender.plan.name.as_str()),
        Some("second")
    );
    state.toggle_attack(None);
    assert!(!state.is_showing(OverlayKind::Attack));
}

#[test]
fn standard_stays_closed_while_blessing_shows() {
    let mut state = OverlayState::new();
    state.toggle_blessing(vec![Blessing::new("Beliefs", 30.0)]);
    let transition = state.toggle_standard(5);
    assert_eq!(transition, Transition::Blocked(OverlayKind::Blessing));
    assert!(!state.is_showing(OverlayKind::Standard));
    assert!(state.is_showing(OverlayKind::Blessing));
    assert_eq!(state.current_turn(), 0);
}

#[test]
fn remove_layer_reports_closed_unit_once() {
    let mut state = OverlayState::new();
    state.toggle_unit(Some(Unit::from_plan(UnitPlan::new("Warrior", 25.0))));
    assert_eq!(state.remove_layer(), Some(OverlayKind::Unit));
    assert!(state.is_empty());
    assert_eq!(state.remove_layer(), None);
    assert!(state.is_empty());
}

#[test]
fn reopening_replaces_payload() {
    let mut state = OverlayState::new();
    state.toggle_blessing(vec![Blessing::new("first", 1.0)]);
    state.toggle_blessing(vec![]);
    assert!(!state.is_showing(OverlayKind::Blessing));
    state.toggle_blessing(vec![Blessing::new("second", 2.0)]);
    assert_eq!(
        state.blessings().and_then(|list| list.selected()).map(|b| b.name.as_str()),
        Some("second")
    );
}

#[test]
fn settlement_reopen_refreshes_context_and_status_window() {
    let player = Player::new("Fred", Faction::Scrutineers).with_settlements(
        (0..10).map(|idx| Settlement::new(format!("S{idx}"), 1)).collect(),
    );
    let mut state = OverlayState::new().with_player(player.clone());
    state.toggle_standard(2);
    state.navigate_standard(Direction::Down);
    assert_eq!(state.standard().map(|s| s.status_window().bounds()), Some((1, 8)));
    state.toggle_standard(2);
    state.toggle_standard(3);
    assert_eq!(state.standard().map(|s| s.status_window().bounds()), Some((0, 7)));
    assert_eq!(state.current_turn(), 3);

    state.toggle_standard(3);
    state.toggle_settlement(Some(Settlement::new("S4", 1)), player);
    assert_eq!(state.current_settlement().map(|s| s.name.as_str()), Some("S4"));
    state.update_settlement(Settlement::new("S5", 1));
    assert_eq!(state.current_settlement().map(|s| s.name.as_str()), Some("S5"));
}
