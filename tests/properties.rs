use microcosm_overlay::config::OverlayConfig;
use microcosm_overlay::model::{
    AttackData, Blessing, ConstructionMenu, Faction, Improvement, InvestigationResult, Player,
    Project, ProjectType, Settlement, Unit, UnitPlan, Victory, VictoryType,
};
use microcosm_overlay::state::gate::gate;
use microcosm_overlay::state::{Direction, OverlayKind, OverlayState, WindowedList};
use proptest::prelude::*;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn player(settlements: usize) -> Player {
    Player::new("Fred", Faction::Imperials).with_settlements(
        (0..settlements)
            .map(|idx| Settlement::new(format!("S{idx}"), 1))
            .collect(),
    )
}

fn attack() -> AttackData {
    let unit = Unit::from_plan(UnitPlan::new("Warrior", 25.0));
    AttackData {
        attacker: unit.clone(),
        defender: unit,
        damage_to_attacker: 1.0,
        damage_to_defender: 1.0,
        player_attack: false,
        attacker_was_killed: false,
        defender_was_killed: false,
    }
}

fn improvements(count: usize) -> Vec<Improvement> {
    (0..count)
        .map(|idx| Improvement::new(format!("I{idx}"), 1.0))
        .collect()
}

fn projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|idx| Project::new(format!("P{idx}"), ProjectType::Magical))
        .collect()
}

fn plans(count: usize) -> Vec<UnitPlan> {
    (0..count)
        .map(|idx| UnitPlan::new(format!("U{idx}"), 1.0))
        .collect()
}

fn blessings(count: usize) -> Vec<Blessing> {
    (0..count)
        .map(|idx| Blessing::new(format!("B{idx}"), 1.0))
        .collect()
}

/// Applies one encoded operation. Returns the kind that was freshly opened, if any.
fn apply(state: &mut OverlayState, op: u8, param: usize) -> Option<OverlayKind> {
    let direction = DIRECTIONS[param % DIRECTIONS.len()];
    let before: Vec<_> = state.showing().collect();
    match op {
        0 => {
            state.toggle_standard(param as u32);
        }
        1 => {
            state.toggle_construction(
                improvements(param % 3 * 4),
                projects(param % 2 * 3),
                plans(param % 4 * 3),
            );
        }
        2 => {
            state.toggle_blessing(blessings(param));
        }
        3 => {
            state.toggle_settlement(Some(Settlement::new("Here", 2)), player(param));
        }
        4 => {
            state.toggle_unit(None);
        }
        5 => {
            state.toggle_deployment();
        }
        6 => {
            state.toggle_tutorial();
        }
        7 => {
            state.toggle_warning(vec![], param % 2 == 0, param % 3 == 0);
        }
        8 => {
            state.toggle_blessing_notification(None);
        }
        9 => {
            state.toggle_construction_notification(vec![]);
        }
        10 => {
            state.toggle_level_up_notification(vec![]);
        }
        11 => {
            state.toggle_attack((param % 3 != 0).then(attack));
        }
        12 => {
            state.toggle_siege_notif(None, None);
        }
        13 => {
            state.toggle_setl_click(None, None);
        }
        14 => {
            state.toggle_pause();
        }
        15 => {
            state.toggle_controls();
        }
        16 => {
            state.toggle_elimination(None);
        }
        17 => {
            state.toggle_close_to_vic(vec![]);
        }
        18 => {
            state.toggle_investigation(Some(InvestigationResult::Vision));
        }
        19 => {
            state.toggle_night(param % 2 == 0);
        }
        20 => {
            state.remove_layer();
        }
        21 => {
            state.navigate_constructions(direction);
        }
        22 => {
            state.switch_construction_menu(direction);
        }
        23 => {
            state.navigate_blessings(direction);
        }
        24 => {
            state.navigate_pause(direction);
        }
        25 => {
            state.navigate_setl_click(direction);
        }
        26 => {
            state.navigate_standard(direction);
        }
        27 => {
            state.remove_warning_if_possible();
        }
        _ => {
            // Victory is terminal, so keep it rare.
            if param == 0 {
                state.toggle_victory(Victory {
                    player: player(1),
                    victory_type: VictoryType::Serendipity,
                });
            }
        }
    }
    state.showing().find(|kind| !before.contains(kind))
}

fn ops() -> impl Strategy<Value = Vec<(u8, usize)>> {
    prop::collection::vec((0u8..29, 0usize..12), 1..80)
}

fn check_list<T>(list: &WindowedList<T>, width: usize) -> Result<(), TestCaseError> {
    let (low, high) = list.window().bounds();
    prop_assert_eq!(high - low, width - 1);
    prop_assert!(high <= (width - 1).max(list.len().saturating_sub(1)));
    if let Some(idx) = list.selected_index() {
        prop_assert!(idx < list.len());
    }
    Ok(())
}

proptest! {
    #[test]
    fn each_kind_shows_at_most_once(ops in ops()) {
        let mut state = OverlayState::new();
        for (op, param) in ops {
            apply(&mut state, op, param);
            let mut kinds: Vec<_> = state.showing().collect();
            let total = kinds.len();
            kinds.sort();
            kinds.dedup();
            prop_assert_eq!(kinds.len(), total);
        }
    }

    #[test]
    fn blockers_never_sit_beneath_what_they_block(ops in ops()) {
        let mut state = OverlayState::new();
        for (op, param) in ops {
            apply(&mut state, op, param);
            let showing: Vec<_> = state.showing().collect();
            for (lower_idx, lower) in showing.iter().enumerate() {
                for upper in &showing[lower_idx + 1..] {
                    // `lower` opened first, so it must not be something `upper` refuses to open over.
                    prop_assert!(
                        !gate(*upper).blocks_opening(*lower),
                        "{} opened over its blocker {}", upper, lower
                    );
                }
            }
        }
    }

    #[test]
    fn list_windows_keep_width_and_bounds(ops in ops()) {
        let config = OverlayConfig::default();
        let mut state = OverlayState::with_config(config);
        for (op, param) in ops {
            apply(&mut state, op, param);
            if let Some(list) = state.blessings() {
                check_list(list, config.list_window)?;
            }
            if let Some(panel) = state.construction() {
                check_list(panel.improvements(), config.list_window)?;
                check_list(panel.projects(), config.list_window)?;
                check_list(panel.unit_plans(), config.list_window)?;
            }
        }
    }

    #[test]
    fn fresh_lists_select_their_first_entry(ops in ops()) {
        let mut state = OverlayState::new();
        for (op, param) in ops {
            match apply(&mut state, op, param) {
                Some(OverlayKind::Blessing) => {
                    let list = state.blessings().expect("blessing showing");
                    prop_assert_eq!(list.selected_index(), (!list.is_empty()).then_some(0));
                    prop_assert_eq!(list.window().bounds(), (0, 5));
                }
                Some(OverlayKind::Construction) => {
                    let panel = state.construction().expect("construction showing");
                    let expected = if !panel.improvements().is_empty() {
                        ConstructionMenu::Improvements
                    } else if !panel.projects().is_empty() || panel.unit_plans().is_empty() {
                        ConstructionMenu::Projects
                    } else {
                        ConstructionMenu::Units
                    };
                    prop_assert_eq!(panel.menu(), expected);
                    let first = match expected {
                        ConstructionMenu::Improvements => panel.improvements().items().first().map(|i| i.name.clone()),
                        ConstructionMenu::Projects => panel.projects().items().first().map(|p| p.name.clone()),
                        ConstructionMenu::Units => panel.unit_plans().items().first().map(|u| u.name.clone()),
                    };
                    prop_assert_eq!(panel.selected().map(|c| c.name().to_string()), first);
                }
                _ => {}
            }
        }
    }
}
