use crate::model::{
    AttackData, Blessing, CompletedConstruction, Faction, Improvement, Player, Project,
    ProjectType, SetlAttackData, Settlement, Unit, UnitPlan, Victory, VictoryType,
};
use crate::rules::{GameRules, Yields};

/// A small fixed world for the terminal demo.
#[derive(Debug, Clone)]
pub struct DemoWorld {
    pub player: Player,
    pub enemy: Player,
    pub units: Vec<Unit>,
    pub improvements: Vec<Improvement>,
    pub projects: Vec<Project>,
    pub unit_plans: Vec<UnitPlan>,
    pub blessings: Vec<Blessing>,
}

impl DemoWorld {
    pub fn new() -> Self {
        let settlements = [
            "Ashford", "Brightwater", "Coldharbour", "Dunmere", "Eastwatch", "Fairhaven",
            "Greywick", "Highmoor", "Ironvale",
        ]
        .iter()
        .enumerate()
        .map(|(idx, name)| Settlement::new(*name, 1 + idx as u32 % 4))
        .collect();
        let mut player =
            Player::new("Player", Faction::Agriculturists).with_settlements(settlements);
        player.wealth = 120.0;
        let enemy = Player::new("The Nocturne", Faction::Nocturne)
            .with_settlements(vec![Settlement::new("Duskhold", 3)]);

        let unit_plans = vec![
            UnitPlan::new("Warrior", 25.0),
            UnitPlan::new("Archer", 30.0),
            UnitPlan::new("Settler", 40.0),
        ];
        Self {
            player,
            enemy,
            units: unit_plans.iter().take(2).cloned().map(Unit::from_plan).collect(),
            improvements: [
                ("Farm", 10.0),
                ("Mine", 15.0),
                ("Temple", 20.0),
                ("Market", 25.0),
                ("Granary", 25.0),
                ("Library", 30.0),
                ("Barracks", 35.0),
                ("Harbour", 40.0),
            ]
            .into_iter()
            .map(|(name, cost)| Improvement::new(name, cost))
            .collect(),
            projects: vec![
                Project::new("Call to Arms", ProjectType::Bountiful),
                Project::new("Inflation by Design", ProjectType::Economical),
                Project::new("Prayer Meeting", ProjectType::Magical),
            ],
            unit_plans,
            blessings: [("Beliefs", 30.0), ("Harvest Rites", 45.0), ("Divine Architecture", 60.0)]
                .into_iter()
                .map(|(name, cost)| Blessing::new(name, cost))
                .collect(),
        }
    }

    pub fn settlement(&self, index: usize) -> Option<&Settlement> {
        self.player.settlements.get(index)
    }

    pub fn sample_attack(&self, turn: u32) -> AttackData {
        let attacker = self.units.first().cloned().unwrap_or_else(|| {
            Unit::from_plan(UnitPlan::new("Warrior", 25.0))
        });
        let defender = Unit::from_plan(UnitPlan::new("Raider", 20.0));
        AttackData {
            attacker,
            defender,
            damage_to_attacker: 5.0 + turn as f64,
            damage_to_defender: 12.0 + turn as f64,
            player_attack: true,
            attacker_was_killed: false,
            defender_was_killed: turn % 3 == 0,
        }
    }

    pub fn sample_setl_attack(&self, settlement: Settlement) -> SetlAttackData {
        let attacker = self.units.first().cloned().unwrap_or_else(|| {
            Unit::from_plan(UnitPlan::new("Warrior", 25.0))
        });
        SetlAttackData {
            attacker,
            settlement,
            setl_owner: self.enemy.clone(),
            damage_to_attacker: 8.0,
            damage_to_setl: 20.0,
            player_attack: true,
            attacker_was_killed: false,
            setl_was_taken: false,
        }
    }

    pub fn completed_constructions(&self, turn: u32) -> Vec<CompletedConstruction> {
        let idx = turn as usize;
        match (self.settlement(idx % 9), self.improvements.get(idx % 8)) {
            (Some(settlement), Some(improvement)) if turn % 2 == 0 => vec![CompletedConstruction {
                construction: improvement.name.clone(),
                settlement: settlement.name.clone(),
            }],
            _ => Vec::new(),
        }
    }

    pub fn close_to_victory(&self) -> Vec<Victory> {
        vec![Victory {
            player: self.enemy.clone(),
            victory_type: VictoryType::Vigour,
        }]
    }
}

impl Default for DemoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat yields scaled by settlement level; harvest halves at night.
pub struct DemoRules;

impl GameRules for DemoRules {
    fn settlement_totals(&self, player: &Player, settlement: &Settlement, is_night: bool) -> Yields {
        let level = settlement.level as f64;
        let mut harvest = 2.0 * level;
        if player.faction == Faction::Agriculturists {
            harvest += 1.0;
        }
        if is_night {
            harvest /= 2.0;
        }
        Yields::new(1.5 * level, harvest, level, 0.5 * level)
    }

    fn unlocks(&self, blessing: &Blessing) -> Vec<String> {
        match blessing.name.as_str() {
            "Beliefs" => vec!["Temple".to_string()],
            "Harvest Rites" => vec!["Granary".to_string(), "Harbour".to_string()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoRules, DemoWorld};
    use crate::model::Blessing;
    use crate::rules::GameRules;

    #[test]
    fn demo_world_needs_status_scrolling() {
        let world = DemoWorld::new();
        assert!(world.player.settlements.len() > 7);
        assert_eq!(world.units.len(), 2);
    }

    #[test]
    fn night_halves_harvest() {
        let world = DemoWorld::new();
        let settlement = world.settlement(0).expect("settlement");
        let day = DemoRules.settlement_totals(&world.player, settlement, false);
        let night = DemoRules.settlement_totals(&world.player, settlement, true);
        assert_eq!(night.harvest * 2.0, day.harvest);
    }

    #[test]
    fn unknown_blessing_unlocks_nothing() {
        assert!(DemoRules.unlocks(&Blessing::new("Mystery", 1.0)).is_empty());
    }
}
