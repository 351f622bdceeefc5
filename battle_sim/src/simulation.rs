//! Battle simulation utilities

use battle_core::{
    compute_damage, compute_rewards, create_battle, default_abilities, AbilityRecord, Action, AvatarRecord,
    BattleError, BattleState, BattleStatus, Difficulty, Element, RandomSource, Rarity, TurnPhase,
};

/// Build a sample roster: one avatar per element, using the built-in catalog
pub fn sample_roster() -> Vec<AvatarRecord> {
    let catalog = default_abilities();

    Element::all()
        .iter()
        .enumerate()
        .map(|(i, &element)| {
            let abilities = catalog
                .get(&element)
                .map(|list| list.iter().map(AbilityRecord::from).collect())
                .unwrap_or_default();
            let spread = i as f64 * 2.0;

            AvatarRecord {
                id: Some(format!("sample-{}", i)),
                name: Some(format!("{} Sprite", element)),
                element: Some(element),
                rarity: Some(if i % 3 == 0 { Rarity::Rare } else { Rarity::Common }),
                level: Some(5.0),
                power: Some(18.0 + spread),
                agility: Some(22.0 - spread),
                vitality: Some(16.0 + spread / 2.0),
                focus: Some(14.0),
                abilities,
                bond: Some(50.0),
                ..Default::default()
            }
        })
        .collect()
}

/// Automatic player: the affordable ability with the most expected damage,
/// otherwise the basic attack
pub fn auto_player_action(state: &BattleState) -> Action {
    let player = &state.player;
    let opponent = &state.opponent;

    player
        .affordable_abilities()
        .map(|(index, ability)| (index, compute_damage(player, ability, opponent, false)))
        .max_by_key(|&(_, damage)| damage)
        .map(|(index, _)| Action::UseAbility(index))
        .unwrap_or(Action::Attack)
}

/// Play a battle to the end with the automatic player
pub fn play_battle(state: &mut BattleState, rng: &mut impl RandomSource) -> BattleStatus {
    while !state.is_over() {
        if state.phase != TurnPhase::Player {
            state.advance_turn();
            continue;
        }
        let action = auto_player_action(state);
        state.play_round(action, rng);
    }
    state.check_outcome().status
}

/// Aggregate results of many battles
#[derive(Debug, Clone, Default)]
pub struct BattleSimulation {
    pub battles: u32,
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub total_rounds: u32,
    pub total_xp: u32,
    pub total_currency: u32,
    pub total_materials: u32,
}

impl BattleSimulation {
    /// Run `count` battles between two avatars
    pub fn run(
        player: &AvatarRecord,
        opponent: &AvatarRecord,
        difficulty: Difficulty,
        count: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Self, BattleError> {
        let mut result = BattleSimulation::default();

        for _ in 0..count {
            let mut state = create_battle(player, opponent, difficulty)?;
            let status = play_battle(&mut state, rng);
            let rewards = compute_rewards(&state, status, rng);
            result.record(status, state.round, rewards.xp, rewards.currency, rewards.rare_material);
        }

        Ok(result)
    }

    fn record(&mut self, status: BattleStatus, rounds: u32, xp: u32, currency: u32, materials: u32) {
        self.battles += 1;
        match status {
            BattleStatus::PlayerVictory => self.player_wins += 1,
            BattleStatus::OpponentVictory => self.opponent_wins += 1,
            BattleStatus::Draw | BattleStatus::InProgress => self.draws += 1,
        }
        self.total_rounds += rounds;
        self.total_xp += xp;
        self.total_currency += currency;
        self.total_materials += materials;
    }

    /// Merge another simulation's totals into this one
    pub fn merge(&mut self, other: &BattleSimulation) {
        self.battles += other.battles;
        self.player_wins += other.player_wins;
        self.opponent_wins += other.opponent_wins;
        self.draws += other.draws;
        self.total_rounds += other.total_rounds;
        self.total_xp += other.total_xp;
        self.total_currency += other.total_currency;
        self.total_materials += other.total_materials;
    }

    /// Player win rate in percent
    pub fn win_rate(&self) -> f64 {
        if self.battles > 0 {
            self.player_wins as f64 / self.battles as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn avg_rounds(&self) -> f64 {
        if self.battles > 0 {
            self.total_rounds as f64 / self.battles as f64
        } else {
            0.0
        }
    }

    pub fn avg_xp(&self) -> f64 {
        if self.battles > 0 {
            self.total_xp as f64 / self.battles as f64
        } else {
            0.0
        }
    }
}
