//! BattleState - The authoritative per-battle aggregate and its transitions

use super::action::{Action, TurnPhase};
use super::constants::{ENERGY_PER_TURN, MAX_ROUNDS};
use super::outcome::{BattleStatus, Outcome};
use crate::ai::{decide_action, AiProfile};
use crate::combat::{basic_attack, defend, resolve_ability_use, wait, ActionOutcome};
use crate::combatant::{AvatarRecord, Combatant, EffectTick};
use crate::error::BattleError;
use crate::rng::RandomSource;
use crate::types::{Difficulty, Side};
use serde::{Deserialize, Serialize};

/// Effects applied at a turn boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Round that starts after this boundary
    pub round: u32,
    pub player_ticks: Vec<EffectTick>,
    pub opponent_ticks: Vec<EffectTick>,
    pub player_energy_restored: u32,
    pub opponent_energy_restored: u32,
}

/// One entry of the append-only battle history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum HistoryEntry {
    Action {
        round: u32,
        side: Side,
        action: Action,
        outcome: ActionOutcome,
    },
    TurnEnd(TurnReport),
}

/// The opponent's move: the AI's choice (None when rejected) and its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentTurn {
    pub action: Option<Action>,
    pub outcome: ActionOutcome,
}

/// Everything that happened during one call to [`BattleState::play_round`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub player: ActionOutcome,
    pub opponent: Option<OpponentTurn>,
    pub turn_end: Option<TurnReport>,
    pub outcome: Outcome,
}

/// State of one battle between the player's avatar and an AI opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub player: Combatant,
    pub opponent: Combatant,
    /// Starts at 1
    pub round: u32,
    pub phase: TurnPhase,
    pub difficulty: Difficulty,
    pub ai_profile: AiProfile,
    pub history: Vec<HistoryEntry>,
}

/// Build a battle from two avatar records
///
/// The opponent's four attributes are scaled by the difficulty before health
/// is derived. Malformed records fail here rather than mid-battle, as does a
/// player avatar that is dead or too exhausted to fight.
pub fn create_battle(
    player: &AvatarRecord,
    opponent: &AvatarRecord,
    difficulty: Difficulty,
) -> Result<BattleState, BattleError> {
    player.ensure_ready()?;
    let player = Combatant::from_record(player, 1.0)?;
    let opponent = Combatant::from_record(opponent, difficulty.attribute_scale())?;

    tracing::debug!(
        player = %player.name,
        opponent = %opponent.name,
        %difficulty,
        player_health = player.max_health,
        opponent_health = opponent.max_health,
        "battle created"
    );

    Ok(BattleState::new(player, opponent, difficulty))
}

impl BattleState {
    /// Start a battle between two ready combatants, using the difficulty's AI profile
    pub fn new(player: Combatant, opponent: Combatant, difficulty: Difficulty) -> Self {
        BattleState {
            player,
            opponent,
            round: 1,
            phase: TurnPhase::Player,
            difficulty,
            ai_profile: AiProfile::for_difficulty(difficulty),
            history: Vec::new(),
        }
    }

    /// Replace the opponent's behavior profile
    pub fn with_ai_profile(mut self, profile: AiProfile) -> Self {
        self.ai_profile = profile;
        self
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn is_over(&self) -> bool {
        self.check_outcome().is_terminal()
    }

    /// Apply the player's chosen action
    ///
    /// Rejected (no mutation, no history) outside the player phase, once the
    /// battle is over, or for an ability index the player does not have. An
    /// unaffordable ability does nothing and leaves the turn with the player.
    pub fn apply_player_action(&mut self, action: Action, rng: &mut impl RandomSource) -> ActionOutcome {
        if let Some(rejection) = self.reject(Side::Player, TurnPhase::Player, &action.to_string()) {
            return rejection;
        }

        let outcome = self.resolve(Side::Player, action, rng);
        if outcome.is_noop() {
            tracing::debug!(%action, kind = ?outcome.kind, "player action had no effect");
            return outcome;
        }

        self.opponent.count_down_stance();
        self.record(Side::Player, action, &outcome);
        self.phase = TurnPhase::Opponent;
        outcome
    }

    /// Let the AI pick and apply the opponent's action
    ///
    /// Rejected outside the opponent phase or once the battle is over, in
    /// which case the AI is not consulted.
    pub fn apply_opponent_action(&mut self, rng: &mut impl RandomSource) -> OpponentTurn {
        if let Some(outcome) = self.reject(Side::Opponent, TurnPhase::Opponent, "opponent turn") {
            return OpponentTurn { action: None, outcome };
        }

        let action = decide_action(self, &self.ai_profile, rng);
        let outcome = self.resolve(Side::Opponent, action, rng);
        self.player.count_down_stance();
        self.record(Side::Opponent, action, &outcome);
        self.phase = TurnPhase::RoundEnd;
        OpponentTurn {
            action: Some(action),
            outcome,
        }
    }

    /// Evaluate win, loss or draw without mutating anything
    pub fn check_outcome(&self) -> Outcome {
        let player_down = self.player.is_defeated();
        let opponent_down = self.opponent.is_defeated();

        match (player_down, opponent_down) {
            (true, true) => return Outcome::knock_out(BattleStatus::Draw),
            (true, false) => return Outcome::knock_out(BattleStatus::OpponentVictory),
            (false, true) => return Outcome::knock_out(BattleStatus::PlayerVictory),
            (false, false) => {}
        }

        // The player still acts in the final round before it is scored
        let final_round_played =
            self.round > MAX_ROUNDS || (self.round == MAX_ROUNDS && self.phase != TurnPhase::Player);
        if !final_round_played {
            return Outcome::IN_PROGRESS;
        }

        // Compare health fractions exactly: p.health / p.max vs o.health / o.max
        let player_score = self.player.health as u64 * self.opponent.max_health as u64;
        let opponent_score = self.opponent.health as u64 * self.player.max_health as u64;
        let status = match player_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => BattleStatus::PlayerVictory,
            std::cmp::Ordering::Less => BattleStatus::OpponentVictory,
            std::cmp::Ordering::Equal => BattleStatus::Draw,
        };
        Outcome::points(status)
    }

    /// Close the round: tick continuous effects, regenerate energy, count
    /// down buffs and hand the next round to the player
    pub fn advance_turn(&mut self) -> TurnReport {
        let player_ticks = self.player.tick_effects();
        let opponent_ticks = self.opponent.tick_effects();
        let player_energy_restored = self.player.restore_energy(ENERGY_PER_TURN);
        let opponent_energy_restored = self.opponent.restore_energy(ENERGY_PER_TURN);

        self.round += 1;
        self.phase = TurnPhase::Player;

        let report = TurnReport {
            round: self.round,
            player_ticks,
            opponent_ticks,
            player_energy_restored,
            opponent_energy_restored,
        };

        tracing::debug!(
            round = self.round,
            player_health = self.player.health,
            opponent_health = self.opponent.health,
            "turn advanced"
        );

        self.history.push(HistoryEntry::TurnEnd(report.clone()));
        report
    }

    /// Play a full round: player action, opponent action, turn boundary
    ///
    /// Stops early when an action is a no-op or when the battle ends.
    pub fn play_round(&mut self, action: Action, rng: &mut impl RandomSource) -> RoundReport {
        let round = self.round;
        let player = self.apply_player_action(action, rng);

        let mut report = RoundReport {
            round,
            player,
            opponent: None,
            turn_end: None,
            outcome: self.check_outcome(),
        };

        if report.player.is_noop() || report.outcome.is_terminal() {
            return report;
        }

        report.opponent = Some(self.apply_opponent_action(rng));
        report.outcome = self.check_outcome();
        if report.outcome.is_terminal() {
            return report;
        }

        report.turn_end = Some(self.advance_turn());
        report.outcome = self.check_outcome();
        report
    }

    /// Serialize the history log as JSON, for audit and replay
    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.history)
    }

    fn reject(&self, side: Side, phase: TurnPhase, action: &str) -> Option<ActionOutcome> {
        let reason = if self.is_over() {
            "The battle is already over"
        } else if self.phase != phase {
            "It is not this combatant's turn"
        } else {
            return None;
        };

        let actor = &self.combatant(side).name;
        tracing::warn!(actor = %actor, action, reason, "action rejected");
        Some(ActionOutcome::rejected(actor, action, reason))
    }

    fn resolve(&mut self, side: Side, action: Action, rng: &mut impl RandomSource) -> ActionOutcome {
        let (actor, target) = match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        };

        match action {
            Action::Attack => basic_attack(actor, target, rng),
            Action::UseAbility(index) => match actor.abilities.get(index).cloned() {
                Some(ability) => resolve_ability_use(actor, &ability, target, rng),
                None => {
                    tracing::warn!(actor = %actor.name, index, "unknown ability index");
                    ActionOutcome::rejected(&actor.name, &action.to_string(), "Unknown ability")
                }
            },
            Action::Defend => defend(actor),
            Action::Wait => wait(actor),
        }
    }

    fn record(&mut self, side: Side, action: Action, outcome: &ActionOutcome) {
        tracing::debug!(round = self.round, ?side, %action, summary = %outcome.summary(), "action applied");
        self.history.push(HistoryEntry::Action {
            round: self.round,
            side,
            action,
            outcome: outcome.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::OutcomeKind;
    use crate::combatant::{Ability, AbilityTier, EffectKind};
    use crate::rng::ScriptedRandom;
    use crate::types::{Attributes, Element, Rarity, StatKind};

    fn ability(name: &str, base: u32, cost: u32) -> Ability {
        Ability {
            name: name.to_string(),
            base_damage: base,
            primary_stat: StatKind::Power,
            stat_multiplier: 1.0,
            energy_cost: cost,
            hit_chance: 95.0,
            status_effects: Vec::new(),
            tier: AbilityTier::Normal,
        }
    }

    fn battle() -> BattleState {
        let attrs = Attributes::new(20, 10, 10, 10);
        let player = Combatant::new(
            "Hero",
            Element::Earth,
            Rarity::Common,
            1,
            attrs,
            vec![ability("Rock Throw", 30, 20), ability("Landslide", 60, 120)],
        );
        let opponent = Combatant::new(
            "Rival",
            Element::Earth,
            Rarity::Common,
            1,
            attrs,
            vec![ability("Pebble", 10, 10)],
        );
        BattleState::new(player, opponent, Difficulty::Easy)
    }

    // Hesitation, evasion and crit rolls all pass at 0.5
    fn steady() -> ScriptedRandom {
        ScriptedRandom::constant(0.5)
    }

    #[test]
    fn test_initial_state() {
        let state = battle();
        assert_eq!(state.round, 1);
        assert_eq!(state.phase, TurnPhase::Player);
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(state.opponent.energy, 100);
        assert_eq!(state.check_outcome(), Outcome::IN_PROGRESS);
    }

    #[test]
    fn test_create_battle_scales_opponent() {
        let record = AvatarRecord {
            name: Some("Volt".to_string()),
            element: Some(Element::Lightning),
            rarity: Some(Rarity::Common),
            level: Some(1.0),
            power: Some(10.0),
            agility: Some(10.0),
            vitality: Some(10.0),
            focus: Some(10.0),
            ..Default::default()
        };
        let state = create_battle(&record, &record, Difficulty::Master).unwrap();
        assert_eq!(state.player.attributes.vitality, 10);
        assert_eq!(state.opponent.attributes.vitality, 15);
        assert!(state.opponent.max_health > state.player.max_health);
        assert!(state.ai_profile.planner);
    }

    #[test]
    fn test_create_battle_rejects_bad_record() {
        let bad = AvatarRecord {
            name: Some("Nobody".to_string()),
            ..Default::default()
        };
        assert!(create_battle(&bad, &bad, Difficulty::Normal).is_err());
    }

    #[test]
    fn test_player_action_moves_phase() {
        let mut state = battle();
        let outcome = state.apply_player_action(Action::UseAbility(0), &mut steady());
        assert_eq!(outcome.kind, OutcomeKind::Hit);
        assert_eq!(state.phase, TurnPhase::Opponent);
        assert_eq!(state.history.len(), 1);

        // Out of turn
        let again = state.apply_player_action(Action::Wait, &mut steady());
        assert_eq!(again.kind, OutcomeKind::Rejected);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_insufficient_energy_keeps_turn() {
        let mut state = battle();
        let before = state.clone();
        let outcome = state.apply_player_action(Action::UseAbility(1), &mut steady());
        assert_eq!(outcome.kind, OutcomeKind::InsufficientEnergy);
        assert!(!outcome.success);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_ability_is_rejected() {
        let mut state = battle();
        let before = state.clone();
        let outcome = state.apply_player_action(Action::UseAbility(7), &mut steady());
        assert_eq!(outcome.kind, OutcomeKind::Rejected);
        assert_eq!(state, before);
    }

    #[test]
    fn test_opponent_needs_its_phase() {
        let mut state = battle();
        let turn = state.apply_opponent_action(&mut steady());
        assert_eq!(turn.action, None);
        assert_eq!(turn.outcome.kind, OutcomeKind::Rejected);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_knockout_ends_battle() {
        let mut state = battle();
        state.opponent.health = 10;
        let outcome = state.apply_player_action(Action::UseAbility(0), &mut steady());
        assert!(outcome.damage >= 10);
        assert_eq!(state.opponent.health, 0);
        let result = state.check_outcome();
        assert_eq!(result.status, BattleStatus::PlayerVictory);
        assert_eq!(result.reason(), "Victory!");

        let late = state.apply_opponent_action(&mut steady()).outcome;
        assert_eq!(late.kind, OutcomeKind::Rejected);
    }

    #[test]
    fn test_double_knockout_is_draw() {
        let mut state = battle();
        state.player.health = 0;
        state.opponent.health = 0;
        assert_eq!(state.check_outcome().status, BattleStatus::Draw);
    }

    #[test]
    fn test_points_decision_at_round_cap() {
        let mut state = battle();
        state.round = MAX_ROUNDS;
        state.phase = TurnPhase::Opponent;
        state.player.health = state.player.max_health / 2;
        state.opponent.health = state.opponent.max_health / 3;
        let result = state.check_outcome();
        assert_eq!(result, Outcome::points(BattleStatus::PlayerVictory));
        assert_eq!(result, state.check_outcome());

        state.opponent.health = state.opponent.max_health / 2;
        assert_eq!(state.check_outcome().status, BattleStatus::Draw);
        assert_eq!(state.check_outcome().reason(), "Technical draw!");
    }

    #[test]
    fn test_player_acts_in_final_round() {
        let mut state = battle();
        state.round = MAX_ROUNDS;
        state.opponent.health = state.opponent.max_health / 2;
        assert_eq!(state.check_outcome(), Outcome::IN_PROGRESS);

        let report = state.play_round(Action::UseAbility(0), &mut steady());
        assert_eq!(report.player.kind, OutcomeKind::Hit);
        assert!(state.opponent.health > 0);
        assert!(report.opponent.is_none());
        assert!(report.turn_end.is_none());
        assert_eq!(report.outcome, Outcome::points(BattleStatus::PlayerVictory));
        assert_eq!(state.round, MAX_ROUNDS);
        assert!(matches!(
            state.history.last(),
            Some(HistoryEntry::Action { side: Side::Player, .. })
        ));
    }

    #[test]
    fn test_create_battle_refuses_blocked_player() {
        let mut record = AvatarRecord {
            name: Some("Husk".to_string()),
            element: Some(Element::Shadow),
            rarity: Some(Rarity::Common),
            level: Some(1.0),
            power: Some(10.0),
            agility: Some(10.0),
            vitality: Some(10.0),
            focus: Some(10.0),
            ..Default::default()
        };
        assert!(create_battle(&record, &record, Difficulty::Normal).is_ok());

        record.alive = false;
        let err = create_battle(&record, &record, Difficulty::Normal).unwrap_err();
        assert!(matches!(err, BattleError::NotReady { .. }));

        record.alive = true;
        record.fatigue = Some(90.0);
        assert!(matches!(
            create_battle(&record, &record, Difficulty::Normal),
            Err(BattleError::NotReady { .. })
        ));
    }

    #[test]
    fn test_effect_lasts_its_turns() {
        let mut state = battle();
        state.opponent.add_buff(crate::combatant::Buff::new(EffectKind::Burn, 5.0, 1));

        let ticks: usize = (0..4).map(|_| state.advance_turn().opponent_ticks.len()).sum();
        assert_eq!(ticks, 1);
        assert_eq!(state.opponent.health, state.opponent.max_health - 5);

        state.opponent.add_buff(crate::combatant::Buff::new(EffectKind::Poison, 2.0, 3));
        let ticks: usize = (0..4).map(|_| state.advance_turn().opponent_ticks.len()).sum();
        assert_eq!(ticks, 3);
        assert_eq!(state.opponent.health, state.opponent.max_health - 5 - 6);
    }

    #[test]
    fn test_unused_defense_ends_with_the_round() {
        let mut state = battle().with_ai_profile(AiProfile {
            defend_chance: 0.0,
            wait_chance: 1.0,
            ..AiProfile::for_difficulty(Difficulty::Easy)
        });

        let report = state.play_round(Action::Defend, &mut steady());
        assert_eq!(report.opponent.and_then(|turn| turn.action), Some(Action::Wait));
        assert!(report.turn_end.is_some());
        assert!(state.player.active_buff(EffectKind::Defense).is_none());
        assert!(state.player.buffs.is_empty());
    }

    #[test]
    fn test_opponent_defense_covers_next_player_hit() {
        let mut state = battle().with_ai_profile(AiProfile {
            defend_chance: 1.0,
            wait_chance: 0.0,
            ..AiProfile::for_difficulty(Difficulty::Easy)
        });

        let first = state.play_round(Action::Wait, &mut steady());
        assert_eq!(first.opponent.and_then(|turn| turn.action), Some(Action::Defend));
        assert!(state.opponent.active_buff(EffectKind::Defense).is_some());

        let outcome = state.apply_player_action(Action::UseAbility(0), &mut steady());
        // 30 + 20 + 2 = 52, mitigation min(5, 26) * 1.5 = 7.5 -> 44
        assert_eq!(outcome.damage, 44);
        assert!(state.opponent.active_buff(EffectKind::Defense).is_none());
    }

    #[test]
    fn test_advance_turn_regenerates_and_ticks() {
        let mut state = battle();
        state.player.energy = 90;
        state.opponent.energy = 10;
        state.opponent.add_buff(crate::combatant::Buff::new(EffectKind::Poison, 4.0, 1));
        state.phase = TurnPhase::RoundEnd;

        let report = state.advance_turn();
        assert_eq!(report.round, 2);
        assert_eq!(state.phase, TurnPhase::Player);
        assert_eq!(report.player_energy_restored, 10);
        assert_eq!(state.opponent.energy, 30);
        assert_eq!(state.opponent.health, state.opponent.max_health - 4);
        assert_eq!(report.opponent_ticks.len(), 1);
        assert!(state.opponent.buffs.is_empty());
        assert!(matches!(state.history.last(), Some(HistoryEntry::TurnEnd(_))));
    }

    #[test]
    fn test_defend_covers_opponent_attack() {
        let mut state = battle().with_ai_profile(AiProfile {
            defend_chance: 0.0,
            wait_chance: 0.0,
            ..AiProfile::for_difficulty(Difficulty::Easy)
        });
        state.apply_player_action(Action::Defend, &mut steady());
        assert!(state.player.active_buff(EffectKind::Defense).is_some());

        let turn = state.apply_opponent_action(&mut steady());
        assert_eq!(turn.action, Some(Action::UseAbility(0)));
        // 10 + 20 + 2 = 32, mitigation min(5, 16) * 1.5 = 7.5 -> 24
        assert_eq!(turn.outcome.damage, 24);
        assert!(state.player.active_buff(EffectKind::Defense).is_none());
    }

    #[test]
    fn test_play_round_full_cycle() {
        let mut state = battle();
        let report = state.play_round(Action::UseAbility(0), &mut steady());
        assert_eq!(report.round, 1);
        assert!(report.opponent.is_some());
        assert!(report.turn_end.is_some());
        assert_eq!(state.round, 2);
        assert_eq!(state.phase, TurnPhase::Player);
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn test_play_round_stops_on_noop() {
        let mut state = battle();
        let report = state.play_round(Action::UseAbility(1), &mut steady());
        assert!(report.player.is_noop());
        assert!(report.opponent.is_none());
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_history_json() {
        let mut state = battle();
        state.play_round(Action::Wait, &mut steady());
        let json = state.history_json().unwrap();
        assert!(json.contains("\"entry\": \"action\""));
        assert!(json.contains("turn_end"));
    }
}
