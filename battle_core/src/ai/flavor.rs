//! Flavor lines narrating the opponent's intent

use crate::battle::Action;
use crate::rng::RandomSource;

const ATTACK_LINES: &[&str] = &[
    "The opponent readies its attack!",
    "A powerful energy gathers!",
    "Your opponent unleashes its technique!",
];

const DEFEND_LINES: &[&str] = &[
    "The opponent takes a defensive stance!",
    "A barrier takes shape!",
    "Your opponent braces for a counterattack!",
];

const WAIT_LINES: &[&str] = &[
    "The opponent is gathering energy!",
    "Your opponent waits for the right moment!",
    "A mysterious aura surrounds the enemy...",
];

/// Pick a narration line for the action the opponent is about to take
pub fn flavor_line(action: &Action, rng: &mut impl RandomSource) -> &'static str {
    let lines = match action {
        Action::Attack | Action::UseAbility(_) => ATTACK_LINES,
        Action::Defend => DEFEND_LINES,
        Action::Wait => WAIT_LINES,
    };
    let index = ((rng.next_f64() * lines.len() as f64) as usize).min(lines.len() - 1);
    lines[index]
}
