//! battle_sim - Headless balancing harness for battle_core
//!
//! Usage: `battle_sim [easy|normal|hard|master|all] [battles-per-matchup] [seed]`
//!
//! With one battle per matchup the first battle is narrated round by round.

mod simulation;

use battle_core::{create_battle, flavor_line, Difficulty};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::{auto_player_action, sample_roster, BattleSimulation};
use thiserror::Error;

#[derive(Error, Debug)]
enum SimError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Battle(#[from] battle_core::BattleError),
}

struct Args {
    difficulties: Vec<Difficulty>,
    battles: u32,
    seed: u64,
}

fn parse_args() -> Result<Args, SimError> {
    let mut args = std::env::args().skip(1);

    let difficulties = match args.next().as_deref() {
        None | Some("all") => Difficulty::all().to_vec(),
        Some(name) => vec![name.parse::<Difficulty>().map_err(SimError::InvalidArgument)?],
    };

    let battles = match args.next() {
        Some(n) => n
            .parse()
            .map_err(|_| SimError::InvalidArgument(format!("battle count '{}'", n)))?,
        None => 20,
    };

    let seed = match args.next() {
        Some(s) => s
            .parse()
            .map_err(|_| SimError::InvalidArgument(format!("seed '{}'", s)))?,
        None => 42,
    };

    Ok(Args {
        difficulties,
        battles,
        seed,
    })
}

fn narrate(difficulty: Difficulty, rng: &mut ChaCha8Rng) -> Result<(), SimError> {
    let roster = sample_roster();
    let mut state = create_battle(&roster[0], &roster[1], difficulty)?;
    println!("{} vs {} ({})", state.player.name, state.opponent.name, difficulty);

    while !state.is_over() {
        let action = auto_player_action(&state);
        let report = state.play_round(action, rng);
        println!("-- Round {} --", report.round);
        println!("  {}", report.player.summary());
        if let Some(turn) = &report.opponent {
            if let Some(action) = &turn.action {
                println!("  {}", flavor_line(action, rng));
            }
            println!("  {}", turn.outcome.summary());
        }
    }

    println!("{}", state.check_outcome().reason());
    Ok(())
}

fn run(args: &Args) -> Result<(), SimError> {
    let roster = sample_roster();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    tracing::info!(battles = args.battles, seed = args.seed, roster = roster.len(), "starting simulation");

    if args.battles == 1 {
        for &difficulty in &args.difficulties {
            narrate(difficulty, &mut rng)?;
        }
        return Ok(());
    }

    println!(
        "{:<8} {:>8} {:>8} {:>8} {:>8} {:>10} {:>10}",
        "tier", "battles", "win %", "draws", "rounds", "avg xp", "materials"
    );

    for &difficulty in &args.difficulties {
        let mut totals = BattleSimulation::default();
        for player in &roster {
            for opponent in &roster {
                let result = BattleSimulation::run(player, opponent, difficulty, args.battles, &mut rng)?;
                totals.merge(&result);
            }
        }

        tracing::debug!(%difficulty, wins = totals.player_wins, "tier finished");
        println!(
            "{:<8} {:>8} {:>8.1} {:>8} {:>8.1} {:>10.1} {:>10}",
            difficulty.to_string(),
            totals.battles,
            totals.win_rate(),
            totals.draws,
            totals.avg_rounds(),
            totals.avg_xp(),
            totals.total_materials
        );
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args().and_then(|args| run(&args));
    if let Err(err) = result {
        tracing::error!(%err, "simulation failed");
        std::process::exit(1);
    }
}
