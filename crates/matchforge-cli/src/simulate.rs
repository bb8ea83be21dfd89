//! The `simulate` subcommand: run a whole session in one process.

use std::path::PathBuf;

use clap::Args;

use matchforge::{
    CommittedRound, MatchKind, MatchSettings, RoundContext, SessionConfig, SessionState,
};

use crate::output;
use crate::CliError;

#[derive(Args)]
pub struct SimulateArgs {
    /// Configuration file (TOML or YAML)
    #[arg(short, long)]
    config: PathBuf,

    /// Number of rounds to generate
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,

    /// Court 1 format, overriding the config (singles or doubles)
    #[arg(long)]
    court1: Option<MatchKind>,

    /// Court 2 format, overriding the config (singles or doubles)
    #[arg(long)]
    court2: Option<MatchKind>,

    /// Emit a JSON report instead of tables
    #[arg(long)]
    json: bool,
}

pub fn run(args: SimulateArgs) -> Result<(), CliError> {
    let config = SessionConfig::load(&args.config)?;
    config.validate()?;

    let roster = config.build_roster()?;
    let (doubles_a, doubles_b) = config.build_doubles_pools(&roster)?;
    let singles_a = matchforge::Pool::singles(&roster, matchforge::Team::A);
    let singles_b = matchforge::Pool::singles(&roster, matchforge::Team::B);

    let ctx = RoundContext {
        roster: &roster,
        singles_a: &singles_a,
        singles_b: &singles_b,
        doubles_a: &doubles_a,
        doubles_b: &doubles_b,
        settings: MatchSettings::from(&config.matching),
    };
    let kinds = [
        args.court1.unwrap_or(config.courts.court1),
        args.court2.unwrap_or(config.courts.court2),
    ];

    let mut state = SessionState::new();
    let mut committed: Vec<CommittedRound> = Vec::new();
    let mut failure = None;

    for _ in 0..args.rounds {
        match ctx.plan_round(&state, kinds) {
            Ok(planned) => {
                if !args.json {
                    for (court, concession) in planned.concessions() {
                        output::print_concession(court, concession);
                    }
                }
                let round = state.commit_round(planned, false)?;
                if !args.json {
                    output::print_round(&round);
                }
                committed.push(round);
            }
            Err(plan_failure) => {
                failure = Some(plan_failure);
                break;
            }
        }
    }

    if args.json {
        output::print_json(&committed, &roster, state.tallies(), failure.as_ref())?;
    } else {
        output::print_player_table(&roster, state.tallies());
        output::print_pair_table(state.tallies());
    }

    match failure {
        Some(plan_failure) => Err(CliError::NoPairing(plan_failure)),
        None => Ok(()),
    }
}
