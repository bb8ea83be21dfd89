//! Terminal and JSON rendering for session runs.

use owo_colors::OwoColorize;
use serde_json::json;

use matchforge::{CommittedRound, Court, PlanFailure, Roster, TallyBoard};

pub fn print_round(round: &CommittedRound) {
    println!("{}", format!("Round {}", round.round).bold());
    for court in &round.courts {
        println!(
            "  {} ({}): {} vs {}",
            court.court,
            court.kind,
            court.side_a.label().cyan(),
            court.side_b.label().magenta(),
        );
    }
}

pub fn print_concession(court: Court, concession: &str) {
    println!("{} {court}: {concession}", "warning:".yellow().bold());
}

pub fn print_player_table(roster: &Roster, tallies: &TallyBoard) {
    println!();
    println!("{}", "Matches per player".bold());
    println!("  {:<10} {:>8} {:>8} {:>6}", "Player", "Singles", "Doubles", "Total");
    for player in roster.players() {
        let tally = tallies.tally_for(&player.id);
        println!(
            "  {:<10} {:>8} {:>8} {:>6}",
            player.id.as_str(),
            tally.singles,
            tally.doubles,
            tally.total(),
        );
    }
}

pub fn print_pair_table(tallies: &TallyBoard) {
    let mut pairs = tallies.pairs().peekable();
    if pairs.peek().is_none() {
        return;
    }
    println!();
    println!("{}", "Matches per pair".bold());
    println!("  {:<12} {:>8}", "Pair", "Matches");
    for (label, count) in pairs {
        println!("  {:<12} {:>8}", label.as_str(), count);
    }
}

pub fn print_json(
    rounds: &[CommittedRound],
    roster: &Roster,
    tallies: &TallyBoard,
    failure: Option<&PlanFailure>,
) -> Result<(), serde_json::Error> {
    let players: Vec<_> = roster
        .players()
        .iter()
        .map(|p| {
            let tally = tallies.tally_for(&p.id);
            json!({
                "player": p.id.as_str(),
                "team": p.team.letter(),
                "rank": p.rank,
                "singles": tally.singles,
                "doubles": tally.doubles,
                "total": tally.total(),
            })
        })
        .collect();
    let pairs: Vec<_> = tallies
        .pairs()
        .map(|(label, count)| json!({ "pair": label.as_str(), "matches": count }))
        .collect();

    let report = json!({
        "rounds": rounds,
        "players": players,
        "pairs": pairs,
        "failure": failure,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
