//! Command-line driver: reads input files, runs one engine component, prints JSON.
//! Run with: cargo run --bin engine -- <command> ...
//! Log level via RUST_LOG (default: info).

use serde::Serialize;
use std::fs;
use tt_tournament_engine::{
    calculate, calculate_rankings, generate_groups, generate_knockout_fixtures, parse_bonus_text,
    parse_rank_text, validate_match_record, MatchRecord, SeededPlayer,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

const USAGE: &str = "usage:
  engine rank <history.json> <player>...
  engine groups <history.json> <player>...
  engine bracket <player-count>
  engine elo <standings.tsv> <matches.tsv> [bonuses.tsv]
  engine parse-ranks <results.txt>";

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_history(path: &str) -> Result<Vec<MatchRecord>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let history: Vec<MatchRecord> = serde_json::from_str(&contents)?;
    log::info!("loaded {} tournaments from {}", history.len(), path);
    Ok(history)
}

fn cmd_rank(args: &[String]) -> CliResult {
    let (path, players) = args.split_first().ok_or(USAGE)?;
    let history = load_history(path)?;
    print_json(&calculate_rankings(&history, players))
}

fn cmd_groups(args: &[String]) -> CliResult {
    let (path, players) = args.split_first().ok_or(USAGE)?;
    let history = load_history(path)?;
    let seeds: Vec<SeededPlayer> = calculate_rankings(&history, players)
        .into_iter()
        .map(SeededPlayer::from)
        .collect();
    print_json(&generate_groups(&seeds))
}

fn cmd_bracket(args: &[String]) -> CliResult {
    let count: usize = args.first().ok_or(USAGE)?.parse()?;
    let fixture = generate_knockout_fixtures(count);
    if fixture.is_empty() {
        log::warn!("no knockout template for {} players", count);
    }
    print_json(&fixture)
}

fn cmd_elo(args: &[String]) -> CliResult {
    let [standings, matches, rest @ ..] = args else {
        return Err(USAGE.into());
    };
    let mut calc = calculate(&fs::read_to_string(standings)?, &fs::read_to_string(matches)?)?;
    if let Some(bonus_path) = rest.first() {
        let entries = parse_bonus_text(&fs::read_to_string(bonus_path)?);
        for batch in entries.chunks(tt_tournament_engine::MAX_BONUSES_PER_CALL) {
            calc.apply_bonuses(batch)?;
        }
    }
    print_json(&calc)
}

fn cmd_parse_ranks(args: &[String]) -> CliResult {
    let path = args.first().ok_or(USAGE)?;
    let record = parse_rank_text(&fs::read_to_string(path)?)?;
    validate_match_record(&record)?;
    print_json(&record)
}

fn main() -> CliResult {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return Err(USAGE.into());
    };
    log::debug!("running {} with {} arguments", command, rest.len());

    match command.as_str() {
        "rank" => cmd_rank(rest),
        "groups" => cmd_groups(rest),
        "bracket" => cmd_bracket(rest),
        "elo" => cmd_elo(rest),
        "parse-ranks" => cmd_parse_ranks(rest),
        _ => {
            eprintln!("{}", USAGE);
            Err(format!("unknown command: {}", command).into())
        }
    }
}
