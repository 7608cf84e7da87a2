//! Rolling ranking: average tier over the last tournaments, with deeper-history tie-breaks.

use crate::models::{MatchRecord, PlayerName, PlayerRankingStat, RankingConfig};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Rank `active_players` from `history` with the default config (last 5, unplayed = 999).
pub fn calculate_rankings(
    history: &[MatchRecord],
    active_players: &[PlayerName],
) -> Vec<PlayerRankingStat> {
    calculate_rankings_with(history, active_players, &RankingConfig::default())
}

/// Rank `active_players` from `history`, best first.
///
/// 1. Order history newest first (input order is not trusted; equal dates keep input order).
/// 2. Collect each active player's tier ratings in that order.
/// 3. Average the first `config.window` entries; players without history get `unplayed_average`.
/// 4. Sort by average, then by ratings at index `window`, `window + 1`, ... while both have one.
pub fn calculate_rankings_with(
    history: &[MatchRecord],
    active_players: &[PlayerName],
    config: &RankingConfig,
) -> Vec<PlayerRankingStat> {
    let mut sorted_history: Vec<&MatchRecord> = history.iter().collect();
    sorted_history.sort_by(|a, b| b.date.cmp(&a.date));

    let mut stats: Vec<PlayerRankingStat> = Vec::with_capacity(active_players.len());
    let mut index: HashMap<&str, usize> = HashMap::new();
    for name in active_players {
        if index.contains_key(name.as_str()) {
            continue;
        }
        index.insert(name.as_str(), stats.len());
        stats.push(PlayerRankingStat {
            name: name.clone(),
            ranks: Vec::new(),
            average: 0.0,
            played_count: 0,
        });
    }

    for tournament in &sorted_history {
        for group in &tournament.rank_groups {
            for player in &group.players {
                if let Some(&i) = index.get(player.as_str()) {
                    stats[i].ranks.push(group.rating);
                }
            }
        }
    }

    for stat in &mut stats {
        stat.played_count = stat.ranks.len();
        let recent = &stat.ranks[..stat.ranks.len().min(config.window)];
        stat.average = if recent.is_empty() {
            config.unplayed_average
        } else {
            let sum: u32 = recent.iter().map(|&r| u32::from(r)).sum();
            f64::from(sum) / recent.len() as f64
        };
    }

    stats.sort_by(|a, b| compare_stats(a, b, config.window));
    log::debug!(
        "ranked {} players over {} tournaments",
        stats.len(),
        sorted_history.len()
    );
    stats
}

/// Lower average first; ties broken by older results starting at `tiebreak_from`.
/// Stops at the end of the shorter history and reports a tie.
pub fn compare_stats(
    a: &PlayerRankingStat,
    b: &PlayerRankingStat,
    tiebreak_from: usize,
) -> Ordering {
    match a.average.partial_cmp(&b.average) {
        Some(Ordering::Equal) | None => {}
        Some(ord) => return ord,
    }
    a.ranks
        .iter()
        .zip(b.ranks.iter())
        .skip(tiebreak_from)
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Every distinct player name in the history, alphabetically.
pub fn all_players(history: &[MatchRecord]) -> Vec<PlayerName> {
    history
        .iter()
        .flat_map(|t| t.rank_groups.iter())
        .flat_map(|g| g.players.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
