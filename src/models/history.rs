//! Tournament history (MatchRecord, RankGroup) and the derived ranking view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player names are plain strings; the history provider owns identity.
pub type PlayerName = String;

/// One finishing tier of a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankGroup {
    /// Display-only ordinal (1, 2, 3, 5, 9, ...).
    pub rank: u32,
    /// Canonical tier, 1 = best, 8 = worst. Used for averaging.
    pub rating: u8,
    pub players: Vec<PlayerName>,
}

impl RankGroup {
    pub fn new(rank: u32, rating: u8, players: Vec<PlayerName>) -> Self {
        Self {
            rank,
            rating,
            players,
        }
    }
}

/// A finished tournament: its date and the ordered tiers of participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    #[serde(alias = "ranks")]
    pub rank_groups: Vec<RankGroup>,
}

impl MatchRecord {
    pub fn new(date: NaiveDate, rank_groups: Vec<RankGroup>) -> Self {
        Self {
            id: None,
            date,
            rank_groups,
        }
    }

    /// Tier rating of `name` in this tournament, if they took part.
    pub fn rating_of(&self, name: &str) -> Option<u8> {
        self.rank_groups
            .iter()
            .find(|g| g.players.iter().any(|p| p == name))
            .map(|g| g.rating)
    }
}

/// Ranking view of a player, recomputed on every query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankingStat {
    pub name: PlayerName,
    /// Tier ratings, most recent first.
    pub ranks: Vec<u8>,
    pub average: f64,
    pub played_count: usize,
}

/// Tunables for the rolling ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingConfig {
    /// Number of most recent tournaments averaged. Tie-breaks start at this index.
    pub window: usize,
    /// Average given to players without any tournament, so they sort last.
    pub unplayed_average: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            window: 5,
            unplayed_average: 999.0,
        }
    }
}
