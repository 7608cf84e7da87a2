//! Elo ladder records: player lifecycle status, per-match audit and bonus audit.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lifecycle of a ladder player. Moves forward one step per win until permanent; never back.
///
/// Declaration order is the standings priority (NEW lowest, PERMANENT highest).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingStatus {
    /// No rating yet (`-` or `new` in the standings).
    #[default]
    New,
    /// One provisional win (`T<n>*`).
    Temp1,
    /// Two provisional wins (`T<n>**`).
    Temp2,
    /// Established rating (bare integer).
    Permanent,
}

impl RatingStatus {
    /// Status after a win. Permanent stays permanent.
    pub fn promoted(self) -> Self {
        match self {
            RatingStatus::New => RatingStatus::Temp1,
            RatingStatus::Temp1 => RatingStatus::Temp2,
            RatingStatus::Temp2 | RatingStatus::Permanent => RatingStatus::Permanent,
        }
    }

    pub fn is_provisional(self) -> bool {
        !matches!(self, RatingStatus::Permanent)
    }
}

/// Rating as pasted back into the club sheet: `new`, `T 1500 *`, `T 1500 **` or `1500`.
pub fn format_rating(rating: i32, status: RatingStatus) -> String {
    match status {
        RatingStatus::New => "new".to_string(),
        RatingStatus::Temp1 => format!("T {} *", rating),
        RatingStatus::Temp2 => format!("T {} **", rating),
        RatingStatus::Permanent => rating.to_string(),
    }
}

/// Rating and status at one point in time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub rating: i32,
    pub status: RatingStatus,
}

impl RatingSnapshot {
    pub fn new(rating: i32, status: RatingStatus) -> Self {
        Self { rating, status }
    }
}

impl std::fmt::Display for RatingSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_rating(self.rating, self.status))
    }
}

/// A player on the ladder. Mutated in place during one calculation pass.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EloPlayerRecord {
    pub name: String,
    pub rating: i32,
    pub status: RatingStatus,
    pub initial_rating: i32,
    pub initial_status: RatingStatus,
    /// `rating - initial_rating`, plus any bonuses.
    pub rating_change: i32,
}

impl EloPlayerRecord {
    pub fn new(name: impl Into<String>, rating: i32, status: RatingStatus) -> Self {
        Self {
            name: name.into(),
            rating,
            status,
            initial_rating: rating,
            initial_status: status,
            rating_change: 0,
        }
    }

    /// A player seen only in match results.
    pub fn unrated(name: impl Into<String>) -> Self {
        Self::new(name, 0, RatingStatus::New)
    }

    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot::new(self.rating, self.status)
    }

    /// Formatted current rating (`T 1500 *` etc.).
    pub fn formatted_rating(&self) -> String {
        format_rating(self.rating, self.status)
    }

    /// Standings order: status priority first, then higher rating.
    pub fn standings_cmp(&self, other: &Self) -> Ordering {
        other
            .status
            .cmp(&self.status)
            .then_with(|| other.rating.cmp(&self.rating))
    }
}

/// One pasted match row: `player1, player2, "S1-S2"`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchLine {
    pub p1: String,
    pub p2: String,
    pub result: String,
}

/// Audit record of one match's rating effect.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedMatch {
    /// Player names as pasted, in pasted order.
    pub p1: String,
    pub p2: String,
    pub result: String,
    pub winner: String,
    pub loser: String,
    /// Points moved by the table lookup (0 for promotions against NEW, abandoned matches).
    pub points: i32,
    /// Winner's pre-match rating was at least the loser's.
    pub is_expected: bool,
    #[serde(rename = "winnerRatingBefore")]
    pub winner_before: RatingSnapshot,
    #[serde(rename = "winnerRatingAfter")]
    pub winner_after: RatingSnapshot,
    #[serde(rename = "loserRatingBefore")]
    pub loser_before: RatingSnapshot,
    #[serde(rename = "loserRatingAfter")]
    pub loser_after: RatingSnapshot,
    pub elo_diff: i32,
    /// `0-0` result. The listed winner is nominal only.
    pub is_abandoned: bool,
}

/// Audit record of a bonus applied after the main pass.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub name: String,
    pub points: i32,
    pub rating_before: i32,
    pub rating_after: i32,
}

/// Output of one calculation session: match audit, sorted standings and bonus audit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EloCalculation {
    pub matches: Vec<ProcessedMatch>,
    pub standings: Vec<EloPlayerRecord>,
    pub bonuses: Vec<Bonus>,
}

impl EloCalculation {
    /// Stable re-sort of standings by status priority, then rating.
    pub fn sort_standings(&mut self) {
        self.standings.sort_by(EloPlayerRecord::standings_cmp);
    }

    pub fn player(&self, name: &str) -> Option<&EloPlayerRecord> {
        self.standings.iter().find(|p| p.name == name)
    }
}
