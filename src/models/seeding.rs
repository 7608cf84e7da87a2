//! SeededPlayer and the two-group draw result.

use crate::models::history::{PlayerName, PlayerRankingStat};
use serde::{Deserialize, Serialize};

/// A player in seed order, carrying the average that produced the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeededPlayer {
    pub name: PlayerName,
    pub average: f64,
}

impl SeededPlayer {
    pub fn new(name: impl Into<PlayerName>, average: f64) -> Self {
        Self {
            name: name.into(),
            average,
        }
    }
}

impl From<&PlayerRankingStat> for SeededPlayer {
    fn from(stat: &PlayerRankingStat) -> Self {
        Self::new(stat.name.clone(), stat.average)
    }
}

impl From<PlayerRankingStat> for SeededPlayer {
    fn from(stat: PlayerRankingStat) -> Self {
        Self::new(stat.name, stat.average)
    }
}

/// Two balanced groups; regenerated on every shuffle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Groups {
    pub group_a: Vec<SeededPlayer>,
    pub group_b: Vec<SeededPlayer>,
}

impl Groups {
    /// Total players across both groups.
    pub fn len(&self) -> usize {
        self.group_a.len() + self.group_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_a.is_empty() && self.group_b.is_empty()
    }
}
