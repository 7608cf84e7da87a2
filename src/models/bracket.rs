//! Knockout fixture tree: Cup and Plate divisions, rounds and matches.

use serde::{Deserialize, Serialize};

/// Which knockout division a round belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    /// Top finishers of each group.
    Cup,
    /// Remaining finishers.
    Plate,
}

/// A single fixture. `p1`/`p2` are seed tokens ("A2") or forward references ("Winner CQ1").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub p1: String,
    pub p2: String,
    /// Human-readable hint of where the winner goes (bye recipients only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round: String,
    pub matches: Vec<Match>,
}

/// Cup and Plate brackets for one participant count. Both empty when the count is unsupported.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketFixture {
    pub cup: Vec<Round>,
    pub plate: Vec<Round>,
}

impl BracketFixture {
    pub fn rounds(&self, division: Division) -> &[Round] {
        match division {
            Division::Cup => &self.cup,
            Division::Plate => &self.plate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cup.is_empty() && self.plate.is_empty()
    }

    /// Find a match by id in either division.
    pub fn find_match(&self, id: &str) -> Option<&Match> {
        self.cup
            .iter()
            .chain(self.plate.iter())
            .flat_map(|r| r.matches.iter())
            .find(|m| m.id == id)
    }
}
