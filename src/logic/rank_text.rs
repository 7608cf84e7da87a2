//! Tournament results as pasted text, and the rules a finished tournament must satisfy.

use crate::models::{EngineError, MatchRecord, RankGroup};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Tiers that must be present: Cup 1, 2, 3 and Plate 5, 6, 7.
const MANDATORY_TIERS: [u8; 6] = [1, 2, 3, 5, 6, 7];
/// Semi-final tiers hold exactly two players.
const SEMI_FINAL_TIERS: [u8; 2] = [3, 7];
/// Quarter-final tiers hold at most four players.
const QUARTER_FINAL_TIERS: [u8; 2] = [4, 8];

/// Display rank printed on the results sheet for each tier rating 1..=8.
const DISPLAY_RANKS: [(u32, u8); 8] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (5, 4),
    (9, 5),
    (10, 6),
    (11, 7),
    (13, 8),
];

fn rank_line_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\.\s+(.+)$").ok()).as_ref()
}

fn name_separator_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",| and ").ok()).as_ref()
}

/// Tier rating for a display rank on the results sheet.
fn rating_for_rank(rank: u32) -> Option<u8> {
    DISPLAY_RANKS
        .iter()
        .find(|(display, _)| *display == rank)
        .map(|&(_, rating)| rating)
}

/// Parse `DD/MM/YYYY` or `YYYY-MM-DD`.
pub fn parse_result_date(s: &str) -> Result<NaiveDate, EngineError> {
    let s = s.trim();
    let parsed = if s.contains('/') {
        NaiveDate::parse_from_str(s, "%d/%m/%Y")
    } else {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
    };
    parsed.map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Parse a pasted results block:
///
/// ```text
/// 08/12/2025
/// 1. Name
/// 2. Name
/// 3. Name, Name
/// ```
///
/// Lines that do not look like `<rank>. names` are ignored. Each rank line becomes a tier. The
/// sheet ranks 1, 2, 3, 5, 9, 10, 11, 13 map to ratings 1 to 8, so a left-out tier does not shift
/// the ones below it. Any other rank takes its position among the parsed lines as rating.
pub fn parse_rank_text(text: &str) -> Result<MatchRecord, EngineError> {
    let (Some(line_re), Some(separator_re)) = (rank_line_re(), name_separator_re()) else {
        log::error!("rank text patterns failed to compile");
        return Err(EngineError::EmptyRankText);
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(EngineError::EmptyRankText);
    }

    let date = parse_result_date(lines[0])?;

    let mut rank_groups = Vec::new();
    for line in &lines[1..] {
        let Some(caps) = line_re.captures(line) else {
            log::debug!("skipping non-rank line: {}", line);
            continue;
        };
        let Ok(rank) = caps[1].parse::<u32>() else {
            continue;
        };
        let players: Vec<String> = separator_re
            .split(&caps[2])
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect();
        let rating = rating_for_rank(rank)
            .unwrap_or_else(|| u8::try_from(rank_groups.len() + 1).unwrap_or(u8::MAX));
        rank_groups.push(RankGroup::new(rank, rating, players));
    }

    if rank_groups.is_empty() {
        return Err(EngineError::EmptyRankText);
    }

    let mut record = MatchRecord::new(date, rank_groups);
    record.id = Some(format!("t_{}", date.format("%Y_%m_%d")));
    Ok(record)
}

/// Check a finished tournament against the club's bracket rules.
pub fn validate_match_record(record: &MatchRecord) -> Result<(), EngineError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tier_sizes: BTreeMap<u8, usize> = BTreeMap::new();

    for group in &record.rank_groups {
        if !(1..=8).contains(&group.rating) {
            return Err(EngineError::InvalidRating {
                rating: group.rating,
            });
        }
        *tier_sizes.entry(group.rating).or_insert(0) += group.players.len();

        for name in &group.players {
            if !seen.insert(name.as_str()) {
                return Err(EngineError::DuplicateInTournament { name: name.clone() });
            }
        }
    }

    for (&rating, &count) in &tier_sizes {
        if SEMI_FINAL_TIERS.contains(&rating) && count != 2 {
            return Err(EngineError::WrongGroupSize {
                rating,
                expected: 2,
                actual: count,
            });
        }
        if QUARTER_FINAL_TIERS.contains(&rating) && count > 4 {
            return Err(EngineError::GroupTooLarge {
                rating,
                max: 4,
                actual: count,
            });
        }
    }

    for rating in MANDATORY_TIERS {
        if tier_sizes.get(&rating).copied().unwrap_or(0) == 0 {
            return Err(EngineError::MissingTier { rating });
        }
    }

    Ok(())
}
