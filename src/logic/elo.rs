//! Club Elo ladder: standings + match results in, updated standings and audit trail out.
//!
//! Provisional players (NEW, TEMP1, TEMP2) take a rating from their opponents when they win and
//! move one status step forward. Permanent players trade points from the rating-difference table.

use crate::logic::paste::{
    is_standings_header, normalize_name, parse_leading_int, parse_rating_token, parse_score,
    read_tab_rows,
};
use crate::logic::point_table::{band_for, points_for_win};
use crate::models::{
    Bonus, EloCalculation, EloPlayerRecord, EngineError, MatchLine, ProcessedMatch, RatingStatus,
};
use std::collections::HashMap;

/// Bonus entries accepted per call.
pub const MAX_BONUSES_PER_CALL: usize = 4;

/// Players in first-seen order, indexed by normalised name.
#[derive(Debug, Default)]
struct Ladder {
    players: Vec<EloPlayerRecord>,
    index: HashMap<String, usize>,
}

impl Ladder {
    fn position_or_insert(&mut self, key: String, name: &str) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        log::debug!("adding unrated player from match results: {}", name);
        self.players.push(EloPlayerRecord::unrated(name));
        self.index.insert(key, self.players.len() - 1);
        self.players.len() - 1
    }
}

/// Parse a standings block (`No.`, `Name`, `Elo Rating` columns).
///
/// A header line is detected on the first row and skipped. Rows without a name are skipped.
/// Two rows with the same normalised name reject the whole block.
pub fn parse_standings(text: &str) -> Result<Vec<EloPlayerRecord>, EngineError> {
    Ok(parse_ladder(text)?.players)
}

fn parse_ladder(text: &str) -> Result<Ladder, EngineError> {
    let rows = read_tab_rows(text);
    let skip = usize::from(rows.first().is_some_and(|r| is_standings_header(r)));

    let mut ladder = Ladder::default();
    for row in rows.iter().skip(skip) {
        let Some(name) = row.get(1) else {
            log::debug!("skipping standings row without a name: {:?}", row);
            continue;
        };
        let key = normalize_name(name);
        if key.is_empty() {
            log::debug!("skipping standings row with an empty name: {:?}", row);
            continue;
        }
        if ladder.index.contains_key(&key) {
            return Err(EngineError::DuplicatePlayer { name: name.clone() });
        }
        let (rating, status) = parse_rating_token(row.get(2).map(String::as_str));
        ladder.index.insert(key, ladder.players.len());
        ladder
            .players
            .push(EloPlayerRecord::new(name.as_str(), rating, status));
    }
    Ok(ladder)
}

/// Parse a match block (`player1, player2, S1-S2`). Rows with fewer than three cells are skipped.
pub fn parse_match_lines(text: &str) -> Vec<MatchLine> {
    read_tab_rows(text)
        .into_iter()
        .filter_map(|row| match row.as_slice() {
            [p1, p2, result, ..] => Some(MatchLine {
                p1: p1.clone(),
                p2: p2.clone(),
                result: result.clone(),
            }),
            _ => {
                log::debug!("skipping match row with fewer than 3 cells: {:?}", row);
                None
            }
        })
        .collect()
}

/// Run one calculation session over pasted standings and match results.
pub fn calculate(standings_text: &str, matches_text: &str) -> Result<EloCalculation, EngineError> {
    if standings_text.trim().is_empty() {
        return Err(EngineError::MissingStandings);
    }
    let ladder = parse_ladder(standings_text)?;

    if matches_text.trim().is_empty() {
        return Err(EngineError::MissingMatches);
    }
    let lines = parse_match_lines(matches_text);

    Ok(run(ladder, &lines))
}

/// Run one calculation session over already-parsed standings and matches.
pub fn process_matches(
    standings: Vec<EloPlayerRecord>,
    lines: &[MatchLine],
) -> Result<EloCalculation, EngineError> {
    let mut ladder = Ladder::default();
    for player in standings {
        let key = normalize_name(&player.name);
        if ladder.index.contains_key(&key) {
            return Err(EngineError::DuplicatePlayer { name: player.name });
        }
        ladder.index.insert(key, ladder.players.len());
        ladder.players.push(player);
    }
    Ok(run(ladder, lines))
}

fn run(mut ladder: Ladder, lines: &[MatchLine]) -> EloCalculation {
    let mut matches = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(processed) = play(&mut ladder, line) {
            matches.push(processed);
        }
    }

    let mut calc = EloCalculation {
        matches,
        standings: ladder.players,
        bonuses: Vec::new(),
    };
    calc.sort_standings();
    log::info!(
        "processed {} of {} matches, {} players in standings",
        calc.matches.len(),
        lines.len(),
        calc.standings.len()
    );
    calc
}

/// Apply one match to the ladder. `None` when the row is malformed.
fn play(ladder: &mut Ladder, line: &MatchLine) -> Option<ProcessedMatch> {
    let Some((s1, s2)) = parse_score(&line.result) else {
        log::debug!("skipping match with unreadable result: {:?}", line);
        return None;
    };
    let (key1, key2) = (normalize_name(&line.p1), normalize_name(&line.p2));
    if key1.is_empty() || key2.is_empty() || key1 == key2 {
        log::debug!("skipping match with invalid players: {:?}", line);
        return None;
    }

    let i1 = ladder.position_or_insert(key1, &line.p1);
    let i2 = ladder.position_or_insert(key2, &line.p2);

    let abandoned = s1 == 0 && s2 == 0;
    // Abandoned matches list the first player as a nominal winner.
    let (wi, li) = if abandoned || s1 > s2 { (i1, i2) } else { (i2, i1) };

    let winner_before = ladder.players[wi].snapshot();
    let loser_before = ladder.players[li].snapshot();
    let (w_rating, l_rating) = (winner_before.rating, loser_before.rating);

    let mut winner_after = winner_before;
    let mut loser_after = loser_before;
    let mut points = 0;

    if abandoned {
        log::debug!("abandoned match {} v {}", line.p1, line.p2);
    } else if winner_before.status.is_provisional() {
        winner_after.rating = match winner_before.status {
            RatingStatus::New => l_rating,
            RatingStatus::Temp1 => w_rating.max(l_rating),
            _ => round_half_up_mean(w_rating, l_rating),
        };
        winner_after.status = winner_before.status.promoted();

        if loser_before.status != RatingStatus::New {
            points = points_for_win(w_rating, l_rating);
            loser_after.rating = loser_after.rating.saturating_sub(points);
        }
    } else if loser_before.status != RatingStatus::New {
        points = points_for_win(w_rating, l_rating);
        winner_after.rating = winner_after.rating.saturating_add(points);
        loser_after.rating = loser_after.rating.saturating_sub(points);
    }

    let winner = &mut ladder.players[wi];
    winner.rating = winner_after.rating;
    winner.status = winner_after.status;
    winner.rating_change = winner.rating.saturating_sub(winner.initial_rating);
    let winner_name = winner.name.clone();

    let loser = &mut ladder.players[li];
    loser.rating = loser_after.rating;
    loser.status = loser_after.status;
    loser.rating_change = loser.rating.saturating_sub(loser.initial_rating);
    let loser_name = loser.name.clone();

    log::debug!(
        "{} ({} -> {}) beat {} ({} -> {}), {} points, band {:?}",
        winner_name,
        winner_before,
        winner_after,
        loser_name,
        loser_before,
        loser_after,
        points,
        band_for(w_rating.saturating_sub(l_rating))
    );

    Some(ProcessedMatch {
        p1: line.p1.clone(),
        p2: line.p2.clone(),
        result: line.result.clone(),
        winner: winner_name,
        loser: loser_name,
        points,
        is_expected: w_rating >= l_rating,
        winner_before,
        winner_after,
        loser_before,
        loser_after,
        elo_diff: w_rating.saturating_sub(l_rating).saturating_abs(),
        is_abandoned: abandoned,
    })
}

/// Mean of two ratings, halves rounded towards positive infinity.
fn round_half_up_mean(a: i32, b: i32) -> i32 {
    let mean = (i64::from(a) + i64::from(b) + 1).div_euclid(2);
    i32::try_from(mean).unwrap_or(if mean < 0 { i32::MIN } else { i32::MAX })
}

/// Parse a bonus block: `name, points` per line. Points keep only digits and `-`.
pub fn parse_bonus_text(text: &str) -> Vec<(String, i32)> {
    read_tab_rows(text)
        .into_iter()
        .filter_map(|row| match row.as_slice() {
            [name, points, ..] => {
                let cleaned: String = points
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '-')
                    .collect();
                Some((name.clone(), parse_leading_int(&cleaned)))
            }
            _ => None,
        })
        .collect()
}

impl EloCalculation {
    /// Add bonus points to players after the main pass and re-sort the standings.
    ///
    /// Names are matched by normalised name; unknown names are skipped. Returns how many
    /// entries were applied. Each applied entry is appended to `bonuses`.
    pub fn apply_bonuses(&mut self, entries: &[(String, i32)]) -> Result<usize, EngineError> {
        if entries.len() > MAX_BONUSES_PER_CALL {
            return Err(EngineError::TooManyBonuses {
                max: MAX_BONUSES_PER_CALL,
                given: entries.len(),
            });
        }

        let mut applied = 0;
        for (name, points) in entries {
            let key = normalize_name(name);
            let Some(player) = self
                .standings
                .iter_mut()
                .find(|p| !key.is_empty() && normalize_name(&p.name) == key)
            else {
                log::warn!("no player matches bonus entry: {}", name);
                continue;
            };
            let rating_before = player.rating;
            player.rating = player.rating.saturating_add(*points);
            player.rating_change = player.rating_change.saturating_add(*points);
            self.bonuses.push(Bonus {
                name: player.name.clone(),
                points: *points,
                rating_before,
                rating_after: player.rating,
            });
            applied += 1;
        }

        if applied > 0 {
            self.sort_standings();
            log::info!("applied bonus to {} players", applied);
        }
        Ok(applied)
    }

    /// Standings as a sheet paste: `No.`, `Name`, `Elo Rating`.
    pub fn standings_tsv(&self) -> String {
        let mut out = String::from("No.\tName\tElo Rating\n");
        for (i, p) in self.standings.iter().enumerate() {
            out.push_str(&format!("{}\t{}\t{}\n", i + 1, p.name, p.formatted_rating()));
        }
        out
    }

    /// Match analysis as a sheet paste. Player cells are quoted and hold the rating move on a
    /// second line; then result, rating gap and points.
    pub fn match_analysis_tsv(&self) -> String {
        let mut out = String::new();
        for m in &self.matches {
            out.push_str(&format!(
                "\"{}\n{} → {}\"\t\"{}\n{} → {}\"\t{}\t{}\t{}\n",
                m.winner,
                m.winner_before,
                m.winner_after,
                m.loser,
                m.loser_before,
                m.loser_after,
                m.result,
                m.elo_diff,
                m.points
            ));
        }
        out
    }
}
