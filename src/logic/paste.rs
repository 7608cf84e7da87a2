//! Tab-separated paste blocks copied from the club spreadsheet.

use crate::models::RatingStatus;

/// Header keywords looked for in the first standings line.
const STANDINGS_HEADER_KEYWORDS: [&str; 4] = ["name", "rating", "rank", "no."];

/// Split a paste block into rows of non-empty, trimmed cells.
///
/// Runs of tabs count as one separator and blank lines are dropped.
pub fn read_tab_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(
                record
                    .iter()
                    .filter(|cell| !cell.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>(),
            ),
            Err(e) => {
                log::debug!("unreadable paste row: {}", e);
                None
            }
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

/// True when a standings row is a column header ("No.", "Name", "Elo Rating", ...).
pub fn is_standings_header(cells: &[String]) -> bool {
    let line = cells.join(" ").to_lowercase();
    STANDINGS_HEADER_KEYWORDS.iter().any(|k| line.contains(k))
}

/// Lookup key for a player name: ASCII letters, digits and parentheses, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '(' || *c == ')')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Leading integer of `s` after an optional `-`, like a lenient spreadsheet parse. 0 if none.
pub fn parse_leading_int(s: &str) -> i32 {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().map(|v| sign * v).unwrap_or(0)
}

/// Rating cell to (rating, status): `-`/`new`/empty -> NEW 0, `T<n>*` -> TEMP1,
/// `T<n>**` -> TEMP2, anything else -> PERMANENT with its digits.
pub fn parse_rating_token(token: Option<&str>) -> (i32, RatingStatus) {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return (0, RatingStatus::New);
    };
    let clean = token.to_lowercase();
    if clean == "-" || clean == "new" {
        return (0, RatingStatus::New);
    }

    let digits: String = clean.chars().filter(char::is_ascii_digit).collect();
    let value = digits.parse::<i32>().unwrap_or(0);

    if clean.starts_with('t') {
        if clean.ends_with("**") {
            return (value, RatingStatus::Temp2);
        }
        if clean.ends_with('*') {
            return (value, RatingStatus::Temp1);
        }
    }
    (value, RatingStatus::Permanent)
}

/// `"S1-S2"` to scores. `None` when either side is not a number.
pub fn parse_score(result: &str) -> Option<(i32, i32)> {
    let (s1, s2) = result.split_once('-')?;
    let s1 = s1.trim().parse::<i32>().ok()?;
    let s2 = s2.trim().parse::<i32>().ok()?;
    Some((s1, s2))
}
