//! Engine computations: ranking, group draw, knockout templates, Elo ladder.

mod elo;
mod grouping;
mod knockout;
mod paste;
mod point_table;
mod rank_text;
mod ranking;

pub use elo::{
    calculate, parse_bonus_text, parse_match_lines, parse_standings, process_matches,
    MAX_BONUSES_PER_CALL,
};
pub use grouping::{generate_groups, generate_groups_into, generate_groups_with};
pub use knockout::{division_sizes, generate_knockout_fixtures, SUPPORTED_PLAYER_COUNTS};
pub use paste::{normalize_name, parse_rating_token};
pub use point_table::{band_for, points_for_win, PointBand, POINT_TABLE};
pub use rank_text::{parse_rank_text, parse_result_date, validate_match_record};
pub use ranking::{all_players, calculate_rankings, calculate_rankings_with, compare_stats};
