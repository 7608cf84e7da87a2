//! Table tennis club tournament engine: library with models and pure computations.
//!
//! Four independent components: rolling rankings, seeded group draws, knockout templates and
//! the club Elo ladder. Nothing here performs I/O; callers supply and persist the data.

pub mod logic;
pub mod models;

pub use logic::{
    all_players, calculate, calculate_rankings, calculate_rankings_with, division_sizes,
    generate_groups, generate_groups_into, generate_groups_with, generate_knockout_fixtures,
    normalize_name, parse_bonus_text, parse_match_lines, parse_rank_text, parse_rating_token,
    parse_standings, points_for_win, process_matches, validate_match_record,
    MAX_BONUSES_PER_CALL, SUPPORTED_PLAYER_COUNTS,
};
pub use models::{
    format_rating, Bonus, BracketFixture, Division, EloCalculation, EloPlayerRecord, EngineError,
    Groups, Match, MatchLine, MatchRecord, PlayerName, PlayerRankingStat, ProcessedMatch,
    RankGroup, RankingConfig, RatingSnapshot, RatingStatus, Round, SeededPlayer,
};
