//! Data structures for the tournament engine: history, seeds, brackets, Elo ladder.

mod bracket;
mod elo;
mod error;
mod history;
mod seeding;

pub use bracket::{BracketFixture, Division, Match, Round};
pub use elo::{
    format_rating, Bonus, EloCalculation, EloPlayerRecord, MatchLine, ProcessedMatch, RatingSnapshot,
    RatingStatus,
};
pub use error::{tier_name, EngineError};
pub use history::{MatchRecord, PlayerName, PlayerRankingStat, RankGroup, RankingConfig};
pub use seeding::{Groups, SeededPlayer};
