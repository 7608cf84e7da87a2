//! EngineError: validation failures surfaced to the caller.

/// Errors that abort a whole calculation. Malformed single rows are skipped instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Two standings rows normalise to the same player key.
    DuplicatePlayer { name: String },
    /// The standings paste block is empty.
    MissingStandings,
    /// The match results paste block is empty.
    MissingMatches,
    /// More bonus entries than allowed in a single call.
    TooManyBonuses { max: usize, given: usize },
    /// Rank text needs a date line and at least one rank line.
    EmptyRankText,
    /// First line of rank text is not a recognisable date.
    InvalidDate(String),
    /// Rank-group rating outside 1..=8.
    InvalidRating { rating: u8 },
    /// A player is listed more than once in the same tournament.
    DuplicateInTournament { name: String },
    /// A tier that needs an exact head count has the wrong number of players.
    WrongGroupSize { rating: u8, expected: usize, actual: usize },
    /// A tier has more players than the bracket allows.
    GroupTooLarge { rating: u8, max: usize, actual: usize },
    /// A mandatory tier (champion, runner-up, semi-finalists) is missing.
    MissingTier { rating: u8 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicatePlayer { name } => {
                write!(f, "Duplicate player in standings: {}", name)
            }
            EngineError::MissingStandings => write!(f, "Please enter current standings"),
            EngineError::MissingMatches => write!(f, "Please enter match results"),
            EngineError::TooManyBonuses { max, given } => {
                write!(f, "At most {} bonus entries per call (got {})", max, given)
            }
            EngineError::EmptyRankText => {
                write!(f, "Rank text needs a date line followed by rank lines")
            }
            EngineError::InvalidDate(s) => write!(f, "Could not parse date: {}", s),
            EngineError::InvalidRating { rating } => {
                write!(f, "Rating {} is outside 1..=8", rating)
            }
            EngineError::DuplicateInTournament { name } => write!(
                f,
                "A player cannot be present multiple times in the same tournament: {}",
                name
            ),
            EngineError::WrongGroupSize {
                rating,
                expected,
                actual,
            } => write!(
                f,
                "{} must have exactly {} players (has {})",
                tier_name(*rating),
                expected,
                actual
            ),
            EngineError::GroupTooLarge { rating, max, actual } => write!(
                f,
                "{} cannot have more than {} players (has {})",
                tier_name(*rating),
                max,
                actual
            ),
            EngineError::MissingTier { rating } => {
                write!(f, "{} is mandatory", tier_name(*rating))
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Display name of a finishing tier (rating 1..=8).
pub fn tier_name(rating: u8) -> &'static str {
    match rating {
        1 => "Cup Champion",
        2 => "Cup Runner Up",
        3 => "Cup Semi Finalists",
        4 => "Cup Quarter Finalists",
        5 => "Plate Champion",
        6 => "Plate Runner Up",
        7 => "Plate Semi Finalists",
        8 => "Plate Quarter Finalists",
        _ => "Unknown tier",
    }
}
