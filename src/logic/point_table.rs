//! Rating-difference point table for the club Elo ladder.

/// Points for one band of absolute rating difference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointBand {
    pub min_diff: u32,
    /// Inclusive upper bound; `None` for the open-ended top band.
    pub max_diff: Option<u32>,
    /// Awarded when the higher (or equal) rated player wins.
    pub expected: i32,
    /// Awarded when the lower rated player wins.
    pub upset: i32,
}

impl PointBand {
    const fn new(min_diff: u32, max_diff: Option<u32>, expected: i32, upset: i32) -> Self {
        Self {
            min_diff,
            max_diff,
            expected,
            upset,
        }
    }

    pub fn contains(&self, diff: u32) -> bool {
        diff >= self.min_diff && self.max_diff.map_or(true, |max| diff <= max)
    }
}

/// Widest gap first.
pub const POINT_TABLE: [PointBand; 12] = [
    PointBand::new(300, None, 0, 63),
    PointBand::new(270, Some(299), 1, 55),
    PointBand::new(240, Some(269), 2, 46),
    PointBand::new(210, Some(239), 2, 39),
    PointBand::new(180, Some(209), 3, 32),
    PointBand::new(150, Some(179), 3, 26),
    PointBand::new(120, Some(149), 4, 21),
    PointBand::new(90, Some(119), 5, 17),
    PointBand::new(60, Some(89), 6, 13),
    PointBand::new(30, Some(59), 7, 10),
    PointBand::new(15, Some(29), 7, 9),
    PointBand::new(0, Some(14), 8, 8),
];

/// Band for a rating gap (sign ignored).
pub fn band_for(rating_diff: i32) -> PointBand {
    let diff = rating_diff.unsigned_abs();
    POINT_TABLE
        .iter()
        .copied()
        .find(|band| band.contains(diff))
        .unwrap_or(POINT_TABLE[POINT_TABLE.len() - 1])
}

/// Points moved when `winner_rating` beats `loser_rating` (pre-match values).
pub fn points_for_win(winner_rating: i32, loser_rating: i32) -> i32 {
    let band = band_for(winner_rating.saturating_sub(loser_rating));
    if winner_rating >= loser_rating {
        band.expected
    } else {
        band.upset
    }
}
