//! Knockout templates: Cup and Plate brackets for 10, 12, 14 or 16 players.
//!
//! Seed tokens ("A2" = second in group A) are resolved by the caller against the drawn groups.
//! Where a division cannot fill a full quarter-final, its top seeds get byes into the semis.

use crate::models::{BracketFixture, Match, Round};

const QUARTER_FINALS: &str = "Quarter Finals";
const SEMI_FINALS: &str = "Semi Finals";
const FINAL: &str = "Final";

/// (id, p1, p2, next)
type MatchTemplate = (&'static str, &'static str, &'static str, Option<&'static str>);
type RoundTemplate = (&'static str, &'static [MatchTemplate]);

/// Six-player Cup: A1/B1 byes, 12-player labels.
const CUP_6_LABELLED: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("CQ1", "A2", "B3", Some("Winner plays B1")),
            ("CQ2", "A3", "B2", Some("Winner plays A1")),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("CS1", "A1", "Winner CQ2 (A3/B2)", None),
            ("CS2", "B1", "Winner CQ1 (A2/B3)", None),
        ],
    ),
    (FINAL, &[("CF", "Winner CS1", "Winner CS2", None)]),
];

/// Six-player Cup: A1/B1 byes.
const CUP_6: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("CQ1", "A2", "B3", Some("Winner plays B1")),
            ("CQ2", "A3", "B2", Some("Winner plays A1")),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("CS1", "A1", "Winner CQ2", None),
            ("CS2", "B1", "Winner CQ1", None),
        ],
    ),
    (FINAL, &[("CF", "Winner CS1", "Winner CS2", None)]),
];

const CUP_8: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("CQ1", "A1", "B4", None),
            ("CQ2", "A2", "B3", None),
            ("CQ3", "A3", "B2", None),
            ("CQ4", "A4", "B1", None),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("CS1", "Winner CQ1", "Winner CQ3", None),
            ("CS2", "Winner CQ2", "Winner CQ4", None),
        ],
    ),
    (FINAL, &[("CF", "Winner CS1", "Winner CS2", None)]),
];

/// Four-player Plate (group places 4-5): straight into semis.
const PLATE_4: &[RoundTemplate] = &[
    (
        SEMI_FINALS,
        &[("PS1", "A4", "B5", None), ("PS2", "A5", "B4", None)],
    ),
    (FINAL, &[("PF", "Winner PS1", "Winner PS2", None)]),
];

/// Six-player Plate (group places 4-6): A4/B4 byes, 12-player labels.
const PLATE_6_FROM_4: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("PQ1", "A5", "B6", Some("Winner plays B4")),
            ("PQ2", "A6", "B5", Some("Winner plays A4")),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("PS1", "A4", "Winner PQ2 (A6/B5)", None),
            ("PS2", "B4", "Winner PQ1 (A5/B6)", None),
        ],
    ),
    (FINAL, &[("PF", "Winner PS1", "Winner PS2", None)]),
];

/// Six-player Plate (group places 5-7): A5/B5 byes.
const PLATE_6_FROM_5: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("PQ1", "A6", "B7", Some("Winner plays B5")),
            ("PQ2", "A7", "B6", Some("Winner plays A5")),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("PS1", "A5", "Winner PQ2", None),
            ("PS2", "B5", "Winner PQ1", None),
        ],
    ),
    (FINAL, &[("PF", "Winner PS1", "Winner PS2", None)]),
];

/// Eight-player Plate (group places 5-8).
const PLATE_8: &[RoundTemplate] = &[
    (
        QUARTER_FINALS,
        &[
            ("PQ1", "A5", "B8", None),
            ("PQ2", "A6", "B7", None),
            ("PQ3", "A7", "B6", None),
            ("PQ4", "A8", "B5", None),
        ],
    ),
    (
        SEMI_FINALS,
        &[
            ("PS1", "Winner PQ1", "Winner PQ3", None),
            ("PS2", "Winner PQ2", "Winner PQ4", None),
        ],
    ),
    (FINAL, &[("PF", "Winner PS1", "Winner PS2", None)]),
];

/// Player counts with a template, in ascending order.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 4] = [10, 12, 14, 16];

fn templates(player_count: usize) -> Option<(&'static [RoundTemplate], &'static [RoundTemplate])> {
    match player_count {
        10 => Some((CUP_6, PLATE_4)),
        12 => Some((CUP_6_LABELLED, PLATE_6_FROM_4)),
        14 => Some((CUP_8, PLATE_6_FROM_5)),
        16 => Some((CUP_8, PLATE_8)),
        _ => None,
    }
}

fn build(template: &[RoundTemplate]) -> Vec<Round> {
    template
        .iter()
        .map(|(round, matches)| Round {
            round: (*round).to_string(),
            matches: matches
                .iter()
                .map(|(id, p1, p2, next)| Match {
                    id: (*id).to_string(),
                    p1: (*p1).to_string(),
                    p2: (*p2).to_string(),
                    next: next.map(str::to_string),
                })
                .collect(),
        })
        .collect()
}

/// Knockout fixtures for `player_count` participants (two groups feeding Cup and Plate).
/// Unsupported counts return an empty fixture.
pub fn generate_knockout_fixtures(player_count: usize) -> BracketFixture {
    match templates(player_count) {
        Some((cup, plate)) => BracketFixture {
            cup: build(cup),
            plate: build(plate),
        },
        None => {
            log::debug!("no knockout template for {} players", player_count);
            BracketFixture::default()
        }
    }
}

/// (Cup, Plate) bracket sizes for a supported player count.
pub fn division_sizes(player_count: usize) -> Option<(usize, usize)> {
    match player_count {
        10 => Some((6, 4)),
        12 => Some((6, 6)),
        14 => Some((8, 6)),
        16 => Some((8, 8)),
        _ => None,
    }
}
