//! Integration tests for pasted tournament results and tournament rule validation.

use chrono::NaiveDate;
use tt_tournament_engine::{
    parse_rank_text, validate_match_record, EngineError, MatchRecord, RankGroup,
};

const RESULTS: &str = "08/12/2025
1. Kawsar
2. Shommo
3. Rafi, Tanvir
5. Imran and Sakib, Nayeem
9. Arif
10. Babu
11. Rony, Jamil
13. Sohel
";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_date_ranks_and_names() {
    let record = parse_rank_text(RESULTS).unwrap();
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 12, 8).unwrap());
    assert_eq!(record.id.as_deref(), Some("t_2025_12_08"));
    assert_eq!(record.rank_groups.len(), 8);

    let quarters = &record.rank_groups[3];
    assert_eq!(quarters.rank, 5);
    assert_eq!(quarters.rating, 4);
    assert_eq!(quarters.players, names(&["Imran", "Sakib", "Nayeem"]));

    assert_eq!(record.rank_groups[4].rank, 9);
    assert_eq!(record.rank_groups[4].rating, 5);
    validate_match_record(&record).unwrap();
}

#[test]
fn iso_date_and_noise_lines() {
    let record = parse_rank_text("2025-11-22\n\nwinners:\n1. A\n2. B\n").unwrap();
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 11, 22).unwrap());
    assert_eq!(record.rank_groups.len(), 2);
}

#[test]
fn missing_tier_keeps_lower_ratings() {
    let record = parse_rank_text(
        "08/12/2025\n1. A\n2. B\n3. C, D\n9. G\n10. H\n11. I and J\n",
    )
    .unwrap();
    let ratings: Vec<(u32, u8)> = record
        .rank_groups
        .iter()
        .map(|g| (g.rank, g.rating))
        .collect();
    assert_eq!(ratings, vec![(1, 1), (2, 2), (3, 3), (9, 5), (10, 6), (11, 7)]);
    assert_eq!(record.rating_of("G"), Some(5));
    validate_match_record(&record).unwrap();
}

#[test]
fn unknown_ranks_fall_back_to_position() {
    let record = parse_rank_text("2025-11-22\n1. A\n4. B\n").unwrap();
    assert_eq!(record.rank_groups[1].rank, 4);
    assert_eq!(record.rank_groups[1].rating, 2);
}

#[test]
fn repeated_parses_split_names_the_same_way() {
    for _ in 0..2 {
        let record = parse_rank_text("2025-11-22\n3. A, B and C\n").unwrap();
        assert_eq!(record.rank_groups[0].players, names(&["A", "B", "C"]));
        assert_eq!(record.rank_groups[0].rating, 3);
    }
}

#[test]
fn bad_input_is_rejected() {
    assert_eq!(parse_rank_text("08/12/2025"), Err(EngineError::EmptyRankText));
    assert_eq!(
        parse_rank_text("yesterday\n1. A"),
        Err(EngineError::InvalidDate("yesterday".to_string()))
    );
    assert_eq!(parse_rank_text("2025-11-22\nno ranks"), Err(EngineError::EmptyRankText));
}

fn valid_record() -> MatchRecord {
    MatchRecord::new(
        NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
        vec![
            RankGroup::new(1, 1, names(&["A"])),
            RankGroup::new(2, 2, names(&["B"])),
            RankGroup::new(3, 3, names(&["C", "D"])),
            RankGroup::new(5, 4, names(&["E", "F"])),
            RankGroup::new(9, 5, names(&["G"])),
            RankGroup::new(10, 6, names(&["H"])),
            RankGroup::new(11, 7, names(&["I", "J"])),
        ],
    )
}

#[test]
fn valid_tournament_passes() {
    assert_eq!(validate_match_record(&valid_record()), Ok(()));
}

#[test]
fn player_listed_twice_is_rejected() {
    let mut record = valid_record();
    record.rank_groups[1].players = names(&["A"]);
    assert_eq!(
        validate_match_record(&record),
        Err(EngineError::DuplicateInTournament {
            name: "A".to_string()
        })
    );
}

#[test]
fn semi_finals_need_two_players() {
    let mut record = valid_record();
    record.rank_groups[2].players = names(&["C"]);
    assert_eq!(
        validate_match_record(&record),
        Err(EngineError::WrongGroupSize {
            rating: 3,
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn quarter_finals_cap_at_four() {
    let mut record = valid_record();
    record.rank_groups[3].players = names(&["E", "F", "K", "L", "M"]);
    assert!(matches!(
        validate_match_record(&record),
        Err(EngineError::GroupTooLarge { rating: 4, max: 4, actual: 5 })
    ));
}

#[test]
fn mandatory_tiers_and_rating_range() {
    let mut record = valid_record();
    record.rank_groups.remove(5);
    assert_eq!(
        validate_match_record(&record),
        Err(EngineError::MissingTier { rating: 6 })
    );

    let mut record = valid_record();
    record.rank_groups.push(RankGroup::new(17, 9, names(&["Z"])));
    assert_eq!(
        validate_match_record(&record),
        Err(EngineError::InvalidRating { rating: 9 })
    );
}

#[test]
fn error_messages_name_the_tier() {
    let err = EngineError::MissingTier { rating: 5 };
    assert_eq!(err.to_string(), "Plate Champion is mandatory");
}
