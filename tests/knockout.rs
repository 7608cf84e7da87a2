//! Integration tests for the Cup/Plate knockout templates.

use std::collections::HashSet;
use tt_tournament_engine::{
    division_sizes, generate_knockout_fixtures, Division, Round, SUPPORTED_PLAYER_COUNTS,
};

fn round_names(rounds: &[Round]) -> Vec<&str> {
    rounds.iter().map(|r| r.round.as_str()).collect()
}

/// Seed tokens ("A2", "B5") appearing in a division.
fn seed_tokens(rounds: &[Round]) -> HashSet<String> {
    rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .flat_map(|m| [m.p1.clone(), m.p2.clone()])
        .filter(|t| !t.starts_with("Winner"))
        .collect()
}

#[test]
fn unsupported_counts_are_empty() {
    for n in [0, 8, 9, 11, 13, 15, 17, 32] {
        let fixture = generate_knockout_fixtures(n);
        assert!(fixture.cup.is_empty() && fixture.plate.is_empty(), "n = {n}");
        assert!(division_sizes(n).is_none());
    }
}

#[test]
fn sixteen_players_two_full_brackets() {
    let fixture = generate_knockout_fixtures(16);
    for division in [Division::Cup, Division::Plate] {
        let rounds = fixture.rounds(division);
        assert_eq!(round_names(rounds), ["Quarter Finals", "Semi Finals", "Final"]);
        assert_eq!(rounds[0].matches.len(), 4);
        assert_eq!(rounds[1].matches.len(), 2);
        assert_eq!(rounds[2].matches.len(), 1);
    }

    let qf: Vec<(&str, &str)> = fixture.cup[0]
        .matches
        .iter()
        .map(|m| (m.p1.as_str(), m.p2.as_str()))
        .collect();
    assert_eq!(qf, [("A1", "B4"), ("A2", "B3"), ("A3", "B2"), ("A4", "B1")]);

    let sf = &fixture.cup[1].matches;
    assert_eq!((sf[0].p1.as_str(), sf[0].p2.as_str()), ("Winner CQ1", "Winner CQ3"));
    assert_eq!((sf[1].p1.as_str(), sf[1].p2.as_str()), ("Winner CQ2", "Winner CQ4"));

    let plate_qf = &fixture.plate[0].matches;
    assert_eq!(plate_qf[0].id, "PQ1");
    assert_eq!((plate_qf[0].p1.as_str(), plate_qf[0].p2.as_str()), ("A5", "B8"));
    assert_eq!((plate_qf[3].p1.as_str(), plate_qf[3].p2.as_str()), ("A8", "B5"));
    assert_eq!(fixture.plate[2].matches[0].id, "PF");
}

#[test]
fn twelve_players_give_byes_to_group_winners() {
    let fixture = generate_knockout_fixtures(12);
    let cq1 = fixture.find_match("CQ1").unwrap();
    assert_eq!((cq1.p1.as_str(), cq1.p2.as_str()), ("A2", "B3"));
    assert_eq!(cq1.next.as_deref(), Some("Winner plays B1"));

    let cs1 = fixture.find_match("CS1").unwrap();
    assert_eq!(cs1.p1, "A1");
    assert_eq!(cs1.p2, "Winner CQ2 (A3/B2)");
    assert!(cs1.next.is_none());

    let ps2 = fixture.find_match("PS2").unwrap();
    assert_eq!(ps2.p1, "B4");
    assert_eq!(ps2.p2, "Winner PQ1 (A5/B6)");
    assert_eq!(fixture.find_match("PQ2").unwrap().next.as_deref(), Some("Winner plays A4"));
}

#[test]
fn ten_players_plate_starts_at_semis() {
    let fixture = generate_knockout_fixtures(10);
    assert_eq!(round_names(&fixture.cup), ["Quarter Finals", "Semi Finals", "Final"]);
    assert_eq!(round_names(&fixture.plate), ["Semi Finals", "Final"]);
    assert_eq!(fixture.find_match("CS1").unwrap().p2, "Winner CQ2");
    let ps1 = fixture.find_match("PS1").unwrap();
    assert_eq!((ps1.p1.as_str(), ps1.p2.as_str()), ("A4", "B5"));
}

#[test]
fn fourteen_players_full_cup_bye_plate() {
    let fixture = generate_knockout_fixtures(14);
    assert_eq!(fixture.cup[0].matches.len(), 4);
    assert_eq!(fixture.plate[0].matches.len(), 2);
    let pq1 = fixture.find_match("PQ1").unwrap();
    assert_eq!((pq1.p1.as_str(), pq1.p2.as_str()), ("A6", "B7"));
    assert_eq!(pq1.next.as_deref(), Some("Winner plays B5"));
    assert_eq!(fixture.find_match("PS1").unwrap().p1, "A5");
}

#[test]
fn seed_tokens_cover_each_division_exactly() {
    for n in SUPPORTED_PLAYER_COUNTS {
        let fixture = generate_knockout_fixtures(n);
        let (cup, plate) = division_sizes(n).unwrap();
        let cup_tokens = seed_tokens(&fixture.cup);
        let plate_tokens = seed_tokens(&fixture.plate);
        assert_eq!(cup_tokens.len(), cup, "cup n = {n}");
        assert_eq!(plate_tokens.len(), plate, "plate n = {n}");
        assert!(cup_tokens.is_disjoint(&plate_tokens));
        assert_eq!(cup + plate, n);
    }
}

#[test]
fn match_ids_are_unique_and_finals_present() {
    for n in SUPPORTED_PLAYER_COUNTS {
        let fixture = generate_knockout_fixtures(n);
        let ids: Vec<&str> = fixture
            .cup
            .iter()
            .chain(fixture.plate.iter())
            .flat_map(|r| r.matches.iter().map(|m| m.id.as_str()))
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert!(unique.contains("CF") && unique.contains("PF"));
    }
}

#[test]
fn templates_are_deterministic() {
    assert_eq!(generate_knockout_fixtures(14), generate_knockout_fixtures(14));
}
