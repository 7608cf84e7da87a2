//! Seeded group draw: each seed tier is split across the groups at random.

use crate::models::{Groups, SeededPlayer};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw two groups from players in seed order using the thread RNG.
pub fn generate_groups(sorted_players: &[SeededPlayer]) -> Groups {
    generate_groups_with(sorted_players, &mut rand::thread_rng())
}

/// Draw two groups from players in seed order.
///
/// Seeds are taken in pairs (1st/2nd, 3rd/4th, ...); one of each pair goes to A and the other
/// to B with equal probability. An odd last player lands in a random group.
pub fn generate_groups_with<R: Rng + ?Sized>(sorted_players: &[SeededPlayer], rng: &mut R) -> Groups {
    let mut groups = generate_groups_into(sorted_players, 2, rng).into_iter();
    let group_a = groups.next().unwrap_or_default();
    let group_b = groups.next().unwrap_or_default();
    log::debug!(
        "drew groups of {} and {} players",
        group_a.len(),
        group_b.len()
    );
    Groups { group_a, group_b }
}

/// Draw `group_count` groups from players in seed order.
///
/// Players are processed in tiers of `group_count` consecutive seeds. Every tier places its
/// players into distinct groups chosen by a random permutation, so a full tier puts exactly one
/// player in each group and a short last tier spreads over random groups.
pub fn generate_groups_into<R: Rng + ?Sized>(
    sorted_players: &[SeededPlayer],
    group_count: usize,
    rng: &mut R,
) -> Vec<Vec<SeededPlayer>> {
    if group_count == 0 {
        return Vec::new();
    }
    let mut groups: Vec<Vec<SeededPlayer>> = vec![Vec::new(); group_count];
    let mut slots: Vec<usize> = (0..group_count).collect();

    for tier in sorted_players.chunks(group_count) {
        slots.shuffle(rng);
        for (player, &slot) in tier.iter().zip(slots.iter()) {
            groups[slot].push(player.clone());
        }
    }
    groups
}

