use super::types::{Pairing, SeededPots};
use crate::types::{AppResult, TeamId};
use crate::world::constants::{BRACKET_SIZE, POT_SIZE, QUARTERFINALS};
use crate::world::world::World;
use anyhow::anyhow;
use itertools::Itertools;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Ranks all group-stage finishers together by points, overall point
/// difference and scored points. The head-to-head criteria used inside a
/// group are left out here: teams from different groups may never have
/// met. Residual ties keep the concatenated group-standings order.
pub fn global_ranking(
    world: &World,
    group_standings: &BTreeMap<String, Vec<TeamId>>,
) -> Vec<TeamId> {
    let mut ranked = group_standings.values().flatten().copied().collect_vec();
    ranked.sort_by(|a, b| {
        let (team_a, team_b) = (world.team(a), world.team(b));
        team_b
            .points
            .cmp(&team_a.points)
            .then_with(|| team_b.point_difference().cmp(&team_a.point_difference()))
            .then_with(|| team_b.scored_points.cmp(&team_a.scored_points))
    });
    ranked
}

/// Splits the top of the global ranking into the four seeding pots:
/// ranks 1-2 into D, 3-4 into E, 5-6 into F, 7-8 into G.
pub fn seeded_pots(
    world: &World,
    group_standings: &BTreeMap<String, Vec<TeamId>>,
) -> AppResult<SeededPots> {
    let ranked = global_ranking(world, group_standings);
    if ranked.len() < BRACKET_SIZE {
        return Err(anyhow!("Not enough ranked teams to fill the pots."));
    }

    let seeds = &ranked[..BRACKET_SIZE];
    Ok(SeededPots {
        d: seeds[..POT_SIZE].to_vec(),
        e: seeds[POT_SIZE..2 * POT_SIZE].to_vec(),
        f: seeds[2 * POT_SIZE..3 * POT_SIZE].to_vec(),
        g: seeds[3 * POT_SIZE..].to_vec(),
    })
}

fn candidate_pairs(world: &World, homes: &[TeamId], aways: &[TeamId]) -> Vec<Pairing> {
    let mut candidates = vec![];
    for &home in homes {
        for &away in aways {
            if !world.team(&home).has_met_in_group_stage(&away) {
                candidates.push(Pairing { home, away });
            }
        }
    }
    candidates
}

/// Draws the quarterfinal pairs, D against G and E against F. Candidate
/// pairs exclude group-stage rematches; one is picked uniformly at random
/// and kept when both teams are still free. When only forbidden opponents
/// remain, the constraint is dropped and the rest of the bracket is
/// filled in pot order, so the draw always ends with four disjoint pairs.
pub fn draw_quarterfinals(
    world: &World,
    pots: &SeededPots,
    rng: &mut ChaCha8Rng,
) -> Vec<Pairing> {
    let mut candidates = candidate_pairs(world, &pots.d, &pots.g);
    candidates.extend(candidate_pairs(world, &pots.e, &pots.f));

    let mut used: HashSet<TeamId> = HashSet::new();
    let mut pairings: Vec<Pairing> = Vec::with_capacity(QUARTERFINALS);

    while pairings.len() < QUARTERFINALS {
        if candidates.is_empty() {
            log::warn!("No admissible pairs left, allowing group-stage rematches");
            for (homes, aways) in [(&pots.d, &pots.g), (&pots.e, &pots.f)] {
                for &home in homes.iter() {
                    if used.contains(&home) {
                        continue;
                    }
                    if let Some(&away) = aways.iter().find(|away| !used.contains(*away)) {
                        used.insert(home);
                        used.insert(away);
                        pairings.push(Pairing { home, away });
                    }
                }
            }
            break;
        }

        let index = rng.random_range(0..candidates.len());
        let pairing = candidates.swap_remove(index);
        if !used.contains(&pairing.home) && !used.contains(&pairing.away) {
            used.insert(pairing.home);
            used.insert(pairing.away);
            pairings.push(pairing);
        }
    }

    assert!(pairings.len() == QUARTERFINALS);
    pairings
}
