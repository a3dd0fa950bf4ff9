use crate::types::TeamId;
use crate::world::world::World;
use std::collections::HashMap;

/// Signed point differential for each member of a tied cluster, restricted
/// to the matches played inside the cluster. Unplayed pairs contribute
/// nothing.
fn cluster_differentials(world: &World, cluster: &[TeamId]) -> HashMap<TeamId, i32> {
    cluster
        .iter()
        .map(|&id| {
            let team = world.team(&id);
            let differential = cluster
                .iter()
                .filter(|&&other| other != id)
                .map(|other| team.versus_point_difference(other))
                .sum();
            (id, differential)
        })
        .collect()
}

/// Orders the teams of one group, best first.
///
/// Two passes: a points-only sort exposes the maximal equal-points runs,
/// each run is reordered by the differential over the matches played
/// inside the run, then one final stable sort applies the whole
/// comparator chain. For a two-team run the intra-run differential is
/// exactly the head-to-head differential, which also keeps the final
/// comparator a total order when three or more teams beat each other in a
/// circle.
pub fn rank_group(world: &World, group: &[TeamId]) -> Vec<TeamId> {
    let mut ordered = group.to_vec();
    ordered.sort_by(|a, b| world.team(b).points.cmp(&world.team(a).points));

    let mut tie_differentials: HashMap<TeamId, i32> = HashMap::new();
    let mut start = 0;
    while start < ordered.len() {
        let points = world.team(&ordered[start]).points;
        let mut end = start + 1;
        while end < ordered.len() && world.team(&ordered[end]).points == points {
            end += 1;
        }
        // The run ending at the list tail is a run like any other.
        if end - start > 1 {
            let differentials = cluster_differentials(world, &ordered[start..end]);
            ordered[start..end].sort_by(|a, b| differentials[b].cmp(&differentials[a]));
            tie_differentials.extend(differentials);
        }
        start = end;
    }

    ordered.sort_by(|a, b| {
        let (team_a, team_b) = (world.team(a), world.team(b));
        team_b
            .points
            .cmp(&team_a.points)
            .then_with(|| {
                let diff_a = tie_differentials.get(a).copied().unwrap_or_default();
                let diff_b = tie_differentials.get(b).copied().unwrap_or_default();
                diff_b.cmp(&diff_a)
            })
            .then_with(|| team_b.point_difference().cmp(&team_a.point_difference()))
            .then_with(|| team_b.scored_points.cmp(&team_a.scored_points))
    });

    ordered
}

#[cfg(test)]
mod tests {
    use super::rank_group;
    use crate::types::TeamId;
    use crate::world::team::Team;
    use crate::world::world::World;

    fn world_with(count: usize) -> (World, Vec<TeamId>) {
        let mut world = World::default();
        let mut ids = Vec::with_capacity(count);
        for index in 0..count {
            let team = Team::new(
                format!("Team {index}"),
                format!("T{index}"),
                index as u32 + 1,
            );
            ids.push(team.id);
            world.teams.insert(team.id, team);
        }
        (world, ids)
    }

    fn play(world: &mut World, home: TeamId, away: TeamId, home_score: u16, away_score: u16) {
        let home_won = home_score > away_score;
        world
            .team_mut(&home)
            .save_match(away, home_score, away_score, home_won, true);
        world
            .team_mut(&away)
            .save_match(home, away_score, home_score, !home_won, true);
    }

    #[test]
    fn test_head_to_head_outranks_overall_difference() {
        let (mut world, ids) = world_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        play(&mut world, b, a, 85, 80);
        play(&mut world, a, c, 100, 70);
        play(&mut world, a, d, 90, 80);
        play(&mut world, c, b, 75, 70);
        play(&mut world, b, d, 95, 90);
        play(&mut world, d, c, 88, 80);

        // A and B both sit on 5 points; A has by far the better overall
        // difference but lost the direct game. C and D tie on 4 points at
        // the tail of the list, D won the direct game.
        assert_eq!(rank_group(&world, &ids), vec![b, a, d, c]);
    }

    #[test]
    fn test_three_way_circle_is_ranked_by_circle_differential() {
        let (mut world, ids) = world_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        play(&mut world, a, b, 90, 85);
        play(&mut world, b, c, 95, 80);
        play(&mut world, c, a, 92, 88);
        play(&mut world, a, d, 90, 70);
        play(&mut world, b, d, 90, 70);
        play(&mut world, c, d, 90, 70);

        // A, B and C all finish 2-1 on 5 points, beating each other in a
        // circle. Inside the circle: B +10, A +1, C -11.
        assert_eq!(rank_group(&world, &ids), vec![b, a, c, d]);
    }

    #[test]
    fn test_identical_margin_circle_falls_through_to_scored_points() {
        let (mut world, ids) = world_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        play(&mut world, a, b, 100, 95);
        play(&mut world, b, c, 90, 85);
        play(&mut world, c, a, 80, 75);
        play(&mut world, a, d, 90, 70);
        play(&mut world, b, d, 90, 70);
        play(&mut world, c, d, 90, 70);

        // Every circle differential and every overall difference is equal;
        // the order comes from total scored points: B 275, A 265, C 255.
        assert_eq!(rank_group(&world, &ids), vec![b, a, c, d]);
    }

    #[test]
    fn test_equal_points_without_direct_game_use_point_difference() {
        let (mut world, ids) = world_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        play(&mut world, a, c, 90, 70);
        play(&mut world, b, d, 90, 80);

        // A and B never met; the better overall difference decides.
        assert_eq!(rank_group(&world, &[b, a]), vec![a, b]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let (mut world, ids) = world_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        play(&mut world, a, b, 90, 85);
        play(&mut world, b, c, 95, 80);
        play(&mut world, c, a, 92, 88);
        play(&mut world, a, d, 90, 70);
        play(&mut world, b, d, 85, 75);
        play(&mut world, c, d, 99, 90);

        let once = rank_group(&world, &ids);
        let twice = rank_group(&world, &once);
        assert_eq!(once, twice);
    }
}
