use super::game::simulate_game;
use super::types::{GameResult, GameSummary, KnockoutOutcome, Medals, Pairing, Stage};
use crate::world::world::World;
use rand_chacha::ChaCha8Rng;

fn play_round(
    world: &mut World,
    pairings: &[Pairing],
    rng: &mut ChaCha8Rng,
) -> Vec<GameResult> {
    pairings
        .iter()
        .map(|pairing| simulate_game(world, pairing.home, pairing.away, false, rng))
        .collect()
}

/// Runs the bracket from the quarterfinals to the medals. Winner and
/// loser identity is kept per game from the semifinals on: the semifinal
/// losers meet again in the third place game, played before the final.
pub fn play_bracket(
    world: &mut World,
    quarterfinals: &[Pairing],
    rng: &mut ChaCha8Rng,
) -> KnockoutOutcome {
    let mut games = vec![];

    let quarterfinal_results = play_round(world, quarterfinals, rng);
    games.extend(
        quarterfinal_results
            .iter()
            .map(|result| GameSummary::new(world, Stage::Quarterfinal, result)),
    );

    let semifinal_pairings = [
        Pairing {
            home: quarterfinal_results[0].winner,
            away: quarterfinal_results[1].winner,
        },
        Pairing {
            home: quarterfinal_results[2].winner,
            away: quarterfinal_results[3].winner,
        },
    ];
    let semifinal_results = play_round(world, &semifinal_pairings, rng);
    games.extend(
        semifinal_results
            .iter()
            .map(|result| GameSummary::new(world, Stage::Semifinal, result)),
    );

    let third_place_result = simulate_game(
        world,
        semifinal_results[0].loser,
        semifinal_results[1].loser,
        false,
        rng,
    );
    games.push(GameSummary::new(world, Stage::ThirdPlace, &third_place_result));

    let final_result = simulate_game(
        world,
        semifinal_results[0].winner,
        semifinal_results[1].winner,
        false,
        rng,
    );
    games.push(GameSummary::new(world, Stage::Final, &final_result));

    KnockoutOutcome {
        medals: Medals {
            gold: final_result.winner,
            silver: final_result.loser,
            bronze: third_place_result.winner,
        },
        games,
    }
}
