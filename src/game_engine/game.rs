use super::form::form_summary;
use super::types::{FormSummary, GameResult};
use crate::types::TeamId;
use crate::world::constants::{FormWeight, ScoreRange};
use crate::world::roster::MatchRecord;
use crate::world::world::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Probability that the first team wins. The FIBA ranking enters
/// inversely, the lower-ranked (stronger) side gets the higher base
/// probability; the form adjustment can push the sum outside [0, 1],
/// hence the clamp. Rankings are validated positive at session build.
pub fn win_probability(
    ranking: u32,
    opponent_ranking: u32,
    form: FormSummary,
    opponent_form: FormSummary,
) -> f64 {
    let base = 1.0 - ranking as f64 / (ranking + opponent_ranking) as f64;
    let adjustment = FormWeight::WINS * (form.wins as f64 - opponent_form.wins as f64)
        + FormWeight::POINT_DIFFERENCE
            * (form.point_difference - opponent_form.point_difference) as f64;
    (base + adjustment).clamp(0.0, 1.0)
}

/// Simulates one game and applies every side effect: win/loss counts,
/// group points, cumulative totals, the pairwise maps on both teams, and
/// a history row in both logs so later form lookups see this result.
pub fn simulate_game(
    world: &mut World,
    home_id: TeamId,
    away_id: TeamId,
    group_stage: bool,
    rng: &mut ChaCha8Rng,
) -> GameResult {
    let home_form = form_summary(world.history(&home_id));
    let away_form = form_summary(world.history(&away_id));
    let home_ranking = world.team(&home_id).fiba_ranking;
    let away_ranking = world.team(&away_id).fiba_ranking;

    let home_wins = rng.random_bool(win_probability(
        home_ranking,
        away_ranking,
        home_form,
        away_form,
    ));

    let mut winner_score = rng.random_range(ScoreRange::WINNER_MIN..ScoreRange::WINNER_MAX);
    let mut loser_score = rng.random_range(ScoreRange::LOSER_MIN..winner_score);

    // The ranges above cannot produce a tie, but a game must never end
    // level: overtime is added to both sides until the scores differ.
    while winner_score == loser_score {
        winner_score += rng.random_range(ScoreRange::OVERTIME_MIN..ScoreRange::OVERTIME_MAX);
        loser_score += rng.random_range(ScoreRange::OVERTIME_MIN..ScoreRange::OVERTIME_MAX);
    }

    let (winner_id, loser_id) = if home_wins {
        (home_id, away_id)
    } else {
        (away_id, home_id)
    };

    world
        .team_mut(&winner_id)
        .save_match(loser_id, winner_score, loser_score, true, group_stage);
    world
        .team_mut(&loser_id)
        .save_match(winner_id, loser_score, winner_score, false, group_stage);

    let winner_code = world.team(&winner_id).iso_code.clone();
    let loser_code = world.team(&loser_id).iso_code.clone();
    world.push_history(
        winner_id,
        MatchRecord::new(loser_code, winner_score, loser_score),
    );
    world.push_history(
        loser_id,
        MatchRecord::new(winner_code, loser_score, winner_score),
    );

    GameResult {
        winner: winner_id,
        loser: loser_id,
        winner_score,
        loser_score,
    }
}
