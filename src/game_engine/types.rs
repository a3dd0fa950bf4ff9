use crate::types::TeamId;
use crate::world::world::World;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Short-term performance signal aggregated from a team's match history.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSummary {
    pub wins: u32,
    pub point_difference: i32,
}

/// Outcome of a single simulated game. Scores are reported against the
/// actual winner and loser, not against the home/away slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub winner: TeamId,
    pub loser: TeamId,
    pub winner_score: u16,
    pub loser_score: u16,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pairing {
    pub home: TeamId,
    pub away: TeamId,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter,
)]
pub enum PotLabel {
    D,
    E,
    F,
    G,
}

/// The four seeding pots built from the global cross-group ranking,
/// two teams each.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeededPots {
    pub d: Vec<TeamId>,
    pub e: Vec<TeamId>,
    pub f: Vec<TeamId>,
    pub g: Vec<TeamId>,
}

impl SeededPots {
    pub fn teams(&self, label: PotLabel) -> &[TeamId] {
        match label {
            PotLabel::D => &self.d,
            PotLabel::E => &self.e,
            PotLabel::F => &self.f,
            PotLabel::G => &self.g,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub enum Stage {
    #[strum(to_string = "Group stage")]
    GroupStage,
    #[strum(to_string = "Quarterfinals")]
    Quarterfinal,
    #[strum(to_string = "Semifinals")]
    Semifinal,
    #[strum(to_string = "Third place game")]
    ThirdPlace,
    #[strum(to_string = "Final")]
    Final,
}

/// One row of the tournament match log, with display names resolved so
/// presentation does not need the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSummary {
    pub stage: Stage,
    pub winner_id: TeamId,
    pub loser_id: TeamId,
    pub winner_name: String,
    pub loser_name: String,
    pub winner_score: u16,
    pub loser_score: u16,
}

impl GameSummary {
    pub fn new(world: &World, stage: Stage, result: &GameResult) -> Self {
        Self {
            stage,
            winner_id: result.winner,
            loser_id: result.loser,
            winner_name: world.team(&result.winner).name.clone(),
            loser_name: world.team(&result.loser).name.clone(),
            winner_score: result.winner_score,
            loser_score: result.loser_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medals {
    pub gold: TeamId,
    pub silver: TeamId,
    pub bronze: TeamId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnockoutOutcome {
    pub medals: Medals,
    pub games: Vec<GameSummary>,
}
