use super::constants::{POINTS_PER_LOSS, POINTS_PER_WIN};
use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Running head-to-head record against a single opponent, accumulated over
/// every match the two teams play, group stage and knockout alike.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersusRecord {
    pub played: u32,
    pub wins: u32,
    pub scored_points: u32,
    pub received_points: u32,
}

impl VersusRecord {
    pub fn point_difference(&self) -> i32 {
        self.scored_points as i32 - self.received_points as i32
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub iso_code: String,
    pub fiba_ranking: u32,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub scored_points: u32,
    pub received_points: u32,
    pub versus: HashMap<TeamId, VersusRecord>,
    pub group_stage_opponents: HashSet<TeamId>,
}

impl Team {
    pub fn new(name: String, iso_code: String, fiba_ranking: u32) -> Self {
        Self {
            id: TeamId::new_v4(),
            name,
            iso_code,
            fiba_ranking,
            ..Default::default()
        }
    }

    pub fn point_difference(&self) -> i32 {
        self.scored_points as i32 - self.received_points as i32
    }

    /// Records one side of a finished match. The caller updates both teams
    /// with swapped arguments so the pairwise maps stay mirror images.
    pub fn save_match(
        &mut self,
        opponent: TeamId,
        scored: u16,
        received: u16,
        win: bool,
        group_stage: bool,
    ) {
        let record = self.versus.entry(opponent).or_default();
        record.played += 1;
        record.scored_points += scored as u32;
        record.received_points += received as u32;
        if win {
            record.wins += 1;
        }

        if group_stage {
            self.group_stage_opponents.insert(opponent);
        }

        self.scored_points += scored as u32;
        self.received_points += received as u32;
        if win {
            self.wins += 1;
            self.points += POINTS_PER_WIN;
        } else {
            self.losses += 1;
            self.points += POINTS_PER_LOSS;
        }
    }

    /// Signed point differential over the direct matches with `opponent`,
    /// 0 when the two teams have not played.
    pub fn versus_point_difference(&self, opponent: &TeamId) -> i32 {
        self.versus
            .get(opponent)
            .map(|record| record.point_difference())
            .unwrap_or_default()
    }

    pub fn has_met_in_group_stage(&self, opponent: &TeamId) -> bool {
        self.group_stage_opponents.contains(opponent)
    }
}
