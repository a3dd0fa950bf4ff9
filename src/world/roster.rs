use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// Group rosters keyed by group label. A BTreeMap so that scheduling and
// standings concatenation do not depend on JSON object order.
pub type GroupsData = BTreeMap<String, Vec<TeamRegistration>>;

// Pre-tournament friendly results keyed by ISO code.
pub type ExhibitionsData = HashMap<String, Vec<MatchRecord>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRegistration {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "ISOCode")]
    pub iso_code: String,
    #[serde(rename = "FIBARanking")]
    pub fiba_ranking: u32,
}

/// One row of a team's match history: the opponent's ISO code and the
/// result written as "{own score}-{opponent score}".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "Result")]
    pub result: String,
}

impl MatchRecord {
    pub fn new(opponent: impl Into<String>, scored: u16, received: u16) -> Self {
        Self {
            opponent: opponent.into(),
            result: format!("{scored}-{received}"),
        }
    }

    pub fn score(&self) -> Option<(u16, u16)> {
        parse_result(&self.result)
    }
}

pub fn parse_result(result: &str) -> Option<(u16, u16)> {
    let (scored, received) = result.split_once('-')?;
    Some((scored.trim().parse().ok()?, received.trim().parse().ok()?))
}
