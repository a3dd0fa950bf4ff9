use super::constants::BRACKET_SIZE;
use super::roster::{ExhibitionsData, GroupsData, MatchRecord};
use super::team::Team;
use crate::types::{AppResult, TeamId, TeamMap};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// The tournament session: owns every team, the group memberships, and the
/// running per-team match history. Components borrow it, updates stay
/// visible across stages.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct World {
    pub teams: TeamMap,
    pub groups: BTreeMap<String, Vec<TeamId>>,
    pub history: HashMap<TeamId, Vec<MatchRecord>>,
}

impl World {
    /// Builds the session from the input rosters, seeding each team's
    /// history with its exhibition results. Structural problems are
    /// reported here, before any match is simulated.
    pub fn new(groups_data: GroupsData, exhibitions: ExhibitionsData) -> AppResult<Self> {
        let mut teams = TeamMap::new();
        let mut groups = BTreeMap::new();
        let mut history = HashMap::new();
        let mut seen_codes = HashSet::new();

        for (label, registrations) in groups_data {
            let mut members = Vec::with_capacity(registrations.len());
            for registration in registrations {
                if registration.fiba_ranking == 0 {
                    return Err(anyhow!(
                        "Team {} has no valid FIBA ranking.",
                        registration.name
                    ));
                }
                if !seen_codes.insert(registration.iso_code.clone()) {
                    return Err(anyhow!("Duplicate ISO code {}.", registration.iso_code));
                }

                let team = Team::new(
                    registration.name,
                    registration.iso_code.clone(),
                    registration.fiba_ranking,
                );
                history.insert(
                    team.id,
                    exhibitions
                        .get(&registration.iso_code)
                        .cloned()
                        .unwrap_or_default(),
                );
                members.push(team.id);
                teams.insert(team.id, team);
            }
            groups.insert(label, members);
        }

        if teams.len() < BRACKET_SIZE {
            return Err(anyhow!("Not enough teams to fill the knockout bracket."));
        }

        Ok(Self {
            teams,
            groups,
            history,
        })
    }

    pub fn team(&self, id: &TeamId) -> &Team {
        self.teams.get(id).expect("Team should exist")
    }

    pub fn team_mut(&mut self, id: &TeamId) -> &mut Team {
        self.teams.get_mut(id).expect("Team should exist")
    }

    pub fn history(&self, id: &TeamId) -> &[MatchRecord] {
        self.history.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_history(&mut self, id: TeamId, record: MatchRecord) {
        self.history.entry(id).or_default().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::types::AppResult;
    use crate::world::roster::{ExhibitionsData, GroupsData, MatchRecord, TeamRegistration};

    fn registration(name: &str, iso_code: &str, fiba_ranking: u32) -> TeamRegistration {
        TeamRegistration {
            name: name.into(),
            iso_code: iso_code.into(),
            fiba_ranking,
        }
    }

    fn eight_team_groups() -> GroupsData {
        let mut groups = GroupsData::new();
        groups.insert(
            "A".into(),
            (0..4).map(|i| registration(&format!("Team A{i}"), &format!("A{i}"), i + 1)).collect(),
        );
        groups.insert(
            "B".into(),
            (0..4).map(|i| registration(&format!("Team B{i}"), &format!("B{i}"), i + 5)).collect(),
        );
        groups
    }

    #[test]
    fn test_world_seeds_history_from_exhibitions() -> AppResult<()> {
        let mut exhibitions = ExhibitionsData::new();
        exhibitions.insert("A0".into(), vec![MatchRecord::new("A1", 90, 80)]);

        let world = World::new(eight_team_groups(), exhibitions)?;
        assert_eq!(world.teams.len(), 8);
        assert_eq!(world.groups["A"].len(), 4);

        let seeded = world
            .groups["A"]
            .iter()
            .find(|id| world.team(id).iso_code == "A0")
            .expect("Team should exist");
        assert_eq!(world.history(seeded).len(), 1);

        // Teams without exhibition results start from an empty log.
        let unseeded = &world.groups["B"][0];
        assert!(world.history(unseeded).is_empty());
        Ok(())
    }

    #[test]
    fn test_world_rejects_small_fields() {
        let mut groups = GroupsData::new();
        groups.insert(
            "A".into(),
            (0..4).map(|i| registration(&format!("Team A{i}"), &format!("A{i}"), i + 1)).collect(),
        );

        assert!(matches!(
            World::new(groups, ExhibitionsData::new()),
            Err(e) if e.to_string() == "Not enough teams to fill the knockout bracket."
        ));
    }

    #[test]
    fn test_world_rejects_invalid_ranking() {
        let mut groups = eight_team_groups();
        groups.get_mut("A").unwrap()[0].fiba_ranking = 0;

        assert!(matches!(
            World::new(groups, ExhibitionsData::new()),
            Err(e) if e.to_string() == "Team Team A0 has no valid FIBA ranking."
        ));
    }

    #[test]
    fn test_world_rejects_duplicate_codes() {
        let mut groups = eight_team_groups();
        groups.get_mut("B").unwrap()[0].iso_code = "A0".into();

        assert!(matches!(
            World::new(groups, ExhibitionsData::new()),
            Err(e) if e.to_string() == "Duplicate ISO code A0."
        ));
    }
}
