use super::draw::{draw_quarterfinals, seeded_pots};
use super::game::simulate_game;
use super::knockout::play_bracket;
use super::standings::rank_group;
use super::types::{GameSummary, Medals, Pairing, SeededPots, Stage};
use crate::types::{AppResult, TeamId};
use crate::world::roster::{ExhibitionsData, GroupsData};
use crate::world::world::World;
use anyhow::anyhow;
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

/// Drives one tournament from the group stage to the medals. Owns the
/// session and the random source; every stage exposes its outcome as
/// plain data, presentation happens elsewhere.
pub struct Tournament {
    world: World,
    rng: ChaCha8Rng,
    games: Vec<GameSummary>,
    group_standings: BTreeMap<String, Vec<TeamId>>,
    pots: Option<SeededPots>,
    quarterfinals: Vec<Pairing>,
    medals: Option<Medals>,
}

impl Tournament {
    pub fn new(
        groups: GroupsData,
        exhibitions: ExhibitionsData,
        seed: Option<u64>,
    ) -> AppResult<Self> {
        let world = World::new(groups, exhibitions)?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Ok(Self {
            world,
            rng,
            games: vec![],
            group_standings: BTreeMap::new(),
            pots: None,
            quarterfinals: vec![],
            medals: None,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    pub fn group_standings(&self) -> &BTreeMap<String, Vec<TeamId>> {
        &self.group_standings
    }

    pub fn pots(&self) -> Option<&SeededPots> {
        self.pots.as_ref()
    }

    pub fn quarterfinals(&self) -> &[Pairing] {
        &self.quarterfinals
    }

    pub fn medals(&self) -> Option<&Medals> {
        self.medals.as_ref()
    }

    /// Full round robin within each group, then the resolved standings.
    pub fn play_group_stage(&mut self) -> AppResult<()> {
        if !self.group_standings.is_empty() {
            return Err(anyhow!("The group stage has already been played."));
        }

        for (label, members) in self.world.groups.clone() {
            log::info!("Playing group {label}");
            for (home_id, away_id) in members.iter().copied().tuple_combinations() {
                let result = simulate_game(&mut self.world, home_id, away_id, true, &mut self.rng);
                self.games
                    .push(GameSummary::new(&self.world, Stage::GroupStage, &result));
            }
            let standings = rank_group(&self.world, &members);
            self.group_standings.insert(label, standings);
        }

        Ok(())
    }

    /// Builds the seeding pots from the global ranking and draws the
    /// quarterfinal pairs.
    pub fn draw_knockout_bracket(&mut self) -> AppResult<()> {
        if self.group_standings.is_empty() {
            return Err(anyhow!("The group stage has not been played yet."));
        }
        if self.pots.is_some() {
            return Err(anyhow!("The knockout bracket has already been drawn."));
        }

        let pots = seeded_pots(&self.world, &self.group_standings)?;
        self.quarterfinals = draw_quarterfinals(&self.world, &pots, &mut self.rng);
        self.pots = Some(pots);
        Ok(())
    }

    pub fn play_knockout_stage(&mut self) -> AppResult<Medals> {
        if self.quarterfinals.is_empty() {
            return Err(anyhow!("The knockout bracket has not been drawn yet."));
        }
        if self.medals.is_some() {
            return Err(anyhow!("The tournament has already ended."));
        }

        let quarterfinals = self.quarterfinals.clone();
        let outcome = play_bracket(&mut self.world, &quarterfinals, &mut self.rng);
        self.games.extend(outcome.games);
        self.medals = Some(outcome.medals);
        log::info!(
            "Medals: gold {}, silver {}, bronze {}",
            self.world.team(&outcome.medals.gold).name,
            self.world.team(&outcome.medals.silver).name,
            self.world.team(&outcome.medals.bronze).name
        );
        Ok(outcome.medals)
    }

    pub fn run(&mut self) -> AppResult<Medals> {
        self.play_group_stage()?;
        self.draw_knockout_bracket()?;
        self.play_knockout_stage()
    }
}
