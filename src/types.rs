use crate::world::team::Team;
use std::collections::HashMap;

pub type AppResult<T> = Result<T, anyhow::Error>;

pub type TeamId = uuid::Uuid;

pub type TeamMap = HashMap<TeamId, Team>;
