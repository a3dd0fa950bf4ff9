pub mod constants;
pub mod roster;
pub mod team;
pub mod world;
