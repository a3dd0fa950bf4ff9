pub mod game_engine;
pub mod store;
pub mod types;
pub mod world;
