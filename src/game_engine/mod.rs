pub mod draw;
pub mod form;
pub mod game;
pub mod knockout;
pub mod standings;
pub mod tournament;
pub mod types;
