pub mod fixture_handler;
pub mod group_handler;
pub mod match_handler;
pub mod team_handler;
