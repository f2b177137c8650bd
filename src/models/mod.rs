pub mod common;
pub mod tenant;
pub mod team;
pub mod fixture;
pub mod game;
pub mod standings;
