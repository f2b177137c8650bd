pub mod calendar;
pub mod duplicates;
pub mod error;
pub mod fixtures;
pub mod league;
pub mod rounds;
pub mod scorers;
pub mod service;
pub mod standings;
pub mod store;
pub mod validation;

pub use error::LeagueError;
pub use fixtures::FixtureGenerator;
pub use service::FixtureService;
