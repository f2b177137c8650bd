pub mod event_queries;
pub mod match_queries;
pub mod team_queries;
pub mod tenant_queries;

pub use event_queries::EventQueries;
pub use match_queries::{MatchQueries, PgLeagueStore};
pub use team_queries::TeamQueries;
pub use tenant_queries::TenantQueries;
