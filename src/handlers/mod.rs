pub mod backend_health_handler;
pub mod league;
pub mod response;
pub mod tenant_handler;
