use actix_web::web;

pub mod backend_health;
pub mod league;
pub mod tenants;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Everything below a tenant is scoped by its id
    cfg.service(
        web::scope("/tenants")
            .service(tenants::create_tenant)
            .service(tenants::list_tenants)
            .service(tenants::get_tenant)
            .service(tenants::get_dashboard)
            .service(league::create_group)
            .service(league::list_groups)
            .service(league::get_group_standings)
            .service(league::register_team)
            .service(league::list_teams)
            .service(league::update_team)
            .service(league::register_player)
            .service(league::list_players)
            .service(league::generate_fixtures)
            .service(league::check_fixtures)
            .service(league::commit_fixtures)
            .service(league::list_matches)
            .service(league::update_match_result)
            .service(league::add_match_event)
            .service(league::list_match_events)
            .service(league::delete_match_event)
            .service(league::get_scorers)
    );
}
