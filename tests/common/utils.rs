use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use tournament_backend::run;
use tournament_backend::config::settings::{get_config, DatabaseSettings};
use tournament_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Server on a random port with a pool that never connects until used
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_config().expect("Failed to read configuration.");
    let connection_pool = PgPoolOptions::new()
        .connect_lazy(configuration.database.connection_string().expose_secret())
        .expect("Failed to create lazy pool");

    start_server(connection_pool, &configuration.fixtures.defaults().expect("Invalid fixture settings"))
}

/// Server backed by a fresh, migrated database
pub async fn spawn_app_with_db() -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;

    start_server(connection_pool, &configuration.fixtures.defaults().expect("Invalid fixture settings"))
}

fn start_server(
    connection_pool: PgPool,
    defaults: &tournament_backend::config::settings::FixtureDefaults,
) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, connection_pool.clone(), *defaults, Vec::new())
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            config.connection_string_without_db().expose_secret()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Create a tenant through the API and return its id
pub async fn create_test_tenant(client: &Client, app_address: &str) -> String {
    let slug = format!("club-{}", &Uuid::new_v4().simple().to_string()[..8]);
    let response = client
        .post(&format!("{}/tenants", app_address))
        .json(&json!({ "name": "Test Club", "slug": slug }))
        .send()
        .await
        .expect("Failed to create tenant.");
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Invalid tenant response");
    body["data"]["id"].as_str().expect("Tenant id missing").to_string()
}

pub async fn create_test_group(client: &Client, app_address: &str, tenant_id: &str, name: &str) -> String {
    let response = client
        .post(&format!("{}/tenants/{}/groups", app_address, tenant_id))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create group.");
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Invalid group response");
    body["data"]["id"].as_str().expect("Group id missing").to_string()
}

pub async fn create_test_team(
    client: &Client,
    app_address: &str,
    tenant_id: &str,
    group_id: &str,
    name: &str,
) -> String {
    let response = client
        .post(&format!("{}/tenants/{}/teams", app_address, tenant_id))
        .json(&json!({ "name": name, "group_id": group_id }))
        .send()
        .await
        .expect("Failed to register team.");
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Invalid team response");
    body["data"]["id"].as_str().expect("Team id missing").to_string()
}
