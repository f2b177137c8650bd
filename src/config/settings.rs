use std::env;
use chrono::NaiveTime;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use secrecy::{ExposeSecret, SecretString};

use crate::models::fixture::RoundStrategy;

#[derive(serde::Deserialize, Debug)]
pub struct Settings{
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub fixtures: FixtureSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct DatabaseSettings{
    pub user: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub db_name: String,
    #[serde(default)]
    pub db_url: Option<SecretString>
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> SecretString {
        match &self.db_url {
            Some(db_url) => db_url.clone(),
            None => {
                SecretString::new(format!(
                    "postgres://{}:{}@{}:{}/{}",
                    self.user, self.password.expose_secret(), self.host, self.port, self.db_name
                ).into_boxed_str())
            }
        }
    }

    pub fn connection_string_without_db(&self) -> SecretString {
        SecretString::new(format!(
            "postgres://{}:{}@{}:{}",
            self.user, self.password.expose_secret(), self.host, self.port
        ).into_boxed_str())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings{
    pub port: u16,
    pub host: String,
    pub log_level: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Raw `fixtures` section, checked by [`FixtureSettings::defaults`]
#[derive(serde::Deserialize, Debug)]
pub struct FixtureSettings {
    /// Kickoff used when a fixture has a date but no time, `HH:MM:SS`
    pub default_kickoff_time: String,
    /// `greedy` or `circle`
    pub round_strategy: String,
}

/// Parsed fixture defaults shared with the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureDefaults {
    pub default_kickoff: NaiveTime,
    pub round_strategy: RoundStrategy,
}

impl Default for FixtureDefaults {
    fn default() -> Self {
        Self {
            default_kickoff: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            round_strategy: RoundStrategy::Greedy,
        }
    }
}

impl FixtureSettings {
    pub fn defaults(&self) -> Result<FixtureDefaults, ConfigError> {
        let default_kickoff = NaiveTime::parse_from_str(&self.default_kickoff_time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&self.default_kickoff_time, "%H:%M"))
            .map_err(|e| ConfigError::Message(format!(
                "Invalid fixtures.default_kickoff_time '{}': {}",
                self.default_kickoff_time, e
            )))?;
        let round_strategy = RoundStrategy::try_from(self.round_strategy.clone())
            .map_err(ConfigError::Message)?;

        Ok(FixtureDefaults {
            default_kickoff,
            round_strategy,
        })
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");
    
    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)))
        .add_source(
            config::Environment::default()
                .prefix("POSTGRES")
                .prefix_separator("__")
                .separator("__")
        )
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // In Fly.io the DATABASE_URL is directly exposed as an env var
    if let Ok(db_url) = env::var("DATABASE_URL") {
        settings.database.db_url = Some(SecretString::new(db_url.into_boxed_str()));
    }

    // Fail at start-up rather than on the first generation request
    settings.fixtures.defaults()?;

    Ok(settings)
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
