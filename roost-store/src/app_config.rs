use roost_calendar::CalendarTheme;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub calendar: CalendarTheme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// json-server style `db.json` used to seed the mock backend.
    pub seed_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_reset_delay_ms() -> u64 {
    300
}

fn default_location() -> String {
    "Manhattan, New York, United States".to_string()
}

fn default_currency() -> String {
    roost_core::format::DEFAULT_CURRENCY.to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            default_location: default_location(),
            currency: default_currency(),
        }
    }
}

impl BookingConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `ROOST__API__BASE_URL=http://10.0.2.2:3001`
            .add_source(config::Environment::with_prefix("ROOST").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
