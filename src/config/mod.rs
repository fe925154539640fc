use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub const DEFAULT_ADMIN_PASSWORD: &str = "super_secret";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be at least 1")]
    NotPositive { name: &'static str },
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub theater: TheaterConfig,
    pub admin: AdminConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Размеры зала, фиксируются при старте
#[derive(Debug, Clone, Deserialize)]
pub struct TheaterConfig {
    pub rows: u32,
    pub columns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

impl AdminConfig {
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    /// `from_env` is the only production caller; tests feed a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let rows = parse_var("THEATER_ROWS", var("THEATER_ROWS", "9"))?;
        let columns = parse_var("THEATER_COLUMNS", var("THEATER_COLUMNS", "9"))?;
        if rows == 0 {
            return Err(ConfigError::NotPositive { name: "THEATER_ROWS" });
        }
        if columns == 0 {
            return Err(ConfigError::NotPositive { name: "THEATER_COLUMNS" });
        }

        Ok(Config {
            app: AppConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse_var("PORT", var("PORT", "8080"))?,
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "theater_service=debug,tower_http=debug"),
            },
            theater: TheaterConfig { rows, columns },
            admin: AdminConfig {
                password: var("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            },
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
