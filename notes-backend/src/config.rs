//! Server configuration.
//!
//! Everything has a compiled-in default: bind `0.0.0.0:5001` and store notes
//! in `database.db` under the working directory. Each value may be overridden
//! from the environment (or a `.env` file); with nothing set the server runs
//! on the defaults alone.

use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Set to "true" or "1" to keep serving when the notes schema cannot be created.
    /// Default: false (startup aborts).
    pub const LENIENT_DB_INIT: &str = "LENIENT_DB_INIT";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5001;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "database.db";
    pub const LENIENT_DB_INIT: bool = false;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    /// Log and continue when schema creation fails instead of refusing to start
    pub lenient_db_init: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "{} must be a valid port number, got {:?}; using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            port,
            bind_address: get(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            database_url: get(env_vars::DATABASE_URL)
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            lenient_db_init: get(env_vars::LENIENT_DB_INIT)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults::LENIENT_DB_INIT),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
