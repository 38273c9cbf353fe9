//! Server configuration parsed from environment variables.
//!
//! Every setting has a default; a variable that is present but malformed is
//! an error rather than silently falling back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use client::net::mock::{REGISTER_LATENCY, SIGN_IN_LATENCY};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Delay before `POST /api/register` responds.
    pub register_latency: Duration,
    /// Delay before `POST /api/sign-in` responds.
    pub sign_in_latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, register_latency: REGISTER_LATENCY, sign_in_latency: SIGN_IN_LATENCY }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `REGISTER_LATENCY_MS`: default 1100
    /// - `SIGN_IN_LATENCY_MS`: default 900
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let register_ms = parse_var(&lookup, "REGISTER_LATENCY_MS", duration_ms(defaults.register_latency))?;
        let sign_in_ms = parse_var(&lookup, "SIGN_IN_LATENCY_MS", duration_ms(defaults.sign_in_latency))?;

        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            register_latency: Duration::from_millis(register_ms),
            sign_in_latency: Duration::from_millis(sign_in_ms),
        })
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
