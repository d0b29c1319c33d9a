use std::{env, time::Duration};

use dotenv::dotenv;

const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;
const DEFAULT_ANSWERS_PATH: &str = "answers.json";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value \"{value}\" for {name}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How long the simulated payment takes.
    pub checkout_delay: Duration,
    pub answers_path: String,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            answers_path: DEFAULT_ANSWERS_PATH.to_owned(),
            log_config: DEFAULT_LOG_CONFIG.to_owned(),
        }
    }
}

impl Config {
    /// Reads `CHAIRFIT_*` variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let checkout_delay = match var("CHAIRFIT_CHECKOUT_DELAY_MS") {
            Some(value) => value
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CHAIRFIT_CHECKOUT_DELAY_MS",
                    value,
                })?,
            None => defaults.checkout_delay,
        };

        Ok(Self {
            checkout_delay,
            answers_path: var("CHAIRFIT_ANSWERS").unwrap_or(defaults.answers_path),
            log_config: var("CHAIRFIT_LOG_CONFIG").unwrap_or(defaults.log_config),
        })
    }
}
