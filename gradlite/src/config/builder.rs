//! Build [`TrainConfig`] from environment variables.
//!
//! Key names live in [`crate::config::constants`]; every read goes through
//! [`env_string`] or [`env_parsed`] so errors carry the offending key.

use super::constants::{
    ENV_HIDDEN_SIZE, ENV_LEARNING_RATE, ENV_LOSS_LOG_EVERY, ENV_LOSS_REDUCTION, ENV_NUM_STEPS,
    ENV_PREFIX, ENV_SEED,
};
use super::{ConfigError, TrainConfig};
use crate::nn::Reduction;

/// Returns the full environment variable key for a suffix (e.g. `SEED` → `GRADLITE_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// `Ok(None)` if unset, [`ConfigError::EnvVar`] if set but not valid Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into `T`.
///
/// `Ok(None)` if unset, [`ConfigError::Parse`] if set but `T::from_str` fails.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    s.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Parse {
            key: key.to_string(),
            value: s.clone(),
            message: e.to_string(),
        })
}

/// Builds [`TrainConfig`] from environment variables, falling back to [`TrainConfig::default`].
///
/// Does not validate; call [`TrainConfig::validate`] on the result.
pub fn from_env() -> Result<TrainConfig, ConfigError> {
    let default = TrainConfig::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let num_steps = env_parsed::<usize>(&env_key(ENV_NUM_STEPS))?.unwrap_or(default.num_steps);
    let loss_log_every =
        env_parsed::<usize>(&env_key(ENV_LOSS_LOG_EVERY))?.unwrap_or(default.loss_log_every);
    let hidden_size =
        env_parsed::<usize>(&env_key(ENV_HIDDEN_SIZE))?.unwrap_or(default.hidden_size);
    let reduction =
        env_parsed::<Reduction>(&env_key(ENV_LOSS_REDUCTION))?.unwrap_or(default.reduction);

    Ok(TrainConfig {
        seed,
        learning_rate,
        num_steps,
        loss_log_every,
        hidden_size,
        reduction,
    })
}
