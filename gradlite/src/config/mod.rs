//! Configuration for training runs.
//!
//! Load from environment via [`from_env`] and validate with [`TrainConfig::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use constants::{
    DEFAULT_HIDDEN_SIZE, DEFAULT_LEARNING_RATE, DEFAULT_LOSS_LOG_EVERY, DEFAULT_NUM_STEPS,
    DEFAULT_SEED,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

use crate::nn::Reduction;

/// Settings for a training run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Seed for weight initialisation.
    pub seed: u64,
    /// SGD learning rate.
    pub learning_rate: f64,
    /// Number of optimisation steps.
    pub num_steps: usize,
    /// Report the loss every this many steps (and at the first step).
    pub loss_log_every: usize,
    /// Width of each hidden layer.
    pub hidden_size: usize,
    /// How per-sample losses are aggregated.
    pub reduction: Reduction,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            learning_rate: DEFAULT_LEARNING_RATE,
            num_steps: DEFAULT_NUM_STEPS,
            loss_log_every: DEFAULT_LOSS_LOG_EVERY,
            hidden_size: DEFAULT_HIDDEN_SIZE,
            reduction: Reduction::default(),
        }
    }
}

impl TrainConfig {
    /// Checks value ranges. Returns `Ok(())` if valid, or [`ConfigError::Validation`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be finite and greater than 0, got {}",
                self.learning_rate
            )));
        }
        if self.loss_log_every == 0 {
            return Err(ConfigError::Validation(
                "loss_log_every must be greater than 0".to_string(),
            ));
        }
        if self.hidden_size == 0 {
            return Err(ConfigError::Validation(
                "hidden_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{
        ENV_HIDDEN_SIZE, ENV_LEARNING_RATE, ENV_LOSS_LOG_EVERY, ENV_LOSS_REDUCTION, ENV_NUM_STEPS,
        ENV_SEED,
    };
    use super::*;

    /// Env vars are process-wide; serialize the tests that touch them.
    static CONFIG_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        CONFIG_ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let cfg = TrainConfig {
                learning_rate: lr,
                ..TrainConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::Validation(_))),
                "lr = {lr}"
            );
        }
    }

    #[test]
    fn validate_rejects_zero_log_interval() {
        let cfg = TrainConfig {
            loss_log_every: 0,
            ..TrainConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_hidden_size() {
        let cfg = TrainConfig {
            hidden_size: 0,
            ..TrainConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_steps() {
        let cfg = TrainConfig {
            num_steps: 0,
            ..TrainConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let _g = env_guard();
        for suffix in [
            ENV_SEED,
            ENV_LEARNING_RATE,
            ENV_NUM_STEPS,
            ENV_LOSS_LOG_EVERY,
            ENV_HIDDEN_SIZE,
            ENV_LOSS_REDUCTION,
        ] {
            std::env::remove_var(env_key(suffix));
        }
        let cfg = from_env().unwrap();
        assert_eq!(cfg, TrainConfig::default());
    }

    #[test]
    fn from_env_overrides_with_env_vars() {
        let _g = env_guard();
        let key_steps = env_key(ENV_NUM_STEPS);
        let key_reduction = env_key(ENV_LOSS_REDUCTION);
        std::env::set_var(&key_steps, "250");
        std::env::set_var(&key_reduction, "sum");
        let cfg = from_env();
        std::env::remove_var(&key_steps);
        std::env::remove_var(&key_reduction);
        let cfg = cfg.unwrap();
        assert_eq!(cfg.num_steps, 250);
        assert_eq!(cfg.reduction, Reduction::Sum);
    }

    #[test]
    fn from_env_returns_error_on_invalid_parse() {
        let _g = env_guard();
        let key = env_key(ENV_SEED);
        std::env::set_var(&key, "not_a_number");
        let res = from_env();
        std::env::remove_var(&key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn from_env_rejects_unknown_reduction() {
        let _g = env_guard();
        let key = env_key(ENV_LOSS_REDUCTION);
        std::env::set_var(&key, "median");
        let res = from_env();
        std::env::remove_var(&key);
        match res {
            Err(ConfigError::Parse { value, message, .. }) => {
                assert_eq!(value, "median");
                assert!(message.contains("median"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn config_error_display() {
        let e = ConfigError::Validation("hidden_size must be > 0".to_string());
        assert!(e.to_string().contains("config validation"));
        assert_eq!(e.message(), "hidden_size must be > 0");

        let e = ConfigError::Parse {
            key: "GRADLITE_SEED".to_string(),
            value: "abc".to_string(),
            message: "invalid digit".to_string(),
        };
        assert!(e.to_string().contains("GRADLITE_SEED"));
        assert!(e.to_string().contains("abc"));
        assert_eq!(e.message(), "invalid digit");
    }

    #[test]
    fn env_helpers_unset_return_none() {
        assert_eq!(env_string("GRADLITE_UNLIKELY_KEY_12345").unwrap(), None);
        assert_eq!(env_parsed::<u64>("GRADLITE_UNLIKELY_KEY_67890").unwrap(), None);
    }
}
