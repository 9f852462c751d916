//! Central place for configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `GRADLITE_LEARNING_RATE`).
pub(crate) const ENV_PREFIX: &str = "GRADLITE_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_NUM_STEPS: &str = "NUM_STEPS";
pub(crate) const ENV_LOSS_LOG_EVERY: &str = "LOSS_LOG_EVERY";
pub(crate) const ENV_HIDDEN_SIZE: &str = "HIDDEN_SIZE";
pub(crate) const ENV_LOSS_REDUCTION: &str = "LOSS_REDUCTION";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub(crate) const DEFAULT_NUM_STEPS: usize = 100;
pub(crate) const DEFAULT_LOSS_LOG_EVERY: usize = 10;
pub(crate) const DEFAULT_HIDDEN_SIZE: usize = 4;
