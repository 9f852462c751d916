//! Errors produced while building or configuring network modules.

use thiserror::Error;

/// Errors produced by the `nn` module.
///
/// # Variants
///
/// - **InvalidConfiguration**: a loss was asked to aggregate with a mode it does not know.
///   *When*: Parsing a [`Reduction`](super::Reduction) from a string (e.g. an env var).
///   *Recovery*: Use `"sum"` or `"mean"`.
///
/// - **Init**: the weight initialisation distribution could not be built.
///   *When*: Constructing a [`Neuron`](super::Neuron), [`Linear`](super::Linear) or [`Mlp`](super::Mlp) with random weights.
///   *Recovery*: Ensure the init range is finite and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NnError {
    /// Unsupported loss aggregation mode.
    #[error("invalid configuration: unknown aggregation mode {mode:?} (expected \"sum\" or \"mean\")")]
    InvalidConfiguration {
        /// The mode that was requested.
        mode: String,
    },

    /// Weight initialisation failed.
    #[error("weight init: {0}")]
    Init(String),
}
