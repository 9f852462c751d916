//! Optimizers that update parameters from their accumulated gradients.

mod sgd;

pub use sgd::{Sgd, DEFAULT_LEARNING_RATE};

use crate::autograd::Scalar;

/// Trait for optimizers over a fixed set of parameters.
pub trait Optimizer {
    /// Parameters this optimizer updates.
    fn parameters(&self) -> &[Scalar];

    /// Applies one update using the current gradients.
    fn step(&mut self);

    /// Zeros every parameter's gradient (call before each forward/backward pass).
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
