//! Network building blocks on top of [`Scalar`](crate::autograd::Scalar).
//!
//! Modules declare their parameters explicitly: [`Module::parameters`] collects
//! from the fields set at construction ([`Mlp`] → [`Linear`] → [`Neuron`] →
//! weights and bias), so optimizers and `zero_grad` see exactly the trainable
//! leaves of the network.

mod activation;
mod error;
mod linear;
mod loss;
mod mlp;

pub use activation::Activation;
pub use error::NnError;
pub use linear::{Linear, Neuron};
pub use loss::{Loss, Mae, Mse, Reduction};
pub use mlp::Mlp;

use crate::autograd::Scalar;

/// A differentiable building block with trainable parameters.
pub trait Module {
    /// What [`Module::forward`] returns (one node for a neuron, a vector for a layer).
    type Output;

    /// Runs the forward pass, building graph nodes from `input`.
    fn forward(&self, input: &[Scalar]) -> Self::Output;

    /// All trainable leaves of this module, in declaration order.
    fn parameters(&self) -> Vec<Scalar>;

    /// Zeros the gradient of every parameter.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    /// Number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
