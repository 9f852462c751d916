//! Multilayer perceptron: a stack of [`Linear`] layers.

use rand::Rng;

use super::{Activation, Linear, Module, NnError};
use crate::autograd::Scalar;

/// A stack of fully connected layers applied in order.
///
/// Hidden layers share one activation; the output layer is linear
/// ([`Activation::Identity`]).
#[derive(Clone, Debug)]
pub struct Mlp {
    layers: Vec<Linear>,
}

impl Mlp {
    /// Builds `input_features -> layer_sizes[0] -> ... -> layer_sizes[n-1]`.
    ///
    /// # Errors
    ///
    /// - [`NnError::Init`] if weight initialisation fails.
    pub fn new<R: Rng + ?Sized>(
        input_features: usize,
        layer_sizes: &[usize],
        hidden_activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = input_features;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i + 1 == layer_sizes.len() {
                Activation::Identity
            } else {
                hidden_activation
            };
            layers.push(Linear::new(fan_in, size, activation, rng)?);
            fan_in = size;
        }
        Ok(Mlp { layers })
    }

    /// Builds a network from existing layers.
    #[must_use]
    pub fn from_layers(layers: Vec<Linear>) -> Self {
        Mlp { layers }
    }

    /// The layers, input side first.
    #[must_use]
    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output = Vec<Scalar>;

    fn forward(&self, input: &[Scalar]) -> Vec<Scalar> {
        self.layers
            .iter()
            .fold(input.to_vec(), |x, layer| layer.forward(&x))
    }

    fn parameters(&self) -> Vec<Scalar> {
        self.layers.iter().flat_map(Linear::parameters).collect()
    }
}
