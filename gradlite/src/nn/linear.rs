//! Neurons and fully connected layers.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{Activation, Module, NnError};
use crate::autograd::Scalar;

/// Lower bound of the uniform weight initialisation.
const INIT_LOW: f64 = -1.0;
/// Upper bound of the uniform weight initialisation.
const INIT_HIGH: f64 = 1.0;

fn init_distribution() -> Result<Uniform<f64>, NnError> {
    Uniform::new_inclusive(INIT_LOW, INIT_HIGH).map_err(|e| NnError::Init(e.to_string()))
}

/// A single neuron: `activation(bias + sum(w_i * x_i))`.
#[derive(Clone, Debug)]
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `input_features` weights drawn uniformly from `[-1, 1]` and a zero bias.
    ///
    /// # Errors
    ///
    /// - [`NnError::Init`] if the init distribution cannot be built.
    pub fn new<R: Rng + ?Sized>(
        input_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let dist = init_distribution()?;
        let weights = (0..input_features)
            .map(|_| Scalar::new(dist.sample(rng)))
            .collect();
        Ok(Neuron {
            weights,
            bias: Scalar::new(0.0),
            activation,
        })
    }

    /// Creates a neuron with fixed weights and bias.
    #[must_use]
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Scalar::new).collect(),
            bias: Scalar::new(bias),
            activation,
        }
    }

    /// Weight nodes, one per input feature.
    #[must_use]
    pub fn weights(&self) -> &[Scalar] {
        &self.weights
    }

    /// Bias node.
    #[must_use]
    pub fn bias(&self) -> &Scalar {
        &self.bias
    }

    /// Activation applied to the output.
    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs this neuron expects.
    #[must_use]
    pub fn input_features(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Scalar;

    /// # Panics
    ///
    /// If `input.len()` differs from the number of weights.
    fn forward(&self, input: &[Scalar]) -> Scalar {
        assert_eq!(
            input.len(),
            self.weights.len(),
            "neuron forward: input length must equal number of weights"
        );
        let pre = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        self.activation.apply(&pre)
    }

    fn parameters(&self) -> Vec<Scalar> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

/// A fully connected layer: `output_features` neurons sharing the same inputs and activation.
#[derive(Clone, Debug)]
pub struct Linear {
    neurons: Vec<Neuron>,
}

impl Linear {
    /// Creates a layer of randomly initialised neurons.
    ///
    /// # Errors
    ///
    /// - [`NnError::Init`] if the init distribution cannot be built.
    pub fn new<R: Rng + ?Sized>(
        input_features: usize,
        output_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let neurons = (0..output_features)
            .map(|_| Neuron::new(input_features, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Linear { neurons })
    }

    /// Builds a layer from existing neurons.
    #[must_use]
    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Linear { neurons }
    }

    /// The layer's neurons.
    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of inputs each neuron expects (0 for an empty layer).
    #[must_use]
    pub fn input_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_features)
    }

    /// Number of outputs.
    #[must_use]
    pub fn output_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Linear {
    type Output = Vec<Scalar>;

    fn forward(&self, input: &[Scalar]) -> Vec<Scalar> {
        self.neurons.iter().map(|n| n.forward(input)).collect()
    }

    fn parameters(&self) -> Vec<Scalar> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}
