//! Activation functions applied to a neuron's pre-activation.

use crate::autograd::Scalar;

/// Activation applied after the affine part of a neuron.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Activation {
    /// Returns the input unchanged (no new node).
    #[default]
    Identity,
    /// `max(0, x)`.
    Relu,
    /// Hyperbolic tangent.
    Tanh,
}

impl Activation {
    /// Applies the activation to one value.
    #[must_use]
    pub fn apply(self, x: &Scalar) -> Scalar {
        match self {
            Activation::Identity => x.clone(),
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_same_node() {
        let x = Scalar::new(-2.0);
        let y = Activation::Identity.apply(&x);
        assert!(y.ptr_eq(&x));
    }

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(Activation::Relu.apply(&Scalar::new(-1.0)).value(), 0.0);
        assert_eq!(Activation::Relu.apply(&Scalar::new(0.5)).value(), 0.5);
    }

    #[test]
    fn tanh_squashes() {
        let y = Activation::Tanh.apply(&Scalar::new(10.0));
        assert!(y.value() <= 1.0 && y.value() > 0.99);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Activation::default(), Activation::Identity);
    }
}
