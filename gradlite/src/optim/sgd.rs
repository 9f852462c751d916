//! Plain stochastic gradient descent.

use super::Optimizer;
use crate::autograd::Scalar;

/// Learning rate used by [`Sgd::with_default_rate`].
pub const DEFAULT_LEARNING_RATE: f64 = 1e-4;

/// Stochastic gradient descent: `p -= learning_rate * p.grad` for every parameter.
#[derive(Clone, Debug)]
pub struct Sgd {
    parameters: Vec<Scalar>,
    learning_rate: f64,
}

impl Sgd {
    /// Creates an optimizer over `parameters` with the given learning rate.
    #[must_use]
    pub fn new(parameters: Vec<Scalar>, learning_rate: f64) -> Self {
        Sgd {
            parameters,
            learning_rate,
        }
    }

    /// Creates an optimizer with [`DEFAULT_LEARNING_RATE`].
    #[must_use]
    pub fn with_default_rate(parameters: Vec<Scalar>) -> Self {
        Sgd::new(parameters, DEFAULT_LEARNING_RATE)
    }

    /// Current learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Changes the learning rate (e.g. for a decay schedule).
    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }
}

impl Optimizer for Sgd {
    fn parameters(&self) -> &[Scalar] {
        &self.parameters
    }

    fn step(&mut self) {
        for p in &self.parameters {
            p.set_value(p.value() - self.learning_rate * p.grad());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Pow;

    #[test]
    fn step_moves_against_gradient() {
        let w = Scalar::new(2.0);
        let loss = (&w).pow(2.0);
        loss.backward();
        assert_eq!(w.grad(), 4.0);
        let mut opt = Sgd::new(vec![w.clone()], 0.1);
        opt.step();
        assert!((w.value() - 1.6).abs() < 1e-10);
        // step does not touch gradients
        assert_eq!(w.grad(), 4.0);
    }

    #[test]
    fn zero_grad_clears_all_parameters() {
        let a = Scalar::new(1.0);
        let b = Scalar::new(2.0);
        let loss = &a * &b;
        loss.backward();
        let opt = Sgd::with_default_rate(vec![a.clone(), b.clone()]);
        assert_eq!(opt.learning_rate(), DEFAULT_LEARNING_RATE);
        opt.zero_grad();
        assert_eq!(a.grad(), 0.0);
        assert_eq!(b.grad(), 0.0);
    }

    #[test]
    fn repeated_steps_minimise_quadratic() {
        let w = Scalar::new(5.0);
        let mut opt = Sgd::new(vec![w.clone()], 0.1);
        for _ in 0..100 {
            opt.zero_grad();
            let loss = (&w - 3.0).pow(2.0);
            loss.backward();
            opt.step();
        }
        assert!((w.value() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn set_learning_rate_changes_step_size() {
        let w = Scalar::new(0.0);
        w.set_grad(1.0);
        let mut opt = Sgd::new(vec![w.clone()], 0.5);
        opt.set_learning_rate(0.25);
        opt.step();
        assert_eq!(w.value(), -0.25);
    }
}
