//! Regression losses over predicted/target pairs.

use std::fmt;
use std::str::FromStr;

use super::NnError;
use crate::autograd::{Pow, Scalar};

/// How per-element losses are aggregated into one scalar.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Reduction {
    /// Sum of the per-element losses.
    Sum,
    /// Sum divided by the number of elements.
    #[default]
    Mean,
}

impl Reduction {
    /// Aggregates `losses`. The mean of an empty slice is `0 / 0` (NaN).
    #[must_use]
    pub fn reduce(self, losses: &[Scalar]) -> Scalar {
        let total: Scalar = losses.iter().sum();
        match self {
            Reduction::Sum => total,
            Reduction::Mean => total / losses.len() as f64,
        }
    }
}

impl FromStr for Reduction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(NnError::InvalidConfiguration {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Sum => f.write_str("sum"),
            Reduction::Mean => f.write_str("mean"),
        }
    }
}

/// A loss function comparing predictions to targets.
pub trait Loss {
    /// Returns the aggregated loss node.
    ///
    /// # Panics
    ///
    /// If `predicted` and `target` have different lengths.
    fn loss(&self, predicted: &[Scalar], target: &[Scalar]) -> Scalar;
}

fn check_lengths(predicted: &[Scalar], target: &[Scalar]) {
    assert_eq!(
        predicted.len(),
        target.len(),
        "loss: predicted and target length mismatch"
    );
}

/// Mean squared error: `(p - t)^2` per element.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mse {
    /// Aggregation mode.
    pub reduction: Reduction,
}

impl Mse {
    /// Creates the loss with the given aggregation mode.
    #[must_use]
    pub fn new(reduction: Reduction) -> Self {
        Mse { reduction }
    }
}

impl Loss for Mse {
    fn loss(&self, predicted: &[Scalar], target: &[Scalar]) -> Scalar {
        check_lengths(predicted, target);
        let losses: Vec<Scalar> = predicted
            .iter()
            .zip(target)
            .map(|(p, t)| (p - t).pow(2.0))
            .collect();
        self.reduction.reduce(&losses)
    }
}

/// Mean absolute error: `|p - t|` per element.
///
/// `|x|` is built as `relu(x) + relu(-x)`, so its gradient is the sign of `x`
/// and 0 at `x = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mae {
    /// Aggregation mode.
    pub reduction: Reduction,
}

impl Mae {
    /// Creates the loss with the given aggregation mode.
    #[must_use]
    pub fn new(reduction: Reduction) -> Self {
        Mae { reduction }
    }
}

fn abs(x: &Scalar) -> Scalar {
    x.relu() + (-x).relu()
}

impl Loss for Mae {
    fn loss(&self, predicted: &[Scalar], target: &[Scalar]) -> Scalar {
        check_lengths(predicted, target);
        let losses: Vec<Scalar> = predicted
            .iter()
            .zip(target)
            .map(|(p, t)| abs(&(p - t)))
            .collect();
        self.reduction.reduce(&losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(values: &[f64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::new).collect()
    }

    #[test]
    fn mse_sum_and_mean() {
        let pred = scalars(&[1.0, 2.0, 4.0]);
        let target = scalars(&[1.0, 0.0, 1.0]);
        let sum = Mse::new(Reduction::Sum).loss(&pred, &target);
        assert!((sum.value() - 13.0).abs() < 1e-10);
        let mean = Mse::default().loss(&pred, &target);
        assert!((mean.value() - 13.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn mse_gradient_is_twice_the_error() {
        let pred = scalars(&[3.0]);
        let target = scalars(&[1.0]);
        let loss = Mse::new(Reduction::Sum).loss(&pred, &target);
        loss.backward();
        assert!((pred[0].grad() - 4.0).abs() < 1e-10);
        assert!((target[0].grad() + 4.0).abs() < 1e-10);
    }

    #[test]
    fn mae_sum_and_mean() {
        let pred = scalars(&[1.0, -2.0]);
        let target = scalars(&[0.0, 1.0]);
        let sum = Mae::new(Reduction::Sum).loss(&pred, &target);
        assert!((sum.value() - 4.0).abs() < 1e-10);
        let mean = Mae::new(Reduction::Mean).loss(&pred, &target);
        assert!((mean.value() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn mae_gradient_is_sign_of_error() {
        let pred = scalars(&[1.0, -2.0, 5.0]);
        let target = scalars(&[0.0, 1.0, 5.0]);
        let loss = Mae::new(Reduction::Sum).loss(&pred, &target);
        loss.backward();
        assert_eq!(pred[0].grad(), 1.0);
        assert_eq!(pred[1].grad(), -1.0);
        assert_eq!(pred[2].grad(), 0.0);
    }

    #[test]
    fn reduction_parses_known_modes() {
        assert_eq!("sum".parse::<Reduction>(), Ok(Reduction::Sum));
        assert_eq!("Mean".parse::<Reduction>(), Ok(Reduction::Mean));
        assert_eq!(Reduction::Sum.to_string(), "sum");
        assert_eq!(Reduction::default(), Reduction::Mean);
    }

    #[test]
    fn reduction_rejects_unknown_mode() {
        let err = "median".parse::<Reduction>().unwrap_err();
        assert_eq!(
            err,
            NnError::InvalidConfiguration {
                mode: "median".to_string()
            }
        );
        assert!(err.to_string().contains("median"));
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn loss_rejects_length_mismatch() {
        let _ = Mse::default().loss(&scalars(&[1.0]), &scalars(&[1.0, 2.0]));
    }
}
