//! Autograd: scalar computation graphs with reverse-mode differentiation.
//!
//! Every arithmetic operation on a [`Scalar`] returns a new node that records
//! the operation and its operands. [`Scalar::backward`] walks the graph from a
//! root (typically a loss) in reverse topological order and accumulates
//! `d(root)/d(node)` into every node that contributed to it.
//!
//! ```
//! use gradlite::autograd::{Pow, Scalar};
//!
//! let a = Scalar::new(2.0);
//! let b = Scalar::new(3.0);
//! let c = &a * &b + (&a).pow(2.0);
//! c.backward();
//! assert_eq!(c.value(), 10.0);
//! assert_eq!(a.grad(), 7.0); // b + 2a
//! assert_eq!(b.grad(), 2.0);
//! ```
//!
//! Division by a zero-valued node, overflow and similar cases are not errors:
//! they surface as IEEE infinities or NaN in [`Scalar::value`] and
//! [`Scalar::grad`].

pub mod impls;

pub use impls::op::OpKind;
pub use impls::scalar::Scalar;

/// Trait for raising a node to a numeric power (e.g. `(&a).pow(2.0)`).
///
/// The exponent is a plain number; no gradient flows into it.
pub trait Pow<Rhs> {
    /// Result of the power operation.
    type Output;

    /// Returns `self^exp` with gradient tracking.
    #[must_use]
    fn pow(self, exp: Rhs) -> Self::Output;
}
