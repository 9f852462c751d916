//! The operation recorded on each node, and the single backward dispatcher.

use std::fmt;

use super::scalar::Scalar;

/// How a node was produced, with its operands.
///
/// Arity is fixed per variant. Operands are shared handles, so the graph stays
/// alive exactly as long as something holds the root or one of its descendants.
#[derive(Clone)]
pub(crate) enum Op {
    /// Created by the user (constant, weight, or a coerced number).
    Leaf,
    /// `lhs + rhs`.
    Add(Scalar, Scalar),
    /// `lhs * rhs`.
    Mul(Scalar, Scalar),
    /// `base ^ exponent`; the exponent is a plain number, not a node.
    Pow(Scalar, f64),
    /// Hyperbolic tangent.
    Tanh(Scalar),
    /// Rectified linear unit.
    Relu(Scalar),
}

impl Op {
    /// Tag of this operation.
    pub(crate) fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(..) => OpKind::Pow,
            Op::Tanh(_) => OpKind::Tanh,
            Op::Relu(_) => OpKind::Relu,
        }
    }

    /// Operands in declaration order, with repeats removed (`a + a` yields `[a]`).
    pub(crate) fn parents(&self) -> Vec<Scalar> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(lhs, rhs) | Op::Mul(lhs, rhs) => {
                if lhs.ptr_eq(rhs) {
                    vec![lhs.clone()]
                } else {
                    vec![lhs.clone(), rhs.clone()]
                }
            }
            Op::Pow(input, _) | Op::Tanh(input) | Op::Relu(input) => vec![input.clone()],
        }
    }

    /// Pushes `out_grad` back into the operands' gradients.
    ///
    /// `out_value` is the forward value of the node owning this op. Every arm
    /// accumulates; none overwrites.
    pub(crate) fn apply_backward(&self, out_value: f64, out_grad: f64) {
        match self {
            Op::Leaf => {}
            Op::Add(lhs, rhs) => {
                lhs.accumulate_grad(out_grad);
                rhs.accumulate_grad(out_grad);
            }
            Op::Mul(lhs, rhs) => {
                let (a, b) = (lhs.value(), rhs.value());
                lhs.accumulate_grad(b * out_grad);
                rhs.accumulate_grad(a * out_grad);
            }
            Op::Pow(base, exponent) => {
                let local = exponent * base.value().powf(exponent - 1.0);
                base.accumulate_grad(local * out_grad);
            }
            Op::Tanh(input) => {
                input.accumulate_grad((1.0 - out_value * out_value) * out_grad);
            }
            Op::Relu(input) => {
                let local = if out_value > 0.0 { 1.0 } else { 0.0 };
                input.accumulate_grad(local * out_grad);
            }
        }
    }
}

/// Introspection tag for the operation that produced a node.
///
/// Carries no operands; used for debugging and tests, never for gradients.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OpKind {
    /// Manual creation (leaf).
    Leaf,
    /// Addition.
    Add,
    /// Multiplication.
    Mul,
    /// Power with a numeric exponent.
    Pow,
    /// Hyperbolic tangent.
    Tanh,
    /// Rectified linear unit.
    Relu,
}

impl OpKind {
    /// Short symbol for the operation; empty for leaves.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Leaf => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "**",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "relu",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
