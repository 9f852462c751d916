//! Scalar autograd: computation graph of single float values with backpropagation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::op::{Op, OpKind};
use crate::autograd::Pow;

/// Internal scalar node: forward value, gradient, and the op that produced it.
struct Node {
    /// Forward pass value.
    value: f64,
    /// Gradient of the backward root with respect to this node.
    grad: f64,
    /// Producing operation and its operands.
    op: Op,
}

/// Handle to a scalar node in the autograd computation graph.
///
/// Wraps the node state in `Rc<RefCell<_>>` so that the graph can be shared and
/// gradients can be accumulated during backward. Cloning the handle is cheap and
/// refers to the same node.
#[derive(Clone)]
pub struct Scalar(Rc<RefCell<Node>>);

impl Scalar {
    /// Creates a leaf node (no parents) with the given value and zero gradient.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Scalar::from_op(value, Op::Leaf)
    }

    /// Creates a node that remembers the op (and its operands) for backprop.
    pub(crate) fn from_op(value: f64, op: Op) -> Self {
        Scalar(Rc::new(RefCell::new(Node {
            value,
            grad: 0.0,
            op,
        })))
    }

    /// Forward pass value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.borrow().value
    }

    /// Gradient of the last backward root with respect to this node.
    #[must_use]
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// Overwrites this node's gradient.
    pub fn set_grad(&self, grad: f64) {
        self.0.borrow_mut().grad = grad;
    }

    /// Overwrites this node's value.
    ///
    /// Meant for optimizers updating leaf parameters between forward passes.
    /// Nodes already built from this one keep the value they were computed with.
    pub fn set_value(&self, value: f64) {
        self.0.borrow_mut().value = value;
    }

    /// Zeros the gradient at this node.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds to this node's gradient (a node used several times receives every contribution).
    pub(crate) fn accumulate_grad(&self, grad: f64) {
        self.0.borrow_mut().grad += grad;
    }

    /// Tag of the operation that produced this node.
    #[must_use]
    pub fn op_kind(&self) -> OpKind {
        self.0.borrow().op.kind()
    }

    /// Distinct nodes consumed to produce this one (empty for leaves).
    #[must_use]
    pub fn parents(&self) -> Vec<Scalar> {
        self.0.borrow().op.parents()
    }

    /// Returns `true` if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Hyperbolic tangent, computed as `(e^(2x) - 1) / (e^(2x) + 1)`.
    ///
    /// Local grad is `1 - tanh(x)^2`. When `e^(2x)` overflows the value
    /// saturates at `1.0`, so the local grad there is 0.
    #[must_use]
    pub fn tanh(&self) -> Scalar {
        let e2x = (2.0 * self.value()).exp();
        let value = if e2x.is_infinite() {
            1.0
        } else {
            (e2x - 1.0) / (e2x + 1.0)
        };
        Scalar::from_op(value, Op::Tanh(self.clone()))
    }

    /// ReLU: `self` if `self >= 0`, else 0. Local grad is 1 only if the output is strictly positive.
    #[must_use]
    pub fn relu(&self) -> Scalar {
        let x = self.value();
        let value = if x >= 0.0 { x } else { 0.0 };
        Scalar::from_op(value, Op::Relu(self.clone()))
    }

    /// Nodes reachable from `self` through parent edges, every node after all of its parents.
    ///
    /// Each node appears once even if it is reachable along several paths.
    #[must_use]
    pub fn topological_order(&self) -> Vec<Scalar> {
        let mut topo = Vec::new();
        let mut visited: HashSet<*const RefCell<Node>> = HashSet::new();
        // (node, parents already expanded)
        let mut stack = vec![(self.clone(), false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                topo.push(node);
                continue;
            }
            if !visited.insert(Rc::as_ptr(&node.0)) {
                continue;
            }
            let parents = node.parents();
            stack.push((node, true));
            for parent in parents.into_iter().rev() {
                if !visited.contains(&Rc::as_ptr(&parent.0)) {
                    stack.push((parent, false));
                }
            }
        }
        topo
    }

    /// Runs backpropagation from this node (e.g. the loss) to all leaves.
    ///
    /// Seeds this node's gradient with 1.0, then applies every node's local rule
    /// in reverse topological order, so a node has received all contributions
    /// from its consumers before it pushes its own gradient further back.
    /// Gradients accumulate: zero them between passes.
    pub fn backward(&self) {
        let topo = self.topological_order();
        self.set_grad(1.0);
        for node in topo.iter().rev() {
            let inner = node.0.borrow();
            inner.op.apply_backward(inner.value, inner.grad);
        }
    }

    /// Zeros the gradient of every node reachable from this one, itself included.
    pub fn zero_grad_graph(&self) {
        for node in self.topological_order() {
            node.zero_grad();
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl Pow<f64> for &Scalar {
    type Output = Scalar;

    fn pow(self, exponent: f64) -> Scalar {
        let value = self.value().powf(exponent);
        Scalar::from_op(value, Op::Pow(self.clone(), exponent))
    }
}

impl Pow<f64> for Scalar {
    type Output = Scalar;

    fn pow(self, exponent: f64) -> Scalar {
        (&self).pow(exponent)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Scalar")
            .field("value", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op.kind())
            .finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.value())
    }
}
