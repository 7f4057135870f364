use crate::{builtin::Builtin, op::BinOpKind, primitive::Polynomial};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The step used by the central difference approximation of a derivative.
pub const DERIVATIVE_STEP: f64 = 1e-5;

/// A node of an opaque function of `x`.
///
/// Opaque functions are evaluated by walking this tree. Sub-expressions that could be kept in
/// exact form are embedded as [`Node::Poly`] leaves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A polynomial in `x`. Constants and `x` itself are polynomials as well.
    Poly(Polynomial),

    /// The negation of the operand.
    Neg(Box<Node>),

    /// A binary operation between two nodes.
    Binary {
        op: BinOpKind,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// A call to a built-in function.
    Call {
        func: Builtin,
        arg: Box<Node>,
    },

    /// The derivative of the inner node, approximated with the central difference
    /// `(f(x + h) - f(x - h)) / 2h`.
    CentralDiff {
        inner: Box<Node>,
        step: f64,
    },
}

impl Node {
    /// Creates a binary node.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Node {
        Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Creates a call node.
    pub fn call(func: Builtin, arg: Node) -> Node {
        Node::Call { func, arg: Box::new(arg) }
    }

    /// Creates a node approximating the derivative of `inner` with the default step.
    pub fn central_diff(inner: Node) -> Node {
        Node::CentralDiff { inner: Box::new(inner), step: DERIVATIVE_STEP }
    }

    /// Evaluates the node at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Poly(poly) => poly.eval(x),
            Node::Neg(operand) => -operand.eval(x),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(x), rhs.eval(x)),
            Node::Call { func, arg } => func.eval(arg.eval(x)),
            Node::CentralDiff { inner, step } => {
                (inner.eval(x + step) - inner.eval(x - step)) / (2.0 * step)
            },
        }
    }

    /// Returns the number of nodes in this tree, including itself.
    pub fn size(&self) -> usize {
        1 + match self {
            Node::Poly(_) => 0,
            Node::Neg(operand) => operand.size(),
            Node::Binary { lhs, rhs, .. } => lhs.size() + rhs.size(),
            Node::Call { arg, .. } => arg.size(),
            Node::CentralDiff { inner, .. } => inner.size(),
        }
    }
}
