//! Real functions of a single variable `x`, with exact or numeric differentiation.
//!
//! A [`RealFunction`] is kept as an exact [`Polynomial`] for as long as every operation that built
//! it can be carried out on coefficient vectors. As soon as an operation cannot be (a call to a
//! built-in function, a division, a non-integral power), the function becomes
//! [`RealFunction::Opaque`]: a tree of [`Node`]s that can only be evaluated, not inspected
//! algebraically.
//!
//! | lhs          | op              | rhs          | result                |
//! | ------------ | --------------- | ------------ | --------------------- |
//! | `Polynomial` | `+`, `-`, `*`   | `Polynomial` | `Polynomial` (exact)  |
//! | `Polynomial` | `^` (`>= 0`)    | constant     | `Polynomial` (exact)  |
//! | any          | `/`             | any          | `Opaque`              |
//! | `Opaque`     | any             | any          | `Opaque`              |
//!
//! The derivative of a polynomial is computed exactly with the power rule. The derivative of an
//! opaque function is approximated with a central difference (see [`DERIVATIVE_STEP`]).

pub mod node;

use crate::{builtin::Builtin, op::BinOpKind, primitive::Polynomial};
use log::debug;
pub use node::{Node, DERIVATIVE_STEP};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default upper bound on integer exponents that are expanded exactly.
pub const DEFAULT_MAX_EXACT_POWER: u32 = 64;

/// A real function of one variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RealFunction {
    /// A polynomial, kept in exact coefficient form.
    Polynomial(Polynomial),

    /// A function that can only be evaluated numerically.
    Opaque(Node),
}

impl RealFunction {
    /// The constant function `c`.
    pub fn constant(c: f64) -> Self {
        RealFunction::Polynomial(Polynomial::constant(c))
    }

    /// The identity function `x`.
    pub fn identity() -> Self {
        RealFunction::Polynomial(Polynomial::identity())
    }

    /// Evaluates the function at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            RealFunction::Polynomial(poly) => poly.eval(x),
            RealFunction::Opaque(node) => node.eval(x),
        }
    }

    /// Returns true if the function is kept in exact polynomial form.
    pub fn is_polynomial(&self) -> bool {
        matches!(self, RealFunction::Polynomial(_))
    }

    /// Returns the polynomial form of the function, if it has one.
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            RealFunction::Polynomial(poly) => Some(poly),
            RealFunction::Opaque(_) => None,
        }
    }

    /// Converts the function into a node that can be embedded into an opaque function.
    pub fn into_node(self) -> Node {
        match self {
            RealFunction::Polynomial(poly) => Node::Poly(poly),
            RealFunction::Opaque(node) => node,
        }
    }

    /// Returns the derivative of the function.
    ///
    /// Polynomials are differentiated exactly with the power rule. Opaque functions are wrapped
    /// in a new opaque function that approximates the derivative with a central difference.
    pub fn derivative(&self) -> RealFunction {
        match self {
            RealFunction::Polynomial(poly) => RealFunction::Polynomial(poly.derivative()),
            RealFunction::Opaque(node) => RealFunction::Opaque(Node::central_diff(node.clone())),
        }
    }

    /// Applies a built-in function to this function. The result is always opaque.
    pub fn call(func: Builtin, arg: RealFunction) -> RealFunction {
        RealFunction::Opaque(Node::call(func, arg.into_node()))
    }

    /// Combines two functions with a binary operator, keeping exact form where possible.
    pub fn binary(op: BinOpKind, lhs: RealFunction, rhs: RealFunction) -> RealFunction {
        use RealFunction::{Opaque, Polynomial as Poly};

        match (op, lhs, rhs) {
            (BinOpKind::Add, Poly(a), Poly(b)) => Poly(&a + &b),
            (BinOpKind::Sub, Poly(a), Poly(b)) => Poly(&a - &b),
            (BinOpKind::Mul, Poly(a), Poly(b)) => Poly(&a * &b),
            (BinOpKind::Exp, base, exponent) => base.pow(exponent, DEFAULT_MAX_EXACT_POWER),
            (op, lhs, rhs) => Opaque(Node::binary(op, lhs.into_node(), rhs.into_node())),
        }
    }

    /// Raises this function to the power of `exponent`.
    ///
    /// If both the base and the exponent are polynomials and the exponent is a constant, the
    /// exponent is rounded to the nearest integer. If that integer is non-negative and no
    /// greater than `max_exact_power`, the power is expanded exactly by repeated multiplication,
    /// so `x^2.5` becomes `x^3`. Otherwise, the result is an opaque function using real
    /// exponentiation, which follows floating-point semantics (a negative base with a
    /// non-integral exponent evaluates to NaN).
    pub fn pow(self, exponent: RealFunction, max_exact_power: u32) -> RealFunction {
        match (self, exponent) {
            (RealFunction::Polynomial(base), RealFunction::Polynomial(exponent)) => {
                match exponent.as_constant().and_then(|c| exact_power(c, max_exact_power)) {
                    Some(n) => RealFunction::Polynomial(base.pow(n)),
                    None => {
                        debug!("power with exponent `{}` cannot be expanded exactly", exponent);
                        RealFunction::Opaque(Node::binary(
                            BinOpKind::Exp,
                            Node::Poly(base),
                            Node::Poly(exponent),
                        ))
                    },
                }
            },
            (base, exponent) => RealFunction::Opaque(Node::binary(
                BinOpKind::Exp,
                base.into_node(),
                exponent.into_node(),
            )),
        }
    }
}

/// Rounds the exponent to the nearest integer, and returns it if it is non-negative and within
/// the bound.
fn exact_power(c: f64, max_exact_power: u32) -> Option<u32> {
    let rounded = c.round();
    if rounded >= 0.0 && rounded <= max_exact_power as f64 {
        Some(rounded as u32)
    } else {
        None
    }
}

impl From<Polynomial> for RealFunction {
    fn from(poly: Polynomial) -> Self {
        RealFunction::Polynomial(poly)
    }
}

impl From<Node> for RealFunction {
    fn from(node: Node) -> Self {
        RealFunction::Opaque(node)
    }
}

macro_rules! impl_binary_ops {
    ($($trait:ident $method:ident $kind:ident),* $(,)?) => {
        $(
            impl $trait for RealFunction {
                type Output = RealFunction;

                fn $method(self, rhs: RealFunction) -> RealFunction {
                    RealFunction::binary(BinOpKind::$kind, self, rhs)
                }
            }
        )*
    };
}

impl_binary_ops!(Add add Add, Sub sub Sub, Mul mul Mul, Div div Div);

impl Neg for RealFunction {
    type Output = RealFunction;

    fn neg(self) -> RealFunction {
        match self {
            RealFunction::Polynomial(poly) => RealFunction::Polynomial(-poly),
            RealFunction::Opaque(node) => RealFunction::Opaque(Node::Neg(Box::new(node))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use crate::primitive::poly;
    use super::*;

    fn x() -> RealFunction {
        RealFunction::identity()
    }

    fn c(c: f64) -> RealFunction {
        RealFunction::constant(c)
    }

    #[test]
    fn polynomial_closure() {
        // x^2 + 3x + 2
        let f = x() * x() + c(3.0) * x() + c(2.0);
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 3.0, 2.0])));
        assert_eq!(f.derivative().eval(1.0), 5.0);
    }

    #[test]
    fn division_is_opaque() {
        let f = (x() * x()) / c(2.0);
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(4.0), 8.0);
    }

    #[test]
    fn call_is_opaque() {
        let f = RealFunction::call(Builtin::Sin, x());
        assert!(!f.is_polynomial());

        let g = f + c(1.0);
        assert!(!g.is_polynomial());
        assert_eq!(g.eval(0.0), 1.0);
    }

    #[test]
    fn exact_integer_power() {
        let f = (x() + c(1.0)).pow(c(3.0), DEFAULT_MAX_EXACT_POWER);
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 3.0, 3.0, 1.0])));
    }

    #[test]
    fn negative_power_is_opaque() {
        let f = x().pow(c(-1.0), DEFAULT_MAX_EXACT_POWER);
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(4.0), 0.25);
    }

    #[test]
    fn fractional_power_is_rounded() {
        let f = x().pow(c(2.5), DEFAULT_MAX_EXACT_POWER);
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 0.0, 0.0, 0.0])));
        assert_eq!(f.eval(4.0), 64.0);

        let f = x().pow(c(1.9999999), DEFAULT_MAX_EXACT_POWER);
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 0.0, 0.0])));

        // rounds to zero, not to a negative exponent
        assert_eq!(x().pow(c(-0.4), DEFAULT_MAX_EXACT_POWER), c(1.0));
        assert!(!x().pow(c(-0.6), DEFAULT_MAX_EXACT_POWER).is_polynomial());
    }

    #[test]
    fn opaque_base_keeps_fractional_power() {
        let f = RealFunction::call(Builtin::Exp, x()).pow(c(0.5), DEFAULT_MAX_EXACT_POWER);
        assert!(!f.is_polynomial());
        assert_float_absolute_eq!(f.eval(2.0), 1f64.exp(), 1e-12);

        let f = x().pow(x() / c(2.0), DEFAULT_MAX_EXACT_POWER);
        assert!(f.eval(-1.0).is_nan());
    }

    #[test]
    fn power_bound() {
        let f = x().pow(c(3.0), 2);
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(2.0), 8.0);
    }

    #[test]
    fn variable_exponent_is_opaque() {
        let f = c(2.0).pow(x(), DEFAULT_MAX_EXACT_POWER);
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(10.0), 1024.0);
    }

    #[test]
    fn negation() {
        assert_eq!(-(x() + c(1.0)), RealFunction::Polynomial(poly([-1.0, -1.0])));

        let f = -RealFunction::call(Builtin::Sqrt, x());
        assert_eq!(f.eval(16.0), -4.0);
    }

    #[test]
    fn numeric_derivative() {
        let f = RealFunction::call(Builtin::Sin, x());
        let df = f.derivative();
        assert!(!df.is_polynomial());
        assert_float_absolute_eq!(df.eval(0.0), 1.0, 1e-6);

        // derivative of a derivative keeps approximating
        let ddf = df.derivative();
        assert_float_absolute_eq!(ddf.eval(std::f64::consts::FRAC_PI_2), -1.0, 1e-4);
    }

    #[test]
    fn constant_derivative() {
        assert_eq!(c(7.0).derivative(), RealFunction::Polynomial(poly([0.0])));
    }
}
