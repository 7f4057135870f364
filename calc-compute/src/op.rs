//! The binary operators shared by every grammar.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operator. Operators with higher precedence bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Addition and subtraction.
    Term = 2,

    /// Multiplication and division.
    Factor = 3,

    /// Exponentiation.
    Exp = 4,
}

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a op b op c` is `(a op b) op c`.
    Left,

    /// `a op b op c` is `a op (b op c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Applies the operation to the given operands with standard floating-point semantics.
    /// Division by zero yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Exp => lhs.powf(rhs),
        }
    }

    /// Applies the operation to the given operands, returning [`None`] when dividing by exactly
    /// `0.0` (either sign of zero). No epsilon is involved.
    pub fn checked_apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Div if rhs == 0.0 => None,
            _ => Some(self.apply(lhs, rhs)),
        }
    }

    /// Returns the precedence of the operator.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}
