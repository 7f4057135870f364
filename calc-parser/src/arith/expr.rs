use calc_compute::{builtin::Builtin, error::DivisionByZero, op::BinOpKind};
use calc_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal, such as `3.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A binary operator, along with the region of source code it was parsed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

/// A binary expression, such as `1 + 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

/// A call to a built-in function, such as `sqrt(4)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: Builtin,

    /// The argument of the call.
    pub arg: Box<Expr>,

    /// The region of the source code that this call was parsed from, including the parentheses.
    pub span: Range<usize>,
}

/// A calculator expression.
///
/// Each node exclusively owns its children. Once built, an expression is never modified;
/// parsing the same text again produces a new, independent tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Literal(Literal),
    Binary(Binary),
    Call(Call),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
            Expr::Call(call) => call.span.clone(),
        }
    }

    /// Evaluates the expression by walking the tree.
    ///
    /// Dividing by exactly `0.0` is an error; every other operation follows floating-point
    /// semantics, so `sqrt(0-1)` evaluates to NaN rather than failing.
    pub fn eval(&self) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => Ok(literal.value),
            Expr::Binary(binary) => {
                let lhs = binary.lhs.eval()?;
                let rhs = binary.rhs.eval()?;
                binary.op.kind
                    .checked_apply(lhs, rhs)
                    .ok_or_else(|| Error::new(
                        vec![binary.op.span.clone(), binary.rhs.span()],
                        DivisionByZero,
                    ))
            },
            Expr::Call(call) => Ok(call.func.eval(call.arg.eval()?)),
        }
    }
}

/// Writes the expression with every binary operation wrapped in parentheses, making the
/// structure of the tree visible: `2^3^2` is written as `(2 ^ (3 ^ 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.lhs, binary.op.kind.symbol(), binary.rhs)
            },
            Expr::Call(call) => write!(f, "{}({})", call.func.name(), call.arg),
        }
    }
}
