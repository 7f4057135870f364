//! Numeric primitives and evaluation building blocks for the calculator engines.
//!
//! - [`primitive`] contains the [`Complex`](primitive::Complex) and
//!   [`Polynomial`](primitive::Polynomial) value types.
//! - [`function`] contains [`RealFunction`](function::RealFunction), the exact-or-numeric
//!   representation of a function of `x` used for graphing.
//! - [`builtin`] contains the named functions (`sin`, `sqrt`, `ln`, ...) shared by the
//!   grammars.
//! - [`error`] contains the errors raised while evaluating well-formed input.

pub mod builtin;
pub mod error;
pub mod function;
pub mod op;
pub mod primitive;
