//! Parsers for the three calculator grammars.
//!
//! - [`arith`] parses real arithmetic into an [`Expr`](arith::Expr) tree that can be evaluated.
//! - [`complex`] parses and immediately evaluates complex-number arithmetic.
//! - [`function`] compiles functions of `x` into [`RealFunction`]s for graphing.
//!
//! Every grammar ignores whitespace, and every error carries spans into the text that was passed
//! in, so it can be reported with [`Error::report_to_stderr`].
//!
//! ```
//! let value = calc_parser::arith::parse("3 + 4 * (2 - 1)").unwrap().eval().unwrap();
//! assert_eq!(value, 7.0);
//!
//! let z = calc_parser::complex::parse("conj(3 + 4i)").unwrap();
//! assert_eq!(z.to_string(), "3.000 - 4.000i");
//!
//! let f = calc_parser::function::parse("x^2 + 3x + 2").unwrap();
//! assert_eq!(f.derivative().eval(1.0), 5.0);
//! ```
//!
//! [`RealFunction`]: calc_compute::function::RealFunction

pub mod arith;
pub mod complex;
pub mod cursor;
pub mod error;
pub mod function;
pub mod source;
pub mod token;

pub use error::Error;
