//! Errors that can occur while evaluating well-formed input.

use calc_attrs::ErrorKind;
use calc_error::Category;

/// A division by exactly zero was attempted.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division", "this expression evaluates to zero"],
    help = "the divisor must not be exactly zero",
    category = Category::Arithmetic,
)]
pub struct DivisionByZero;
