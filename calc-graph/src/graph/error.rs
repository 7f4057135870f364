use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A viewport range was empty, inverted, or not finite.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid {}-range `{}` to `{}`", axis, min, max),
    labels = ["this range"],
    help = format!("the range must satisfy {}, with both bounds finite", "min < max".fg(EXPR)),
)]
pub struct InvalidRange {
    /// The axis the range was given for, `x` or `y`.
    pub axis: char,

    /// The lower bound that was given.
    pub min: f64,

    /// The upper bound that was given.
    pub max: f64,
}
