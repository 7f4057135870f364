use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// The input was empty, or contained only whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected {}", expected)],
    help = format!("found `{}`", found),
)]
pub struct UnexpectedToken {
    /// A description of what was expected.
    pub expected: &'static str,

    /// The text of the token that was found.
    pub found: String,
}

/// A character that is not part of the grammar was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", ch),
    labels = ["this character is not allowed here"],
)]
pub struct UnexpectedCharacter {
    /// The offending character(s).
    pub ch: String,
}

/// A run of digits and decimal points is not a valid number, such as `1.2.3`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
    help = "numbers may contain at most one decimal point, and at least one digit",
)]
pub struct InvalidNumber {
    /// The text of the invalid number.
    pub lexeme: String,
}

/// A name was used that is not a known function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "see the documentation for a list of available functions".to_string()
    } else {
        format!("did you mean: {}", suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(", "))
    },
)]
pub struct UnknownFunction {
    /// The name that was used.
    pub name: String,

    /// Known function names that are similar to `name`.
    pub suggestions: Vec<&'static str>,
}

/// A function name was not immediately followed by its parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument for `{}`", name),
    labels = ["this function"],
    help = format!("write the argument in parentheses, such as `{}({})`", name, "x".fg(EXPR)),
)]
pub struct MissingArgumentList {
    /// The name of the function.
    pub name: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A brace was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed brace",
    labels = ["this brace is not closed"],
    help = if *opening {
        "add a closing brace `}` somewhere after this"
    } else {
        "add an opening brace `{` somewhere before this"
    },
)]
pub struct UnclosedBrace {
    /// Whether the brace was an opening brace `{`. Otherwise, the brace was a closing brace `}`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand for `{}`", op),
    labels = [format!("this operator needs an {} on both sides", "expression".fg(EXPR))],
)]
pub struct MissingOperand {
    /// The symbol of the operator.
    pub op: char,
}

/// Two expressions were written next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["this expression", "is not connected to this one"],
    help = "add an operator such as `*` between them",
)]
pub struct MissingOperator;

/// A `+` or `-` was used as a sign. The calculator grammar only has binary operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as a sign here", sign),
    labels = ["this operator has nothing on its left"],
    help = format!("subtract from zero instead, such as `{}`", "0 - x".fg(EXPR)),
)]
pub struct UnsupportedUnarySign {
    /// The sign that was used.
    pub sign: char,
}
