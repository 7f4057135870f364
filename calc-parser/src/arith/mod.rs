//! The calculator grammar: real arithmetic with `+ - * / ^`, parentheses, and calls to built-in
//! functions.
//!
//! Expressions are parsed with the shunting-yard algorithm into an [`Expr`] tree, which is then
//! evaluated with [`Expr::eval`]. `^` binds tightest and is right-associative, so `2^3^2` is
//! `2^(3^2)`. There is no unary sign; a `+` or `-` where an operand is expected is reported as
//! [`UnsupportedUnarySign`].

pub mod expr;
pub mod token;

use calc_compute::{builtin::Builtin, op::{Associativity, BinOpKind}};
use calc_error::{Error, ErrorKind};
use crate::{
    error::kind::{
        EmptyExpression,
        EmptyParenthesis,
        InvalidNumber,
        MissingArgumentList,
        MissingOperand,
        MissingOperator,
        UnclosedParenthesis,
        UnexpectedCharacter,
        UnexpectedEof,
        UnknownFunction,
        UnsupportedUnarySign,
    },
    source::Source,
};
pub use expr::{BinOp, Binary, Call, Expr, Literal};
use log::debug;
use std::ops::Range;
use token::TokenKind;

type Token<'source> = crate::token::Token<'source, TokenKind>;

/// Parses a calculator expression.
///
/// Whitespace is ignored anywhere in the input, including inside numbers and function names.
/// The spans of the returned expression and of any error point into `input`.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let source = Source::strip(input);
    if source.is_empty() {
        return Err(Error::new(vec![source.eof_span()], EmptyExpression));
    }

    debug!("parsing calculator expression `{}`", source.text());
    let tokens = source.tokenize(TokenKind::Symbol);
    parse_tokens(&tokens, source.eof_span())
}

/// An item on the operator stack.
#[derive(Debug)]
enum StackItem {
    /// A binary operator waiting for its right-hand side.
    Op(BinOp),

    /// An opening parenthesis, with its span.
    OpenParen(Range<usize>),
}

/// The state of the shunting-yard algorithm over one run of tokens.
#[derive(Debug, Default)]
struct ShuntingYard {
    ops: Vec<StackItem>,
    operands: Vec<Expr>,
}

impl ShuntingYard {
    /// Pops the two topmost operands and combines them with the given operator.
    fn apply(&mut self, op: BinOp) -> Result<(), Error> {
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(Error::new(vec![op.span], MissingOperand { op: op.kind.symbol() }));
        };

        let span = lhs.span().start..rhs.span().end;
        self.operands.push(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }));
        Ok(())
    }

    /// Applies stacked operators that bind at least as tightly as the incoming operator, then
    /// pushes the incoming operator.
    fn push_op(&mut self, op: BinOp) -> Result<(), Error> {
        let incoming = op.kind.precedence();
        let right_assoc = op.kind.associativity() == Associativity::Right;

        while let Some(StackItem::Op(top)) = self.ops.last() {
            let top = top.kind.precedence();
            if top > incoming || (top == incoming && !right_assoc) {
                if let Some(StackItem::Op(top)) = self.ops.pop() {
                    self.apply(top)?;
                }
            } else {
                break;
            }
        }

        self.ops.push(StackItem::Op(op));
        Ok(())
    }

    /// Applies every operator down to the most recent opening parenthesis, and removes it.
    /// Returns false if there was no opening parenthesis on the stack.
    fn close_paren(&mut self) -> Result<bool, Error> {
        while let Some(item) = self.ops.pop() {
            match item {
                StackItem::Op(op) => self.apply(op)?,
                StackItem::OpenParen(_) => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Applies every remaining operator and returns the single resulting expression.
    fn finish(mut self, end: Range<usize>) -> Result<Expr, Error> {
        while let Some(item) = self.ops.pop() {
            match item {
                StackItem::Op(op) => self.apply(op)?,
                StackItem::OpenParen(span) => {
                    return Err(Error::new(vec![span], UnclosedParenthesis { opening: true }));
                },
            }
        }

        self.operands.pop().ok_or_else(|| Error::new(vec![end], UnexpectedEof))
    }
}

/// Creates an error pointing at the given token.
fn at(token: &Token, kind: impl ErrorKind + 'static) -> Error {
    Error::new(vec![token.span.clone()], kind)
}

/// Creates an error for an operator token that is missing its right-hand side.
fn missing_operand(token: &Token) -> Error {
    let op = token.kind.as_bin_op().map_or('?', BinOpKind::symbol);
    at(token, MissingOperand { op })
}

/// Creates an error for an operand that directly follows another operand.
fn missing_operator(prev: Option<&Expr>, span: Range<usize>) -> Error {
    match prev {
        Some(prev) => Error::new(vec![prev.span(), span], MissingOperator),
        None => Error::new(vec![span], MissingOperator),
    }
}

/// Finds the index of the `)` matching the `(` at index `open`, by counting nesting depth.
fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            },
            _ => (),
        }
    }
    None
}

/// Parses the number in the given token.
fn parse_number(token: &Token) -> Result<f64, Error> {
    token.lexeme
        .parse()
        .map_err(|_| Error::new(vec![token.span.clone()], InvalidNumber {
            lexeme: token.lexeme.to_string(),
        }))
}

/// Runs the shunting-yard algorithm over a non-empty run of tokens. `end` is the span to report
/// when the run ends too early.
fn parse_tokens(tokens: &[Token], end: Range<usize>) -> Result<Expr, Error> {
    let mut state = ShuntingYard::default();
    let mut expect_operand = true;
    let mut idx = 0;

    while let Some(token) = tokens.get(idx) {
        match token.kind {
            TokenKind::Number => {
                if !expect_operand {
                    return Err(missing_operator(state.operands.last(), token.span.clone()));
                }

                let value = parse_number(token)?;
                state.operands.push(Expr::Literal(Literal { value, span: token.span.clone() }));
                expect_operand = false;
            },
            TokenKind::Name => {
                if !expect_operand {
                    return Err(missing_operator(state.operands.last(), token.span.clone()));
                }

                let (call, next) = parse_call(tokens, idx)?;
                state.operands.push(Expr::Call(call));
                expect_operand = false;
                idx = next;
                continue;
            },
            TokenKind::OpenParen => {
                if !expect_operand {
                    return Err(missing_operator(state.operands.last(), token.span.clone()));
                }

                state.ops.push(StackItem::OpenParen(token.span.clone()));
            },
            TokenKind::CloseParen => {
                if expect_operand {
                    return Err(match idx.checked_sub(1).map(|prev| &tokens[prev]) {
                        Some(prev) if prev.kind == TokenKind::OpenParen => Error::new(
                            vec![prev.span.start..token.span.end],
                            EmptyParenthesis,
                        ),
                        Some(prev) => missing_operand(prev),
                        None => at(token, UnclosedParenthesis { opening: false }),
                    });
                }

                if !state.close_paren()? {
                    return Err(at(token, UnclosedParenthesis { opening: false }));
                }
            },
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Exp
                | TokenKind::Symbol => {
                let Some(kind) = token.kind.as_bin_op() else {
                    return Err(at(token, UnexpectedCharacter { ch: token.lexeme.to_string() }));
                };

                if expect_operand {
                    return Err(match kind {
                        BinOpKind::Add | BinOpKind::Sub => {
                            at(token, UnsupportedUnarySign { sign: kind.symbol() })
                        },
                        _ => at(token, MissingOperand { op: kind.symbol() }),
                    });
                }

                state.push_op(BinOp { kind, span: token.span.clone() })?;
                expect_operand = true;
            },
        }

        idx += 1;
    }

    if expect_operand {
        return Err(match tokens.last() {
            Some(last) if last.kind == TokenKind::OpenParen => {
                at(last, UnclosedParenthesis { opening: true })
            },
            Some(last) => missing_operand(last),
            None => Error::new(vec![end], UnexpectedEof),
        });
    }

    state.finish(end)
}

/// Parses a function call whose name is at index `idx`. Returns the call and the index of the
/// token after its closing parenthesis.
fn parse_call(tokens: &[Token], idx: usize) -> Result<(Call, usize), Error> {
    let name = &tokens[idx];
    let Some(func) = Builtin::from_name(name.lexeme) else {
        return Err(Error::new(vec![name.span.clone()], UnknownFunction {
            name: name.lexeme.to_string(),
            suggestions: Builtin::similar_names(name.lexeme),
        }));
    };

    let open = idx + 1;
    match tokens.get(open) {
        Some(token) if token.kind == TokenKind::OpenParen => (),
        _ => return Err(Error::new(vec![name.span.clone()], MissingArgumentList {
            name: name.lexeme.to_string(),
        })),
    }

    let Some(close) = matching_paren(tokens, open) else {
        return Err(Error::new(
            vec![tokens[open].span.clone()],
            UnclosedParenthesis { opening: true },
        ));
    };

    let inner = &tokens[open + 1..close];
    let close_span = tokens[close].span.clone();
    if inner.is_empty() {
        return Err(Error::new(
            vec![tokens[open].span.start..close_span.end],
            EmptyParenthesis,
        ));
    }

    let arg = parse_tokens(inner, close_span.start..close_span.start)?;
    Ok((
        Call {
            func,
            arg: Box::new(arg),
            span: name.span.start..close_span.end,
        },
        close + 1,
    ))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval(input: &str) -> f64 {
        parse(input).unwrap().eval().unwrap()
    }

    fn parse_err(input: &str) -> Error {
        parse(input).unwrap_err()
    }

    #[test]
    fn precedence() {
        assert_eq!(eval("3+4*(2-1)"), 7.0);
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("2*3^2"), 18.0);
    }

    #[test]
    fn left_associative() {
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("8/4/2"), 1.0);
    }

    #[test]
    fn right_associative_power() {
        assert_eq!(eval("2^3^2"), 512.0);
        assert_eq!(eval("2^2^3"), 256.0);
        assert_eq!(parse("2^3^2").unwrap().to_string(), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(eval(" 1 2 + 3 "), 15.0);
        assert_eq!(eval("s q r t ( 9 )"), 3.0);
    }

    #[test]
    fn decimals() {
        assert_eq!(eval("1.5*2"), 3.0);
        assert_eq!(eval(".5+1."), 1.5);
    }

    #[test]
    fn functions() {
        assert_eq!(eval("sqrt(4)"), 2.0);
        assert_float_absolute_eq!(eval("sin(0)"), 0.0, 1e-9);
        assert_float_absolute_eq!(eval("lg(100)"), 2.0, 1e-12);
        assert_float_absolute_eq!(eval("log(1000)"), 3.0, 1e-12);
        assert_float_absolute_eq!(eval("ln(exp(2))"), 2.0, 1e-12);
        assert_eq!(eval("2*sqrt(sqrt(16))+1"), 5.0);
        assert_eq!(eval("sqrt(3*3)^2"), 9.0);
    }

    #[test]
    fn domain_errors_are_nan() {
        assert!(eval("sqrt(0-1)").is_nan());
    }

    #[test]
    fn call_span() {
        let expr = parse("1 + sqrt( 4 )").unwrap();
        let Expr::Binary(binary) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(binary.rhs.span(), 4..13);
        assert_eq!(binary.span, 0..13);
    }

    #[test]
    fn division_by_zero() {
        let expr = parse("5/0").unwrap();
        let err = expr.eval().unwrap_err();
        assert!(err.is_arithmetic());
        assert_eq!(err.spans, vec![1..2, 2..3]);

        let err = parse("5 / (2 - 2)").unwrap().eval().unwrap_err();
        assert!(err.is_arithmetic());
        assert_eq!(err.spans, vec![2..3, 5..10]);
    }

    #[test]
    fn empty() {
        let err = parse_err("   ");
        assert!(err.downcast_ref::<EmptyExpression>().is_some());
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn unknown_character() {
        let err = parse_err("1 + #");
        assert!(!err.is_arithmetic());
        assert_eq!(
            err.downcast_ref::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { ch: "#".to_string() }),
        );
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn invalid_number() {
        let err = parse_err("1.2.3+1");
        assert!(err.downcast_ref::<InvalidNumber>().is_some());
        assert_eq!(err.spans, vec![0..5]);
    }

    #[test]
    fn unknown_function() {
        let err = parse_err("sine(1)");
        assert_eq!(
            err.downcast_ref::<UnknownFunction>(),
            Some(&UnknownFunction { name: "sine".to_string(), suggestions: vec!["sin"] }),
        );
    }

    #[test]
    fn missing_argument_list() {
        let err = parse_err("sqrt 4");
        assert!(err.downcast_ref::<MissingArgumentList>().is_some());
        assert_eq!(err.spans, vec![0..4]);
    }

    #[test]
    fn unbalanced_parentheses() {
        let err = parse_err("(1+2");
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![0..1]);

        let err = parse_err("1+2)");
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.spans, vec![3..4]);

        let err = parse_err("sqrt(4");
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn empty_parentheses() {
        assert!(parse_err("()").downcast_ref::<EmptyParenthesis>().is_some());
        assert!(parse_err("sqrt()").downcast_ref::<EmptyParenthesis>().is_some());
    }

    #[test]
    fn unary_sign() {
        let err = parse_err("-3");
        assert_eq!(
            err.downcast_ref::<UnsupportedUnarySign>(),
            Some(&UnsupportedUnarySign { sign: '-' }),
        );

        let err = parse_err("2*-3");
        assert_eq!(err.spans, vec![2..3]);

        assert!(parse_err("(+1)").downcast_ref::<UnsupportedUnarySign>().is_some());
        assert_eq!(eval("0-3"), -3.0);
    }

    #[test]
    fn missing_operands() {
        let err = parse_err("2**3");
        assert_eq!(err.downcast_ref::<MissingOperand>(), Some(&MissingOperand { op: '*' }));
        assert_eq!(err.spans, vec![2..3]);

        let err = parse_err("3+");
        assert_eq!(err.downcast_ref::<MissingOperand>(), Some(&MissingOperand { op: '+' }));

        let err = parse_err("(3*)");
        assert_eq!(err.downcast_ref::<MissingOperand>(), Some(&MissingOperand { op: '*' }));
    }

    #[test]
    fn missing_operator() {
        let err = parse_err("(1)(2)");
        assert!(err.downcast_ref::<MissingOperator>().is_some());

        let err = parse_err("2sqrt(4)");
        assert!(err.downcast_ref::<MissingOperator>().is_some());
        assert_eq!(err.spans, vec![0..1, 1..5]);
    }

    #[test]
    fn reparse_is_independent() {
        let a = parse("1+2*3").unwrap();
        let b = parse("1+2*3").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.eval().unwrap(), 7.0);
    }
}
