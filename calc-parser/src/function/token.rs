use calc_compute::builtin::Builtin;
use logos::Logos;

/// The kinds of tokens in a function of `x`.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[xX]")]
    X,

    #[token("e")]
    E,

    #[regex(r"sqrt|ln|lg|log|sin|cos|tan|arcsin|arccos|arctan|exp", |lex| Builtin::from_name(lex.slice()))]
    Func(Builtin),

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if a primary expression can start with this token. Such a token directly
    /// after a complete factor multiplies it.
    pub fn starts_primary(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::X
                | TokenKind::E
                | TokenKind::Func(_)
                | TokenKind::OpenParen
                | TokenKind::OpenBrace
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        let mut lexer = TokenKind::lexer(input);
        let mut tokens = Vec::new();
        while let Some(Ok(kind)) = lexer.next() {
            tokens.push((kind, lexer.slice()));
        }
        tokens
    }

    #[test]
    fn constant_and_exp() {
        assert_eq!(lex("xe+exp(x)"), vec![
            (TokenKind::X, "x"),
            (TokenKind::E, "e"),
            (TokenKind::Add, "+"),
            (TokenKind::Func(Builtin::Exp), "exp"),
            (TokenKind::OpenParen, "("),
            (TokenKind::X, "x"),
            (TokenKind::CloseParen, ")"),
        ]);
    }

    #[test]
    fn longest_function_name() {
        assert_eq!(lex("log"), vec![(TokenKind::Func(Builtin::Log10), "log")]);
        assert_eq!(lex("arcsin"), vec![(TokenKind::Func(Builtin::Asin), "arcsin")]);
        assert_eq!(lex("sinx"), vec![(TokenKind::Func(Builtin::Sin), "sin"), (TokenKind::X, "x")]);
    }
}
