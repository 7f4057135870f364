use logos::Logos;

/// The kinds of tokens in a complex expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9.]+")]
    Number,

    #[token("i")]
    I,

    #[token("conj")]
    Conj,

    #[token("abs")]
    Abs,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r".", priority = 0)]
    Symbol,
}
