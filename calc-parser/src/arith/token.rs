use calc_compute::op::BinOpKind;
use logos::Logos;

/// The kinds of tokens in a calculator expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[a-zA-Z]+")]
    Name,

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

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns the binary operator this token represents, if any.
    pub fn as_bin_op(self) -> Option<BinOpKind> {
        match self {
            TokenKind::Add => Some(BinOpKind::Add),
            TokenKind::Sub => Some(BinOpKind::Sub),
            TokenKind::Mul => Some(BinOpKind::Mul),
            TokenKind::Div => Some(BinOpKind::Div),
            TokenKind::Exp => Some(BinOpKind::Exp),
            _ => None,
        }
    }
}
