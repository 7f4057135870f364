use std::ops::Range;

/// A token produced by one of the lexers, with its kind, the region of the original input it was
/// parsed from, and its text in the preprocessed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source, K> {
    /// The kind of token.
    pub kind: K,

    /// The region of the original input that this token was parsed from.
    pub span: Range<usize>,

    /// The text of the token.
    pub lexeme: &'source str,
}
