/// Utility enum to package errors that can occur while handling a line of input.
#[derive(Debug)]
pub enum Error {
    /// An error in an expression. The error's spans point into `source`, the text that was
    /// actually parsed after input assembly.
    Expr {
        source: String,
        error: calc_error::Error,
    },

    /// A malformed `:` command.
    Command(String),
}

impl Error {
    /// Creates an error for a malformed command.
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Expr { source, error } => error.report_to_stderr(source),
            Self::Command(message) => eprintln!("error: {}", message),
        }
    }
}
