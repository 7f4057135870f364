//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of source code it
//! originated from.
//!
//! Errors fall into one of two [`Category`]s. Callers that need to treat undefined arithmetic
//! (such as division by zero) differently from malformed input can check
//! [`Error::category`] instead of inspecting the concrete error kind.

// lets `#[derive(ErrorKind)]` refer to this crate by name from within its own tests
extern crate self as calc_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The input was malformed and could not be parsed.
    Syntax,

    /// The input was well-formed, but evaluating it is mathematically undefined.
    Arithmetic,
}

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually implemented with `#[derive(ErrorKind)]` from the `calc-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can downcast to the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The category of this error.
    fn category(&self) -> Category;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the category of the error.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns true if the error was caused by undefined arithmetic rather than malformed input.
    pub fn is_arithmetic(&self) -> bool {
        self.category() == Category::Arithmetic
    }

    /// Returns the error kind as the concrete type `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the offending regions of `input`.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        // failing to write to stderr leaves us nowhere else to report to
        let _ = self.build_report("input").eprint(("input", Source::from(input)));
    }

    /// Renders the report for this error into a string, without colors.
    pub fn render(&self, input: &str) -> String {
        let mut buf = Vec::new();
        let _ = self.build_report("input").write(("input", Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Category::Syntax => write!(f, "syntax error")?,
            Category::Arithmetic => write!(f, "arithmetic error")?,
        }
        if let Some(span) = self.spans.first() {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        write!(f, ": {:?}", self.kind)
    }
}

impl std::error::Error for Error {}
