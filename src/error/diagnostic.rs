use std::fmt;

use crate::error::{EvalError, LexError, ParseError};

/// The stage of the pipeline that produced a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Tokenizing failed.
    Lex,
    /// The token sequence does not match the grammar.
    Parse,
    /// The syntax tree could not be evaluated.
    Eval,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => f.write_str("lex error"),
            Self::Parse => f.write_str("parse error"),
            Self::Eval => f.write_str("evaluation error"),
        }
    }
}

/// A single error surfaced to the caller instead of a result.
///
/// Any failure aborts the whole computation, so at most one diagnostic is
/// ever produced per call. `Display` yields the message alone, which is what
/// the driver prints.
///
/// ## Example
/// ```
/// use reckon::{DiagnosticKind, evaluate_expression};
///
/// let diagnostic = evaluate_expression("2 + )").unwrap_err();
///
/// assert_eq!(diagnostic.kind(), DiagnosticKind::Parse);
/// assert_eq!(diagnostic.position(), Some(4));
/// assert_eq!(diagnostic.to_string(), "Unexpected token ')' at position 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind:     DiagnosticKind,
    message:  String,
    position: Option<usize>,
}

impl Diagnostic {
    /// The stage that failed.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the offending input, if the failure is tied to one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Self { kind:     DiagnosticKind::Lex,
               message:  error.to_string(),
               position: Some(error.position()), }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(error) => error.into(),
            error => Self { kind:     DiagnosticKind::Parse,
                            message:  error.to_string(),
                            position: Some(error.position()), },
        }
    }
}

impl From<EvalError> for Diagnostic {
    fn from(error: EvalError) -> Self {
        Self { kind:     DiagnosticKind::Eval,
               message:  error.to_string(),
               position: None, }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Diagnostic {}
