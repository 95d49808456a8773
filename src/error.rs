/// Lexing errors.
///
/// Defines the errors the lexer raises while turning raw text into tokens:
/// characters outside the expression alphabet and numeric literals that
/// cannot be converted to a floating-point value.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the parser descends through
/// the grammar, including unexpected tokens, a missing closing parenthesis,
/// trailing input and runaway nesting. Lexing errors that surface while the
/// parser pulls a token are wrapped here as well.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while walking a syntax tree.
/// Arithmetic itself never fails (division by zero yields an IEEE-754
/// infinity or NaN), so these only cover structurally invalid trees.
pub mod eval_error;
/// The caller-facing error type.
///
/// Every stage error is converted into a [`Diagnostic`] at the public entry
/// points, carrying the stage that failed, the formatted message and the
/// offending position.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
