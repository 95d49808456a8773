/// Parser state and the top-level entry point.
///
/// Holds the [`Parser`](core::Parser) value that owns the lexer and the
/// lookahead token, along with the shared helpers every production uses:
/// advancing, matching a required token and bounding recursion depth.
pub mod core;

/// Additive level: `expression` and its continuation `expression'`.
pub mod additive;

/// Multiplicative level: `term` and its continuation `term'`.
pub mod multiplicative;

/// Factors: groups, negation and numeric literals.
pub mod factor;

pub use self::core::{ParseResult, Parser};
