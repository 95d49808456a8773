//! # reckon
//!
//! reckon is a recursive-descent parser and evaluator for arithmetic
//! expressions over real numbers. It supports `+`, `-`, `*`, `/`, unary
//! negation and parentheses, with multiplication and division binding tighter
//! than addition and subtraction, and all four operators associating left to
//! right.
//!
//! ```
//! use reckon::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap(), 20.0);
//! assert_eq!(evaluate_expression("10 - 2 - 3").unwrap(), 5.0);
//! assert_eq!(evaluate_expression("1 / 0").unwrap(), f64::INFINITY);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::Evaluator, parser::Parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator; its `Display` impl prints a canonical, fully
/// parenthesized form.
pub mod ast;
/// Settings shared by the parser and the evaluator.
///
/// Controls what happens to input after a complete expression and how deep
/// expressions may nest.
pub mod config;
/// Provides error types for every stage of the pipeline.
///
/// Lexing, parsing and evaluation each have their own error enum; the public
/// entry points convert them into a single [`Diagnostic`] carrying the failed
/// stage, the message and the offending position.
pub mod error;
/// Lexer, parser and evaluator.
///
/// This module ties the three stages together. Most callers only need the
/// functions at the crate root; the stages are public for callers that want
/// to inspect tokens or trees directly.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Expr},
    config::{Config, TrailingInput},
    error::{Diagnostic, DiagnosticKind},
};

/// Parses `text` into a syntax tree using the default [`Config`].
///
/// Anything after the first complete expression is ignored, so `"5 5"`
/// parses as `5`.
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// // Neutral elements show up in the tree: `0` for sums, `1` for products.
/// let expr = parse("-3 + 5").unwrap();
/// assert_eq!(expr.to_string(), "(((-3) * 1) + (0 + (5 * 1)))");
///
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(text: &str) -> Result<Expr, Diagnostic> {
    parse_with(text, &Config::default())
}

/// Parses `text` into a syntax tree using `config`.
pub fn parse_with(text: &str, config: &Config) -> Result<Expr, Diagnostic> {
    debug!(text, "parsing");
    let expr = Parser::new(text, *config)?.parse()?;
    Ok(expr)
}

/// Evaluates a syntax tree using the default [`Config`].
///
/// Division by zero is not an error: it yields an infinity or NaN.
///
/// # Examples
/// ```
/// use reckon::{BinaryOperator, Expr, evaluate};
///
/// let expr = Expr::binary(BinaryOperator::Mul, Expr::number(6.0), Expr::number(7.0));
/// assert_eq!(evaluate(&expr).unwrap(), 42.0);
/// ```
pub fn evaluate(ast: &Expr) -> Result<f64, Diagnostic> {
    evaluate_with(ast, &Config::default())
}

/// Evaluates a syntax tree using `config`.
pub fn evaluate_with(ast: &Expr, config: &Config) -> Result<f64, Diagnostic> {
    let value = Evaluator::new(config).eval(ast)?;
    Ok(value)
}

/// Parses and evaluates `text` using the default [`Config`].
///
/// # Examples
/// ```
/// use reckon::{DiagnosticKind, evaluate_expression};
///
/// assert_eq!(evaluate_expression("-3 + 5").unwrap(), 2.0);
///
/// let error = evaluate_expression("2 $ 3").unwrap_err();
/// assert_eq!(error.kind(), DiagnosticKind::Lex);
/// assert_eq!(error.to_string(), "Unexpected token '$' at position 2");
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, Diagnostic> {
    evaluate_expression_with(text, &Config::default())
}

/// Parses and evaluates `text` using `config`.
pub fn evaluate_expression_with(text: &str, config: &Config) -> Result<f64, Diagnostic> {
    let expr = parse_with(text, config)?;
    evaluate_with(&expr, config)
}
