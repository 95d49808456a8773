/// The evaluator module reduces a syntax tree to a number.
///
/// The evaluator walks the AST in post-order and applies IEEE-754 double
/// arithmetic at each operator node. Division by zero is not an error; it
/// produces an infinity or NaN like any other floating-point operation.
///
/// # Responsibilities
/// - Evaluates every node kind produced by the parser.
/// - Rejects trees nested deeper than the configured limit.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw text and produces numbers, the four operators and
/// parentheses, one token per request, skipping whitespace in between.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte spans.
/// - Scans numeric literals into `f64` values.
/// - Reports characters that cannot start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one method per grammar
/// production. Precedence and left-to-right associativity are encoded in the
/// grammar itself, which avoids left recursion by folding operands through
/// continuation rules.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) trees.
/// - Validates the grammar, reporting errors with byte positions.
/// - Bounds the nesting of groups and negations so hostile input cannot
///   exhaust the stack; operator chains are read in loops.
pub mod parser;
