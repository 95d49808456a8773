use tracing::debug;

use crate::{ast::Expr, config::Config, error::EvalError};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks syntax trees and computes their value.
///
/// The evaluator carries no state between calls besides its depth limit, so
/// one value can be shared freely across threads.
///
/// ## Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::Evaluator,
/// };
///
/// let expr = Expr::binary(BinaryOperator::Div,
///                         Expr::negate(Expr::number(1.0)),
///                         Expr::number(0.0));
///
/// assert_eq!(Evaluator::default().eval(&expr).unwrap(), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Evaluator {
    /// Creates an evaluator honoring the depth limit of `config`.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self { max_depth: config.tree_depth_limit() }
    }

    /// Evaluates `expr` and returns its value.
    ///
    /// # Errors
    /// Returns [`EvalError::IncorrectSyntaxTree`] if the tree is nested deeper
    /// than [`Config::tree_depth_limit`]. Trees produced by the parser under
    /// the same configuration never are.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval_node(expr, 1)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }

    /// Post-order walk; `depth` is the level of `expr`, the root being 1.
    ///
    /// A chain of binary nodes linked through their left operands is walked
    /// in a loop and stays on one level; only right operands and negated
    /// operands recurse.
    fn eval_node(&self, expr: &Expr, depth: usize) -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(EvalError::IncorrectSyntaxTree { depth });
        }

        let mut spine = Vec::new();
        let mut node = expr;
        let mut value = loop {
            match node {
                Expr::Number { value } => break *value,
                Expr::UnaryMinus { operand } => break -self.eval_node(operand, depth + 1)?,
                Expr::BinaryOp { op, left, right } => {
                    spine.push((*op, right.as_ref()));
                    node = left.as_ref();
                },
            }
        };

        for (op, right) in spine.into_iter().rev() {
            let right = self.eval_node(right, depth + 1)?;
            value = Self::eval_binary(op, value, right);
        }
        Ok(value)
    }
}
