use crate::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Plain IEEE-754 double arithmetic: dividing a non-zero value by zero
    /// yields a signed infinity and `0 / 0` yields NaN.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 10.0, 4.0), 6.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub const fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}
