use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression: the lowest-precedence level.
    ///
    /// The rule is: `expression := term expression'`
    ///
    /// The leading term is combined with whatever the continuation folded
    /// together. Because an empty continuation yields `0`, the result is
    /// always an `Add` node.
    ///
    /// # Returns
    /// An [`Expr::BinaryOp`] adding the first term to the rest of the sum.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let term = self.parse_term()?;
        let rest = self.parse_expression_rest()?;
        Ok(Expr::binary(BinaryOperator::Add, term, rest))
    }

    /// Parses the continuation of a sum without left recursion.
    ///
    /// The rule is:
    /// ```text
    ///     expression' := "+" term expression'
    ///                  | "-" term expression'
    ///                  | ε
    /// ```
    /// The continuation of each step becomes the LEFT operand and the term
    /// read by that step the RIGHT one, so `a - b - c` folds to
    /// `a + ((0 - c) - b)`, which is the left-to-right value `a - b - c`.
    ///
    /// The recursion is unrolled: terms are collected in order, then folded
    /// from the last one back to the first, so a long flat sum costs no stack.
    ///
    /// # Returns
    /// The folded continuation, or the neutral `0` when the lookahead is not
    /// an additive operator (nothing is consumed in that case).
    fn parse_expression_rest(&mut self) -> ParseResult<Expr> {
        let mut steps = Vec::new();
        loop {
            let op = match self.peek() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance()?;
            steps.push((op, self.parse_term()?));
        }

        Ok(steps.into_iter()
                .rev()
                .fold(Expr::number(0.0), |rest, (op, term)| Expr::binary(op, rest, term)))
    }
}
