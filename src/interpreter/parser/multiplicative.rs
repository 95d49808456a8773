use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a product: one factor followed by its continuation.
    ///
    /// The rule is: `term := factor term'`
    ///
    /// # Returns
    /// An [`Expr::BinaryOp`] multiplying the factor by the folded
    /// continuation (`1` when there is none).
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let factor = self.parse_factor()?;
        let rest = self.parse_term_rest()?;
        Ok(Expr::binary(BinaryOperator::Mul, factor, rest))
    }

    /// Parses the continuation of a product.
    ///
    /// The rule is:
    /// ```text
    ///     term' := "*" factor term'
    ///            | "/" factor term'
    ///            | ε
    /// ```
    /// As with sums, each step's continuation is the LEFT operand:
    /// `a / b / c` folds to `a * ((1 / c) / b)`.
    fn parse_term_rest(&mut self) -> ParseResult<Expr> {
        let mut steps = Vec::new();
        loop {
            let op = match self.peek() {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::Div => BinaryOperator::Div,
                _ => break,
            };
            self.advance()?;
            steps.push((op, self.parse_factor()?));
        }

        Ok(steps.into_iter()
                .rev()
                .fold(Expr::number(1.0), |rest, (op, factor)| Expr::binary(op, rest, factor)))
    }
}
