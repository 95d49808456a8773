use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: the highest-precedence level.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | "-" factor
    ///             | number
    /// ```
    /// Negation is right-associative, so `--x` parses as `-(-x)`.
    ///
    /// Factors are the only productions that nest, so they alone count
    /// against [`Config::max_depth`](crate::Config::max_depth). Operator
    /// chains are read in a loop and cost nothing however long they get.
    ///
    /// # Errors
    /// - [`ParseError::ExpectedToken`] if a group is not closed by `)`.
    /// - [`ParseError::UnexpectedToken`] for any other operator or a `)`.
    /// - [`ParseError::UnexpectedEndOfText`] if the text ends here.
    /// - [`ParseError::NestingTooDeep`] past the configured depth limit.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| match parser.peek() {
                        TokenKind::OpenParen => {
                            parser.advance()?;
                            let expr = parser.parse_expression()?;
                            parser.expect(')')?;
                            Ok(expr)
                        },
                        TokenKind::Minus => {
                            parser.advance()?;
                            let operand = parser.parse_factor()?;
                            Ok(Expr::negate(operand))
                        },
                        TokenKind::Number(value) => {
                            parser.advance()?;
                            Ok(Expr::number(value))
                        },
                        TokenKind::EndOfText => {
                            Err(ParseError::UnexpectedEndOfText { position: parser.position() })
                        },
                        kind => {
                            Err(ParseError::UnexpectedToken { symbol:   kind.symbol().unwrap_or('?'),
                                                              position: parser.position(), })
                        },
                    })
    }
}
