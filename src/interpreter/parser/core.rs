use tracing::debug;

use crate::{
    ast::Expr,
    config::{Config, TrailingInput},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a single source string.
///
/// The parser owns its lexer and the current lookahead token; one value is
/// created per parse, so independent inputs can be parsed concurrently on
/// different threads. Each grammar production is a method (see the sibling
/// `additive`, `multiplicative` and `factor` modules) and every failure is
/// propagated with `?` straight back to [`Parser::parse`].
pub struct Parser<'src> {
    lexer:     Lexer<'src>,
    lookahead: Token,
    config:    Config,
    depth:     usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and primes the lookahead token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token cannot be read.
    pub fn new(source: &'src str, config: Config) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.advance()?;
        Ok(Self { lexer,
                  lookahead,
                  config,
                  depth: 0 })
    }

    /// Parses one complete expression.
    ///
    /// This is the entry point of the grammar: `parse := expression`. What
    /// follows the expression is ignored or rejected according to
    /// [`Config::trailing_input`].
    ///
    /// # Errors
    /// Returns the first lexing or parsing error encountered.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if self.config.trailing_input == TrailingInput::Reject
           && self.lookahead.kind != TokenKind::EndOfText
        {
            return Err(ParseError::TrailingInput { found:    self.lookahead_text().to_string(),
                                                   position: self.lookahead.position(), });
        }

        debug!(depth = expr.depth(), nodes = expr.node_count(), "parsed expression");
        Ok(expr)
    }

    /// The kind of the current lookahead token.
    pub(in crate::interpreter::parser) const fn peek(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Byte offset of the current lookahead token.
    pub(in crate::interpreter::parser) const fn position(&self) -> usize {
        self.lookahead.position()
    }

    /// Replaces the lookahead with the next token from the lexer.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<()> {
        self.lookahead = self.lexer.advance()?;
        Ok(())
    }

    /// Requires the lookahead token to be the one written as `expected`, then
    /// moves past it.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedToken`] pointing at the token found
    /// instead.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: char) -> ParseResult<()> {
        if self.lookahead.kind.symbol() != Some(expected) {
            return Err(ParseError::ExpectedToken { expected,
                                                   position: self.position() });
        }
        self.advance()
    }

    /// Runs `production` one factor level deeper, failing once the configured
    /// depth limit would be exceeded.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    production: impl FnOnce(&mut Self)
                                                                            -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.config.max_depth,
                                                    position: self.position(), });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// The source text of the lookahead token.
    fn lookahead_text(&self) -> &'src str {
        &self.lexer.source()[self.lookahead.span.clone()]
    }
}
