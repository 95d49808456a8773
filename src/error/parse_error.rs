use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lex(LexError),
    /// Found an operator or parenthesis where a factor was required.
    UnexpectedToken {
        /// The symbol of the token encountered.
        symbol:   char,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of the text where a factor was required.
    UnexpectedEndOfText {
        /// Byte offset of the end of the text.
        position: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// The symbol that was required.
        expected: char,
        /// Byte offset of the token actually found.
        position: usize,
    },
    /// Tokens remained after a complete expression and trailing input is
    /// rejected.
    TrailingInput {
        /// The first leftover token, as written in the source.
        found:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    NestingTooDeep {
        /// The configured depth limit.
        limit:    usize,
        /// Byte offset of the lookahead token when the limit was hit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(error) => error.position(),
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfText { position }
            | Self::ExpectedToken { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),

            Self::UnexpectedToken { symbol, position } => {
                write!(f, "Unexpected token '{symbol}' at position {position}")
            },

            Self::UnexpectedEndOfText { position } => {
                write!(f, "Unexpected end of text at position {position}")
            },

            Self::ExpectedToken { expected, position } => {
                write!(f, "Expected token '{expected}' at position {position}")
            },

            Self::TrailingInput { found, position } => {
                write!(f, "Unexpected trailing input '{found}' at position {position}")
            },

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Expression nested deeper than {limit} levels at position {position}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            _ => None,
        }
    }
}
