use std::{fmt, ops::Range};

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The kinds of token the expression language is made of.
///
/// Whitespace (as classified by C's `isspace`) separates tokens and is
/// skipped. A number is a run of digits, optionally followed by a `.` and a
/// second run of digits; there is no sign and no exponent, so `-2` is a minus
/// token followed by a number.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Numeric literal tokens, such as `42`, `3.25` or `7.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// No input left. Never produced by the generated lexer itself; the
    /// [`Lexer`] wrapper synthesizes it once the source is exhausted.
    EndOfText,
}

impl TokenKind {
    /// The character an operator or parenthesis is written with.
    ///
    /// Numbers and the end of text have no symbol.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Mul => Some('*'),
            Self::Div => Some('/'),
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            Self::Number(_) | Self::EndOfText => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (_, Some(symbol)) => write!(f, "{symbol}"),
            (Self::Number(value), None) => write!(f, "{value}"),
            _ => f.write_str("end of text"),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was read.
    pub kind: TokenKind,
    /// Where it was read; empty and at the end of the source for
    /// [`TokenKind::EndOfText`].
    pub span: Range<usize>,
}

impl Token {
    /// Byte offset of the first character of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }
}

/// Produces tokens one at a time from a source string.
///
/// The lexer is pulled by the parser whenever it needs a new lookahead token,
/// so nothing past the point of a parse error is ever scanned.
///
/// ## Example
/// ```
/// use reckon::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("2 * (3.5)");
/// let mut kinds = Vec::new();
/// loop {
///     let token = lexer.advance().unwrap();
///     if token.kind == TokenKind::EndOfText {
///         break;
///     }
///     kinds.push(token.kind);
/// }
///
/// assert_eq!(kinds,
///            [TokenKind::Number(2.0),
///             TokenKind::Mul,
///             TokenKind::OpenParen,
///             TokenKind::Number(3.5),
///             TokenKind::CloseParen]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// The text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Skips whitespace and reads the next token.
    ///
    /// Once the source is exhausted every call returns
    /// [`TokenKind::EndOfText`].
    ///
    /// # Errors
    /// - [`LexError::UnexpectedCharacter`] if the next character does not
    ///   start a token.
    /// - [`LexError::NumberExpected`] if a numeric literal cannot be converted
    ///   to an `f64`.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        let Some(result) = self.inner.next() else {
            let end = self.source().len();
            return Ok(Token { kind: TokenKind::EndOfText,
                              span: end..end, });
        };

        let span = self.inner.span();
        match result {
            Ok(kind) => {
                trace!(?kind, start = span.start, "token");
                Ok(Token { kind, span })
            },
            Err(()) => Err(self.error_at(span.start)),
        }
    }

    /// Classifies a failed match starting at `position`.
    ///
    /// A failure on a digit can only come from the number callback rejecting
    /// the scanned literal; anything else is a stray character.
    fn error_at(&self, position: usize) -> LexError {
        match self.source()[position..].chars().next() {
            Some(character) if character.is_ascii_digit() => LexError::NumberExpected { position },
            Some(character) => LexError::UnexpectedCharacter { character, position },
            None => LexError::NumberExpected { position },
        }
    }
}

/// Converts the slice of a numeric literal into its value.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which turns the match into a
///   lexing error.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}
