/// Default limit on nested factors (groups and negations).
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What the parser does with tokens left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop at the end of the first complete expression; `5 5` parses as `5`.
    #[default]
    Ignore,
    /// Fail with [`ParseError::TrailingInput`](crate::error::ParseError)
    /// unless the expression spans the whole text.
    Reject,
}

/// Settings shared by the parser and the evaluator.
///
/// The defaults reproduce the reference behavior. `max_depth` bounds how
/// deeply factors may nest: every group and every negation, down to the number
/// itself, is one level. Operator chains do not count, so `1 + 1 + ... + 1`
/// is accepted at any length while `((((1))))` needs five levels. The
/// evaluator derives its own tree limit from the same value (see
/// [`Config::tree_depth_limit`]), so deeply nested input produces a diagnostic
/// instead of exhausting the stack.
///
/// ## Example
/// ```
/// use reckon::{Config, TrailingInput, evaluate_expression_with};
///
/// let strict = Config::default().with_trailing_input(TrailingInput::Reject);
///
/// assert_eq!(evaluate_expression_with("5", &strict).unwrap(), 5.0);
/// assert!(evaluate_expression_with("5 5", &strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Policy for tokens after a complete expression.
    pub trailing_input: TrailingInput,
    /// Maximum nesting of factors.
    pub max_depth:      usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { trailing_input: TrailingInput::default(),
               max_depth:      DEFAULT_MAX_DEPTH, }
    }
}

impl Config {
    /// Returns a copy with the given trailing-input policy.
    #[must_use]
    pub const fn with_trailing_input(mut self, trailing_input: TrailingInput) -> Self {
        self.trailing_input = trailing_input;
        self
    }

    /// Returns a copy with the given depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Deepest tree level the evaluator accepts, the root being level 1.
    ///
    /// Left operands of binary nodes stay on their parent's level, which is
    /// how operator chains are stored. Every other edge goes one level down.
    /// Measured that way, a parsed factor sits at most four levels below the
    /// expression around it, so any tree the parser accepts under
    /// `max_depth` fits within `4 * max_depth + 1` levels.
    ///
    /// ## Example
    /// ```
    /// use reckon::Config;
    ///
    /// assert_eq!(Config::default().with_max_depth(3).tree_depth_limit(), 13);
    /// ```
    #[must_use]
    pub const fn tree_depth_limit(self) -> usize {
        self.max_depth.saturating_mul(4).saturating_add(1)
    }
}
