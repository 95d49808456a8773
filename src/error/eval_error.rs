#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// The tree is not one the parser could have produced.
    IncorrectSyntaxTree {
        /// Nesting depth at which the walk was abandoned.
        depth: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncorrectSyntaxTree { .. } => write!(f, "Incorrect syntax tree!"),
        }
    }
}

impl std::error::Error for EvalError {}
