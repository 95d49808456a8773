/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), its depth bookkeeping and the
/// dispatch over node kinds.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the four arithmetic operators to already evaluated operands.
pub mod binary;

pub use self::core::{EvalResult, Evaluator};
