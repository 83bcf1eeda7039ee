//! Condition expressions and their evaluator.
//!
//! - [`Condition`]: closed expression tree gating an effect's application
//! - [`Operand`] / [`Comparison`]: numeric comparison building blocks
//! - [`ConditionEvaluator`]: recursive, short-circuiting evaluation
//!
//! Conditions are plain data with serde derives; rule content loads them
//! from structured definitions, and malformed expressions fail at load
//! time rather than during resolution.

mod condition;
mod evaluator;

pub use condition::{Comparison, Condition, Operand};
pub use evaluator::ConditionEvaluator;
