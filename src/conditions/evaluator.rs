//! Condition evaluation.
//!
//! Walks a condition tree to a boolean. Combinators short-circuit, which
//! is semantic rather than an optimization: reference edges inside an
//! unevaluated child are never visited, so they neither resolve modifiers
//! nor trip the cycle guard.

use crate::core::ResolveError;
use crate::resolver::{EvaluationContext, ModifierResolver};

use super::condition::{Condition, Operand};

/// Evaluator for condition trees.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Evaluate a condition under the given context.
    ///
    /// Deterministic for fixed object/effect state and context occupancy.
    /// A modifier reference whose key is already in flight evaluates to
    /// `false`; a reference to an unknown object is an error.
    pub fn evaluate(
        condition: &Condition,
        ctx: &EvaluationContext,
    ) -> Result<bool, ResolveError> {
        match condition {
            Condition::All(children) => {
                for child in children {
                    if !Self::evaluate(child, ctx)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Condition::Any(children) => {
                for child in children {
                    if Self::evaluate(child, ctx)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Condition::Not(inner) => Ok(!Self::evaluate(inner, ctx)?),

            Condition::Compare { op, left, right } => {
                let Some(left) = Self::operand(left, ctx)? else {
                    return Ok(false);
                };
                let Some(right) = Self::operand(right, ctx)? else {
                    return Ok(false);
                };
                Ok(op.compare(left, right))
            }

            Condition::Modifier { object, ability } => {
                let value = ModifierResolver::resolve_reentrant(ctx, *object, *ability)?;
                Ok(value.is_some_and(|modifier| modifier != 0))
            }

            Condition::Always => Ok(true),

            Condition::Never => Ok(false),
        }
    }

    /// Evaluate a numeric operand.
    ///
    /// `None` is the cycle sentinel: the referenced key is already being
    /// resolved higher up this call chain. A comparison with an absent
    /// operand is false.
    fn operand(operand: &Operand, ctx: &EvaluationContext) -> Result<Option<i64>, ResolveError> {
        match operand {
            Operand::Const(value) => Ok(Some(*value)),
            Operand::Modifier { object, ability } => {
                ModifierResolver::resolve_reentrant(ctx, *object, *ability)
            }
        }
    }
}
