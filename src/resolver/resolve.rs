//! Ability modifier resolution.
//!
//! `ModifierResolver` computes an object's effective ability modifier:
//! the score-derived baseline folded with every attached effect whose
//! target matches and whose condition holds. Conditions may reference
//! other modifiers (including, transitively, the one being computed),
//! so every entry into the resolver goes through the context's cycle
//! guard. Recursion depth is bounded by the number of distinct
//! `(object, ability)` keys reachable from the root call.

use crate::conditions::ConditionEvaluator;
use crate::core::{Ability, ObjectId, ResolveError};

use super::context::{EvaluationContext, ResolutionKey};

/// Resolves effective ability modifiers.
pub struct ModifierResolver;

impl ModifierResolver {
    /// Compute an object's effective modifier for an ability.
    ///
    /// Reads the object through the context's provider, converts its base
    /// score to the baseline modifier, then applies each qualifying
    /// effect's operation in attachment order. Later effects see the
    /// cumulative total of earlier ones.
    ///
    /// If `object` is unknown to the provider this is
    /// [`ResolveError::UnknownObject`]; a cycle is never an error. When
    /// called on a context where the key is already in flight, the cycle
    /// sentinel surfaces as a zero contribution.
    pub fn resolve(
        ctx: &EvaluationContext,
        object: ObjectId,
        ability: Ability,
    ) -> Result<i64, ResolveError> {
        Ok(Self::resolve_reentrant(ctx, object, ability)?.unwrap_or(0))
    }

    /// Guard-aware entry used for re-entrant calls.
    ///
    /// Returns `Ok(None)`, without touching the object's effects, when
    /// `(object, ability)` is already being resolved higher up this call
    /// chain. The condition evaluator treats that absent value as `false`.
    pub fn resolve_reentrant(
        ctx: &EvaluationContext,
        object: ObjectId,
        ability: Ability,
    ) -> Result<Option<i64>, ResolveError> {
        let key = ResolutionKey::new(object, ability);
        let Some(_guard) = ctx.begin(key) else {
            return Ok(None);
        };
        Self::fold_effects(ctx, object, ability).map(Some)
    }

    fn fold_effects(
        ctx: &EvaluationContext,
        object: ObjectId,
        ability: Ability,
    ) -> Result<i64, ResolveError> {
        let obj = ctx
            .provider()
            .object(object)
            .ok_or(ResolveError::UnknownObject(object))?;

        let mut total = obj.base_modifier(ability);

        for effect in obj.effects() {
            if effect.target != ability {
                continue;
            }
            if ConditionEvaluator::evaluate(&effect.condition, ctx)? {
                total = effect.op.apply(total, ctx);
            }
        }

        Ok(total)
    }
}
