//! # ttrpg-core
//!
//! The evaluation core of a tabletop RPG rules engine: given an object and
//! an ability, compute the effective ability modifier by folding the base
//! score with every attached effect whose condition holds.
//!
//! ## Design Principles
//!
//! 1. **Cycles are values, not errors**: effect conditions may reference
//!    ability modifiers of the same or other objects, so the reference
//!    graph can contain cycles. A reference back into a resolution already
//!    in flight evaluates to `false`; nothing panics, nothing recurses
//!    unboundedly.
//!
//! 2. **Closed content types**: conditions, operands, and modifier
//!    operations are tagged enums matched exhaustively, so new rule-content
//!    kinds are a compile-time-checked extension, and structurally
//!    malformed expressions are unrepresentable.
//!
//! 3. **Context over globals**: cycle-guard state and the die (with its
//!    deterministic override queue) live in a per-call `EvaluationContext`,
//!    never in process-wide state, so concurrent resolutions cannot
//!    interfere.
//!
//! ## Modules
//!
//! - `core`: abilities, objects, identity, the provider boundary, errors
//! - `conditions`: condition expression trees and their evaluator
//! - `effects`: conditional modifiers and their operations
//! - `resolver`: the modifier resolver and the cycle guard
//! - `dice`: bounded-integer die with scriptable outcomes
//!
//! ## Example
//!
//! ```
//! use ttrpg_core::core::{Ability, AbilityMap, ObjectStore};
//! use ttrpg_core::conditions::Condition;
//! use ttrpg_core::dice::Die;
//! use ttrpg_core::effects::{Effect, EffectId, ModifierOp};
//! use ttrpg_core::resolver::{EvaluationContext, ModifierResolver};
//!
//! let mut store = ObjectStore::new();
//! let mut scores = AbilityMap::with_value(10);
//! scores[Ability::Strength] = 14;
//! let hero = store.register("hero", scores);
//!
//! // +2 strength while the hero's own strength modifier is at least +1.
//! store.add_effect(hero, Effect::new(
//!     EffectId::new(0),
//!     "surge",
//!     Ability::Strength,
//!     Condition::modifier_at_least(hero, Ability::Strength, 1),
//!     ModifierOp::Add(2),
//! )).unwrap();
//!
//! let ctx = EvaluationContext::new(&store, Die::new(42));
//! // The condition references the modifier being computed (a self-loop),
//! // so it evaluates to false and only the baseline remains.
//! assert_eq!(ModifierResolver::resolve(&ctx, hero, Ability::Strength), Ok(2));
//! ```

pub mod conditions;
pub mod core;
pub mod dice;
pub mod effects;
pub mod resolver;

// Re-export commonly used types
pub use crate::core::{
    score_modifier, Ability, AbilityMap, GameObject, ObjectId, ObjectProvider, ObjectStore,
    ParseAbilityError, ResolveError,
};

pub use crate::conditions::{Comparison, Condition, ConditionEvaluator, Operand};

pub use crate::effects::{Effect, EffectId, ModifierOp};

pub use crate::resolver::{EvaluationContext, InFlight, ModifierResolver, ResolutionKey};

pub use crate::dice::Die;
