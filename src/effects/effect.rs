//! Effect definitions.
//!
//! An effect is a rule-content unit attached to one object: a condition
//! plus a modifier operation targeting a single ability. Effects are
//! created by content instantiation and destroyed on removal from their
//! owner; during one resolution they are immutable.

use serde::{Deserialize, Serialize};

use crate::conditions::Condition;
use crate::core::Ability;
use crate::resolver::EvaluationContext;

/// Unique identifier for an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create an effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// How an effect changes the running modifier total.
///
/// Operations are applied in attachment order, each seeing the cumulative
/// total of the ones before it. This is what makes `Set` and `Multiply`
/// order-sensitive while stacked `Add`s commute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierOp {
    /// Add a fixed bonus (negative for a penalty).
    Add(i64),

    /// Set the total outright, discarding earlier contributions.
    Set(i64),

    /// Multiply the cumulative total.
    Multiply(i64),

    /// Add the result of rolling a die with the given number of sides.
    ///
    /// Consumes randomness from the context's die, so scripted rolls in
    /// tests reproduce exactly.
    AddRoll { sides: i64 },
}

impl ModifierOp {
    /// Apply this operation to the running total.
    pub fn apply(&self, total: i64, ctx: &EvaluationContext) -> i64 {
        match self {
            ModifierOp::Add(bonus) => total + bonus,
            ModifierOp::Set(value) => *value,
            ModifierOp::Multiply(factor) => total * factor,
            ModifierOp::AddRoll { sides } => total + ctx.roll(*sides),
        }
    }
}

/// A conditional modifier attached to an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Unique identifier.
    pub id: EffectId,

    /// Human-readable name (for debugging).
    pub name: String,

    /// The ability this effect modifies.
    pub target: Ability,

    /// Gate deciding whether the operation applies.
    pub condition: Condition,

    /// The operation applied when the condition holds.
    pub op: ModifierOp,
}

impl Effect {
    /// Create an effect.
    #[must_use]
    pub fn new(
        id: EffectId,
        name: impl Into<String>,
        target: Ability,
        condition: Condition,
        op: ModifierOp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            condition,
            op,
        }
    }

    /// Create an unconditional bonus.
    #[must_use]
    pub fn bonus(id: EffectId, name: impl Into<String>, target: Ability, bonus: i64) -> Self {
        Self::new(id, name, target, Condition::Always, ModifierOp::Add(bonus))
    }
}
