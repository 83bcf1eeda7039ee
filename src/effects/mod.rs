//! Effects: conditional ability modifiers.
//!
//! - [`Effect`]: a condition plus a modifier operation on one ability
//! - [`ModifierOp`]: how the running total changes (add, set, multiply, roll)
//! - [`EffectId`]: identity for attachment and removal
//!
//! Effects do nothing on their own; the resolver folds them into a
//! modifier total when their target ability is resolved.

mod effect;

pub use effect::{Effect, EffectId, ModifierOp};
