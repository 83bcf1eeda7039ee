//! Core types: abilities, objects, identity, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! condition evaluator and the modifier resolver. Rule content refers to
//! objects and abilities through these types.

pub mod ability;
pub mod error;
pub mod object;

pub use ability::{score_modifier, Ability, AbilityMap};
pub use error::{ParseAbilityError, ResolveError};
pub use object::{GameObject, ObjectId, ObjectProvider, ObjectStore};
