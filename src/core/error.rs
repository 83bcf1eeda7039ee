//! Error types for resolution and content parsing.
//!
//! Cycles are not errors: a condition that re-enters an in-flight
//! resolution evaluates to `false` and resolution carries on. The only
//! runtime failure is a dangling object reference; everything else
//! (unknown ability names, malformed expressions) is rejected when
//! content is parsed.

use thiserror::Error;

use super::object::ObjectId;

/// A failure during modifier resolution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A condition or caller referenced an object the provider does not know.
    ///
    /// Distinct from a cycle: cycles resolve to a value, dangling
    /// references do not.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),
}

/// A string failed to parse as an ability name.
///
/// Surfaced by content loading, before any resolution runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown ability name: {name:?}")]
pub struct ParseAbilityError {
    name: String,
}

impl ParseAbilityError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
