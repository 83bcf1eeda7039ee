//! Per-call evaluation context and cycle guard.
//!
//! One `EvaluationContext` is created per top-level resolution and threaded
//! through every recursive call it spawns. It tracks which
//! `(object, ability)` resolutions are currently in flight so a reference
//! back into one of them never recurses, and it carries the die so
//! randomness-consuming modifier operations stay confined to the call
//! they belong to. Contexts are never shared between unrelated top-level
//! resolutions; doing so would make one call's in-flight keys look like
//! cycles to the other.

use std::cell::RefCell;

use rustc_hash::FxHashSet;

use crate::core::{Ability, ObjectId, ObjectProvider};
use crate::dice::Die;

/// Key identifying one resolution: which object, which ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub object: ObjectId,
    pub ability: Ability,
}

impl ResolutionKey {
    /// Create a resolution key.
    #[must_use]
    pub const fn new(object: ObjectId, ability: Ability) -> Self {
        Self { object, ability }
    }
}

impl std::fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.object, self.ability)
    }
}

/// Scoped state for one top-level resolution.
///
/// Holds the object provider, the set of in-flight resolution keys, and
/// the die. Interior mutability lets the in-flight set be updated through
/// shared references, which is what allows [`InFlight`] to release its key
/// on drop no matter how the enclosing call exits.
pub struct EvaluationContext<'a> {
    provider: &'a dyn ObjectProvider,
    in_flight: RefCell<FxHashSet<ResolutionKey>>,
    die: RefCell<Die>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context over a provider, with its own die.
    pub fn new(provider: &'a dyn ObjectProvider, die: Die) -> Self {
        Self {
            provider,
            in_flight: RefCell::new(FxHashSet::default()),
            die: RefCell::new(die),
        }
    }

    /// The object provider this context resolves against.
    #[must_use]
    pub fn provider(&self) -> &'a dyn ObjectProvider {
        self.provider
    }

    /// Mark a key as in flight.
    ///
    /// Returns `None` if the key is already in flight: the cycle guard
    /// intercept. Otherwise returns a guard that releases the key when
    /// dropped, keeping push/pop balanced on every exit path.
    pub fn begin(&self, key: ResolutionKey) -> Option<InFlight<'_, 'a>> {
        if !self.in_flight.borrow_mut().insert(key) {
            tracing::trace!(key = %key, "cycle guard intercepted re-entrant resolution");
            return None;
        }
        Some(InFlight { ctx: self, key })
    }

    /// Is this key currently being resolved?
    #[must_use]
    pub fn is_in_flight(&self, key: ResolutionKey) -> bool {
        self.in_flight.borrow().contains(&key)
    }

    /// Number of resolutions currently in flight.
    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.borrow().len()
    }

    /// Roll this context's die.
    pub fn roll(&self, sides: i64) -> i64 {
        self.die.borrow_mut().roll(sides)
    }
}

/// Guard for a resolution in flight.
///
/// Dropping the guard releases the key, so the in-flight set shrinks by
/// exactly one on every exit from the resolution that acquired it,
/// including early `?` returns.
pub struct InFlight<'c, 'p> {
    ctx: &'c EvaluationContext<'p>,
    key: ResolutionKey,
}

impl Drop for InFlight<'_, '_> {
    fn drop(&mut self) {
        self.ctx.in_flight.borrow_mut().remove(&self.key);
    }
}
