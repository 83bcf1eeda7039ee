//! Game objects and the provider boundary.
//!
//! Every actor in a scene (character, monster, summon) is a `GameObject`
//! with a unique `ObjectId`, six base ability scores, and an ordered list
//! of attached effects. Effects are attached and removed by the hosting
//! engine during an object's lifetime; resolution only ever reads them.
//!
//! The resolver reaches objects through the `ObjectProvider` trait, so a
//! host can supply its own registry. `ObjectStore` is the in-memory
//! implementation used by tests and small hosts.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ability::{score_modifier, Ability, AbilityMap};
use super::error::ResolveError;
use crate::effects::{Effect, EffectId};

/// Unique identifier for a game object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Create an object ID.
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

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// An actor with base ability scores and attached effects.
///
/// The effect list preserves attachment order; order is significant
/// because modifier operations such as `Set` and `Multiply` see the
/// cumulative total of earlier effects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique identity.
    pub id: ObjectId,

    /// Human-readable name (for debugging).
    pub name: String,

    /// Base ability scores.
    pub scores: AbilityMap<i64>,

    /// Attached effects, in attachment order.
    effects: Vector<Effect>,
}

impl GameObject {
    /// Create an object with the given base scores.
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>, scores: AbilityMap<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            scores,
            effects: Vector::new(),
        }
    }

    /// Baseline modifier for an ability, before any effects.
    #[must_use]
    pub fn base_modifier(&self, ability: Ability) -> i64 {
        score_modifier(self.scores[ability])
    }

    /// Attach an effect at the end of the list.
    pub fn add_effect(&mut self, effect: Effect) {
        self.effects.push_back(effect);
    }

    /// Remove an effect by id, returning it if it was attached.
    ///
    /// Remaining effects keep their relative order.
    pub fn remove_effect(&mut self, id: EffectId) -> Option<Effect> {
        let index = self.effects.iter().position(|e| e.id == id)?;
        Some(self.effects.remove(index))
    }

    /// Attached effects in attachment order.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Number of attached effects.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }
}

/// Read-only access to live objects.
///
/// Resolution never mutates objects; hosts with their own registries
/// implement this one method.
pub trait ObjectProvider {
    /// Look up an object by identity.
    fn object(&self, id: ObjectId) -> Option<&GameObject>;
}

/// In-memory object registry.
///
/// Allocates identities and owns the objects. Suitable for tests and
/// hosts without an existing registry.
#[derive(Clone, Debug, Default)]
pub struct ObjectStore {
    objects: FxHashMap<ObjectId, GameObject>,
    next_id: u32,
}

impl ObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new object, allocating its identity.
    pub fn register(&mut self, name: impl Into<String>, scores: AbilityMap<i64>) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, GameObject::new(id, name, scores));
        id
    }

    /// Look up an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    /// Look up an object mutably.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    /// Attach an effect to an object.
    pub fn add_effect(&mut self, id: ObjectId, effect: Effect) -> Result<(), ResolveError> {
        self.objects
            .get_mut(&id)
            .map(|obj| obj.add_effect(effect))
            .ok_or(ResolveError::UnknownObject(id))
    }

    /// Remove an effect from an object.
    pub fn remove_effect(&mut self, id: ObjectId, effect: EffectId) -> Option<Effect> {
        self.objects.get_mut(&id)?.remove_effect(effect)
    }
}

impl ObjectProvider for ObjectStore {
    fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Condition;
    use crate::effects::ModifierOp;

    fn scores_all(value: i64) -> AbilityMap<i64> {
        AbilityMap::with_value(value)
    }

    #[test]
    fn test_register_allocates_distinct_ids() {
        let mut store = ObjectStore::new();
        let a = store.register("a", scores_all(10));
        let b = store.register("b", scores_all(10));
        assert_ne!(a, b);
        assert_eq!(store.object(a).unwrap().name, "a");
        assert_eq!(store.object(b).unwrap().name, "b");
    }

    #[test]
    fn test_base_modifier_uses_score_table() {
        let mut scores = scores_all(10);
        scores[Ability::Strength] = 18;
        scores[Ability::Dexterity] = 7;
        let obj = GameObject::new(ObjectId::new(0), "dummy", scores);

        assert_eq!(obj.base_modifier(Ability::Strength), 4);
        assert_eq!(obj.base_modifier(Ability::Dexterity), -2);
        assert_eq!(obj.base_modifier(Ability::Wisdom), 0);
    }

    #[test]
    fn test_effects_preserve_attachment_order() {
        let mut obj = GameObject::new(ObjectId::new(0), "dummy", scores_all(10));
        for i in 0..4 {
            obj.add_effect(Effect::new(
                EffectId::new(i),
                format!("e{i}"),
                Ability::Strength,
                Condition::Always,
                ModifierOp::Add(i as i64),
            ));
        }

        let ids: Vec<_> = obj.effects().map(|e| e.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_effect_keeps_order() {
        let mut obj = GameObject::new(ObjectId::new(0), "dummy", scores_all(10));
        for i in 0..3 {
            obj.add_effect(Effect::new(
                EffectId::new(i),
                format!("e{i}"),
                Ability::Strength,
                Condition::Always,
                ModifierOp::Add(1),
            ));
        }

        let removed = obj.remove_effect(EffectId::new(1)).unwrap();
        assert_eq!(removed.name, "e1");
        let ids: Vec<_> = obj.effects().map(|e| e.id.raw()).collect();
        assert_eq!(ids, vec![0, 2]);

        assert!(obj.remove_effect(EffectId::new(1)).is_none());
    }

    #[test]
    fn test_add_effect_unknown_object() {
        let mut store = ObjectStore::new();
        let missing = ObjectId::new(99);
        let effect = Effect::new(
            EffectId::new(0),
            "stray",
            Ability::Charisma,
            Condition::Always,
            ModifierOp::Add(1),
        );
        assert_eq!(
            store.add_effect(missing, effect),
            Err(ResolveError::UnknownObject(missing))
        );
    }
}
