//! Ability identification and per-ability data storage.
//!
//! ## Ability
//!
//! The closed set of six ability names. Rule content refers to abilities
//! by name; unknown names are rejected when content is parsed, never
//! during resolution.
//!
//! ## AbilityMap
//!
//! Per-ability data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Ability`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::ParseAbilityError;

/// One of the six ability names.
///
/// Abilities are a closed set: the evaluator matches on them exhaustively
/// and content referencing anything else fails at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities, in canonical order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Canonical index of this ability (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The lowercase name used by rule content.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = ParseAbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Ability::Strength),
            "dexterity" => Ok(Ability::Dexterity),
            "constitution" => Ok(Ability::Constitution),
            "intelligence" => Ok(Ability::Intelligence),
            "wisdom" => Ok(Ability::Wisdom),
            "charisma" => Ok(Ability::Charisma),
            _ => Err(ParseAbilityError::new(s)),
        }
    }
}

/// Convert a raw ability score to its baseline modifier.
///
/// Uses the standard score-to-modifier table: 10-11 is +0, each two points
/// above or below shifts the modifier by one. `div_euclid` keeps the
/// rounding direction correct for scores below 10.
///
/// ```
/// use ttrpg_core::core::score_modifier;
///
/// assert_eq!(score_modifier(10), 0);
/// assert_eq!(score_modifier(11), 0);
/// assert_eq!(score_modifier(18), 4);
/// assert_eq!(score_modifier(8), -1);
/// assert_eq!(score_modifier(7), -2);
/// ```
#[must_use]
pub const fn score_modifier(score: i64) -> i64 {
    (score - 10).div_euclid(2)
}

/// Per-ability data storage with O(1) access.
///
/// Backed by a fixed array with one entry per ability.
/// Use `AbilityMap::new()` to create with a factory function,
/// or `AbilityMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use ttrpg_core::core::{Ability, AbilityMap};
///
/// let mut scores: AbilityMap<i64> = AbilityMap::with_value(10);
///
/// scores[Ability::Strength] = 18;
/// assert_eq!(scores[Ability::Strength], 18);
/// assert_eq!(scores[Ability::Wisdom], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityMap<T> {
    data: [T; 6],
}

impl<T> AbilityMap<T> {
    /// Create a map with a factory function.
    pub fn new(mut factory: impl FnMut(Ability) -> T) -> Self {
        Self {
            data: Ability::ALL.map(&mut factory),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (ability, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, &T)> {
        Ability::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for AbilityMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Ability> for AbilityMap<T> {
    type Output = T;

    fn index(&self, ability: Ability) -> &T {
        &self.data[ability.index()]
    }
}

impl<T> IndexMut<Ability> for AbilityMap<T> {
    fn index_mut(&mut self, ability: Ability) -> &mut T {
        &mut self.data[ability.index()]
    }
}
