//! Condition expression trees.
//!
//! Conditions gate whether an effect's modifier operation applies.
//! They are loaded from rule content, immutable afterwards, and form a
//! tree per effect, but `Modifier` references across effects and
//! objects can induce an arbitrary directed graph, including cycles.
//! The evaluator resolves those references through the cycle guard.

use serde::{Deserialize, Serialize};

use crate::core::{Ability, ObjectId};

/// Comparison operator over numeric operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    /// Apply the operator to two values.
    #[must_use]
    pub fn compare(self, left: i64, right: i64) -> bool {
        match self {
            Comparison::Eq => left == right,
            Comparison::Ne => left != right,
            Comparison::Lt => left < right,
            Comparison::Le => left <= right,
            Comparison::Gt => left > right,
            Comparison::Ge => left >= right,
        }
    }
}

/// A numeric operand in a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A literal value.
    Const(i64),

    /// Another object's ability modifier, resolved on demand.
    Modifier { object: ObjectId, ability: Ability },
}

impl Operand {
    /// Create a modifier-reference operand.
    #[must_use]
    pub const fn modifier(object: ObjectId, ability: Ability) -> Self {
        Self::Modifier { object, ability }
    }
}

/// A condition that must be met for an effect to apply.
///
/// A closed set of variants, matched exhaustively by the evaluator, so
/// new condition kinds are a compile-time-checked extension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    // === Combinators ===

    /// All conditions must be true. Short-circuits on the first false child.
    All(Vec<Condition>),

    /// At least one condition must be true. Short-circuits on the first
    /// true child.
    Any(Vec<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),

    // === Numeric ===

    /// Compare two numeric operands.
    Compare {
        op: Comparison,
        left: Operand,
        right: Operand,
    },

    // === References ===

    /// An ability modifier used directly as a boolean: nonzero is true.
    ///
    /// Resolving the reference may re-enter the resolver; if the referenced
    /// key is already being resolved, this condition is false.
    Modifier { object: ObjectId, ability: Ability },

    // === Special ===

    /// Always true (unconditional effect).
    Always,

    /// Always false (disabled effect).
    Never,
}

impl Condition {
    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Create a comparison condition.
    #[must_use]
    pub const fn compare(op: Comparison, left: Operand, right: Operand) -> Self {
        Self::Compare { op, left, right }
    }

    /// Create a modifier-reference condition (nonzero is true).
    #[must_use]
    pub const fn modifier(object: ObjectId, ability: Ability) -> Self {
        Self::Modifier { object, ability }
    }

    /// Require an ability modifier to be at least `min`.
    #[must_use]
    pub const fn modifier_at_least(object: ObjectId, ability: Ability, min: i64) -> Self {
        Self::Compare {
            op: Comparison::Ge,
            left: Operand::Modifier { object, ability },
            right: Operand::Const(min),
        }
    }

    /// Require an ability modifier to be at most `max`.
    #[must_use]
    pub const fn modifier_at_most(object: ObjectId, ability: Ability, max: i64) -> Self {
        Self::Compare {
            op: Comparison::Le,
            left: Operand::Modifier { object, ability },
            right: Operand::Const(max),
        }
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another condition with AND.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another condition with OR.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        match self {
            Self::Any(mut conditions) => {
                conditions.push(other);
                Self::Any(conditions)
            }
            _ => Self::Any(vec![self, other]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_operators() {
        assert!(Comparison::Eq.compare(3, 3));
        assert!(!Comparison::Eq.compare(3, 4));
        assert!(Comparison::Ne.compare(3, 4));
        assert!(Comparison::Lt.compare(-1, 0));
        assert!(Comparison::Le.compare(0, 0));
        assert!(Comparison::Gt.compare(5, 4));
        assert!(Comparison::Ge.compare(4, 4));
        assert!(!Comparison::Ge.compare(3, 4));
    }

    #[test]
    fn test_builder_methods_flatten() {
        let condition = Condition::modifier_at_least(ObjectId::new(1), Ability::Strength, 2)
            .and(Condition::Always)
            .and(Condition::modifier(ObjectId::new(2), Ability::Wisdom));

        if let Condition::All(conditions) = condition {
            assert_eq!(conditions.len(), 3);
        } else {
            panic!("Expected All condition");
        }
    }

    #[test]
    fn test_or_builder() {
        let condition = Condition::Never.or(Condition::Always).or(Condition::Never);

        if let Condition::Any(conditions) = condition {
            assert_eq!(conditions.len(), 3);
        } else {
            panic!("Expected Any condition");
        }
    }

    #[test]
    fn test_negate() {
        let condition = Condition::Always.negate();
        assert_eq!(condition, Condition::Not(Box::new(Condition::Always)));
    }

    #[test]
    fn test_condition_serialization() {
        let condition = Condition::All(vec![
            Condition::modifier_at_least(ObjectId::new(3), Ability::Charisma, 1),
            Condition::Not(Box::new(Condition::modifier(
                ObjectId::new(4),
                Ability::Intelligence,
            ))),
        ]);

        let json = serde_json::to_string(&condition).unwrap();
        let deserialized: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(condition, deserialized);
    }
}
