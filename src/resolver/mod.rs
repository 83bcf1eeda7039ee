//! Modifier resolution and the cycle guard.
//!
//! - [`EvaluationContext`]: per-top-level-call state, in-flight keys plus die
//! - [`ResolutionKey`]: one `(object, ability)` resolution
//! - [`InFlight`]: scoped guard releasing its key on drop
//! - [`ModifierResolver`]: the entry point for computing modifiers
//!
//! ## Cycle handling
//!
//! A condition that reaches back into a resolution already in flight is
//! not an error: it evaluates to `false` and the rest of the resolution
//! proceeds. Logic layered on top of a cyclic sub-expression (such as a
//! `Not` around a modifier reference) therefore observes a well-defined,
//! invertible value rather than a crash.

mod context;
mod resolve;

pub use context::{EvaluationContext, InFlight, ResolutionKey};
pub use resolve::ModifierResolver;
