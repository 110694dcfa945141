#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gramr rule evaluation.
//!
//! Four pieces, none of which know what a rule is:
//! - **Result**: the outcome of applying one rule at one position
//! - **Errors**: positioned, path-tagged failures (always non-empty when rejected)
//! - **Recursive**: a `Done`/`Continue` trampoline for stack-safe loops
//! - **Context**: a scoped label stack owned by a single parse invocation

mod context;
mod error;
mod recursive;
mod result;

#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod result_tests;

pub use context::{Context, PathGuard};
pub use error::{RuleError, RuleErrors};
pub use recursive::Recursive;
pub use result::RuleResult;

/// Errors raised while *building* rules.
///
/// Parse failures are never reported here; they are values inside
/// [`RuleResult::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Repetition bounds where the ceiling is below the floor.
    #[error("invalid repetition bounds: max ({max}) must be greater than or equal to min ({min})")]
    InvalidRepetition { min: usize, max: usize },
}
