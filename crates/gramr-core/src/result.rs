//! Outcome of applying a rule at one position.

use crate::error::{RuleError, RuleErrors};

/// Either a value with the position right after the consumed span, or the
/// errors explaining why nothing matched.
///
/// `pos` may equal the starting position: that is a zero-width match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult<R> {
    Accepted { value: R, pos: usize },
    Rejected { errors: RuleErrors },
}

impl<R> RuleResult<R> {
    #[inline]
    pub fn accept(value: R, pos: usize) -> Self {
        Self::Accepted { value, pos }
    }

    /// Single-error rejection with an empty path.
    pub fn reject(message: impl Into<String>, pos: usize) -> Self {
        Self::Rejected {
            errors: RuleErrors::single(RuleError::new(message, pos)),
        }
    }

    #[inline]
    pub fn rejected(errors: RuleErrors) -> Self {
        Self::Rejected { errors }
    }

    /// Transform the accepted value. Position and errors pass through.
    pub fn map<O>(self, f: impl FnOnce(R) -> O) -> RuleResult<O> {
        match self {
            Self::Accepted { value, pos } => RuleResult::Accepted {
                value: f(value),
                pos,
            },
            Self::Rejected { errors } => RuleResult::Rejected { errors },
        }
    }

    /// Prefix every error's path with `label`; acceptance is untouched.
    pub fn with_path(self, label: &str) -> Self {
        match self {
            Self::Rejected { errors } => Self::Rejected {
                errors: errors.with_path(label),
            },
            accepted => accepted,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Position after the match, if accepted.
    pub fn pos(&self) -> Option<usize> {
        match self {
            Self::Accepted { pos, .. } => Some(*pos),
            Self::Rejected { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&R> {
        match self {
            Self::Accepted { value, .. } => Some(value),
            Self::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&RuleErrors> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { errors } => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<(R, usize), RuleErrors> {
        match self {
            Self::Accepted { value, pos } => Ok((value, pos)),
            Self::Rejected { errors } => Err(errors),
        }
    }

    /// Accepted value, discarding the end position.
    pub fn into_value(self) -> Result<R, RuleErrors> {
        self.into_result().map(|(value, _)| value)
    }
}

