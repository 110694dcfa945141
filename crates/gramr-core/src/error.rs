//! Positioned, path-tagged rule failures.

use serde::{Deserialize, Serialize};

/// A single failure produced while applying a rule.
///
/// `path` lists the labels of the enclosing `path` rules, outermost first.
/// Once constructed, only the path may change (by prefixing labels);
/// the message and position are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{}at {pos}: {message}", path_prefix(.path))]
pub struct RuleError {
    path: Vec<String>,
    message: String,
    pos: usize,
}

impl RuleError {
    pub fn new(message: impl Into<String>, pos: usize) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
            pos,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Message prefixed with the joined path, without the position.
    pub fn labelled_message(&self) -> String {
        if self.path.is_empty() {
            return self.message.clone();
        }
        format!("{}: {}", self.path.join(" > "), self.message)
    }

    /// Prepend `label` as the new outermost path segment.
    pub fn with_path(mut self, label: impl Into<String>) -> Self {
        self.path.insert(0, label.into());
        self
    }
}

fn path_prefix(path: &[String]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{} ", path.join(" > "))
    }
}

/// Non-empty, ordered collection of [`RuleError`]s carried by a rejection.
///
/// Order is significant: alternation concatenates the errors of its
/// alternatives in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(try_from = "Vec<RuleError>", into = "Vec<RuleError>")]
#[error("{}", render_lines(.0))]
pub struct RuleErrors(Vec<RuleError>);

#[allow(clippy::len_without_is_empty)] // never empty
impl RuleErrors {
    pub fn single(error: RuleError) -> Self {
        Self(vec![error])
    }

    /// Returns `None` for an empty vector.
    pub fn from_vec(errors: Vec<RuleError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> &RuleError {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RuleError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<RuleError> {
        self.0
    }

    /// Append `other` after `self`, preserving both orders.
    pub fn concat(mut self, other: RuleErrors) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Prefix every error's path with `label`.
    pub fn with_path(self, label: &str) -> Self {
        Self(self.0.into_iter().map(|e| e.with_path(label)).collect())
    }

    /// Greatest position among the errors.
    pub fn furthest_pos(&self) -> usize {
        self.0.iter().map(RuleError::pos).max().unwrap_or_default()
    }

    /// Errors at the furthest position: the most specific failures.
    pub fn deepest(&self) -> Vec<&RuleError> {
        let furthest = self.furthest_pos();
        self.0.iter().filter(|e| e.pos == furthest).collect()
    }

    /// Deepest errors with exact duplicates removed, first occurrence kept.
    ///
    /// Alternation under repetition tends to report the same failure
    /// several times; callers presenting errors to users want one copy.
    pub fn filtered(&self) -> Vec<RuleError> {
        let mut seen = std::collections::HashSet::new();
        self.deepest()
            .into_iter()
            .filter(|e| seen.insert(*e))
            .cloned()
            .collect()
    }
}

impl From<RuleError> for RuleErrors {
    fn from(error: RuleError) -> Self {
        Self::single(error)
    }
}

impl TryFrom<Vec<RuleError>> for RuleErrors {
    type Error = &'static str;

    fn try_from(errors: Vec<RuleError>) -> Result<Self, Self::Error> {
        Self::from_vec(errors).ok_or("a rejection carries at least one error")
    }
}

impl From<RuleErrors> for Vec<RuleError> {
    fn from(errors: RuleErrors) -> Self {
        errors.0
    }
}

impl IntoIterator for RuleErrors {
    type Item = RuleError;
    type IntoIter = std::vec::IntoIter<RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleErrors {
    type Item = &'a RuleError;
    type IntoIter = std::slice::Iter<'a, RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn render_lines(errors: &[RuleError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
