//! Sequential composition into a growing tuple.

use gramr_core::RuleResult;

use super::{Append, Rule};

/// Builder for a sequence of rules whose kept values form a tuple.
///
/// ```
/// use gramr_lib::lexer::{self, any_of, exact};
/// use gramr_lib::Rule;
///
/// let pair = Rule::chain()
///     .push(any_of("ab"))
///     .skip(exact(","))
///     .push(any_of("ab"))
///     .done();
///
/// let (left, right) = lexer::run(&pair, "b,a").into_value().unwrap();
/// assert_eq!((left.as_str(), right.as_str()), ("b", "a"));
/// ```
///
/// Each step runs only if the previous one accepted. The first rejection
/// is returned as is; no partial tuple is produced.
pub struct Chain<E, T> {
    rule: Rule<E, T>,
}

impl<E: 'static> Rule<E, ()> {
    /// Start an empty sequence.
    pub fn chain() -> Chain<E, ()> {
        Chain {
            rule: Rule::of(|_, pos| RuleResult::accept((), pos)),
        }
    }
}

impl<E: 'static, T: 'static> Chain<E, T> {
    /// Continue an existing rule's value as the tuple so far.
    pub fn from_rule(rule: Rule<E, T>) -> Self {
        Self { rule }
    }

    /// Run `rule` next and append its value.
    pub fn push<R: 'static>(self, rule: Rule<E, R>) -> Chain<E, T::Output>
    where
        T: Append<R>,
        T::Output: 'static,
    {
        Chain {
            rule: self.rule.then_with(rule, Append::append),
        }
    }

    /// Run `rule` next and drop its value.
    pub fn skip<R: 'static>(self, rule: Rule<E, R>) -> Self {
        Chain {
            rule: self.rule.then_with(rule, |values, _| values),
        }
    }

    pub fn done(self) -> Rule<E, T> {
        self.rule
    }
}
