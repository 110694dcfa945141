//! Longest-match alternation.

use gramr_core::RuleResult;

use super::Rule;

impl<E: 'static, R: 'static> Rule<E, R> {
    /// Try every alternative at the same position and keep the best outcome.
    ///
    /// The accepted result with the greatest end position wins; on a tie the
    /// alternative listed first wins. When nothing accepts, the rejection
    /// carries the errors of all alternatives in listed order.
    ///
    /// Every alternative is evaluated even after one has accepted, so nested
    /// ambiguous forks cost the product of their widths. Order alternatives
    /// or factor common prefixes out when that matters.
    ///
    /// # Panics
    ///
    /// Panics if `alternatives` is empty.
    pub fn fork(alternatives: impl IntoIterator<Item = Rule<E, R>>) -> Self {
        let mut alternatives = alternatives.into_iter();
        let Some(first) = alternatives.next() else {
            panic!("fork requires at least one alternative");
        };
        let rest: Vec<_> = alternatives.collect();

        if rest.is_empty() {
            return first;
        }

        Rule::of(move |input, pos| {
            rest.iter()
                .fold(first.apply(input, pos), |best, rule| {
                    best_of(best, rule.apply(input, pos))
                })
        })
    }

    /// Two-way [`fork`](Rule::fork).
    pub fn or(self, other: Rule<E, R>) -> Self {
        Rule::fork([self, other])
    }
}

impl<E: 'static, R: 'static> std::ops::BitOr for Rule<E, R> {
    type Output = Rule<E, R>;

    fn bitor(self, other: Rule<E, R>) -> Self::Output {
        self.or(other)
    }
}

fn best_of<R>(current: RuleResult<R>, candidate: RuleResult<R>) -> RuleResult<R> {
    match (current, candidate) {
        (
            current @ RuleResult::Accepted { pos: kept, .. },
            candidate @ RuleResult::Accepted { pos: found, .. },
        ) => {
            if kept >= found {
                current
            } else {
                candidate
            }
        }
        (accepted @ RuleResult::Accepted { .. }, RuleResult::Rejected { .. }) => accepted,
        (RuleResult::Rejected { .. }, accepted @ RuleResult::Accepted { .. }) => accepted,
        (RuleResult::Rejected { errors }, RuleResult::Rejected { errors: more }) => {
            RuleResult::rejected(errors.concat(more))
        }
    }
}
