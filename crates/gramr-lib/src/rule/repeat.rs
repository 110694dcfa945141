//! Bounded repetition on a trampoline.

use gramr_core::{Error, Recursive, RuleResult};

use super::{Input, Rule};

/// Bounds and separator for [`Rule::repeat`].
///
/// The default is unbounded optional repetition (`min = 0`, no `max`, no
/// separator). Fields are private: `max >= min` holds for every value.
pub struct RepOptions<E> {
    min: usize,
    max: Option<usize>,
    separator: Option<Rule<E, ()>>,
}

impl<E> Clone for RepOptions<E> {
    fn clone(&self) -> Self {
        Self {
            min: self.min,
            max: self.max,
            separator: self.separator.clone(),
        }
    }
}

impl<E> Default for RepOptions<E> {
    fn default() -> Self {
        Self {
            min: 0,
            max: None,
            separator: None,
        }
    }
}

impl<E> std::fmt::Debug for RepOptions<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepOptions")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("separated", &self.separator.is_some())
            .finish()
    }
}

impl<E: 'static> RepOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_least(min: usize) -> Self {
        Self {
            min,
            ..Self::default()
        }
    }

    pub fn at_most(max: usize) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
            separator: None,
        }
    }

    /// Between `min` and `max` matches, inclusive.
    pub fn bounded(min: usize, max: usize) -> Result<Self, Error> {
        if max < min {
            return Err(Error::InvalidRepetition { min, max });
        }
        Ok(Self {
            min,
            max: Some(max),
            separator: None,
        })
    }

    /// Require `separator` between consecutive matches. Its value is dropped.
    pub fn separated_by<S: 'static>(mut self, separator: Rule<E, S>) -> Self {
        self.separator = Some(separator.ignored());
        self
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

struct Repeater<E, R, A> {
    min: usize,
    max: Option<usize>,
    first: Rule<E, R>,
    next: Rule<E, R>,
    fold: Box<dyn Fn(A, R) -> A>,
}

impl<E: 'static, R: 'static, A: 'static> Repeater<E, R, A> {
    fn step<'r>(
        &'r self,
        input: &'r Input<'_, E>,
        pos: usize,
        count: usize,
        acc: A,
    ) -> Recursive<'r, RuleResult<A>> {
        if self.max == Some(count) {
            return Recursive::done(RuleResult::accept(acc, pos));
        }

        let item = if count == 0 { &self.first } else { &self.next };
        match item.apply(input, pos) {
            RuleResult::Accepted { value, pos } => {
                let acc = (self.fold)(acc, value);
                Recursive::next(move || self.step(input, pos, count + 1, acc))
            }
            RuleResult::Rejected { errors } if count < self.min => {
                Recursive::done(RuleResult::rejected(errors))
            }
            RuleResult::Rejected { .. } => Recursive::done(RuleResult::accept(acc, pos)),
        }
    }
}

impl<E: 'static, R: 'static> Rule<E, R> {
    /// Match `self` repeatedly within the bounds of `options`, folding the
    /// values into an accumulator.
    ///
    /// Below `min`, a rejection of the item fails the whole repetition with
    /// the item's errors. At `max` the repetition stops. In between, a
    /// rejection ends the repetition successfully at the last matched
    /// position.
    ///
    /// An item that matches without consuming input repeats forever when
    /// `max` is unbounded; wrap such items in [`non_empty`](Rule::non_empty).
    pub fn repeat<A: 'static>(
        self,
        options: RepOptions<E>,
        init: impl Fn() -> A + 'static,
        fold: impl Fn(A, R) -> A + 'static,
    ) -> Rule<E, A> {
        let next = match options.separator {
            Some(separator) => separator.then_with(self.clone(), |(), value| value),
            None => self.clone(),
        };
        let repeater = Repeater {
            min: options.min,
            max: options.max,
            first: self,
            next,
            fold: Box::new(fold),
        };

        Rule::of(move |input, pos| repeater.step(input, pos, 0, init()).run())
    }

    /// Repeat and discard the values.
    pub fn skip_many(self, options: RepOptions<E>) -> Rule<E, ()> {
        self.repeat(options, || (), |(), _| ())
    }

    /// Repeat and gather the values in match order.
    pub fn collect(self, options: RepOptions<E>) -> Rule<E, Vec<R>> {
        self.repeat(options, Vec::new, |mut values, value| {
            values.push(value);
            values
        })
    }
}
