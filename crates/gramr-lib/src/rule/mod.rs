//! The rule algebra.
//!
//! A [`Rule<E, R>`] maps an input sequence of `E` and a cursor position to a
//! [`RuleResult<R>`]. Rules never mutate their input and own none of it; the
//! source is borrowed for the duration of one [`Rule::run`].
//!
//! # Evaluation model
//!
//! - Sequencing (`flat_map`, `then_with`, [`Chain`]) stops at the first rejection.
//! - Alternation ([`Rule::fork`]) evaluates every alternative at the same
//!   position and keeps the longest match, earliest on ties.
//! - Repetition ([`Rule::repeat`]) runs on a trampoline, so its stack depth is
//!   constant whatever the repetition count.
//! - Grammar recursion through [`Rule::lazy`] is *not* trampolined: left
//!   recursion overflows the stack.
//!
//! Failure paths are built by rewriting errors at [`Rule::path`] boundaries.
//! The per-run [`Context`] mirrors the active labels for tracing only.

mod chain;
mod fork;
mod lazy;
mod repeat;
mod trace;
mod tuple;

#[cfg(test)]
mod chain_tests;

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use gramr_core::{Context, RuleResult};

pub use chain::Chain;
pub use repeat::RepOptions;
pub use tuple::{Append, First};

/// Borrowed source plus the diagnostic context of one parse invocation.
pub struct Input<'src, E> {
    source: &'src [E],
    context: Context,
}

impl<'src, E> Input<'src, E> {
    pub fn new(source: &'src [E]) -> Self {
        Self {
            source,
            context: Context::new(),
        }
    }

    #[inline]
    pub fn source(&self) -> &'src [E] {
        self.source
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&'src E> {
        self.source.get(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

type RunFn<E, R> = dyn Fn(&Input<'_, E>, usize) -> RuleResult<R>;

/// A composable parsing function over elements of type `E` producing `R`.
///
/// Cloning is cheap: clones share the same underlying function.
pub struct Rule<E, R> {
    run: Rc<RunFn<E, R>>,
}

impl<E, R> Clone for Rule<E, R> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<E, R> fmt::Debug for Rule<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule(..)")
    }
}

/// A value together with the range of input elements it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

pub(crate) fn out_of_range(len: usize, pos: usize) -> String {
    format!("cursor out of range (input size: {len}, position: {pos})")
}

impl<E: 'static, R: 'static> Rule<E, R> {
    /// Lift a raw cursor function into a rule.
    pub fn of(run: impl Fn(&Input<'_, E>, usize) -> RuleResult<R> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Apply the rule at `pos` within an ongoing parse.
    #[inline]
    pub fn apply(&self, input: &Input<'_, E>, pos: usize) -> RuleResult<R> {
        (self.run)(input, pos)
    }

    /// Top-level entry point: apply at position 0 with a fresh context.
    pub fn run(&self, source: &[E]) -> RuleResult<R> {
        self.run_at(source, 0)
    }

    pub fn run_at(&self, source: &[E], pos: usize) -> RuleResult<R> {
        self.apply(&Input::new(source), pos)
    }

    /// Reject without invoking `self` when `pos` is not a valid element index.
    ///
    /// Every rule that reads the element under the cursor goes through here.
    pub fn unfinished(self) -> Self {
        Rule::of(move |input, pos| {
            if pos < input.len() {
                self.apply(input, pos)
            } else {
                RuleResult::reject(out_of_range(input.len(), pos), pos)
            }
        })
    }

    /// Zero-width rule that always succeeds with a clone of `value`.
    pub fn accept(value: R) -> Self
    where
        R: Clone,
    {
        Rule::of(move |_, pos| RuleResult::accept(value.clone(), pos))
    }

    /// Zero-width rule that always fails with `message`.
    pub fn reject(message: impl Into<String>) -> Self {
        let message = message.into();
        Rule::of(move |_, pos| RuleResult::reject(message.clone(), pos))
    }

    /// Consume one element, turning it into a value or a rejection message.
    pub fn next_as(f: impl Fn(&E) -> Result<R, String> + 'static) -> Self {
        Rule::atom(move |element, pos| match f(element) {
            Ok(value) => RuleResult::accept(value, pos + 1),
            Err(message) => RuleResult::reject(message, pos),
        })
    }

    /// Bounds-checked single-element reader shared by the atomic consumers.
    fn atom(read: impl Fn(&E, usize) -> RuleResult<R> + 'static) -> Self {
        Rule::of(move |input, pos| match input.get(pos) {
            Some(element) => read(element, pos),
            None => RuleResult::reject(out_of_range(input.len(), pos), pos),
        })
        .unfinished()
    }

    pub fn map<O: 'static>(self, f: impl Fn(R) -> O + 'static) -> Rule<E, O> {
        Rule::of(move |input, pos| self.apply(input, pos).map(&f))
    }

    /// Replace the value with a clone of `value`.
    pub fn to<O: Clone + 'static>(self, value: O) -> Rule<E, O> {
        self.map(move |_| value.clone())
    }

    pub fn ignored(self) -> Rule<E, ()> {
        self.map(|_| ())
    }

    /// Monadic bind: on success, build the next rule from the value and
    /// continue at the new position.
    pub fn flat_map<O: 'static>(self, next: impl Fn(R) -> Rule<E, O> + 'static) -> Rule<E, O> {
        Rule::of(move |input, pos| match self.apply(input, pos) {
            RuleResult::Accepted { value, pos } => next(value).apply(input, pos),
            RuleResult::Rejected { errors } => RuleResult::rejected(errors),
        })
    }

    /// Sequence with a fixed successor, combining both values.
    ///
    /// Same semantics as `flat_map(|a| next.map(|b| combine(a, b)))` without
    /// building a rule per application.
    pub fn then_with<O: 'static, T: 'static>(
        self,
        next: Rule<E, O>,
        combine: impl Fn(R, O) -> T + 'static,
    ) -> Rule<E, T> {
        Rule::of(move |input, pos| match self.apply(input, pos) {
            RuleResult::Accepted { value, pos } => {
                next.apply(input, pos).map(|last| combine(value, last))
            }
            RuleResult::Rejected { errors } => RuleResult::rejected(errors),
        })
    }

    /// Reject a success that did not advance the cursor.
    ///
    /// Wrap repetition bodies that can match zero-width with this; the
    /// repetition engine does not detect them on its own.
    pub fn non_empty(self) -> Self {
        Rule::of(move |input, pos| match self.apply(input, pos) {
            RuleResult::Accepted { pos: end, .. } if end <= pos => {
                RuleResult::reject("rule succeeded but consumed no input", pos)
            }
            result => result,
        })
    }

    /// Label failures of this rule: every error's path gets `label` prepended.
    pub fn path(self, label: impl Into<String>) -> Self {
        let label = label.into();
        Rule::of(move |input, pos| {
            let _guard = input.context().enter(label.as_str());
            self.apply(input, pos).with_path(&label)
        })
    }

    /// `fork` between this rule and a zero-width `None`.
    pub fn optional(self) -> Rule<E, Option<R>> {
        Rule::fork([
            self.map(Some),
            Rule::of(|_, pos| RuleResult::accept(None, pos)),
        ])
    }

    /// Replace the value with the input elements the rule spanned.
    pub fn slice(self) -> Rule<E, Vec<E>>
    where
        E: Clone,
    {
        Rule::of(move |input, pos| match self.apply(input, pos) {
            RuleResult::Accepted { pos: end, .. } => match input.source().get(pos..end) {
                Some(span) => RuleResult::accept(span.to_vec(), end),
                None => RuleResult::reject(out_of_range(input.len(), end), pos),
            },
            RuleResult::Rejected { errors } => RuleResult::rejected(errors),
        })
    }

    /// Pair the value with the range of elements it was parsed from.
    pub fn spanned(self) -> Rule<E, Spanned<R>> {
        Rule::of(move |input, pos| match self.apply(input, pos) {
            RuleResult::Accepted { value, pos: end } => RuleResult::accept(
                Spanned {
                    value,
                    span: pos..end,
                },
                end,
            ),
            RuleResult::Rejected { errors } => RuleResult::rejected(errors),
        })
    }
}

impl<E: Clone + 'static> Rule<E, E> {
    /// Consume one element if `predicate` holds for it.
    pub fn next_if(predicate: impl Fn(&E) -> bool + 'static) -> Self {
        Rule::atom(move |element, pos| {
            if predicate(element) {
                RuleResult::accept(element.clone(), pos + 1)
            } else {
                RuleResult::reject("condition unmet", pos)
            }
        })
    }
}

impl<E: fmt::Debug + 'static> Rule<E, ()> {
    /// Succeed, consuming nothing, only at the end of the input.
    pub fn end() -> Self {
        Rule::of(|input, pos| match input.get(pos) {
            None if pos == input.len() => RuleResult::accept((), pos),
            None => RuleResult::reject(out_of_range(input.len(), pos), pos),
            Some(element) => {
                RuleResult::reject(format!("expected end of input, got {element:?}"), pos)
            }
        })
    }
}
