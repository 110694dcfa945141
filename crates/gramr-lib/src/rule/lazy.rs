//! Deferred construction for self-referential grammars.

use std::cell::OnceCell;
use std::rc::Rc;

use gramr_core::RuleResult;

use super::Rule;

impl<E: 'static, R: 'static> Rule<E, R> {
    /// Build the rule from `thunk` on first use and reuse it afterwards.
    ///
    /// The built rule is memoized, not its results. This is how a grammar
    /// function refers to itself:
    ///
    /// ```
    /// use gramr_lib::lexer::{self, exact, LexRule};
    /// use gramr_lib::Rule;
    ///
    /// // nested = "(" nested? ")"
    /// fn nested() -> LexRule<usize> {
    ///     Rule::chain()
    ///         .skip(exact("("))
    ///         .push(Rule::lazy(nested).optional())
    ///         .skip(exact(")"))
    ///         .done()
    ///         .map(|(inner,)| inner.map_or(1, |depth| depth + 1))
    /// }
    ///
    /// assert_eq!(lexer::run(&nested(), "((()))").into_value(), Ok(3));
    /// ```
    ///
    /// Recursion through `lazy` uses the native stack: a left-recursive
    /// grammar never consumes input and overflows.
    pub fn lazy(thunk: impl Fn() -> Rule<E, R> + 'static) -> Self {
        let built = OnceCell::new();
        Rule::of(move |input, pos| built.get_or_init(&thunk).apply(input, pos))
    }

    /// Define a rule in terms of itself.
    ///
    /// `define` receives a forward reference to the rule being built. The
    /// reference is weak: once the returned rule and all its clones are
    /// dropped, rules that kept only the forward reference reject.
    pub fn recursive(define: impl FnOnce(Rule<E, R>) -> Rule<E, R>) -> Self {
        let slot: Rc<OnceCell<Rule<E, R>>> = Rc::new(OnceCell::new());
        let weak = Rc::downgrade(&slot);

        let this = Rule::of(move |input, pos| {
            let Some(slot) = weak.upgrade() else {
                return RuleResult::reject("recursive rule used after it was dropped", pos);
            };
            match slot.get() {
                Some(rule) => rule.apply(input, pos),
                None => RuleResult::reject("recursive rule used before it was defined", pos),
            }
        });

        let body = define(this);
        let defined = slot.set(body).is_ok();
        debug_assert!(defined, "recursive slot is only set once");

        Rule::of(move |input, pos| match slot.get() {
            Some(rule) => rule.apply(input, pos),
            None => RuleResult::reject("recursive rule used before it was defined", pos),
        })
    }
}
