//! Helpers for grammars over token sequences.
//!
//! A token grammar is an ordinary [`Rule`] whose element type is the token
//! type a [`lexer::create`](crate::lexer::create) rule produces. These
//! helpers cover the patterns every such grammar needs.


use std::fmt::Debug;

use crate::rule::Rule;

/// Succeeds only after the last token.
pub fn end<T: Debug + 'static>() -> Rule<T, ()> {
    Rule::end()
}

/// `rule` between `open` and `close`, keeping only `rule`'s value.
pub fn enclose<T: 'static, O: 'static, C: 'static, R: 'static>(
    open: Rule<T, O>,
    close: Rule<T, C>,
    rule: Rule<T, R>,
) -> Rule<T, R> {
    Rule::chain().skip(open).push(rule).skip(close).done().first()
}

/// One token equal to `expected`.
pub fn token<T>(expected: T) -> Rule<T, T>
where
    T: PartialEq + Debug + Clone + 'static,
{
    Rule::next_as(move |found: &T| {
        if *found == expected {
            Ok(found.clone())
        } else {
            Err(format!("expected {expected:?}, got {found:?}"))
        }
    })
}

/// One token satisfying `predicate`; `description` names it in errors.
pub fn token_where<T>(
    description: impl Into<String>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Rule<T, T>
where
    T: Debug + Clone + 'static,
{
    let description = description.into();
    Rule::next_as(move |found: &T| {
        if predicate(found) {
            Ok(found.clone())
        } else {
            Err(format!("expected {description}, got {found:?}"))
        }
    })
}
