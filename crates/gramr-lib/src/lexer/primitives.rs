//! Text-level lexer primitives over grapheme sequences.

use std::collections::HashSet;

use gramr_core::{Recursive, RuleResult};

use super::{Grapheme, LexRule, feed};
use crate::rule::{Rule, out_of_range};

/// Graphemes [`whitespace`] accepts. CR LF segments as a single grapheme.
const WHITESPACE: [&str; 7] = [" ", "\t", "\n", "\r", "\r\n", "\u{b}", "\u{c}"];

/// Match `text` grapheme by grapheme at the cursor.
pub fn exact(text: impl AsRef<str>) -> LexRule<()> {
    exact_all([text])
}

/// Match the concatenation of `parts`.
///
/// The parts are joined before segmentation, so a combining mark at the start
/// of one part attaches to the last grapheme of the previous one.
pub fn exact_all<S: AsRef<str>>(parts: impl IntoIterator<Item = S>) -> LexRule<()> {
    let joined: String = parts.into_iter().map(|part| part.as_ref().to_owned()).collect();
    let expected = feed(&joined);

    Rule::of(move |input, pos| {
        let Some(end) = pos.checked_add(expected.len()) else {
            return RuleResult::reject(out_of_range(input.len(), pos), pos);
        };
        match input.source().get(pos..end) {
            Some(found) if found == expected.as_slice() => RuleResult::accept((), end),
            found => {
                let found = found.unwrap_or_else(|| input.source().get(pos..).unwrap_or_default());
                RuleResult::reject(
                    format!("expected {:?} got {:?}", joined, found.concat()),
                    pos,
                )
            }
        }
    })
}

/// One grapheme contained in `set`.
pub fn any_of(set: &str) -> LexRule<Grapheme> {
    let set: HashSet<Grapheme> = feed(set).into_iter().collect();
    Rule::next_if(move |grapheme: &Grapheme| set.contains(grapheme))
}

/// One grapheme not contained in `set`.
pub fn none_of(set: &str) -> LexRule<Grapheme> {
    let set: HashSet<Grapheme> = feed(set).into_iter().collect();
    Rule::next_if(move |grapheme: &Grapheme| !set.contains(grapheme))
}

/// Advance while `predicate` holds. Always succeeds, possibly zero-width.
pub fn skip_while(predicate: impl Fn(&str) -> bool + 'static) -> LexRule<()> {
    Rule::of(move |input, pos| {
        let end = scan(input.source(), pos, &predicate).run();
        RuleResult::accept((), end)
    })
}

fn scan<'a>(
    source: &'a [Grapheme],
    pos: usize,
    predicate: &'a dyn Fn(&str) -> bool,
) -> Recursive<'a, usize> {
    match source.get(pos) {
        Some(grapheme) if predicate(grapheme.as_str()) => {
            Recursive::next(move || scan(source, pos + 1, predicate))
        }
        _ => Recursive::done(pos),
    }
}

/// The text `rule` consumed, in place of its value.
pub fn slice<O: 'static>(rule: LexRule<O>) -> LexRule<String> {
    rule.slice().map(|graphemes| graphemes.concat())
}

/// Exactly one whitespace grapheme: space, tab, line feed, carriage return,
/// CR LF, vertical tab or form feed.
pub fn whitespace() -> LexRule<Grapheme> {
    Rule::next_if(|grapheme: &Grapheme| WHITESPACE.contains(&grapheme.as_str()))
}
