//! Rules over Unicode text.
//!
//! Text is split into extended grapheme clusters before matching, so a
//! multi-codepoint glyph (an emoji with modifiers, a letter with combining
//! marks, a CR LF pair) is one input element and is matched atomically.
//!
//! ```
//! use gramr_lib::lexer::{self, any_of, exact, skip_while};
//! use gramr_lib::{RepOptions, Rule};
//!
//! let word = lexer::slice(any_of("abcdefghijklmnopqrstuvwxyz").collect(RepOptions::at_least(1)));
//! let greeting = Rule::chain()
//!     .skip(exact("hello"))
//!     .skip(skip_while(|g| g == " "))
//!     .push(word)
//!     .done()
//!     .first();
//!
//! assert_eq!(lexer::run(&greeting, "hello   world").into_value().unwrap(), "world");
//! ```

mod primitives;
mod tokens;


use gramr_core::RuleResult;
use unicode_segmentation::UnicodeSegmentation;

use crate::rule::Rule;

pub use primitives::{any_of, exact, exact_all, none_of, skip_while, slice, whitespace};
pub use tokens::{Delimiter, create, delimiters, keyword};

/// One extended grapheme cluster.
pub type Grapheme = String;

pub type LexRule<O> = Rule<Grapheme, O>;

/// Split `text` into the element sequence lexer rules consume.
pub fn feed(text: &str) -> Vec<Grapheme> {
    text.graphemes(true).map(str::to_owned).collect()
}

/// Apply `rule` to `text` from its first grapheme.
pub fn run<O: 'static>(rule: &LexRule<O>, text: &str) -> RuleResult<O> {
    rule.run(&feed(text))
}

/// Succeeds only after the last grapheme.
pub fn end() -> LexRule<()> {
    Rule::end()
}
