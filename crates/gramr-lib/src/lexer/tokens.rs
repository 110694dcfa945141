//! Token-stream assembly.

use super::{LexRule, end, exact};
use crate::rule::{RepOptions, Rule};

/// Opening or closing half of a delimiter pair of kind `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter<K> {
    Open(K),
    Close(K),
}

/// `tag` whenever `display` matches exactly.
pub fn keyword<T: Clone + 'static>(tag: T, display: &str) -> LexRule<T> {
    exact(display).to(tag)
}

/// Open/close keyword rules sharing one delimiter kind.
///
/// ```
/// use gramr_lib::lexer::{self, Delimiter, delimiters};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Paren;
///
/// let (open, close) = delimiters(Paren, "(", ")");
/// assert_eq!(lexer::run(&open, "(").into_value(), Ok(Delimiter::Open(Paren)));
/// assert_eq!(lexer::run(&close, ")").into_value(), Ok(Delimiter::Close(Paren)));
/// ```
pub fn delimiters<K: Clone + 'static>(
    kind: K,
    open: &str,
    close: &str,
) -> (LexRule<Delimiter<K>>, LexRule<Delimiter<K>>) {
    (
        keyword(Delimiter::Open(kind.clone()), open),
        keyword(Delimiter::Close(kind), close),
    )
}

/// A lexer turning a whole text into a token sequence.
///
/// `ignore` (zero-width when `None`) is skipped before the first token and
/// between tokens, never after the last one. At each token position every rule
/// in `tokens` is tried and the longest match wins; a token that consumes
/// nothing is rejected. The whole input must be consumed.
///
/// # Panics
///
/// Panics if `tokens` is empty.
pub fn create<T: 'static>(
    tokens: impl IntoIterator<Item = LexRule<T>>,
    ignore: Option<LexRule<()>>,
) -> LexRule<Vec<T>> {
    let ignore = ignore.unwrap_or_else(|| Rule::accept(()));
    let token = Rule::fork(tokens).non_empty();

    Rule::chain()
        .skip(ignore.clone())
        .push(token.collect(RepOptions::new().separated_by(ignore)))
        .skip(end())
        .done()
        .first()
}
