//! Gramr: composable parser combinators over any element type.
//!
//! Rules are built from small pieces and run over a slice of elements:
//! graphemes for lexers, tokens for grammars.
//!
//! # Example
//!
//! ```
//! use gramr_lib::lexer::{self, any_of, exact, slice};
//! use gramr_lib::{RepOptions, Rule};
//!
//! let digits = slice(any_of("0123456789").collect(RepOptions::at_least(1)));
//! let list = Rule::chain()
//!     .skip(exact("["))
//!     .push(
//!         digits
//!             .map(|d| d.parse::<u32>().unwrap_or(0))
//!             .collect(RepOptions::new().separated_by(exact(","))),
//!     )
//!     .skip(exact("]"))
//!     .skip(lexer::end())
//!     .done()
//!     .first();
//!
//! assert_eq!(lexer::run(&list, "[1,22,333]").into_value().unwrap(), [1, 22, 333]);
//!
//! let errors = lexer::run(&list, "[1,22;333]").into_value().unwrap_err();
//! eprintln!("{}", gramr_lib::diagnostics::render(&errors, "[1,22;333]"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod rule;

#[cfg(test)]
mod tests;

pub use diagnostics::ErrorsPrinter;
pub use gramr_core::{Context, Error, Recursive, RuleError, RuleErrors, RuleResult};
pub use rule::{Chain, Input, RepOptions, Rule, Spanned};
