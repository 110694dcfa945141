//! Human-readable rendering of rule errors.

mod printer;
mod source_map;


use gramr_core::RuleErrors;

pub use printer::ErrorsPrinter;
pub use source_map::GraphemeMap;

/// Render the deepest errors of a lexer rule against its source text.
pub fn render(errors: &RuleErrors, source: &str) -> String {
    ErrorsPrinter::new(errors).source(source).render()
}
