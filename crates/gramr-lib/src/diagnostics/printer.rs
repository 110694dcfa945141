//! Builder-pattern printer for rendering rule errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use gramr_core::{RuleError, RuleErrors};

use super::source_map::GraphemeMap;

/// Builder for rendering [`RuleErrors`] with various options.
///
/// Without a source text the errors are printed one per line through their
/// `Display`. With one, each error becomes an annotated excerpt.
///
/// Positions are grapheme indices into the source by default. For errors
/// from a token grammar, pass the grapheme span of every token with
/// [`token_spans`](Self::token_spans) (see [`Rule::spanned`](crate::Rule::spanned)).
pub struct ErrorsPrinter<'e, 's> {
    errors: &'e RuleErrors,
    source: Option<&'s str>,
    path: Option<&'s str>,
    token_spans: Option<&'s [Range<usize>]>,
    colored: bool,
    filtered: bool,
}

impl<'e, 's> ErrorsPrinter<'e, 's> {
    pub fn new(errors: &'e RuleErrors) -> Self {
        Self {
            errors,
            source: None,
            path: None,
            token_spans: None,
            colored: false,
            filtered: true,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn token_spans(mut self, spans: &'s [Range<usize>]) -> Self {
        self.token_spans = Some(spans);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Only print the deepest errors, once each (the default), or all of them.
    pub fn filtered(mut self, value: bool) -> Self {
        self.filtered = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let selected = self.selected();

        let Some(source) = self.source else {
            return format_plain(&selected, w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        let map = GraphemeMap::new(source);

        for (i, error) in selected.iter().enumerate() {
            let range = map.byte_range(self.grapheme_range(error.pos()));
            let title = error.labelled_message();

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(error.message()));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let report = vec![Level::ERROR.primary_title(&title).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn selected(&self) -> Vec<RuleError> {
        if self.filtered {
            self.errors.filtered()
        } else {
            self.errors.iter().cloned().collect()
        }
    }

    /// Graphemes the error position refers to.
    fn grapheme_range(&self, pos: usize) -> Range<usize> {
        let Some(spans) = self.token_spans else {
            return pos..pos.saturating_add(1);
        };
        match spans.get(pos) {
            Some(span) => span.clone(),
            None => {
                let end = spans.last().map_or(0, |span| span.end);
                end..end
            }
        }
    }
}

fn format_plain(errors: &[RuleError], w: &mut impl Write) -> std::fmt::Result {
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            w.write_char('\n')?;
        }
        write!(w, "{}", error)?;
    }
    Ok(())
}
