//! Grapheme positions mapped to byte offsets.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Grapheme index to byte offset table for one source text.
///
/// Lexer positions count graphemes; renderers need byte offsets.
#[derive(Debug, Clone)]
pub struct GraphemeMap {
    starts: Vec<usize>,
    len: usize,
}

impl GraphemeMap {
    pub fn new(text: &str) -> Self {
        Self {
            starts: text.grapheme_indices(true).map(|(at, _)| at).collect(),
            len: text.len(),
        }
    }

    /// Number of graphemes in the text.
    pub fn count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where grapheme `index` starts; the text length past the end.
    pub fn offset(&self, index: usize) -> usize {
        self.starts.get(index).copied().unwrap_or(self.len)
    }

    /// Byte range covering `graphemes`.
    ///
    /// An empty range widens to the grapheme it points at, so a position can
    /// be underlined. At the end of the text it stays empty.
    pub fn byte_range(&self, graphemes: Range<usize>) -> Range<usize> {
        let start = self.offset(graphemes.start);
        let end = if graphemes.end > graphemes.start {
            self.offset(graphemes.end)
        } else {
            self.offset(graphemes.start.saturating_add(1))
        };
        start..end.max(start)
    }
}
