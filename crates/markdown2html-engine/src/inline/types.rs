use std::ops::Range;

/// A byte range inside a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// A delimited directive found in a line, e.g. `[[text]]`.
///
/// Borrows nothing: both spans index into the line that was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveMatch {
    /// Full span including both delimiters.
    pub full: Span,
    /// Content between the delimiters. Never empty.
    pub content: Span,
}

impl DirectiveMatch {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.content.range()]
    }

    /// Returns `line` with the matched span replaced by `replacement`.
    pub fn splice(&self, line: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(line.len() + replacement.len());
        out.push_str(&line[..self.full.start]);
        out.push_str(replacement);
        out.push_str(&line[self.full.end..]);
        out
    }
}
