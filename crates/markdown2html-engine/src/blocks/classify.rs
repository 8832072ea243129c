use super::kinds::{Heading, ListKind};

/// Local facts about a single, already inline-transformed line.
///
/// Marker counts are computed independently; the builder decides which
/// rules fire. A line can carry at most one non-zero count since each
/// counts a different leading character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Line text without its terminator.
    pub text: &'a str,
    /// No characters before the terminator. A `\r\n` blank line is blank;
    /// a whitespace-only or one-character unterminated line is not.
    pub is_blank: bool,
    /// Leading `#` count. May exceed the heading range.
    pub heading_marks: usize,
    /// Leading `-` count.
    pub dash_marks: usize,
    /// Leading `*` count.
    pub star_marks: usize,
}

/// What a line turns into, ignoring block state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading(u8),
    UnorderedItem,
    OrderedItem,
    Blank,
    Text,
}

impl LineClass<'_> {
    pub fn heading_level(&self) -> Option<u8> {
        Heading::level(self.heading_marks)
    }

    pub fn marks(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Unordered => self.dash_marks,
            ListKind::Ordered => self.star_marks,
        }
    }

    pub fn kind(&self) -> LineKind {
        if let Some(level) = self.heading_level() {
            LineKind::Heading(level)
        } else if self.dash_marks > 0 {
            LineKind::UnorderedItem
        } else if self.star_marks > 0 {
            LineKind::OrderedItem
        } else if self.is_blank {
            LineKind::Blank
        } else {
            LineKind::Text
        }
    }
}

/// Classifies individual lines for the block state machine.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, text: &'a str) -> LineClass<'a> {
        LineClass {
            text,
            is_blank: text.is_empty(),
            heading_marks: leading(text, Heading::MARKER),
            dash_marks: leading(text, ListKind::Unordered.marker()),
            star_marks: leading(text, ListKind::Ordered.marker()),
        }
    }
}

fn leading(text: &str, marker: char) -> usize {
    text.len() - text.trim_start_matches(marker).len()
}
