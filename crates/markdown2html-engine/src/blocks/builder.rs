use crate::convert::ConvertOptions;

use super::{
    classify::LineClass,
    kinds::{Heading, ListKind, Paragraph},
    types::BlockState,
};

/// State machine turning classified lines into bracketed HTML lines.
///
/// Output accumulates in an internal buffer. Callers streaming output call
/// [`take_output`](Self::take_output) after each [`push`](Self::push).
pub struct HtmlBuilder {
    state: BlockState,
    options: ConvertOptions,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            state: BlockState::None,
            options,
            out: vec![],
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        let mut line = None;

        if let Some(level) = c.heading_level() {
            if self.options.close_paragraph_before_heading && self.state == BlockState::Paragraph {
                self.close();
            }
            line = Some(Heading::render(level, c.text));
        }

        for kind in [ListKind::Unordered, ListKind::Ordered] {
            if c.marks(kind) > 0 {
                if self.state != kind.state() {
                    self.close();
                    self.open(kind.state());
                }
                line = Some(kind.render_item(c.text));
            } else if self.state == kind.state() {
                self.close();
            }
        }

        // Any leading `#`, even past the heading range, keeps the line out
        // of paragraph handling.
        if c.heading_marks == 0 && !self.state.is_list() {
            self.push_paragraph_line(c.is_blank);
        }

        if !c.is_blank {
            self.out.push(line.unwrap_or_else(|| c.text.to_string()));
        }
    }

    /// Drains the lines emitted so far.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.out)
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush. An unordered list stays open unless asked otherwise.
        match self.state {
            BlockState::OrderedList | BlockState::Paragraph => self.close(),
            BlockState::UnorderedList if self.options.close_unordered_at_eof => self.close(),
            BlockState::UnorderedList => {
                log::debug!("leaving unordered list open at end of input");
            }
            BlockState::None => {}
        }
        self.out
    }

    fn push_paragraph_line(&mut self, is_blank: bool) {
        match (is_blank, self.state) {
            (false, BlockState::Paragraph) => self.out.push(Paragraph::LINE_BREAK.to_string()),
            (false, _) => self.open(BlockState::Paragraph),
            (true, BlockState::Paragraph) => self.close(),
            (true, _) => {}
        }
    }

    fn open(&mut self, state: BlockState) {
        log::debug!("open {state:?}");
        if let Some(tag) = state.open_tag() {
            self.out.push(tag.to_string());
        }
        self.state = state;
    }

    fn close(&mut self) {
        let prev = std::mem::replace(&mut self.state, BlockState::None);
        if let Some(tag) = prev.close_tag() {
            log::debug!("close {prev:?}");
            self.out.push(tag.to_string());
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}
