use std::io::{self, BufRead, Write};

use crate::blocks::{HtmlBuilder, MarkdownLineClassifier};
use crate::inline::transform_line;

/// Switches for the two places where the converter deliberately deviates
/// from balanced HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Emit `</ul>` for an unordered list still open at end of input.
    pub close_unordered_at_eof: bool,
    /// Emit `</p>` before a heading that interrupts a paragraph.
    pub close_paragraph_before_heading: bool,
}

/// One conversion run: owns the block state from first line to last.
pub struct Converter {
    classifier: MarkdownLineClassifier,
    builder: HtmlBuilder,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            builder: HtmlBuilder::new(options),
        }
    }

    /// Feeds one line (without its terminator) and returns the HTML lines it produced.
    pub fn push_line(&mut self, raw: &str) -> Vec<String> {
        let line = transform_line(raw);
        let class = self.classifier.classify(&line);
        log::trace!("{:?} {line:?}", class.kind());
        self.builder.push(&class);
        self.builder.take_output()
    }

    /// Ends the run, returning closing tags for whatever is still open.
    pub fn finish(self) -> Vec<String> {
        self.builder.finish()
    }

    /// Streams `reader` to `writer`, writing each output line before the
    /// next input line is read.
    pub fn convert<R: BufRead, W: Write>(mut self, reader: R, writer: &mut W) -> io::Result<()> {
        for line in reader.lines() {
            for out in self.push_line(&line?) {
                writeln!(writer, "{out}")?;
            }
        }
        for out in self.finish() {
            writeln!(writer, "{out}")?;
        }
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

/// Converts an in-memory document with default options.
pub fn convert_str(input: &str) -> String {
    convert_with_options(input, ConvertOptions::default())
}

pub fn convert_with_options(input: &str, options: ConvertOptions) -> String {
    let mut converter = Converter::new(options);
    let mut html = String::with_capacity(input.len() * 2);
    for line in input.lines() {
        for out in converter.push_line(line) {
            html.push_str(&out);
            html.push('\n');
        }
    }
    for out in converter.finish() {
        html.push_str(&out);
        html.push('\n');
    }
    html
}
