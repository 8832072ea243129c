pub struct Paragraph;

impl Paragraph {
    /// Soft break emitted between consecutive lines of one paragraph.
    pub const LINE_BREAK: &'static str = "<br/>";
}
