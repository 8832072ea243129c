pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Maps a leading `#` count to a heading level, if it is one.
    pub fn level(marks: usize) -> Option<u8> {
        u8::try_from(marks)
            .ok()
            .filter(|level| (1..=Self::MAX_LEVEL).contains(level))
    }

    pub fn render(level: u8, text: &str) -> String {
        let title = text.trim_start_matches(Self::MARKER).trim();
        format!("<h{level}>{title}</h{level}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(1))]
    #[case(6, Some(6))]
    #[case(7, None)]
    #[case(300, None)]
    fn level_range(#[case] marks: usize, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(marks), expected);
    }

    #[test]
    fn render_trims_marker_and_whitespace() {
        assert_eq!(Heading::render(2, "##   Spaced out  "), "<h2>Spaced out</h2>");
    }

    #[test]
    fn render_without_space_after_marker() {
        assert_eq!(Heading::render(1, "#Tight"), "<h1>Tight</h1>");
    }
}
