use super::{
    cursor::Cursor,
    types::{DirectiveMatch, Span},
};

/// Finds the first `open content close` span in `line`, shortest content first.
///
/// Content must be at least one character. If the first opener has no
/// closer after it, no later opener can have one either, so the scan stops
/// there and returns `None`.
pub fn find_delimited(line: &str, open: &[u8], close: &[u8]) -> Option<DirectiveMatch> {
    let mut cur = Cursor::new(line);
    if !cur.seek(open) {
        return None;
    }

    let start = cur.pos();
    cur.bump_n(open.len());
    let content_start = cur.pos();

    // Content is never empty, so the closer may not start right here
    cur.bump_char()?;
    if !cur.seek(close) {
        return None;
    }
    let content_end = cur.pos();
    cur.bump_n(close.len());

    Some(DirectiveMatch {
        full: Span {
            start,
            end: cur.pos(),
        },
        content: Span {
            start: content_start,
            end: content_end,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(line: &str) -> Option<DirectiveMatch> {
        find_delimited(line, b"[[", b"]]")
    }

    #[test]
    fn finds_simple_span() {
        let m = find("x [[abc]] y").unwrap();
        assert_eq!(m.full, Span { start: 2, end: 9 });
        assert_eq!(m.content, Span { start: 4, end: 7 });
    }

    #[test]
    fn non_greedy_stops_at_first_closer() {
        let line = "[[a]] and [[b]]";
        let m = find(line).unwrap();
        assert_eq!(m.text(line), "a");
        assert_eq!(m.full, Span { start: 0, end: 5 });
    }

    #[test]
    fn first_content_char_may_be_a_bracket() {
        let line = "[[]]]";
        let m = find(line).unwrap();
        assert_eq!(m.text(line), "]");
        assert_eq!(m.full, Span { start: 0, end: 5 });
    }

    #[test]
    fn nested_opener_is_part_of_content() {
        let line = "[[[a]]";
        let m = find(line).unwrap();
        assert_eq!(m.text(line), "[a");
    }

    #[test]
    fn multibyte_content() {
        let line = "[[é]]";
        let m = find(line).unwrap();
        assert_eq!(m.text(line), "é");
    }

    #[test]
    fn empty_content_does_not_match() {
        assert!(find("[[]]").is_none());
    }

    #[test]
    fn unclosed_does_not_match() {
        assert!(find("[[never closed").is_none());
        assert!(find("closer only]]").is_none());
    }
}
