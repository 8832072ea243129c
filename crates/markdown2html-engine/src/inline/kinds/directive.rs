use md5::{Digest, Md5};

use crate::inline::{scan::find_delimited, types::DirectiveMatch};

/// `[[text]]` is replaced by the hex MD5 digest of `text`.
pub struct HashDirective;

impl HashDirective {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";

    pub fn find(line: &str) -> Option<DirectiveMatch> {
        find_delimited(line, Self::OPEN, Self::CLOSE)
    }

    pub fn digest(content: &str) -> String {
        hex::encode(Md5::digest(content.as_bytes()))
    }

    pub fn apply(line: &str) -> String {
        match Self::find(line) {
            Some(m) => {
                let digest = Self::digest(m.text(line));
                log::trace!("hash directive {:?} -> {digest}", m.text(line));
                m.splice(line, &digest)
            }
            None => line.to_string(),
        }
    }
}

/// `((text))` is replaced by `text` with every `C` and `c` removed.
pub struct StripDirective;

impl StripDirective {
    pub const OPEN: &'static [u8; 2] = b"((";
    pub const CLOSE: &'static [u8; 2] = b"))";
    pub const STRIPPED: [char; 2] = ['C', 'c'];

    pub fn find(line: &str) -> Option<DirectiveMatch> {
        find_delimited(line, Self::OPEN, Self::CLOSE)
    }

    pub fn strip(content: &str) -> String {
        content.replace(Self::STRIPPED, "")
    }

    pub fn apply(line: &str) -> String {
        match Self::find(line) {
            Some(m) => {
                let stripped = Self::strip(m.text(line));
                log::trace!("strip directive {:?} -> {stripped:?}", m.text(line));
                m.splice(line, &stripped)
            }
            None => line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_replaces_whole_span_with_digest() {
        assert_eq!(
            HashDirective::apply("[[Holberton School]]"),
            "a9db2c79fdf885e3f670a4b347f83057"
        );
    }

    #[test]
    fn hash_keeps_surrounding_text() {
        assert_eq!(
            HashDirective::apply("id: [[Hi]]!"),
            "id: c1a5298f939e87e8f962a5edfc206918!"
        );
    }

    #[test]
    fn hash_only_first_match() {
        assert_eq!(
            HashDirective::apply("[[a]] [[a]]"),
            "0cc175b9c0f1b6a831c399e269772661 [[a]]"
        );
    }

    #[test]
    fn hash_unterminated_passes_through() {
        assert_eq!(HashDirective::apply("[[open only"), "[[open only");
    }

    #[test]
    fn hash_empty_content_is_not_a_directive() {
        assert_eq!(HashDirective::apply("[[]]"), "[[]]");
    }

    #[test]
    fn strip_removes_both_cases() {
        assert_eq!(
            StripDirective::apply("((Holberton School))"),
            "Holberton Shool"
        );
        assert_eq!(StripDirective::apply("((Chicago))"), "hiago");
    }

    #[test]
    fn strip_only_first_match() {
        assert_eq!(StripDirective::apply("((cat)) ((cat))"), "at ((cat))");
    }

    #[test]
    fn strip_without_directive_is_untouched() {
        assert_eq!(StripDirective::apply("(just parens)"), "(just parens)");
    }
}
