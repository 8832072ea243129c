/// Inline emphasis styles, each delimited by a two-character token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    pub const BOLD_TOKEN: &'static str = "**";
    pub const ITALIC_TOKEN: &'static str = "__";

    pub fn token(self) -> &'static str {
        match self {
            Emphasis::Bold => Self::BOLD_TOKEN,
            Emphasis::Italic => Self::ITALIC_TOKEN,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "<b>",
            Emphasis::Italic => "<em>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "</b>",
            Emphasis::Italic => "</em>",
        }
    }

    /// Rewrites the first two occurrences of the token as an open/close pair.
    ///
    /// The closing token is searched for after the opening one. A lone token
    /// becomes an unmatched opening tag; later occurrences are left as is.
    pub fn apply(self, line: &str) -> String {
        let token = self.token();
        let Some(first) = line.find(token) else {
            return line.to_string();
        };

        let mut out = String::with_capacity(line.len() + 9);
        out.push_str(&line[..first]);
        out.push_str(self.open_tag());

        let rest = &line[first + token.len()..];
        match rest.find(token) {
            Some(next) => {
                out.push_str(&rest[..next]);
                out.push_str(self.close_tag());
                out.push_str(&rest[next + token.len()..]);
            }
            None => out.push_str(rest),
        }
        out
    }
}
