/// A cursor for byte-by-byte scanning of a single line.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one whole character, returning it.
    ///
    /// Only valid when the cursor sits on a char boundary.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves to the next occurrence of `pat`, leaving the cursor on its
    /// first byte. Returns false (and leaves the cursor at EOF) if there is none.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            self.bump();
        }
        false
    }
}
