//! # Inline Transformation
//!
//! Per-line substitutions applied before a line is classified.
//!
//! Order matters and is fixed:
//!
//! 1. `**bold**` → `<b>bold</b>`
//! 2. `__italic__` → `<em>italic</em>`
//! 3. `[[text]]` → hex MD5 digest of `text`
//! 4. `((text))` → `text` without any `C`/`c`
//!
//! Each step rewrites only the first occurrence it finds. Unterminated
//! delimiters are left in place; nothing here can fail.

pub mod cursor;
pub mod kinds;
pub mod scan;
pub mod types;

pub use kinds::{Emphasis, HashDirective, StripDirective};
pub use types::{DirectiveMatch, Span};

/// Resolves inline markup in one line (without its line terminator).
pub fn transform_line(line: &str) -> String {
    let line = Emphasis::Bold.apply(line);
    let line = Emphasis::Italic.apply(&line);
    let line = HashDirective::apply(&line);
    StripDirective::apply(&line)
}
