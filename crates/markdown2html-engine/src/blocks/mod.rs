//! # Block Conversion
//!
//! Two-phase, line-at-a-time block handling.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each inline-transformed line is
//!    reduced to a `LineClass` of local facts (leading marker counts, blank
//!    status) without reference to surrounding lines.
//!
//! 2. **Block Construction** (`builder`): an `HtmlBuilder` holds the single
//!    open `BlockState` and emits open/close tags as blocks start and end.
//!
//! ## Modules
//!
//! - **`types`**: `BlockState`, the one-of-four open block
//! - **`kinds`**: block-specific markers and rendering (Heading, lists, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `HtmlBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one block is open at a time; opening a list closes anything else
//! - Blank lines change state but are never echoed
//! - At end of input, ordered lists and paragraphs are closed; unordered
//!   lists only when `ConvertOptions::close_unordered_at_eof` is set

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::HtmlBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::BlockState;
