mod heading;
mod list;
mod paragraph;

pub use heading::Heading;
pub use list::ListKind;
pub use paragraph::Paragraph;
