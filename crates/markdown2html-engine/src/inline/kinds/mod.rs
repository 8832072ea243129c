mod directive;
mod emphasis;

pub use directive::{HashDirective, StripDirective};
pub use emphasis::Emphasis;
