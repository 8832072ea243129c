pub mod blocks;
pub mod convert;
pub mod inline;
pub mod io;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, Converter, convert_str, convert_with_options};
pub use io::*;
