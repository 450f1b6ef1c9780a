//! Form input components

mod file_input;
mod text_input;

pub use file_input::*;
pub use text_input::*;
