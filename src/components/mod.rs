//! UI components for the submission window

mod button;
mod feedback;
pub mod forms;

pub use button::*;
pub use feedback::*;
pub use forms::*;
