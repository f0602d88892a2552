//! Output formatting
//!
//! CSV reports for piping and colored display for the terminal.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::print_explanation;
pub use report::{write_letters, write_positions, write_scores};
