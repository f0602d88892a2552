//! Core domain types
//!
//! Pure value types shared by the scoring tables, loaders and commands.

mod word;

pub use word::{Word, WordError};
