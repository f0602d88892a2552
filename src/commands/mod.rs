//! Command implementations

pub mod explain;
pub mod scores;

pub use explain::{Explanation, PositionDetail, explain_word};
pub use scores::score_dictionary;
