//! Term-level model of the function being synthesized

pub mod types;

// Re-export commonly used types
pub use types::{ArgOrder, FlagAssignment, Op, Term};
