//! Concrete validation of synthesized assignments

pub mod concrete;

pub use concrete::{Mismatch, verify_assignment};
