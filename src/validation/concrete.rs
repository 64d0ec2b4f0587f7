//! Concrete re-evaluation of a flag assignment against observed pairs
//!
//! The solver's model is taken on trust nowhere: every successful solve is
//! re-checked by evaluating the gated term sum with plain wrapping 64-bit
//! arithmetic, which mirrors the bit-vector semantics of the formula.

use crate::ir::FlagAssignment;
use crate::problem::IoPair;
use std::fmt;

/// A pair the assignment fails to reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// The offending observation
    pub pair: IoPair,
    /// What the assignment actually evaluates to
    pub actual: u64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}): expected {}, got {}",
            self.pair.x, self.pair.y, self.pair.ans, self.actual
        )
    }
}

/// Check the assignment against every pair, returning the first mismatch
pub fn verify_assignment(
    assignment: &FlagAssignment,
    pairs: &[IoPair],
) -> Result<(), Mismatch> {
    for pair in pairs {
        let actual = assignment.eval(pair.x, pair.y);
        if actual != pair.ans {
            return Err(Mismatch {
                pair: *pair,
                actual,
            });
        }
    }
    Ok(())
}
