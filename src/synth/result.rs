//! Synthesis result types and statistics

use crate::ir::FlagAssignment;
use crate::problem::IoPair;
use std::fmt;
use std::time::Duration;

/// What the solver concluded about the synthesis constraint
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisOutcome {
    /// A satisfying flag assignment was found
    Solved(FlagAssignment),
    /// No flag assignment satisfies every pair
    Unsatisfiable,
    /// Could not determine (timeout, unknown, etc.)
    Unknown(String),
}

/// Result of a synthesis run
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// The solver's verdict
    pub outcome: SynthesisOutcome,
    /// The pairs the formula was built from
    pub pairs: Vec<IoPair>,
    /// Statistics from the run
    pub statistics: SynthesisStatistics,
}

impl SynthesisResult {
    /// The satisfying assignment, if one was found
    pub fn assignment(&self) -> Option<&FlagAssignment> {
        match &self.outcome {
            SynthesisOutcome::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

/// Statistics from a synthesis run
#[derive(Debug, Clone, Default)]
pub struct SynthesisStatistics {
    /// Total time spent building and solving
    pub elapsed_time: Duration,
    /// Number of pairs constrained
    pub pairs_constrained: usize,
    /// Number of selector unknowns in the formula
    pub selector_flags: usize,
    /// Whether the exactly-one constraint was asserted
    pub exclusive: bool,
}

impl fmt::Display for SynthesisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SynthesisOutcome::Solved(assignment) => {
                writeln!(f, "Synthesis succeeded!")?;
                writeln!(f, "Flag model:")?;
                for (i, value) in assignment.0.iter().enumerate() {
                    writeln!(f, "  b{} = {}", i, u8::from(*value))?;
                }
                write!(f, "Synthesized function: {}", assignment)
            }
            SynthesisOutcome::Unsatisfiable => write!(
                f,
                "No flag assignment satisfies all {} pairs (unsatisfiable).",
                self.pairs.len()
            ),
            SynthesisOutcome::Unknown(reason) => {
                write!(f, "Solver could not decide: {}", reason)
            }
        }
    }
}
