//! The four shared selector unknowns
//!
//! The same four boolean handles appear in every per-pair constraint. A
//! single assignment must satisfy all pairs at once, which is what forces
//! the solver to discover the function's structure rather than fitting
//! each pair separately.

use crate::ir::FlagAssignment;
use z3::Model;
use z3::ast::{BV, Bool};

/// Bit width used for all arithmetic in the formula
pub const WORD_BITS: u32 = 64;

/// Four boolean unknowns, one per candidate term in `Term::ALL` order
pub struct SelectorFlags {
    flags: [Bool; 4],
}

impl SelectorFlags {
    /// Create fresh selector unknowns with the given name prefix
    pub fn new_symbolic(prefix: &str) -> Self {
        Self {
            flags: std::array::from_fn(|i| Bool::new_const(format!("{}_b{}", prefix, i))),
        }
    }

    /// Number of selector unknowns
    pub fn count(&self) -> usize {
        self.flags.len()
    }

    /// Gate a term's symbolic value: the term when the flag is set, zero otherwise
    pub fn gate(&self, index: usize, term: &BV) -> BV {
        let zero = BV::from_u64(0, WORD_BITS);
        self.flags[index].ite(term, &zero)
    }

    /// Exactly one flag is set: at least one, and no two together
    pub fn exactly_one(&self) -> Bool {
        let refs: Vec<&Bool> = self.flags.iter().collect();
        let mut constraint = Bool::or(&refs);
        for i in 0..self.flags.len() {
            for j in (i + 1)..self.flags.len() {
                constraint &= Bool::and(&[&self.flags[i], &self.flags[j]]).not();
            }
        }
        constraint
    }

    /// Extract a concrete assignment from a satisfying model
    pub fn extract_from_model(&self, model: &Model) -> Option<FlagAssignment> {
        let mut values = [false; 4];
        for (value, flag) in values.iter_mut().zip(self.flags.iter()) {
            *value = model.eval(flag, true)?.as_bool()?;
        }
        Some(FlagAssignment(values))
    }
}
