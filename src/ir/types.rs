//! Core types for the candidate-term vocabulary
//!
//! The unknown function is known to be built from multiplication and
//! left-shift applied to its two inputs in some order. That gives exactly
//! four candidate terms, one per selector flag.

use std::fmt;

/// Operators the unknown function may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Multiplication
    Mul,
    /// Logical left shift
    Shl,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Mul => write!(f, "*"),
            Op::Shl => write!(f, "<<"),
        }
    }
}

/// Argument order for a two-argument candidate term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgOrder {
    /// First input on the left: `x op y`
    Xy,
    /// Second input on the left: `y op x`
    Yx,
}

/// A candidate term: one operator applied to the inputs in one order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub op: Op,
    pub order: ArgOrder,
}

impl Term {
    /// All four candidate terms, in selector flag order
    pub const ALL: [Term; 4] = [
        Term {
            op: Op::Mul,
            order: ArgOrder::Xy,
        },
        Term {
            op: Op::Mul,
            order: ArgOrder::Yx,
        },
        Term {
            op: Op::Shl,
            order: ArgOrder::Xy,
        },
        Term {
            op: Op::Shl,
            order: ArgOrder::Yx,
        },
    ];

    /// Evaluate the term with wrapping 64-bit semantics.
    ///
    /// Shift amounts of 64 or more yield 0, matching Z3's `bvshl` on
    /// 64-bit bit-vectors.
    pub fn eval(&self, x: u64, y: u64) -> u64 {
        let (lhs, rhs) = match self.order {
            ArgOrder::Xy => (x, y),
            ArgOrder::Yx => (y, x),
        };
        match self.op {
            Op::Mul => lhs.wrapping_mul(rhs),
            Op::Shl => u32::try_from(rhs)
                .ok()
                .and_then(|shift| lhs.checked_shl(shift))
                .unwrap_or(0),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            ArgOrder::Xy => write!(f, "x {} y", self.op),
            ArgOrder::Yx => write!(f, "y {} x", self.op),
        }
    }
}

/// A concrete assignment to the four selector flags, in `Term::ALL` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagAssignment(pub [bool; 4]);

impl FlagAssignment {
    /// The candidate terms this assignment selects
    pub fn selected_terms(&self) -> Vec<Term> {
        Term::ALL
            .iter()
            .zip(self.0.iter())
            .filter(|(_, selected)| **selected)
            .map(|(term, _)| *term)
            .collect()
    }

    /// Evaluate the gated sum of selected terms for one input pair
    pub fn eval(&self, x: u64, y: u64) -> u64 {
        self.selected_terms()
            .iter()
            .fold(0u64, |sum, term| sum.wrapping_add(term.eval(x, y)))
    }
}

impl fmt::Display for FlagAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.selected_terms();
        if terms.is_empty() {
            return write!(f, "f(x, y) = 0");
        }

        write!(f, "f(x, y) = ")?;
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
