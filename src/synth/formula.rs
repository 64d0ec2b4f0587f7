//! Constraint construction for the synthesis formula
//!
//! For each observed pair `(x, y) -> ans` the builder asserts that the gated
//! sum of the four candidate terms equals `ans`:
//!
//! ```text
//! ite(b0, x*y, 0) + ite(b1, y*x, 0) + ite(b2, x<<y, 0) + ite(b3, y<<x, 0) == ans
//! ```
//!
//! All arithmetic is over 64-bit bit-vectors, and the per-pair constraints
//! are conjoined into one formula over the shared selector flags.

use crate::ir::{ArgOrder, Op, Term};
use crate::problem::IoPair;
use crate::synth::flags::{SelectorFlags, WORD_BITS};
use z3::ast::{BV, Bool};

/// Symbolic value of one candidate term for a concrete input pair
fn term_value(term: Term, pair: &IoPair) -> BV {
    let x = BV::from_u64(pair.x, WORD_BITS);
    let y = BV::from_u64(pair.y, WORD_BITS);
    let (lhs, rhs) = match term.order {
        ArgOrder::Xy => (x, y),
        ArgOrder::Yx => (y, x),
    };
    match term.op {
        Op::Mul => lhs.bvmul(&rhs),
        Op::Shl => lhs.bvshl(&rhs),
    }
}

/// Build the constraint for a single pair: the gated sum of all four
/// candidate terms equals the expected output
pub fn pair_constraint(flags: &SelectorFlags, pair: &IoPair) -> Bool {
    let mut sum = BV::from_u64(0, WORD_BITS);
    for (i, term) in Term::ALL.iter().enumerate() {
        sum = sum.bvadd(&flags.gate(i, &term_value(*term, pair)));
    }
    sum.eq(&BV::from_u64(pair.ans, WORD_BITS))
}

/// Conjoin the per-pair constraints over all pairs.
///
/// The same flag handles appear in every conjunct. An empty pair list
/// yields `true`: with nothing to violate, any assignment satisfies it.
pub fn build_formula(flags: &SelectorFlags, pairs: &[IoPair]) -> Bool {
    let mut formula = Bool::from_bool(true);
    for pair in pairs {
        formula &= pair_constraint(flags, pair);
    }
    formula
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::builtin_pairs;
    use z3::{SatResult, Solver};

    #[test]
    fn test_builtin_problem_is_satisfiable() {
        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();

        solver.assert(&build_formula(&flags, &builtin_pairs()));
        assert_eq!(solver.check(), SatResult::Sat);

        let model = solver.get_model().unwrap();
        let assignment = flags.extract_from_model(&model).unwrap();

        // Whatever the solver picked must reproduce every output
        for pair in builtin_pairs() {
            assert_eq!(assignment.eval(pair.x, pair.y), pair.ans);
        }
    }

    #[test]
    fn test_known_solution_satisfies_builtin_problem() {
        // f(x, y) = y << x reproduces all five built-in outputs
        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();

        solver.assert(&build_formula(&flags, &builtin_pairs()));
        solver.assert(&flags.exactly_one());
        assert_eq!(solver.check(), SatResult::Sat);

        let model = solver.get_model().unwrap();
        let assignment = flags.extract_from_model(&model).unwrap();
        assert_eq!(assignment.to_string(), "f(x, y) = y << x");
    }

    #[test]
    fn test_empty_pair_list_is_trivially_satisfiable() {
        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();

        solver.assert(&build_formula(&flags, &[]));
        assert_eq!(solver.check(), SatResult::Sat);
    }

    #[test]
    fn test_contradictory_pairs_are_unsatisfiable() {
        // Same inputs, different outputs: no assignment can satisfy both
        let pairs = vec![IoPair::new(2, 3, 6), IoPair::new(2, 3, 7)];
        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();

        solver.assert(&build_formula(&flags, &pairs));
        assert_eq!(solver.check(), SatResult::Unsat);
    }

    #[test]
    fn test_pair_constraint_pins_single_observation() {
        // With only (3, 5) -> 15 the multiplication terms qualify but the
        // shift-only assignments do not
        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();

        solver.assert(&pair_constraint(&flags, &IoPair::new(3, 5, 15)));
        solver.assert(&flags.exactly_one());
        assert_eq!(solver.check(), SatResult::Sat);

        let model = solver.get_model().unwrap();
        let assignment = flags.extract_from_model(&model).unwrap();
        assert_eq!(assignment.eval(3, 5), 15);
        // Must be one of the two multiplication orderings
        assert!(assignment.0[0] || assignment.0[1]);
    }

    #[test]
    fn test_formula_respects_wrapping_arithmetic() {
        // x * y overflows 64 bits; the expected output is the wrapped product
        let x = u64::MAX;
        let y = 3;
        let pairs = vec![IoPair::new(x, y, x.wrapping_mul(y))];

        let flags = SelectorFlags::new_symbolic("sel");
        let solver = Solver::new();
        solver.assert(&build_formula(&flags, &pairs));
        assert_eq!(solver.check(), SatResult::Sat);
    }
}
