//! SMT-based synthesis of the function structure
//!
//! Builds one conjunction over four shared boolean selector unknowns and
//! asks Z3 for a satisfying assignment. Each candidate term (the two
//! multiplication orderings and the two shift orderings) contributes to the
//! per-pair sum only when its flag is set.

pub mod flags;
pub mod formula;
pub mod result;
pub mod solver;

pub use result::{SynthesisOutcome, SynthesisResult, SynthesisStatistics};
pub use solver::SolverConfig;

use crate::problem::IoPair;
use flags::SelectorFlags;
use solver::create_solver_with_config;
use std::time::Instant;
use z3::{SatResult, Solver};

/// Configuration for a synthesis run
#[derive(Debug, Clone, Default)]
pub struct SynthConfig {
    /// SMT solver configuration
    pub solver: SolverConfig,
    /// Require exactly one selector flag to be set
    pub exclusive: bool,
    /// Enable verbose output
    pub verbose: bool,
}

impl SynthConfig {
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Build the synthesis formula and ask the solver for a model
pub fn run_synthesis(pairs: &[IoPair], config: &SynthConfig) -> SynthesisResult {
    let start_time = Instant::now();

    let flags = SelectorFlags::new_symbolic("sel");
    let constraint = formula::build_formula(&flags, pairs);

    let solver = create_solver_with_config(&config.solver);
    solver.assert(&constraint);
    if config.exclusive {
        solver.assert(&flags.exactly_one());
    }

    if config.verbose {
        println!(
            "Checking satisfiability over {} pairs ({} selector flags)...",
            pairs.len(),
            flags.count()
        );
    }

    let outcome = solve_outcome(&solver, &flags);

    let statistics = SynthesisStatistics {
        elapsed_time: start_time.elapsed(),
        pairs_constrained: pairs.len(),
        selector_flags: flags.count(),
        exclusive: config.exclusive,
    };

    SynthesisResult {
        outcome,
        pairs: pairs.to_vec(),
        statistics,
    }
}

/// Run the solver and map its verdict to a synthesis outcome
fn solve_outcome(solver: &Solver, flags: &SelectorFlags) -> SynthesisOutcome {
    match solver.check() {
        SatResult::Sat => match solver.get_model() {
            Some(model) => match flags.extract_from_model(&model) {
                Some(assignment) => SynthesisOutcome::Solved(assignment),
                None => SynthesisOutcome::Unknown(
                    "solver reported sat but the model had no flag values".to_string(),
                ),
            },
            None => SynthesisOutcome::Unknown(
                "solver reported sat but produced no model".to_string(),
            ),
        },
        SatResult::Unsat => SynthesisOutcome::Unsatisfiable,
        SatResult::Unknown => {
            SynthesisOutcome::Unknown("SMT solver returned unknown".to_string())
        }
    }
}

/// Render the formula's textual form without solving it
pub fn render_formula(pairs: &[IoPair], exclusive: bool) -> String {
    let flags = SelectorFlags::new_symbolic("sel");
    let mut constraint = formula::build_formula(&flags, pairs);
    if exclusive {
        constraint &= flags.exactly_one();
    }
    constraint.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::builtin_pairs;

    #[test]
    fn test_run_synthesis_solves_builtin_problem() {
        let result = run_synthesis(&builtin_pairs(), &SynthConfig::default());

        let assignment = result.assignment().expect("expected a satisfying model");
        for pair in &result.pairs {
            assert_eq!(assignment.eval(pair.x, pair.y), pair.ans);
        }
        assert_eq!(result.statistics.pairs_constrained, 5);
        assert_eq!(result.statistics.selector_flags, 4);
    }

    #[test]
    fn test_run_synthesis_exclusive_finds_single_term() {
        let config = SynthConfig::default().with_exclusive(true);
        let result = run_synthesis(&builtin_pairs(), &config);

        let assignment = result.assignment().expect("expected a satisfying model");
        assert_eq!(assignment.selected_terms().len(), 1);
        assert_eq!(assignment.to_string(), "f(x, y) = y << x");
        assert!(result.statistics.exclusive);
    }

    #[test]
    fn test_run_synthesis_reports_unsat() {
        let pairs = vec![IoPair::new(1, 1, 2), IoPair::new(1, 1, 3)];
        let result = run_synthesis(&pairs, &SynthConfig::default());
        assert_eq!(result.outcome, SynthesisOutcome::Unsatisfiable);
    }

    #[test]
    fn test_run_synthesis_empty_pairs_is_sat() {
        let result = run_synthesis(&[], &SynthConfig::default());
        assert!(result.assignment().is_some());
        assert_eq!(result.statistics.pairs_constrained, 0);
    }

    #[test]
    fn test_rebuilt_formula_is_equivalent() {
        // Two independent runs over the same pairs must agree on satisfiability
        // and both models must reproduce every output
        let first = run_synthesis(&builtin_pairs(), &SynthConfig::default());
        let second = run_synthesis(&builtin_pairs(), &SynthConfig::default());

        for result in [&first, &second] {
            let assignment = result.assignment().expect("expected a satisfying model");
            for pair in builtin_pairs() {
                assert_eq!(assignment.eval(pair.x, pair.y), pair.ans);
            }
        }
    }

    #[test]
    fn test_solver_timeout_surfaces_as_unknown() {
        use flags::WORD_BITS;
        use std::time::Duration;
        use z3::ast::BV;

        let flags = SelectorFlags::new_symbolic("sel");
        let config = SolverConfig::with_timeout(Duration::from_millis(1));
        let solver = create_solver_with_config(&config);
        solver.assert(&formula::build_formula(&flags, &builtin_pairs()));

        // Side constraint that forces the solver to factor a 64-bit
        // semiprime: (2^32 - 5) * (2^32 - 17). Bit-blasting the multiplier
        // alone blows a 1ms budget, so check() gives up.
        let p = BV::new_const("p", WORD_BITS);
        let q = BV::new_const("q", WORD_BITS);
        let one = BV::from_u64(1, WORD_BITS);
        solver.assert(&p.bvugt(&one));
        solver.assert(&q.bvugt(&one));
        solver.assert(
            &p.bvmul(&q)
                .eq(&BV::from_u64(18446743979220271189, WORD_BITS)),
        );

        match solve_outcome(&solver, &flags) {
            SynthesisOutcome::Unknown(_) => {}
            other => panic!("expected an unknown verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_render_formula_names_shared_flags() {
        let rendered = render_formula(&builtin_pairs(), false);
        // Every conjunct references the same four unknowns
        assert!(rendered.contains("sel_b0"));
        assert!(rendered.contains("sel_b3"));
    }
}
