use clap::{Parser, Subcommand};
use std::time::Duration;

mod ir;
mod problem;
mod synth;
mod validation;

use problem::{IoPair, builtin_pairs, parse_pair_spec};
use synth::{SolverConfig, SynthConfig, SynthesisStatistics, render_formula, run_synthesis};
use validation::verify_assignment;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "fnsynth")]
#[command(about = "fnsynth - SMT-based function synthesis from I/O examples")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the function structure from I/O pairs
    Solve {
        /// I/O pair in the form x,y=ans (repeatable; replaces the built-in pairs)
        #[arg(long)]
        pair: Vec<String>,
        /// Require exactly one operator term to be selected (the stated problem
        /// asks for a single `x op y` statement; without this, sums of terms
        /// are also admitted)
        #[arg(long)]
        exclusive: bool,
        /// Solver timeout in seconds (0 = no timeout)
        #[arg(long, default_value = "30")]
        solver_timeout: u64,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the constructed formula without solving it
    Formula {
        /// I/O pair in the form x,y=ans (repeatable; replaces the built-in pairs)
        #[arg(long)]
        pair: Vec<String>,
        /// Include the exactly-one-term constraint
        #[arg(long)]
        exclusive: bool,
    },
}

/// Use the built-in pairs unless the user supplied their own
fn collect_pairs(specs: &[String]) -> Result<Vec<IoPair>, String> {
    if specs.is_empty() {
        return Ok(builtin_pairs());
    }
    specs.iter().map(|spec| parse_pair_spec(spec)).collect()
}

// --- Synthesis Driver ---

fn run_solve(
    pairs: &[IoPair],
    exclusive: bool,
    solver_timeout: u64,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Synthesizing from {} I/O pairs:", pairs.len());
    for pair in pairs {
        println!("  {}", pair);
    }

    let solver_config = if solver_timeout == 0 {
        SolverConfig::no_timeout()
    } else {
        SolverConfig::with_timeout(Duration::from_secs(solver_timeout))
    };

    let config = SynthConfig::default()
        .with_solver(solver_config)
        .with_exclusive(exclusive)
        .with_verbose(verbose);

    println!("\nFormula:\n{}", render_formula(pairs, exclusive));

    let result = run_synthesis(pairs, &config);
    println!("\n{}", result);
    print_statistics(&result.statistics);

    if let Some(assignment) = result.assignment() {
        verify_assignment(assignment, pairs)
            .map_err(|mismatch| format!("Model failed concrete validation: {}", mismatch))?;
        println!("Validated against all {} pairs.", pairs.len());
    }

    Ok(())
}

/// Print synthesis statistics
fn print_statistics(stats: &SynthesisStatistics) {
    println!("\nSynthesis Statistics:");
    println!("  Elapsed time: {:?}", stats.elapsed_time);
    println!("  Pairs constrained: {}", stats.pairs_constrained);
    println!("  Selector flags: {}", stats.selector_flags);
    println!("  Exclusive selection: {}", stats.exclusive);
}

// --- Main Function ---

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            pair,
            exclusive,
            solver_timeout,
            verbose,
        } => {
            let pairs = match collect_pairs(&pair) {
                Ok(pairs) => pairs,
                Err(e) => {
                    eprintln!("Error parsing pairs: {}", e);
                    std::process::exit(1);
                }
            };

            match run_solve(&pairs, exclusive, solver_timeout, verbose) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error during synthesis: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Formula { pair, exclusive } => {
            let pairs = match collect_pairs(&pair) {
                Ok(pairs) => pairs,
                Err(e) => {
                    eprintln!("Error parsing pairs: {}", e);
                    std::process::exit(1);
                }
            };

            println!("{}", render_formula(&pairs, exclusive));
        }
    }
}
