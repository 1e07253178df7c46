#![allow(clippy::cast_precision_loss)]

use impossible_puzzle::sum_product::analysis::{self, sum_breakdown, trace};
use impossible_puzzle::sum_product::bounds::{DEFAULT_MAX, RangePolicy, parse_max};
use impossible_puzzle::sum_product::grid::SurvivalGrid;
use impossible_puzzle::sum_product::walkthrough::{StepCursor, walkthrough};
use impossible_puzzle::sum_product::{Outcome, PairId, ParseError, SolutionSteps, Step, solve};
use clap::{Args, Parser, Subcommand};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the puzzle solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "impossible",
    version,
    about = "Step through the sum and product puzzle"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute (e.g. `solve`, `trace`, `sum`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run all four statements and report the survivors of each.
    Solve {
        /// Upper bound for both numbers. Non-numeric input falls back to the default.
        #[arg(short, long, default_value_t = DEFAULT_MAX.to_string(), allow_hyphen_values = true)]
        max: String,

        /// Show the candidate grid at this stage (0 to 4).
        #[arg(long)]
        step: Option<usize>,

        /// Print the candidate grid for the selected stage.
        #[arg(short, long, default_value_t = false)]
        grid: bool,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Follow a single pair, written `x-y`, through every stage.
    Trace {
        /// The pair id, e.g. "2-6".
        #[arg(short, long)]
        id: String,

        /// Upper bound for both numbers.
        #[arg(short, long, default_value_t = DEFAULT_MAX.to_string(), allow_hyphen_values = true)]
        max: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// List every decomposition of a sum and whether it makes the sum dangerous.
    Sum {
        /// The sum to break down.
        #[arg(short, long)]
        sum: u32,

        /// Upper bound for both numbers.
        #[arg(short, long, default_value_t = DEFAULT_MAX.to_string(), allow_hyphen_values = true)]
        max: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, logging every filtering round.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Re-check the result against the laws of each round.
    #[arg(long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Enable printing of timing and memory statistics after solving.
    #[arg(long, default_value_t = false)]
    pub(crate) stats: bool,

    /// What to do with a bound outside the supported range.
    #[arg(long, default_value_t = RangePolicy::Clamp)]
    pub(crate) range_policy: RangePolicy,
}

/// Reads the bound and runs the pipeline, timing the solve.
///
/// # Errors
///
/// If the bound is rejected by the range policy.
pub(crate) fn load(max: &str, common: &CommonOptions) -> Result<(SolutionSteps, Duration), String> {
    let max = parse_max(max, common.range_policy).map_err(|e| e.to_string())?;

    let time = Instant::now();
    let steps = solve(i64::from(max));
    let elapsed = time.elapsed();

    if common.verify {
        analysis::verify(&steps).map_err(|e| format!("Verification failed: {e}"))?;
        println!("Verified: true");
    }

    Ok((steps, elapsed))
}

/// Solves and prints the dialogue, the outcome and optionally the grid.
///
/// # Errors
///
/// If the bound is rejected or the stage index is out of range.
pub(crate) fn run_solve(
    max: &str,
    step: Option<usize>,
    grid: bool,
    common: &CommonOptions,
) -> Result<(), String> {
    if let Some(index) = step {
        if index > Step::LAST {
            return Err(format!(
                "Stage {index} does not exist, expected 0 to {}",
                Step::LAST
            ));
        }
    }

    let (steps, elapsed) = load(max, common)?;

    println!("Range: 2..={}", steps.max());
    for line in walkthrough(&steps) {
        println!("{line}");
    }

    let cursor = StepCursor::at(step.unwrap_or(Step::LAST));
    let stage = cursor.current();
    println!("\n{cursor}: {stage}");
    println!("Survivors: {}", steps.stage(stage));

    if grid {
        print!("\n{}", SurvivalGrid::new(&steps, stage));
    }

    if common.stats {
        print_stats(&steps, elapsed);
    }

    let outcome = steps.outcome();
    println!("\n{outcome}");
    if let Outcome::Unique(pair) = outcome {
        println!("{pair}");
    }

    Ok(())
}

/// Prints the membership of one pair at every stage, explaining a round 2 elimination.
///
/// # Errors
///
/// If the id is malformed, the bound is rejected, or the pair is out of range.
pub(crate) fn run_trace(id: &str, max: &str, common: &CommonOptions) -> Result<(), String> {
    let id: PairId = id.parse().map_err(|e: ParseError| e.to_string())?;
    let (steps, elapsed) = load(max, common)?;

    let Some(pair_trace) = trace(&steps, id) else {
        return Err(format!("Pair {id} is not in range 2..={}", steps.max()));
    };

    println!("{}", pair_trace.pair);
    print!("{pair_trace}");

    match pair_trace.eliminated_at() {
        Some(step) => {
            println!("Eliminated at {step}: {}", step.rule());
            if step == Step::SumKnew {
                print!("\n{}", sum_breakdown(&steps, pair_trace.pair.sum));
            }
        }
        None => println!("Survives every statement"),
    }

    if common.stats {
        print_stats(&steps, elapsed);
    }

    Ok(())
}

/// Prints every decomposition of `sum` with its round 1 status.
///
/// # Errors
///
/// If the bound is rejected.
pub(crate) fn run_sum(sum: u32, max: &str, common: &CommonOptions) -> Result<(), String> {
    let (steps, elapsed) = load(max, common)?;
    let breakdown = sum_breakdown(&steps, sum);

    print!("{breakdown}");
    if breakdown.is_dangerous() {
        println!("Sum {sum} is dangerous: Mr. S could not have known");
    } else {
        println!("Sum {sum} is safe");
    }

    if common.stats {
        print_stats(&steps, elapsed);
    }

    Ok(())
}

/// Reads allocated and resident memory in MiB, or zero if jemalloc can't say.
pub(crate) fn memory_usage() -> (f64, f64) {
    let read = || -> Option<(usize, usize)> {
        epoch::advance().ok()?;
        let allocated = stats::allocated::mib().ok()?.read().ok()?;
        let resident = stats::resident::mib().ok()?.read().ok()?;
        Some((allocated, resident))
    };

    read().map_or((0.0, 0.0), |(allocated, resident)| {
        (
            allocated as f64 / (1024.0 * 1024.0),
            resident as f64 / (1024.0 * 1024.0),
        )
    })
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of the solve: survivors per stage, time and memory.
pub(crate) fn print_stats(steps: &SolutionSteps, elapsed: Duration) {
    let (allocated, resident) = memory_usage();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Range", format!("2..={}", steps.max()));
    for (step, set) in steps.stages() {
        stat_line(&step.to_string(), set.len());
    }

    println!("========================[ Search Statistics ]========================");
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{:.6}", elapsed.as_secs_f64()));
    println!("=====================================================================");
}
