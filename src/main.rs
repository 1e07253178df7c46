//! # impossible
//!
//! `impossible` is a command-line walkthrough of the sum and product puzzle,
//! also known as the "impossible puzzle".
//!
//! Two integers `2 <= x <= y <= max` are chosen. Mr. P is told their product and
//! Mr. S their sum. Then:
//!
//! 1.  Mr. P: "I don't know the two numbers."
//! 2.  Mr. S: "I already knew that you didn't know."
//! 3.  Mr. P: "Now I know the two numbers."
//! 4.  Mr. S: "Then I know them too."
//!
//! Each statement is replayed as a filter over the candidate pairs, and the
//! survivors of every stage are reported.
//!
//! ## Usage
//!
//! ```sh
//! impossible [GLOBAL_OPTIONS] [SUBCOMMAND]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`solve`**: Run all four statements.
//!     ```sh
//!     impossible solve --max 20 [--step <0-4>] [--grid] [OPTIONS]
//!     ```
//!
//! 2.  **`trace`**: Follow one pair through the stages.
//!     ```sh
//!     impossible trace --id 2-6 [--max 20] [OPTIONS]
//!     ```
//!
//! 3.  **`sum`**: Break a sum down into its decompositions.
//!     ```sh
//!     impossible sum --sum 8 [--max 20] [OPTIONS]
//!     ```
//!
//! 4.  **`completions`**: Generate shell completions.
//!
//! Without a subcommand the puzzle is solved for the default bound of 20.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Log every filtering round (default: `false`). `RUST_LOG` is honoured too.
//! -   `--verify`: Re-check the result against the laws of each round (default: `false`).
//! -   `--stats`: Print timing and memory statistics (default: `false`).
//! -   `--range-policy <clamp|reject>`: Handling of bounds outside `5..=20` (default: `clamp`).

use crate::command_line::cli::{Cli, Commands, CommonOptions, run_solve, run_sum, run_trace};
use clap::{CommandFactory, Parser};
use impossible_puzzle::sum_product::DEFAULT_MAX;
use tracing_subscriber::EnvFilter;

mod command_line;

/// Global allocator using `tikv-jemallocator` for memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Installs the log subscriber. `RUST_LOG` wins over the `--debug` flag.
fn init_logging(common: &CommonOptions) {
    let default_level = if common.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Main entry point of the application.
///
/// Parses command-line arguments, dispatches to the appropriate command handler,
/// and exits non-zero if the handler reports an error.
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Solve {
            max,
            step,
            grid,
            common,
        }) => {
            init_logging(&common);
            run_solve(&max, step, grid, &common)
        }
        Some(Commands::Trace { id, max, common }) => {
            init_logging(&common);
            run_trace(&id, &max, &common)
        }
        Some(Commands::Sum { sum, max, common }) => {
            init_logging(&common);
            run_sum(sum, &max, &common)
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "impossible", &mut std::io::stdout());
            Ok(())
        }
        None => {
            init_logging(&cli.common);
            run_solve(&DEFAULT_MAX.to_string(), None, false, &cli.common)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
