#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The sum and product puzzle, solved by filtering candidate pairs one
//! statement at a time.

/// Explaining and checking a finished solve.
pub mod analysis;
/// Range limits and the policy for out-of-range bounds.
pub mod bounds;
/// Pairs, pair ids and ordered candidate sets.
pub mod candidate;
/// Boundary error types.
pub mod error;
/// Universe generation and the four filtering rounds.
pub mod filter;
/// Text rendering of the survivors at a stage.
pub mod grid;
/// Frequency tables over sums and products.
pub mod multiplicity;
/// Orchestration of a full solve.
pub mod solver;
/// The stages of the pipeline.
pub mod step;
/// The dialogue and a cursor over it.
pub mod walkthrough;

pub use bounds::{DEFAULT_MAX, MAX_RANGE_LIMIT, MIN_RANGE_LIMIT, RangePolicy};
pub use candidate::{CandidateSet, Pair, PairId};
pub use error::{InvariantViolation, ParseError, SolveError};
pub use solver::{Outcome, SolutionSteps, solve, try_solve};
pub use step::Step;
