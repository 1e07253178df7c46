//! Error types raised at the boundary of the sum/product engine.
//!
//! Generation and filtering are total functions, so nothing in here is ever
//! produced by the filtering rounds themselves. Errors only come from
//! validating caller input (a strict range policy, a malformed pair id) or
//! from re-checking a finished solve with [`crate::sum_product::analysis::verify`].

use crate::sum_product::candidate::PairId;
use thiserror::Error;

/// Errors produced when a bound is validated under [`crate::sum_product::bounds::RangePolicy::Reject`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The requested bound lies outside the supported range.
    #[error("range bound {requested} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        /// The bound that was asked for.
        requested: i64,
        /// Smallest accepted bound.
        min: u32,
        /// Largest accepted bound.
        max: u32,
    },
}

/// Errors produced when parsing a textual pair id such as `"2-6"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not of the form `x-y`.
    #[error("malformed pair id '{0}', expected the form 'x-y'")]
    Malformed(String),

    /// One of the two components is not a non-negative integer.
    #[error("invalid number '{0}' in pair id")]
    InvalidNumber(String),

    /// The components are out of order; pairs are always written smallest first.
    #[error("pair id {x}-{y} is not ordered, expected x <= y")]
    Unordered {
        /// First component.
        x: u32,
        /// Second component.
        y: u32,
    },
}

/// A law of the filtering chain that a solve result failed to satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The initial set does not hold the expected number of pairs.
    #[error("initial set holds {actual} pairs, expected {expected}")]
    InitialSize {
        /// Number of pairs the bound implies.
        expected: usize,
        /// Number of pairs actually generated.
        actual: usize,
    },

    /// A pair id occurs more than once in a set.
    #[error("pair {0} appears more than once")]
    DuplicateId(PairId),

    /// A later stage contains a pair its predecessor does not.
    #[error("pair {id} survives stage {stage} but is missing from the stage before it")]
    NotSubset {
        /// The offending pair.
        id: PairId,
        /// Index of the stage that contains it.
        stage: usize,
    },

    /// Step 1 kept or dropped a pair contrary to its product multiplicity.
    #[error("pair {0} breaks the product-unknown rule")]
    ProductUnknown(PairId),

    /// Step 2 kept a pair with a dangerous sum, or dropped one with a safe sum.
    #[error("pair {0} breaks the sum-knew rule")]
    SumKnew(PairId),

    /// Step 3 disagrees with product uniqueness among the step 2 survivors.
    #[error("pair {0} breaks the product-knows rule")]
    ProductKnows(PairId),

    /// Step 4 disagrees with sum uniqueness among the step 3 survivors.
    #[error("pair {0} breaks the sum-knows rule")]
    SumKnows(PairId),
}
