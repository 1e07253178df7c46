#![deny(missing_docs)]
//! This crate solves the sum and product ("impossible") puzzle by replaying its
//! dialogue as a chain of filters over candidate pairs.

/// The `sum_product` module implements the candidate filtering engine, along with
/// tools to trace, verify and display its results.
pub mod sum_product;
