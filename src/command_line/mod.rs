//! Argument parsing and report printing for the `impossible` binary.

pub(crate) mod cli;
