//! Command-line arguments for the `gt4500` binary.

pub mod args;
