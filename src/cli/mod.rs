//! Command workflows behind the `semver-compat` binary
//!
//! Kept free of clap and terminal output so the workflows can be driven and
//! tested as plain functions.

pub mod commands;

pub use commands::{
    parse_all, run_check, run_compare, run_max, run_sort, CheckOutcome, CheckReport, Comparison,
};
