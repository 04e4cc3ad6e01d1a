//! Command-line interface orchestration for the haulnet tools.
//!
//! Offers one subcommand per core operation: network summary, budgeted
//! path search, minimal power, component partition, spanning forest, and
//! a timing harness over a route list.

mod commands;

pub use commands::{
    BenchArgs, Cli, CliError, Command, NetworkArgs, PathArgs, Report, RouteArgs, render_report,
    run_cli,
};
