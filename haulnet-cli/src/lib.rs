//! Support library for the haulnet CLI binary.
//!
//! Re-exports the command pipeline, the text-format loaders, and the
//! logging bootstrap so integration tests can exercise them without
//! forking a subprocess.

pub mod cli;
pub mod loader;
pub mod logging;
