//! Command Line Interface (CLI) layer for certgen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-entry and CSV batch
//! flows. It wires user-provided options to the library functionality
//! exposed via `certgen::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
