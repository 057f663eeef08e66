//! Command-line front end for git subcommands.
//!
//! The binary hands its arguments to [`run`], which either dispatches to a
//! subcommand from the [`catalog::CommandCatalog`] or handles global options
//! such as `--help`, and maps every outcome to a process exit code.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod help;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use app::run;
