use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use git2::Repository;

use crate::error::Fault;

pub mod branch;
pub mod help;
pub mod init;
pub mod log;
pub mod ls_remote;
pub mod rev_parse;
pub mod show_ref;
pub mod version;

/// Unified interface implemented by each subcommand.
pub trait Command {
    /// Whether the dispatcher must locate and open a repository first.
    fn requires_repository(&self) -> bool {
        true
    }

    /// Bind the command to its repository, or to none.
    fn init(&mut self, repository: Option<Repository>, git_dir: PathBuf);

    /// Run the subcommand with the arguments that follow its name.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()>;

    /// Write option details shown by `git help <command>`.
    ///
    /// # Errors
    /// Returns any error from the writer.
    fn describe(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

/// Write clap's help for `T` after a blank line, named `git <name>`.
///
/// # Errors
/// Returns any error from the writer.
pub fn describe_args<T: CommandFactory>(name: &str, out: &mut dyn Write) -> Result<()> {
    let mut command = T::command().bin_name(format!("git {name}"));
    writeln!(out)?;
    write!(out, "{}", command.render_help())?;
    Ok(())
}

/// Parse subcommand arguments with clap.
///
/// Returns `Ok(None)` when clap printed help or version text and the command
/// should stop.
///
/// # Errors
/// Returns a domain fault carrying clap's first error line for bad arguments.
pub fn parse_args<T: Parser>(name: &str, args: &[String], out: &mut dyn Write) -> Result<Option<T>> {
    let bin_name = format!("git {name}");
    let argv = std::iter::once(bin_name.as_str()).chain(args.iter().map(String::as_str));
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            Ok(None)
        }
        Err(err) => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let message = first.strip_prefix("error: ").unwrap_or(first);
            Err(Fault::die(format!("{name}: {message}")).into())
        }
    }
}
