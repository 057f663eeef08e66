use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::Repository;

use super::{Command, describe_args, parse_args};

#[derive(Parser, Debug)]
#[command(about = "Display the version of this program")]
struct Args {}

#[derive(Default)]
pub struct VersionCommand;

impl Command for VersionCommand {
    fn requires_repository(&self) -> bool {
        false
    }

    fn init(&mut self, _repository: Option<Repository>, _git_dir: PathBuf) {}

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        if parse_args::<Args>("version", args, out)?.is_none() {
            return Ok(());
        }
        writeln!(out, "git-pgm version {}", env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("version", out)
    }
}
