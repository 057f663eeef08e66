use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::Repository;

use super::{Command, describe_args, parse_args};
use crate::{catalog::CommandCatalog, error::Fault, help::write_help};

#[derive(Parser, Debug)]
#[command(about = "Display help for a command")]
struct Args {
    /// Command to describe
    #[arg(value_name = "COMMAND")]
    command: Option<String>,
}

/// Describes the commands of the catalog it was created from.
pub struct HelpCommand {
    catalog: CommandCatalog,
}

impl HelpCommand {
    #[must_use]
    pub const fn new(catalog: CommandCatalog) -> Self {
        Self { catalog }
    }
}

impl Command for HelpCommand {
    fn requires_repository(&self) -> bool {
        false
    }

    fn init(&mut self, _repository: Option<Repository>, _git_dir: PathBuf) {}

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(args) = parse_args::<Args>("help", args, out)? else {
            return Ok(());
        };

        let Some(name) = args.command else {
            write_help(out, &self.catalog)?;
            return Ok(());
        };
        let command_ref = self.catalog.get(&name).ok_or_else(|| {
            Fault::die(format!("'{name}' is not a git command. See 'git --help'."))
        })?;

        writeln!(out, "usage: git {}", command_ref.name())?;
        writeln!(out, "{}", command_ref.usage())?;
        command_ref.create(&self.catalog).describe(out)
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("help", out)
    }
}
