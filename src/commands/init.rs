use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::Repository;

use super::{Command, describe_args, parse_args};
use crate::error::Fault;

#[derive(Parser, Debug)]
#[command(about = "Create an empty git repository")]
struct Args {
    /// Create a bare repository
    #[arg(long)]
    bare: bool,

    /// Directory to initialize (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,
}

#[derive(Default)]
pub struct InitCommand;

impl Command for InitCommand {
    fn requires_repository(&self) -> bool {
        false
    }

    fn init(&mut self, _repository: Option<Repository>, _git_dir: PathBuf) {}

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(args) = parse_args::<Args>("init", args, out)? else {
            return Ok(());
        };
        let directory = args.directory.unwrap_or_else(|| PathBuf::from("."));
        let created = if args.bare {
            Repository::init_bare(&directory)
        } else {
            Repository::init(&directory)
        };
        let repo = created.map_err(Fault::from)?;

        let path = std::path::absolute(repo.path())?;
        writeln!(out, "Initialized empty Git repository in {}", path.display())?;
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("init", out)
    }
}
