use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::Repository;

use super::{Command, describe_args, parse_args};
use crate::{app::context::RepoContext, error::Fault};

#[derive(Parser, Debug)]
#[command(about = "Resolve revisions to object ids")]
struct Args {
    /// Print the path of the repository directory
    #[arg(long)]
    git_dir: bool,

    /// Revisions to resolve
    #[arg(value_name = "REV", required_unless_present = "git_dir")]
    revisions: Vec<String>,
}

#[derive(Default)]
pub struct RevParseCommand {
    ctx: RepoContext,
}

impl Command for RevParseCommand {
    fn init(&mut self, repository: Option<Repository>, git_dir: PathBuf) {
        self.ctx = RepoContext::new(repository, git_dir);
    }

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(args) = parse_args::<Args>("rev-parse", args, out)? else {
            return Ok(());
        };
        let repo = self.ctx.repository()?;
        if args.git_dir {
            writeln!(out, "{}", self.ctx.git_dir().display())?;
        }
        for rev in &args.revisions {
            let object = repo.revparse_single(rev).map_err(|err| {
                Fault::die(format!("ambiguous argument '{rev}': {}", err.message()))
            })?;
            writeln!(out, "{}", object.id())?;
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("rev-parse", out)
    }
}
