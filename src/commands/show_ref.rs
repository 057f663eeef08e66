use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::Repository;

use super::{Command, describe_args, parse_args};
use crate::{app::context::RepoContext, error::Fault};

#[derive(Parser, Debug)]
#[command(about = "List references in the repository")]
struct Args {}

#[derive(Default)]
pub struct ShowRefCommand {
    ctx: RepoContext,
}

impl Command for ShowRefCommand {
    fn init(&mut self, repository: Option<Repository>, git_dir: PathBuf) {
        self.ctx = RepoContext::new(repository, git_dir);
    }

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        if parse_args::<Args>("show-ref", args, out)?.is_none() {
            return Ok(());
        }
        let repo = self.ctx.repository()?;

        let mut refs = Vec::new();
        for reference in repo.references().map_err(Fault::from)? {
            let reference = reference.map_err(Fault::from)?;
            // Symbolic refs have no direct target.
            if let (Some(name), Some(target)) = (reference.name(), reference.target()) {
                refs.push((name.to_owned(), target));
            }
        }
        refs.sort();

        for (name, target) in refs {
            writeln!(out, "{target} {name}")?;
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("show-ref", out)
    }
}
