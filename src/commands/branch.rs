use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::{BranchType, Repository};

use super::{Command, describe_args, parse_args};
use crate::{app::context::RepoContext, error::Fault};

#[derive(Parser, Debug)]
#[command(about = "List local branches")]
struct Args {}

#[derive(Default)]
pub struct BranchCommand {
    ctx: RepoContext,
}

impl Command for BranchCommand {
    fn init(&mut self, repository: Option<Repository>, git_dir: PathBuf) {
        self.ctx = RepoContext::new(repository, git_dir);
    }

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        if parse_args::<Args>("branch", args, out)?.is_none() {
            return Ok(());
        }
        let repo = self.ctx.repository()?;

        let mut branches = Vec::new();
        for entry in repo.branches(Some(BranchType::Local)).map_err(Fault::from)? {
            let (branch, _) = entry.map_err(Fault::from)?;
            let name = branch.name().map_err(Fault::from)?.unwrap_or_default().to_owned();
            branches.push((name, branch.is_head()));
        }
        branches.sort();

        for (name, is_head) in branches {
            let marker = if is_head { '*' } else { ' ' };
            writeln!(out, "{marker} {name}")?;
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("branch", out)
    }
}
