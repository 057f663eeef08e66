use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::{Direction, Remote, Repository};

use super::{Command, describe_args, parse_args};
use crate::error::Fault;

#[derive(Parser, Debug)]
#[command(about = "List references advertised by a remote repository")]
struct Args {
    /// URL or path of the remote repository
    #[arg(value_name = "URL")]
    url: String,
}

#[derive(Default)]
pub struct LsRemoteCommand;

impl Command for LsRemoteCommand {
    fn requires_repository(&self) -> bool {
        false
    }

    fn init(&mut self, _repository: Option<Repository>, _git_dir: PathBuf) {}

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(args) = parse_args::<Args>("ls-remote", args, out)? else {
            return Ok(());
        };

        let mut remote = Remote::create_detached(args.url.as_str()).map_err(Fault::from)?;
        remote
            .connect(Direction::Fetch)
            .map_err(|err| Fault::transport(format!("could not read from remote '{}'", args.url), err))?;

        for head in remote.list().map_err(Fault::from)? {
            writeln!(out, "{}\t{}", head.oid(), head.name())?;
        }

        remote.disconnect().map_err(Fault::from)?;
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("ls-remote", out)
    }
}
