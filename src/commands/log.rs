use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use git2::{ErrorCode, Repository, Sort};

use super::{Command, describe_args, parse_args};
use crate::{app::context::RepoContext, error::Fault};

#[derive(Parser, Debug)]
#[command(about = "Show commit history, one line per commit")]
struct Args {
    /// Limit the number of commits to show
    #[arg(short = 'n', long = "max-count", value_name = "N")]
    max_count: Option<usize>,

    /// Revision to start from
    #[arg(value_name = "REV", default_value = "HEAD")]
    revision: String,
}

#[derive(Default)]
pub struct LogCommand {
    ctx: RepoContext,
}

impl Command for LogCommand {
    fn init(&mut self, repository: Option<Repository>, git_dir: PathBuf) {
        self.ctx = RepoContext::new(repository, git_dir);
    }

    fn execute(&mut self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(args) = parse_args::<Args>("log", args, out)? else {
            return Ok(());
        };
        let repo = self.ctx.repository()?;

        if args.revision == "HEAD" {
            match repo.head() {
                Ok(_) => {}
                Err(err) if err.code() == ErrorCode::UnbornBranch => {
                    return Err(
                        Fault::die("your current branch does not have any commits yet").into(),
                    );
                }
                Err(err) => return Err(Fault::from(err).into()),
            }
        }
        let start = repo
            .revparse_single(&args.revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|err| Fault::die(format!("bad revision '{}': {}", args.revision, err.message())))?;

        let mut walk = repo.revwalk().map_err(Fault::from)?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(Fault::from)?;
        walk.push(start.id()).map_err(Fault::from)?;

        for oid in walk.take(args.max_count.unwrap_or(usize::MAX)) {
            let commit = repo.find_commit(oid.map_err(Fault::from)?).map_err(Fault::from)?;
            let short_id = commit.as_object().short_id().map_err(Fault::from)?;
            writeln!(
                out,
                "{} {}",
                short_id.as_str().unwrap_or_default(),
                commit.summary().unwrap_or_default()
            )?;
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn Write) -> Result<()> {
        describe_args::<Args>("log", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FaultKind,
        test_support::{args, create_test_repo},
    };

    fn run(repo: Repository, git_dir: PathBuf, argv: &[&str]) -> Result<String> {
        let mut cmd = LogCommand::default();
        cmd.init(Some(repo), git_dir);
        let mut out = Vec::new();
        cmd.execute(&args(argv), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn lists_newest_first() {
        let (tmp, repo) = create_test_repo(&["first", "second", "third"]);
        let text = run(repo, tmp.path().join(".git"), &[]).unwrap();
        let summaries: Vec<_> = text
            .lines()
            .map(|line| line.split_once(' ').unwrap().1)
            .collect();
        assert_eq!(summaries, ["third", "second", "first"]);
    }

    #[test]
    fn max_count_limits_output() {
        let (tmp, repo) = create_test_repo(&["first", "second", "third"]);
        let text = run(repo, tmp.path().join(".git"), &["-n", "1"]).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with(" third\n"));
    }

    #[test]
    fn lines_start_with_abbreviated_id() {
        let (tmp, repo) = create_test_repo(&["first"]);
        let head = repo.head().unwrap().target().unwrap().to_string();
        let text = run(repo, tmp.path().join(".git"), &[]).unwrap();
        let (short, summary) = text.trim_end().split_once(' ').unwrap();
        assert!(short.len() >= 7 && short.len() < head.len(), "{short}");
        assert!(head.starts_with(short));
        assert_eq!(summary, "first");
    }

    #[test]
    fn corrupt_head_ref_is_repository_fault() {
        let (tmp, repo) = create_test_repo(&["first"]);
        std::fs::write(
            tmp.path().join(".git").join("refs").join("heads").join("main"),
            "not a ref\n",
        )
        .unwrap();

        let err = run(repo, tmp.path().join(".git"), &[]).unwrap_err();
        let fault = err.downcast_ref::<Fault>().unwrap();
        assert_eq!(fault.kind(), FaultKind::Repository);
    }

    #[test]
    fn unborn_head_is_domain_fault() {
        let (tmp, repo) = create_test_repo(&[]);
        let err = run(repo, tmp.path().join(".git"), &[]).unwrap_err();
        let fault = err.downcast_ref::<Fault>().unwrap();
        assert_eq!(fault.kind(), FaultKind::Domain);
    }
}
