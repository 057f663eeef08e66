use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::Fault;

/// Repository handed to a command by the dispatcher.
///
/// Empty for commands that do not require a repository.
#[derive(Default)]
pub struct RepoContext {
    repository: Option<Repository>,
    git_dir: PathBuf,
}

impl RepoContext {
    pub const fn new(repository: Option<Repository>, git_dir: PathBuf) -> Self {
        Self {
            repository,
            git_dir,
        }
    }

    /// The repository this command was initialized with.
    ///
    /// # Errors
    /// Returns a domain fault if the command was initialized without one.
    pub fn repository(&self) -> Result<&Repository, Fault> {
        self.repository
            .as_ref()
            .ok_or_else(|| Fault::die("this command must be run inside a git repository"))
    }

    /// Resolved git directory; empty when there is no repository.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_has_no_repository() {
        let ctx = RepoContext::default();
        assert!(ctx.repository().is_err());
        assert_eq!(ctx.git_dir(), Path::new(""));
    }

    #[test]
    fn context_keeps_repository_and_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let repo = Repository::init(tmp.path()).expect("init");
        let git_dir = tmp.path().join(".git");
        let ctx = RepoContext::new(Some(repo), git_dir.clone());
        assert!(ctx.repository().is_ok());
        assert_eq!(ctx.git_dir(), git_dir);
    }
}
