use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::Fault;

/// Name of the metadata directory searched for by [`find_repository_dir`].
pub const GIT_DIR_NAME: &str = ".git";

/// Search upward from the current directory for a `.git` directory.
#[must_use]
pub fn find_repository_dir() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_repository_dir_from(&cwd)
}

/// Search `start` and each of its ancestors for a `.git` directory.
///
/// Relative paths are resolved against the current directory first. Returns
/// `None` once the filesystem root has been checked.
#[must_use]
pub fn find_repository_dir_from(start: &Path) -> Option<PathBuf> {
    let start = std::path::absolute(start).ok()?;
    let found = start
        .ancestors()
        .map(|dir| dir.join(GIT_DIR_NAME))
        .find(|candidate| candidate.is_dir());
    match &found {
        Some(dir) => debug!(path = %dir.display(), "found git directory"),
        None => debug!(start = %start.display(), "no git directory up to filesystem root"),
    }
    found
}

/// Open the repository stored in `git_dir`.
///
/// # Errors
/// Returns [`Fault::Repository`] if libgit2 cannot open the directory.
pub fn open_repository(git_dir: &Path) -> Result<Repository, Fault> {
    Repository::open(git_dir).map_err(Fault::from)
}
