use std::{fs, path::Path};

use git2::{Repository, Signature, Time};
use tempfile::TempDir;

/// Create a repository on `main` with one commit per message.
///
/// Commit times increase by one second per commit so history order is stable.
pub(crate) fn create_test_repo(messages: &[&str]) -> (TempDir, Repository) {
    let tmp = TempDir::new().unwrap();
    let repo = Repository::init(tmp.path()).unwrap();
    repo.set_head("refs/heads/main").unwrap();

    for (i, message) in messages.iter().enumerate() {
        fs::write(tmp.path().join("file.txt"), format!("{i}\n")).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let when = Time::new(1_700_000_000 + i64::try_from(i).unwrap(), 0);
        let sig = Signature::new("Test User", "test@example.com", &when).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    (tmp, repo)
}

pub(crate) fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
