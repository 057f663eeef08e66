use std::{fs, path::Path};

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Repository on `main` with a single commit of `file.txt`.
pub fn repo_with_commit(message: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let repo = Repository::init(tmp.path()).unwrap();
    repo.set_head("refs/heads/main").unwrap();

    fs::write(tmp.path().join("file.txt"), "content\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("file.txt")).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap();

    tmp
}
