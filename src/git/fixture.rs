//! Scratch repositories for tests.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature, Time};

pub fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();

    (dir, repo)
}

/// Commit on top of HEAD as `name <email>` at `epoch` (UTC offset in
/// minutes). Each file is written with the given content, or removed
/// when the content is `None`.
pub fn commit_as(
    repo: &Repository,
    name: &str,
    email: &str,
    epoch: i64,
    offset_minutes: i32,
    files: &[(&str, Option<&str>)],
) -> Oid {
    let sig = Signature::new(name, email, &Time::new(epoch, offset_minutes)).unwrap();
    commit_signed(repo, &sig, &sig, files)
}

/// Like [`commit_as`] with separate author and committer signatures, as a
/// rebase or cherry-pick leaves them.
pub fn commit_signed(
    repo: &Repository,
    author: &Signature,
    committer: &Signature,
    files: &[(&str, Option<&str>)],
) -> Oid {
    let mut index = repo.index().unwrap();
    let workdir = repo.workdir().unwrap().to_path_buf();

    for (path, content) in files {
        let full_path = workdir.join(path);
        match content {
            Some(content) => {
                if let Some(parent) = full_path.parent() {
                    fs::create_dir_all(parent).unwrap();
                }
                fs::write(&full_path, content).unwrap();
                index.add_path(Path::new(path)).unwrap();
            }
            None => {
                fs::remove_file(&full_path).unwrap();
                index.remove_path(Path::new(path)).unwrap();
            }
        }
    }

    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), author, committer, "change", &tree, &parents)
        .unwrap()
}

pub fn make_commit_at(repo: &Repository, files: &[(&str, &str)], epoch: i64) -> Oid {
    let files: Vec<(&str, Option<&str>)> = files.iter().map(|(p, c)| (*p, Some(*c))).collect();
    commit_as(repo, "Test", "test@test.com", epoch, 0, &files)
}
