//! Extraction against real git repositories.

mod support;

use relnotes::adapters::live::git::LiveGitRepo;
use relnotes::error::ExtractionError;
use relnotes::snapshot::{extract, CommitDiff, SnapshotOptions, TRUNCATION_MARKER};
use support::GitFixture;

fn two_commit_repo() -> GitFixture {
    let repo = GitFixture::init();
    repo.write("app.py", "def main():\n    pass\n");
    repo.write("README.md", "# Demo\n");
    repo.commit("initial");
    repo.write("app.py", "def main():\n    print('SCRUM-3 fixed')\n");
    repo.commit("SCRUM-3: fix main");
    repo
}

#[test]
fn diff_commit_and_snapshot_of_last_commit() {
    let repo = two_commit_repo();

    let ctx = extract(&LiveGitRepo, repo.path(), "main", &SnapshotOptions::default()).unwrap();

    assert_eq!(ctx.commit, repo.head());
    let diff = ctx.diff.text().unwrap();
    assert!(diff.contains("diff --git a/app.py b/app.py"));
    assert!(diff.contains("+    print('SCRUM-3 fixed')"));
    assert!(diff.contains("-    pass"));
    assert_eq!(ctx.snapshot.get("README.md"), Some("# Demo\n"));
    assert!(ctx.snapshot.files().iter().all(|f| !f.path.starts_with(".git/")));
}

#[test]
fn single_commit_has_no_diff() {
    let repo = GitFixture::init();
    repo.write("a.txt", "a\n");
    let head = repo.commit("only");

    let ctx = extract(&LiveGitRepo, repo.path(), "main", &SnapshotOptions::default()).unwrap();

    assert_eq!(ctx.diff, CommitDiff::RootCommit);
    assert_eq!(ctx.commit, head);
    assert_eq!(ctx.snapshot.len(), 1);
}

#[test]
fn empty_commit_has_empty_diff() {
    let repo = two_commit_repo();
    repo.commit("empty");

    let ctx = extract(&LiveGitRepo, repo.path(), "main", &SnapshotOptions::default()).unwrap();

    assert_eq!(ctx.diff, CommitDiff::Changes(String::new()));
}

#[test]
fn switches_to_requested_branch() {
    let repo = two_commit_repo();
    repo.git(&["checkout", "-q", "-b", "release"]);
    repo.write("CHANGELOG.md", "release\n");
    let release_head = repo.commit("release prep");
    repo.git(&["checkout", "-q", "main"]);

    let ctx = extract(&LiveGitRepo, repo.path(), "release", &SnapshotOptions::default()).unwrap();

    assert_eq!(repo.current_branch(), "release");
    assert_eq!(ctx.commit, release_head);
    assert!(ctx.diff.text().unwrap().contains("+release"));
    assert_eq!(ctx.snapshot.get("CHANGELOG.md"), Some("release\n"));
}

#[test]
fn remote_only_branch_is_checked_out_from_origin() {
    let origin = two_commit_repo();
    origin.git(&["checkout", "-q", "-b", "feature/x"]);
    origin.write("export.py", "def export():\n    return 'csv'\n");
    let feature_head = origin.commit("SCRUM-9: csv export");
    origin.git(&["checkout", "-q", "main"]);

    let clone = GitFixture::clone_of(&origin);
    assert_eq!(clone.git(&["branch", "--list", "feature/x"]), "");

    let ctx =
        extract(&LiveGitRepo, clone.path(), "feature/x", &SnapshotOptions::default()).unwrap();

    assert_eq!(ctx.commit, feature_head);
    assert_eq!(clone.current_branch(), "feature/x");
    assert!(ctx.diff.text().unwrap().contains("+    return 'csv'"));
    assert_eq!(ctx.snapshot.get("export.py"), Some("def export():\n    return 'csv'\n"));
}

#[test]
fn detached_head_is_reattached() {
    let repo = two_commit_repo();
    repo.git(&["checkout", "-q", "--detach", "HEAD~1"]);

    let ctx = extract(&LiveGitRepo, repo.path(), "main", &SnapshotOptions::default()).unwrap();

    assert_eq!(repo.current_branch(), "main");
    assert_eq!(ctx.commit, repo.head());
}

#[test]
fn unknown_branch_is_reported() {
    let repo = two_commit_repo();

    let err = extract(&LiveGitRepo, repo.path(), "no-such-branch", &SnapshotOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::BranchNotFound { ref branch } if branch == "no-such-branch"
    ));
    assert_eq!(repo.current_branch(), "main");
}

#[test]
fn repository_without_commits_has_invalid_head() {
    let repo = GitFixture::init();

    let err = extract(&LiveGitRepo, repo.path(), "main", &SnapshotOptions::default()).unwrap_err();

    assert!(matches!(err, ExtractionError::InvalidHead { .. }));
}

#[test]
fn plain_directory_is_not_a_repository() {
    let dir = tempfile::tempdir().unwrap();

    let err = extract(&LiveGitRepo, dir.path(), "main", &SnapshotOptions::default()).unwrap_err();

    assert!(matches!(err, ExtractionError::NotARepository { .. }));
}

#[test]
fn snapshot_respects_ceiling_and_filters() {
    let repo = GitFixture::init();
    repo.write("a.txt", &"a".repeat(60));
    repo.write("b.txt", &"b".repeat(60));
    repo.write("logo.png", "not really a png");
    repo.write("node_modules/dep/index.js", "module.exports = 1;");
    repo.commit("init");
    repo.write("c.txt", "c");
    repo.commit("second");

    let options = SnapshotOptions { ceiling: 100, ..SnapshotOptions::default() };
    let ctx = extract(&LiveGitRepo, repo.path(), "main", &options).unwrap();

    assert_eq!(ctx.snapshot.total_chars(), 100);
    assert_eq!(ctx.snapshot.get("a.txt").map(str::len), Some(60));
    let b = ctx.snapshot.get("b.txt").unwrap();
    assert!(b.ends_with(TRUNCATION_MARKER));
    assert_eq!(b.chars().count(), 40);
    assert_eq!(ctx.snapshot.truncated_path(), Some("b.txt"));
    assert!(ctx.snapshot.get("c.txt").is_none());
    assert!(ctx.snapshot.get("logo.png").is_none());
    assert!(ctx.snapshot.get("node_modules/dep/index.js").is_none());
}
