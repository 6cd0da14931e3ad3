use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod stage_command_tests {
    use super::*;

    #[test]
    fn test_stage_unstaged_file() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["stage", "changed.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Staged changed.txt"));

        assert!(git_porcelain(&repo.path)?.contains("M  changed.txt"));
        Ok(())
    }

    #[test]
    fn test_track_untracked_file() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["track", "new.txt"])
            .assert()
            .success();

        assert!(git_porcelain(&repo.path)?.contains("A  new.txt"));
        Ok(())
    }

    #[test]
    fn test_unstage_staged_file() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["unstage", "staged.txt"])
            .assert()
            .success();

        assert!(git_porcelain(&repo.path)?.contains(" M staged.txt"));
        Ok(())
    }

    #[test]
    fn test_stage_on_staged_file_is_refused() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["stage", "staged.txt"])
            .assert()
            .failure()
            .stdout(assertions::has_error("does not apply to staged files"));

        Ok(())
    }

    #[test]
    fn test_unknown_path_is_reported() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["stage", "missing.txt"])
            .assert()
            .failure()
            .stdout(assertions::has_error("missing.txt"));

        Ok(())
    }

    #[test]
    fn test_bulk_stage_track_and_unstage() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?.arg("stage-all").assert().success();
        let status = git_porcelain(&repo.path)?;
        assert!(status.contains("M  changed.txt"));
        assert!(status.contains("?? new.txt"));

        stager_cmd(&repo)?.arg("track-all").assert().success();
        assert!(git_porcelain(&repo.path)?.contains("A  new.txt"));

        stager_cmd(&repo)?.arg("unstage-all").assert().success();
        let status = git_porcelain(&repo.path)?;
        assert!(status.contains(" M changed.txt"));
        assert!(status.contains(" M staged.txt"));
        assert!(status.contains("?? new.txt"));

        Ok(())
    }

    #[test]
    fn test_track_all_with_nothing_untracked_is_skipped() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "initial.txt", "modified\n")?;

        stager_cmd(&repo)?
            .arg("track-all")
            .assert()
            .success()
            .stdout(predicate::str::contains("section is empty"));

        Ok(())
    }

    #[test]
    fn test_stage_marked_files() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .args(["mark", "changed.txt"])
            .assert()
            .success();
        stager_cmd(&repo)?
            .args(["mark", "new.txt"])
            .assert()
            .success();
        stager_cmd(&repo)?
            .args(["unmark", "new.txt"])
            .assert()
            .success();

        stager_cmd(&repo)?
            .args(["--simple", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[x]"));

        stager_cmd(&repo)?
            .arg("stage-marked")
            .assert()
            .success()
            .stdout(predicate::str::contains("Staged 1 marked file(s)"));

        let status = git_porcelain(&repo.path)?;
        assert!(status.contains("M  changed.txt"));
        assert!(status.contains("?? new.txt"));
        Ok(())
    }

    #[test]
    fn test_stage_marked_with_no_marks() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        stager_cmd(&repo)?
            .arg("stage-marked")
            .assert()
            .success()
            .stdout(predicate::str::contains("No marked files to stage"));

        Ok(())
    }
}
