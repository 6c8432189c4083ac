use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod status_command_tests {
    use super::*;

    #[test]
    fn test_status_groups_paths() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        repo.panes()?
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_section("Changes to be committed"))
            .stdout(assertions::has_section("Changes not staged for commit"))
            .stdout(assertions::has_section("Untracked files"))
            .stdout(assertions::has_status_row('A', "staged.txt"))
            .stdout(assertions::has_status_row('M', "initial.txt"))
            .stdout(assertions::has_status_row('?', "notes.txt"))
            .stdout(assertions::has_status("new"))
            .stdout(assertions::has_status("modified"))
            .stdout(assertions::has_status("untracked"));

        Ok(())
    }

    #[test]
    fn test_status_decodes_non_ascii_paths() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "é.txt", "accent\n")?;

        repo.panes()?
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_status_row('?', "é.txt"));

        let output = repo.panes()?.args(["status", "--json"]).output()?;
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["untracked"][0]["path"], "é.txt");

        Ok(())
    }

    #[test]
    fn test_status_skips_empty_groups() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "notes.txt", "scratch\n")?;

        repo.panes()?
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_section("Untracked files"))
            .stdout(assertions::has_section("Changes to be committed").not())
            .stdout(assertions::has_section("Changes not staged for commit").not());

        Ok(())
    }

    #[test]
    fn test_status_clean_tree() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        repo.panes()?
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Nothing to commit, working tree clean",
            ));

        Ok(())
    }

    #[test]
    fn test_status_shows_rename_source() -> anyhow::Result<()> {
        let repo = create_renamed_repo()?;

        repo.panes()?
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_status_row('R', "old.txt -> new.txt"));

        Ok(())
    }

    #[test]
    fn test_status_json() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        let output = repo.panes()?.args(["status", "--json"]).output()?;
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["staged"][0]["path"], "staged.txt");
        assert_eq!(value["unstaged"][0]["path"], "initial.txt");
        assert_eq!(value["untracked"][0]["path"], "notes.txt");
        assert_eq!(value["untracked"][0]["raw_status_code"], "??");

        Ok(())
    }

    #[test]
    fn test_status_from_subdirectory() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;
        create_file(&repo.path, "nested/deeper/keep.txt", "x\n")?;

        repo.panes()?
            .current_dir(repo.path.join("nested/deeper"))
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_status_row('A', "staged.txt"));

        Ok(())
    }
}
