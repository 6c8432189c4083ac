use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod branches_command_tests {
    use super::*;

    #[test]
    fn test_branches_marks_current() -> anyhow::Result<()> {
        let repo = create_branched_repo()?;

        repo.panes()?
            .arg("branches")
            .assert()
            .success()
            .stdout(assertions::has_current_branch("main"))
            .stdout(predicate::str::contains("    feature"));

        Ok(())
    }

    #[test]
    fn test_branches_follows_checkout() -> anyhow::Result<()> {
        let repo = create_branched_repo()?;
        git(&repo.path, &["checkout", "feature"])?;

        repo.panes()?
            .arg("branches")
            .assert()
            .success()
            .stdout(assertions::has_current_branch("feature"))
            .stdout(predicate::str::contains("    main"));

        Ok(())
    }

    #[test]
    fn test_branches_json() -> anyhow::Result<()> {
        let repo = create_branched_repo()?;

        let output = repo.panes()?.args(["branches", "--json"]).output()?;
        assert!(output.status.success());

        let branches: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
        let main = branches
            .iter()
            .find(|branch| branch["name"] == "main")
            .expect("main listed");
        assert_eq!(main["is_current"], true);
        assert_eq!(main["is_remote"], false);
        assert!(branches.iter().any(|branch| branch["name"] == "feature"));

        Ok(())
    }

    #[test]
    fn test_branches_before_first_commit() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;

        repo.panes()?
            .arg("branches")
            .assert()
            .success()
            .stdout(predicate::str::contains("No branches found"));

        Ok(())
    }
}
