use crate::core::{
    colors::branch_tone,
    error::Result,
    git::{GitCli, GitCommand, RepoClient},
    output::{print_info, print_json, print_section_header},
    parsers::BranchParser,
};
use colored::*;

pub fn execute_branches(repo: &GitCli, json: bool) -> Result<()> {
    let branches = BranchParser::parse(&repo.exec(&GitCommand::branches())?);

    if json {
        return print_json(&branches);
    }

    if branches.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return Ok(());
    }

    print_section_header("Branches");
    for branch in &branches {
        let name = branch_tone(branch).paint(&branch.name);
        if branch.is_current {
            println!(
                "{}{}{} {}",
                "[".bright_black(),
                "*".white(),
                "]".bright_black(),
                name.bold()
            );
        } else {
            println!("    {name}");
        }
    }
    println!();
    Ok(())
}
