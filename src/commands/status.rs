use crate::core::{
    colors::classification_tone,
    error::Result,
    git::{GitCli, GitCommand, RepoClient},
    git_status::Classification,
    output::{print_info, print_json, print_section_header},
    parsers::StatusParser,
};
use colored::*;

pub fn execute_status(repo: &GitCli, json: bool) -> Result<()> {
    let lists = StatusParser::parse(&repo.exec(&GitCommand::status())?);

    if json {
        return print_json(&lists);
    }

    if lists.is_clean() {
        print_info("Nothing to commit, working tree clean");
        return Ok(());
    }

    for classification in Classification::ALL {
        let entries = lists.group(classification);
        if entries.is_empty() {
            continue;
        }

        print_section_header(classification.title());
        let tone = classification_tone(classification);
        for entry in entries {
            println!(
                "  {} {} {}",
                tone.paint(&entry.status_char().to_string()),
                entry.display_path().white(),
                format!("({})", entry.status().description()).bright_black()
            );
        }
    }
    println!();
    Ok(())
}
