use crate::core::{
    colors::diff_tone,
    entry::DiffLine,
    error::Result,
    git::{GitCli, GitCommand, RepoClient},
    output::{print_info, print_json},
    parsers::DiffParser,
};

/// `git show` of one commit, stat section first.
pub fn execute_show(repo: &GitCli, hash: &str, json: bool) -> Result<()> {
    let stat = repo.exec(&GitCommand::show_stat(hash))?;
    let show = repo.exec(&GitCommand::show(hash))?;
    print_lines(&DiffParser::parse_show(&stat, &show), json)
}

pub fn execute_diff(
    repo: &GitCli,
    path: &str,
    previous: Option<&str>,
    staged: bool,
    json: bool,
) -> Result<()> {
    let output = repo.exec(&GitCommand::diff(path, previous, staged))?;
    print_lines(&DiffParser::parse(&output, path), json)
}

fn print_lines(lines: &[DiffLine], json: bool) -> Result<()> {
    if json {
        return print_json(lines);
    }
    if lines.is_empty() {
        print_info("No changes.");
        return Ok(());
    }
    for line in lines {
        println!("{}", diff_tone(line.kind).paint(&line.text));
    }
    Ok(())
}
