use crate::core::{
    colors::LOG_COLUMN_TONES,
    config::Config,
    entry::LogEntry,
    error::Result,
    git::{GitCli, GitCommand, RepoClient},
    output::{print_info, print_json},
    parsers::LogParser,
};

pub fn execute_log(repo: &GitCli, config: &Config, branch: Option<&str>, json: bool) -> Result<()> {
    let output = repo.exec(&GitCommand::log(branch, config.log_limit))?;
    let entries = LogParser::parse(&output);
    log::debug!("Parsed {} log rows", entries.len());

    if json {
        return print_json(&entries);
    }

    // an unborn branch makes git log print only its error text
    if !entries.iter().any(LogEntry::is_commit) {
        print_info("No commits yet.");
        return Ok(());
    }

    for entry in &entries {
        if !entry.is_commit() {
            println!("{}", entry.raw_graph_prefix);
            continue;
        }

        let cells = [
            entry.raw_graph_prefix.clone(),
            entry.short_hash.clone(),
            entry.display_date(),
            entry.author.clone(),
            entry.subject.clone(),
            entry.ref_decoration.trim().to_string(),
        ];
        let line = cells
            .iter()
            .zip(LOG_COLUMN_TONES)
            .filter(|(cell, _)| !cell.is_empty())
            .map(|(cell, tone)| tone.paint(cell).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
    Ok(())
}
