use crate::core::{config::Config, error::Result, git::GitCli};
use crate::tui;
use crate::views::EnterParam;

/// Start the interactive navigator, optionally with the log filtered to `branch`.
pub fn execute_ui(repo: GitCli, config: Config, branch: Option<String>) -> Result<()> {
    let param = branch.map_or(EnterParam::None, EnterParam::Branch);
    log::info!("Starting navigator in {}", repo.workdir().display());
    tui::run(repo, config, param)
}
