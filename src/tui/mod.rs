//! Terminal front end: ratatui rendering and crossterm input around the
//! [`Navigator`](crate::navigator::Navigator).

pub mod app;
pub mod host;
pub mod render;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::git::GitCli;
use crate::navigator::Navigator;
use crate::views::EnterParam;
use host::{enter_terminal, leave_terminal, TerminalHost};

/// Run the navigator until the user quits. The terminal is restored on
/// every exit path.
pub fn run(repo: GitCli, config: Config, param: EnterParam) -> Result<()> {
    let workdir = repo.workdir().to_path_buf();
    let editor = config.editor_command();

    let terminal = enter_terminal()?;
    let mut host = TerminalHost::new(terminal, workdir, editor);

    let result = Navigator::start(repo, config, &mut host, param)
        .and_then(|mut navigator| app::run_loop(&mut host, &mut navigator));

    let mut terminal = host.into_terminal();
    leave_terminal(&mut terminal)?;
    result
}
