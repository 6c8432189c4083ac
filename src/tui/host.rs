//! Host collaborators backed by the real terminal.

use crate::core::error::{GitPanesError, Result};
use crate::core::git::quote_path;
use crate::host::Host;
use crate::tui::render::draw_dialog;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw, alternate-screen mode.
pub fn enter_terminal() -> Result<Term> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(GitPanesError::terminal)?;
    terminal.hide_cursor().map_err(GitPanesError::terminal)?;
    Ok(terminal)
}

pub fn leave_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor().map_err(GitPanesError::terminal)?;
    Ok(())
}

enum Answer {
    Yes,
    No,
}

pub struct TerminalHost {
    terminal: Term,
    workdir: PathBuf,
    editor: String,
    /// Last full screen, kept so dialogs can be drawn on top of it.
    backdrop: Buffer,
}

impl TerminalHost {
    pub fn new(terminal: Term, workdir: PathBuf, editor: String) -> Self {
        Self {
            terminal,
            workdir,
            editor,
            backdrop: Buffer::empty(Default::default()),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> Term {
        self.terminal
    }

    pub fn set_backdrop(&mut self, buffer: Buffer) {
        self.backdrop = buffer;
    }

    fn show_dialog(&mut self, title: &str, message: &str, buttons: &[String]) -> Result<()> {
        let backdrop = &self.backdrop;
        self.terminal
            .draw(|frame| {
                frame.buffer_mut().merge(backdrop);
                draw_dialog(frame, title, message, buttons);
            })
            .map_err(GitPanesError::terminal)?;
        Ok(())
    }

    /// Block until `decide` accepts a pressed key.
    fn wait_for(&mut self, decide: impl Fn(KeyCode) -> Option<Answer>) -> Result<Answer> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(answer) = decide(key.code) {
                    return Ok(answer);
                }
            }
        }
    }

    fn suspend<T>(&mut self, f: impl FnOnce() -> T) -> Result<T> {
        leave_terminal(&mut self.terminal)?;
        let result = f();
        enable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        )?;
        self.terminal.hide_cursor().map_err(GitPanesError::terminal)?;
        self.terminal.clear().map_err(GitPanesError::terminal)?;
        Ok(result)
    }

    fn shell(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command_line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command_line]);
            cmd
        }
    }
}

/// Command line that opens `path` at `line`; line 0 means no particular line.
pub fn editor_command_line(editor: &str, path: &str, line: usize) -> String {
    if line == 0 {
        format!("{editor} {}", quote_path(path))
    } else {
        format!("{editor} +{line} {}", quote_path(path))
    }
}

fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    }
}

impl Host for TerminalHost {
    fn confirm(&mut self, title: &str, message: &str, yes_label: &str, no_label: &str) -> bool {
        let buttons = [format!("y:{yes_label}"), format!("n:{no_label}")];
        let answer = self.show_dialog(title, message, &buttons).and_then(|_| {
            self.wait_for(|code| match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Answer::Yes),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Answer::No),
                _ => None,
            })
        });

        match answer {
            Ok(Answer::Yes) => true,
            Ok(Answer::No) => false,
            Err(e) => {
                log::error!("Confirmation '{title}' failed: {e}");
                false
            }
        }
    }

    fn notify(&mut self, title: &str, message: &str) {
        let message = if message.is_empty() { "Done" } else { message };
        let result = self
            .show_dialog(title, message, &["Enter:Ok".to_string()])
            .and_then(|_| {
                self.wait_for(|code| match code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_) => Some(Answer::Yes),
                    _ => None,
                })
            });
        if let Err(e) = result {
            log::error!("Notification '{title}' failed: {e}");
        }
    }

    fn open_editor(&mut self, path: &str, line: usize) {
        let command_line = editor_command_line(&self.editor, path, line);
        log::info!("Opening editor: {command_line}");

        let workdir = self.workdir.clone();
        let status = self.suspend(|| {
            Self::shell(&command_line)
                .current_dir(&workdir)
                .status()
        });
        match status {
            Ok(Ok(status)) if status.success() => {}
            Ok(Ok(status)) => log::warn!("Editor exited with {status}"),
            Ok(Err(e)) => log::warn!("Could not start editor '{command_line}': {e}"),
            Err(e) => log::error!("Could not restore terminal: {e}"),
        }
    }

    fn reveal(&mut self, path: &str) {
        let mut command = Command::new(opener());
        command.arg(path).current_dir(&self.workdir);
        if let Err(e) = spawn_reaped(command) {
            log::warn!("Could not reveal {path}: {e}");
        }
    }
}

/// Start `command` without blocking. A background thread waits for it to exit.
pub fn spawn_reaped(mut command: Command) -> Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(e) => {
            log::warn!("Lost track of child {}: {e}", child.id());
            None
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_command_line() {
        assert_eq!(editor_command_line("vi", "src/a.rs", 12), "vi +12 'src/a.rs'");
        assert_eq!(editor_command_line("code -w", "a b.rs", 0), "code -w 'a b.rs'");
    }

    #[cfg(unix)]
    #[test]
    fn test_spawned_child_is_waited_for() -> Result<()> {
        let handle = spawn_reaped(Command::new("true"))?;
        let status = handle.join().expect("reaper thread");
        assert!(status.is_some_and(|status| status.success()));

        let status = spawn_reaped(Command::new("false"))?.join().expect("reaper thread");
        assert!(status.is_some_and(|status| !status.success()));
        Ok(())
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let result = spawn_reaped(Command::new("git-panes-no-such-opener"));
        assert!(matches!(result, Err(GitPanesError::Io(_))));
    }
}
