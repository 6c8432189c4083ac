//! Collaborators provided by whatever hosts the navigator.
//!
//! Views call these synchronously: a confirmation blocks until the user
//! answers, and opening an editor returns once the attempt was made.

pub trait Host {
    /// Ask a yes/no question. `true` means the user accepted.
    fn confirm(&mut self, title: &str, message: &str, yes_label: &str, no_label: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn notify(&mut self, title: &str, message: &str);

    /// Open `path` (relative to the work tree) at `line`. Best effort.
    fn open_editor(&mut self, path: &str, line: usize);

    /// Reveal a non-source file with the platform's default handler. Best effort.
    fn reveal(&mut self, path: &str);
}
