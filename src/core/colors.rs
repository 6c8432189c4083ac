//! Unified color system shared by the terminal UI and the plain printers.
//!
//! Colors are chosen once, as a [`Tone`], from the entry being shown. Each
//! output surface then maps the tone to its own style type: `colored` strings
//! here, ratatui styles in the views.
//!
//! # Color Scheme
//! - **Diff**: file headers yellow, metadata blue, additions green,
//!   removals red, hunk headers magenta
//! - **Log**: hash magenta, date blue, author green
//! - **Status**: staged green, unstaged yellow, untracked cyan
//! - **Branches**: remote yellow, local blue

use crate::core::entry::{BranchEntry, DiffLineKind};
use crate::core::git_status::Classification;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Yellow,
    Blue,
    Green,
    Red,
    Magenta,
    Cyan,
    Muted,
}

impl Tone {
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Tone::Plain => text.normal(),
            Tone::Yellow => text.yellow(),
            Tone::Blue => text.blue(),
            Tone::Green => text.green(),
            Tone::Red => text.red(),
            Tone::Magenta => text.magenta(),
            Tone::Cyan => text.cyan(),
            Tone::Muted => text.bright_black(),
        }
    }
}

pub fn diff_tone(kind: DiffLineKind) -> Tone {
    match kind {
        DiffLineKind::FileHeader => Tone::Yellow,
        DiffLineKind::Meta => Tone::Blue,
        DiffLineKind::Added => Tone::Green,
        DiffLineKind::Removed => Tone::Red,
        DiffLineKind::HunkHeader => Tone::Magenta,
        DiffLineKind::Context | DiffLineKind::Header => Tone::Plain,
    }
}

pub fn classification_tone(classification: Classification) -> Tone {
    match classification {
        Classification::Staged => Tone::Green,
        Classification::Unstaged => Tone::Yellow,
        Classification::Untracked => Tone::Cyan,
    }
}

pub fn branch_tone(branch: &BranchEntry) -> Tone {
    if branch.is_remote {
        Tone::Yellow
    } else {
        Tone::Blue
    }
}

/// Tones of the log columns: graph, hash, date, author, subject, decoration.
pub const LOG_COLUMN_TONES: [Tone; 6] = [
    Tone::Plain,
    Tone::Magenta,
    Tone::Blue,
    Tone::Green,
    Tone::Plain,
    Tone::Yellow,
];
