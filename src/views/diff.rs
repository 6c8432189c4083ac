//! Read-only diff of one file or one commit.

use crate::core::colors::diff_tone;
use crate::core::entry::{DiffLine, Entry};
use crate::core::error::Result;
use crate::core::git::GitCommand;
use crate::core::list::{ListEngine, Node, TreeItem};
use crate::core::parsers::DiffParser;
use crate::views::rows::{render_list, span};
use crate::views::{
    dispatch, help, DiffTarget, EnterParam, Shortcut, Transition, View, ViewContext, ViewKind,
};
use crossterm::event::KeyCode;
use ratatui::{layout::Rect, text::Line, Frame};

const SHORTCUTS: &[Shortcut<DiffView>] = &[Shortcut {
    key: KeyCode::Enter,
    description: "Jump",
    action: DiffView::jump,
}];

#[derive(Debug, Default)]
pub struct DiffView {
    target: Option<DiffTarget>,
}

impl DiffView {
    pub fn new() -> Self {
        Self::default()
    }

    fn title(&self) -> String {
        match &self.target {
            Some(DiffTarget::Commit { hash }) => format!("Diff {hash}"),
            Some(DiffTarget::File { path, staged, .. }) if *staged => {
                format!("Diff {path} (staged)")
            }
            Some(DiffTarget::File { path, .. }) => format!("Diff {path}"),
            None => "Diff".to_string(),
        }
    }

    fn load(&mut self, ctx: &mut ViewContext<'_>, target: &DiffTarget) -> Result<Vec<DiffLine>> {
        match target {
            DiffTarget::Commit { hash } => {
                let stat = ctx.repo.exec(&GitCommand::show_stat(hash))?;
                let show = ctx.repo.exec(&GitCommand::show(hash))?;
                Ok(DiffParser::parse_show(&stat, &show))
            }
            DiffTarget::File {
                path,
                previous,
                staged,
            } => {
                let output =
                    ctx.repo
                        .exec(&GitCommand::diff(path, previous.as_deref(), *staged))?;
                Ok(DiffParser::parse(&output, path))
            }
        }
    }

    fn jump(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        if let Some(line) = node.payload.as_ref().and_then(Entry::as_diff) {
            if line.has_target() {
                let number = usize::try_from(line.resolved_line_number).unwrap_or(0);
                ctx.host.open_editor(&line.resolved_file_path, number);
            }
        }
        Ok(Transition::Stay)
    }
}

impl View for DiffView {
    fn kind(&self) -> ViewKind {
        ViewKind::Diff
    }

    fn shortcut_help(&self) -> Vec<(KeyCode, &'static str)> {
        help(SHORTCUTS)
    }

    fn on_key(
        &mut self,
        key: KeyCode,
        ctx: &mut ViewContext<'_>,
        node: &Node,
    ) -> Result<Option<Transition>> {
        dispatch(SHORTCUTS, self, key, ctx, node)
    }

    fn on_enter(&mut self, ctx: &mut ViewContext<'_>, param: EnterParam) -> Result<Transition> {
        let EnterParam::Diff(target) = param else {
            log::debug!("Diff entered without a subject, back to log");
            self.target = None;
            return Ok(Transition::SwitchMain(ViewKind::Log, EnterParam::None));
        };

        let lines = self.load(ctx, &target)?;
        self.target = Some(target);
        ctx.list.set(
            lines
                .into_iter()
                .enumerate()
                .map(|(index, line)| {
                    let label = line.text.clone();
                    TreeItem::leaf(index as i64, label, Entry::Diff(line))
                })
                .collect(),
        );
        ctx.list.select_index(0);
        Ok(Transition::Stay)
    }

    fn on_exit(&mut self) {
        self.target = None;
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool) {
        render_list(frame, area, list, &self.title(), focused, |node| {
            match node.payload.as_ref().and_then(Entry::as_diff) {
                Some(line) => Line::from(span(line.text.replace('\t', "    "), diff_tone(line.kind))),
                None => Line::from(node.label.clone()),
            }
        });
    }
}
