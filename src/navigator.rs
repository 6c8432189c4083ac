//! Main / sub slot state machine and input routing.
//!
//! The navigator owns every view, the two list engines and the repo client.
//! Views ask for changes by returning a [`Transition`]; the navigator is the
//! only place slot state is mutated.
//!
//! # Key routing
//! Evaluated per keystroke, first match wins:
//! 1. sub open and `q`: close the sub view
//! 2. focused view locked: it may take the key through [`View::on_input`]
//! 3. list navigation (`Up`/`k`, `Down`/`j`) and `Tab` focus switching
//! 4. not locked and `q` while main is not Log: back to Log
//! 5. not locked and another view's hotkey: switch main to it
//! 6. the focused view's shortcut for its selected row, if any

use crate::core::config::Config;
use crate::core::error::{GitPanesError, Result};
use crate::core::git::RepoClient;
use crate::core::list::{Direction, ListEngine};
use crate::host::Host;
use crate::views::{registry, EnterParam, Transition, View, ViewContext, ViewKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const CLOSE_KEY: KeyCode = KeyCode::Char('q');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Main,
    Sub,
}

pub struct Navigator<R: RepoClient> {
    views: Vec<Box<dyn View>>,
    main: ViewKind,
    sub: Option<ViewKind>,
    main_list: ListEngine,
    sub_list: ListEngine,
    focus: Slot,
    repo: R,
    config: Config,
}

impl<R: RepoClient> Navigator<R> {
    /// Show the log in the main slot. `param` is handed to the log view.
    pub fn start(repo: R, config: Config, host: &mut dyn Host, param: EnterParam) -> Result<Self> {
        let mut navigator = Navigator {
            views: registry(),
            main: ViewKind::Log,
            sub: None,
            main_list: ListEngine::new(),
            sub_list: ListEngine::new(),
            focus: Slot::Main,
            repo,
            config,
        };
        let transition = navigator.enter(Slot::Main, ViewKind::Log, param, host)?;
        navigator.apply(transition, host)?;
        Ok(navigator)
    }

    pub fn main_kind(&self) -> ViewKind {
        self.main
    }

    pub fn sub_kind(&self) -> Option<ViewKind> {
        self.sub
    }

    pub fn focus(&self) -> Slot {
        self.focus
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self, kind: ViewKind) -> &dyn View {
        self.views[kind.index()].as_ref()
    }

    pub fn list(&self, slot: Slot) -> &ListEngine {
        match slot {
            Slot::Main => &self.main_list,
            Slot::Sub => &self.sub_list,
        }
    }

    /// View shown in `slot`, if the slot is occupied.
    pub fn kind_in(&self, slot: Slot) -> Option<ViewKind> {
        match slot {
            Slot::Main => Some(self.main),
            Slot::Sub => self.sub,
        }
    }

    fn focused_kind(&self) -> ViewKind {
        self.kind_in(self.focus).unwrap_or(self.main)
    }

    /// Run `f` against the view of `kind` with the list of `slot`.
    fn with_view<T>(
        &mut self,
        slot: Slot,
        kind: ViewKind,
        host: &mut dyn Host,
        f: impl FnOnce(&mut dyn View, &mut ViewContext<'_>) -> Result<T>,
    ) -> Result<T> {
        let list = match slot {
            Slot::Main => &mut self.main_list,
            Slot::Sub => &mut self.sub_list,
        };
        let mut ctx = ViewContext {
            list,
            repo: &self.repo,
            host,
            config: &self.config,
        };
        f(self.views[kind.index()].as_mut(), &mut ctx)
    }

    fn enter(
        &mut self,
        slot: Slot,
        kind: ViewKind,
        param: EnterParam,
        host: &mut dyn Host,
    ) -> Result<Transition> {
        log::debug!("Enter {kind} in {slot:?} slot with {param:?}");
        self.with_view(slot, kind, host, |view, ctx| view.on_enter(ctx, param))
    }

    pub fn switch_main(
        &mut self,
        kind: ViewKind,
        param: EnterParam,
        host: &mut dyn Host,
    ) -> Result<()> {
        if kind == self.main {
            return Ok(());
        }
        self.close_sub();

        self.views[self.main.index()].on_exit();
        log::debug!("Switch main {} -> {kind}", self.main);
        self.main = kind;
        self.main_list.clear();
        self.focus = Slot::Main;

        let transition = self.enter(Slot::Main, kind, param, host)?;
        self.apply(transition, host)
    }

    pub fn open_sub(&mut self, kind: ViewKind, param: EnterParam, host: &mut dyn Host) -> Result<()> {
        if self.sub == Some(kind) {
            return Ok(());
        }
        if kind == self.main {
            log::warn!("{kind} is already the main view, not opening it as sub");
            return Ok(());
        }
        self.close_sub();

        log::debug!("Open sub {kind}");
        self.sub = Some(kind);
        self.sub_list.clear();
        let transition = match self.enter(Slot::Sub, kind, param, host) {
            Ok(transition) => transition,
            Err(e) => {
                self.close_sub();
                return Err(e);
            }
        };
        self.focus = Slot::Sub;
        self.apply(transition, host)
    }

    pub fn close_sub(&mut self) {
        let Some(kind) = self.sub.take() else {
            return;
        };
        log::debug!("Close sub {kind}");
        self.views[kind.index()].on_exit();
        self.sub_list.clear();
        self.focus = Slot::Main;
    }

    pub fn apply(&mut self, transition: Transition, host: &mut dyn Host) -> Result<()> {
        match transition {
            Transition::Stay => Ok(()),
            Transition::SwitchMain(kind, param) => self.switch_main(kind, param, host),
            Transition::OpenSub(kind, param) => self.open_sub(kind, param, host),
            Transition::ReopenSub(kind, param) => {
                self.close_sub();
                self.open_sub(kind, param, host)
            }
            Transition::CloseSub => {
                self.close_sub();
                Ok(())
            }
        }
    }

    fn report(&self, host: &mut dyn Host, error: GitPanesError) {
        log::error!("{error}");
        host.notify("Error", &error.to_string());
    }

    /// Route one keystroke. Failures are reported to the host.
    pub fn handle_key(&mut self, key: KeyEvent, host: &mut dyn Host) {
        if let Err(e) = self.route_key(key, host) {
            self.report(host, e);
        }
    }

    fn route_key(&mut self, key: KeyEvent, host: &mut dyn Host) -> Result<()> {
        if self.sub.is_some() && key.code == CLOSE_KEY {
            self.close_sub();
            return Ok(());
        }

        let focus = self.focus;
        let kind = self.focused_kind();
        let locked = self.view(kind).is_locked();
        if locked {
            if let Some(transition) =
                self.with_view(focus, kind, host, |view, ctx| view.on_input(key, ctx))?
            {
                return self.apply(transition, host);
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_mut(focus).move_selection(Direction::Prev);
                return Ok(());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_mut(focus).move_selection(Direction::Next);
                return Ok(());
            }
            KeyCode::Tab if self.sub.is_some() => {
                self.focus = match self.focus {
                    Slot::Main => Slot::Sub,
                    Slot::Sub => Slot::Main,
                };
                return Ok(());
            }
            _ => {}
        }

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(());
        }

        if !locked {
            if key.code == CLOSE_KEY && self.main != ViewKind::Log {
                return self.switch_main(ViewKind::Log, EnterParam::None, host);
            }
            if let Some(target) = ViewKind::ALL
                .into_iter()
                .find(|candidate| candidate.hotkey() == key.code && *candidate != self.main)
            {
                return self.switch_main(target, EnterParam::None, host);
            }
        }

        let Some(node) = self.list(focus).selected_node().cloned() else {
            log::debug!("No selection in {kind}, dropping {:?}", key.code);
            return Ok(());
        };
        if let Some(transition) =
            self.with_view(focus, kind, host, |view, ctx| view.on_key(key.code, ctx, &node))?
        {
            self.apply(transition, host)?;
        }
        Ok(())
    }

    fn list_mut(&mut self, slot: Slot) -> &mut ListEngine {
        match slot {
            Slot::Main => &mut self.main_list,
            Slot::Sub => &mut self.sub_list,
        }
    }

    /// Select the `row`th visible row of `slot` and run its click hook.
    pub fn handle_click(&mut self, slot: Slot, row: usize, double: bool, host: &mut dyn Host) {
        let Some(kind) = self.kind_in(slot) else {
            return;
        };
        self.focus = slot;

        let list = self.list_mut(slot);
        list.select_index(row);
        let Some(node) = list.selected_node().cloned() else {
            return;
        };

        let result = self
            .with_view(slot, kind, host, |view, ctx| {
                if double {
                    view.on_double_click(ctx, &node)
                } else {
                    view.on_single_click(ctx, &node)
                }
            })
            .and_then(|transition| self.apply(transition, host));
        if let Err(e) = result {
            self.report(host, e);
        }
    }
}
