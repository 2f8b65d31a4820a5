//! Menu state machine driving an online editing session.
//!
//! Menus are identified by value (`MenuSet::Id`) and resolved through a
//! [`MenuSet`] at every step, so nested menus never hold references to each
//! other. The engine keeps an explicit return stack of ancestor ids.
//!
//! ```text
//!            child key                      quit (stack non-empty)
//!   ShowingMenu ───────► ShowingMenu(child)  ────────────► ShowingMenu(parent)
//!        │  ▲                                   quit (stack empty)
//!  line  │  │ any line, then re-render     ShowingMenu ──────────► Terminated (on_exit)
//!        ▼  │
//!   AwaitingLine
//! ```

use std::fmt::Debug;

use log::{debug, trace};

use crate::olc::session::OlcSession;

/// Default case-sensitive quit key.
pub const DEFAULT_QUIT_KEY: &str = "Q";

/// How a menu classifies a single-key choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<Id> {
    /// Descend into another menu.
    Child(Id),
    /// Show `prompt` and hand the next full line to `parse_line` with `prompt_id`.
    RequestLine { prompt_id: u8, prompt: String },
    Invalid,
    Quit,
}

/// Registry of menus sharing a context type `C`.
pub trait MenuSet<C> {
    type Id: Copy + Eq + Debug;

    fn render(&self, id: Self::Id, ctx: &C, session: &mut dyn OlcSession);

    fn dispatch(
        &self,
        id: Self::Id,
        ctx: &mut C,
        session: &mut dyn OlcSession,
        choice: &str,
    ) -> Choice<Self::Id>;

    /// Consume a previously requested line. Returns whether the input was accepted.
    fn parse_line(
        &self,
        id: Self::Id,
        ctx: &mut C,
        session: &mut dyn OlcSession,
        prompt_id: u8,
        line: &str,
    ) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlcState<Id> {
    ShowingMenu,
    AwaitingLine { menu: Id, prompt_id: u8 },
    Terminated,
}

type ExitHook<C> = Box<dyn FnOnce(&mut C)>;

pub struct OlcEngine<C, M: MenuSet<C>> {
    menus: M,
    current: M::Id,
    stack: Vec<M::Id>,
    state: OlcState<M::Id>,
    quit_key: String,
    on_exit: Option<ExitHook<C>>,
}

impl<C, M: MenuSet<C>> OlcEngine<C, M> {
    pub fn new(menus: M, root: M::Id) -> Self {
        Self {
            menus,
            current: root,
            stack: Vec::new(),
            state: OlcState::ShowingMenu,
            quit_key: DEFAULT_QUIT_KEY.to_string(),
            on_exit: None,
        }
    }

    /// Surrounding whitespace is trimmed, as it is from input.
    pub fn with_quit_key(mut self, key: impl Into<String>) -> Self {
        self.quit_key = key.into().trim().to_string();
        self
    }

    /// Invoked exactly once, when the top-level menu is quit.
    pub fn on_exit(mut self, hook: impl FnOnce(&mut C) + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub fn menus(&self) -> &M {
        &self.menus
    }

    pub fn state(&self) -> OlcState<M::Id> {
        self.state
    }

    pub fn current(&self) -> M::Id {
        self.current
    }

    /// Number of ancestor menus on the return stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_terminated(&self) -> bool {
        self.state == OlcState::Terminated
    }

    /// Render the root menu. Calling it again only re-renders the current menu.
    pub fn start(&mut self, ctx: &C, session: &mut dyn OlcSession) {
        if self.is_terminated() {
            return;
        }
        self.menus.render(self.current, ctx, session);
    }

    /// Feed one line of operator input and return the resulting state.
    pub fn handle_input(
        &mut self,
        ctx: &mut C,
        session: &mut dyn OlcSession,
        input: &str,
    ) -> OlcState<M::Id> {
        let input = input.trim_end_matches(['\r', '\n']);
        match self.state {
            OlcState::Terminated => {}
            OlcState::AwaitingLine { menu, prompt_id } => {
                let accepted = self.menus.parse_line(menu, ctx, session, prompt_id, input);
                trace!("OLC parse on {:?} prompt {} accepted={}", menu, prompt_id, accepted);
                self.state = OlcState::ShowingMenu;
                self.current = menu;
                self.menus.render(self.current, ctx, session);
            }
            OlcState::ShowingMenu => {
                let choice = input.trim();
                if choice == self.quit_key {
                    self.quit(ctx, session);
                } else {
                    match self.menus.dispatch(self.current, ctx, session, choice) {
                        Choice::Child(child) => {
                            debug!("OLC enter {:?} from {:?}", child, self.current);
                            self.stack.push(self.current);
                            self.current = child;
                            self.menus.render(self.current, ctx, session);
                        }
                        Choice::RequestLine { prompt_id, prompt } => {
                            session.request_line(&prompt);
                            self.state = OlcState::AwaitingLine {
                                menu: self.current,
                                prompt_id,
                            };
                        }
                        Choice::Invalid => {
                            self.menus.render(self.current, ctx, session);
                        }
                        Choice::Quit => self.quit(ctx, session),
                    }
                }
            }
        }
        self.state
    }

    fn quit(&mut self, ctx: &mut C, session: &mut dyn OlcSession) {
        match self.stack.pop() {
            Some(parent) => {
                debug!("OLC leave {:?} for {:?}", self.current, parent);
                self.current = parent;
                self.menus.render(self.current, ctx, session);
            }
            None => {
                debug!("OLC session terminated");
                self.state = OlcState::Terminated;
                if let Some(hook) = self.on_exit.take() {
                    hook(ctx);
                }
            }
        }
    }
}
