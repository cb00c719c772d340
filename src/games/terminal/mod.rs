//! The server room's serial console.
//!
//! A little command-line simulator: poke around the rescue disk, then run
//! the NIRD installer. A finished install raises
//! [`MiniGameEvent::Completed`]; the app marks the server puzzle solved.

mod logic;
mod render;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::{MiniGame, MiniGameEvent};
use crate::input::{ClickState, InputEvent};

use self::state::{InstallPhase, TermState};

const ACT_HELP: u16 = 1;
const ACT_LS: u16 = 2;
const ACT_CAT: u16 = 3;
const ACT_INSTALL: u16 = 4;
const ACT_LEAVE: u16 = 5;

/// Longest input the prompt accepts. Keeps the prompt on one line.
const MAX_INPUT_LEN: usize = 48;

pub struct TerminalGame {
    state: TermState,
    event: Option<MiniGameEvent>,
    /// Completion is reported once, even though the phase stays `Done`.
    announced: bool,
}

impl TerminalGame {
    pub fn new() -> Self {
        Self {
            state: TermState::new(),
            event: None,
            announced: false,
        }
    }

    fn run(&mut self, cmd: &str) {
        logic::run_command(&mut self.state, cmd);
    }
}

impl MiniGame for TerminalGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        // Esc leaves the console in every phase, even mid-install.
        if matches!(event, InputEvent::Esc | InputEvent::Click(ACT_LEAVE)) {
            self.event = Some(MiniGameEvent::Dismissed);
            return true;
        }
        if self.state.installing() {
            return false;
        }
        match event {
            InputEvent::Key(c) => {
                if self.state.input.len() < MAX_INPUT_LEN {
                    self.state.input.push(*c);
                }
                true
            }
            InputEvent::Backspace => {
                self.state.input.pop();
                true
            }
            InputEvent::Enter => {
                let cmd = std::mem::take(&mut self.state.input);
                self.run(&cmd);
                true
            }
            InputEvent::Click(ACT_HELP) => {
                self.run("help");
                true
            }
            InputEvent::Click(ACT_LS) => {
                self.run("ls");
                true
            }
            InputEvent::Click(ACT_CAT) => {
                self.run("cat README.txt");
                true
            }
            InputEvent::Click(ACT_INSTALL) => {
                self.run("./install.sh");
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
        if self.state.install == InstallPhase::Done && !self.announced {
            self.announced = true;
            self.event = Some(MiniGameEvent::Completed);
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn take_event(&mut self) -> Option<MiniGameEvent> {
        self.event.take()
    }
}
