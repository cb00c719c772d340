//! Snake, played at the gate guard's booth.
//!
//! The guard bets the gate code that nobody can grow a snake to the target
//! length. Winning a run raises [`MiniGameEvent::Completed`]; the app turns
//! that into the gate puzzle completion.

mod logic;
mod render;
mod save;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::{MiniGame, MiniGameEvent};
use crate::input::{ClickState, InputEvent};

use self::state::{Dir, RunState, SnakeState};

const ACT_UP: u16 = 1;
const ACT_LEFT: u16 = 2;
const ACT_DOWN: u16 = 3;
const ACT_RIGHT: u16 = 4;
const ACT_RESTART: u16 = 5;
const ACT_LEAVE: u16 = 6;

pub struct SnakeGame {
    state: SnakeState,
    event: Option<MiniGameEvent>,
    /// Set once per run so the record is written a single time per outcome.
    record_saved: bool,
}

impl SnakeGame {
    pub fn new(seed: u64) -> Self {
        let state = SnakeState::new(seed);

        #[cfg(target_arch = "wasm32")]
        let state = {
            let mut s = state;
            save::load_record(&mut s);
            s
        };

        Self {
            state,
            event: None,
            record_saved: false,
        }
    }

    fn steer(&mut self, dir: Dir) {
        logic::steer(&mut self.state, dir);
    }

    fn restart(&mut self) {
        logic::restart(&mut self.state);
        self.record_saved = false;
    }

    fn finish_run(&mut self) {
        if self.record_saved {
            return;
        }
        self.record_saved = true;
        #[cfg(target_arch = "wasm32")]
        save::save_record(&self.state);
        if self.state.run == RunState::Won {
            self.event = Some(MiniGameEvent::Completed);
        }
    }
}

impl MiniGame for SnakeGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key('w') | InputEvent::Click(ACT_UP) => {
                self.steer(Dir::Up);
                true
            }
            InputEvent::Key('a') | InputEvent::Click(ACT_LEFT) => {
                self.steer(Dir::Left);
                true
            }
            InputEvent::Key('s') | InputEvent::Click(ACT_DOWN) => {
                self.steer(Dir::Down);
                true
            }
            InputEvent::Key('d') | InputEvent::Click(ACT_RIGHT) => {
                self.steer(Dir::Right);
                true
            }
            InputEvent::Key('r') | InputEvent::Click(ACT_RESTART)
                if self.state.run != RunState::Playing =>
            {
                self.restart();
                true
            }
            InputEvent::Key('q') | InputEvent::Esc | InputEvent::Click(ACT_LEAVE) => {
                self.event = Some(MiniGameEvent::Dismissed);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
        if self.state.run != RunState::Playing {
            self.finish_run();
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn take_event(&mut self) -> Option<MiniGameEvent> {
        self.event.take()
    }
}
