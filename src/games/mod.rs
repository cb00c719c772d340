//! Mini-game trait, overlay events, and the overlay factory.

pub mod nird_form;
pub mod refurb;
pub mod snake;
pub mod terminal;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::nav::Overlay;

/// What an overlay mini-game reports to the app. Raised at most once per
/// overlay lifetime, drained via [`MiniGame::take_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniGameEvent {
    /// The player beat it. The app applies the game's single state-machine
    /// mutation and closes the overlay.
    Completed,
    /// The player backed out. The overlay closes with no state effect.
    Dismissed,
}

/// Trait that all overlay mini-games implement.
pub trait MiniGame {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance game logic by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Render the overlay into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// The event raised since the last call, if any. One-shot.
    fn take_event(&mut self) -> Option<MiniGameEvent>;
}

/// Create the overlay instance for a tag.
pub fn create_overlay(tag: Overlay) -> Box<dyn MiniGame> {
    match tag {
        Overlay::Snake => Box::new(snake::SnakeGame::new(clock_seed())),
        Overlay::NirdForm => Box::new(nird_form::NirdFormGame::new()),
        Overlay::LinuxTerminal => Box::new(terminal::TerminalGame::new()),
    }
}

/// Wall-clock seed in the browser, fixed seed elsewhere (tests).
pub(crate) fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        42
    }
}
