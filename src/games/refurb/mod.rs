//! The PC-refurbishment treasure hunt, embedded in the lab room.
//!
//! Not an overlay: the lab scene delegates its content area and input
//! here. Finishing the hunt is the lab's puzzle.

mod logic;
mod render;
mod state;

pub use self::logic::{
    answer_station, close_station, complete_station, open_station, reset_game, start_game,
};
pub use self::render::render;
pub use self::state::{
    station_info, Attempt, RefurbState, StationId, StationInfo, ALL_STATIONS, STATION_COUNT,
    STATION_REWARD,
};

use crate::input::InputEvent;

const ACT_START: u16 = 1;
const ACT_RESET: u16 = 2;
const ACT_CANCEL: u16 = 3;
const ACT_SLOT_BASE: u16 = 10;
const ACT_CHOICE_BASE: u16 = 20;

/// Route an input event into the hunt. Returns true when consumed; the
/// lab scene keeps anything else (notably Esc with no bench open, which
/// leaves the room).
pub fn handle_input(state: &mut RefurbState, event: &InputEvent) -> bool {
    if state.active.is_some() {
        return match event {
            InputEvent::Key(c @ '1'..='3') => {
                answer_station(state, *c as usize - '1' as usize);
                true
            }
            InputEvent::Click(id)
                if (ACT_CHOICE_BASE..ACT_CHOICE_BASE + 3).contains(id) =>
            {
                answer_station(state, (*id - ACT_CHOICE_BASE) as usize);
                true
            }
            InputEvent::Esc | InputEvent::Key('q') | InputEvent::Click(ACT_CANCEL) => {
                close_station(state);
                true
            }
            _ => false,
        };
    }

    if state.complete {
        return match event {
            InputEvent::Key('r') | InputEvent::Enter | InputEvent::Click(ACT_RESET) => {
                start_game(state);
                true
            }
            _ => false,
        };
    }

    if !state.started() {
        return match event {
            InputEvent::Key('s') | InputEvent::Enter | InputEvent::Click(ACT_START) => {
                start_game(state);
                true
            }
            _ => false,
        };
    }

    match event {
        InputEvent::Key(c @ '1'..='6') => {
            try_open_slot(state, *c as usize - '1' as usize);
            true
        }
        InputEvent::Click(id)
            if (ACT_SLOT_BASE..ACT_SLOT_BASE + STATION_COUNT as u16).contains(id) =>
        {
            try_open_slot(state, (*id - ACT_SLOT_BASE) as usize);
            true
        }
        _ => false,
    }
}

/// Speculative open from a bench click; dark benches are ignored.
fn try_open_slot(state: &mut RefurbState, slot: usize) {
    if let Some(&id) = state.slots.get(slot) {
        let _ = open_station(state, id);
    }
}
