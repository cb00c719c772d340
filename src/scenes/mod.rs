//! One scene per place the player can stand. Scenes render from `&App`
//! and mutate through `&mut App`, holding no state of their own; walks,
//! overlays and chat all go through the app helpers so the scenes stay
//! plain render-and-route code.

pub mod gate;
pub mod hallway;
pub mod lab;
pub mod office;
pub mod server;
pub mod video;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::input::{ClickState, InputEvent};
use crate::nav::{Phase, RoomId};

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    match app.nav.phase() {
        Phase::Gate => gate::render(app, f, area, click_state),
        Phase::Hallway => hallway::render(app, f, area, click_state),
        Phase::Room => match app.nav.room() {
            Some(RoomId::Lab) => lab::render(app, f, area, click_state),
            Some(RoomId::Server) => server::render(app, f, area, click_state),
            Some(RoomId::Office) => office::render(app, f, area, click_state),
            Some(RoomId::Video) => video::render(app, f, area, click_state),
            None => {}
        },
    }
}

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match app.nav.phase() {
        Phase::Gate => gate::handle_input(app, event),
        Phase::Hallway => hallway::handle_input(app, event),
        Phase::Room => match app.nav.room() {
            Some(RoomId::Lab) => lab::handle_input(app, event),
            Some(RoomId::Server) => server::handle_input(app, event),
            Some(RoomId::Office) => office::handle_input(app, event),
            Some(RoomId::Video) => video::handle_input(app, event),
            None => false,
        },
    }
}
