//! The refurbishment lab: the whole room is the bench hunt. Input goes
//! to the hunt first; whatever it leaves alone can still exit the room.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::games::refurb;
use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;

// High id so it never collides with the hunt's own action rows.
const ACT_EXIT: u16 = 90;

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    if refurb::handle_input(&mut app.refurb, event) {
        return true;
    }
    match event {
        InputEvent::Esc | InputEvent::Key('q') | InputEvent::Click(ACT_EXIT) => {
            app.nav.exit_room();
            true
        }
        _ => false,
    }
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);
    refurb::render(&app.refurb, f, chunks[0], click_state);

    let mut list = ClickableList::new();
    list.push_clickable(
        Line::from(Span::styled(
            " ▸ Leave the lab (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_EXIT,
    );
    {
        let mut cs = click_state.borrow_mut();
        list.register_targets(chunks[1], &mut cs, 0, 0, 0, 0);
    }
    f.render_widget(Paragraph::new(list.into_lines()), chunks[1]);
}
