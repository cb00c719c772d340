//! The staff office: paperwork everywhere, and the volunteer pledge form
//! waiting on the head teacher's desk.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::input::{ClickState, InputEvent};
use crate::nav::{Overlay, PuzzleId};
use crate::widgets::ClickableList;

const ACT_FORM: u16 = 1;
const ACT_EXIT: u16 = 2;

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key('f') | InputEvent::Click(ACT_FORM) => {
            app.open_overlay(Overlay::NirdForm);
            true
        }
        InputEvent::Esc | InputEvent::Key('q') | InputEvent::Click(ACT_EXIT) => {
            app.nav.exit_room();
            true
        }
        _ => false,
    }
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let signed = app.nav.puzzle_done(PuzzleId::Office);
    let mut list = ClickableList::new();

    list.push(Line::from(Span::styled(
        "Stacks of repair dockets, a cold cup of tea, and a corkboard of",
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(Span::styled(
        "thank-you cards from classes with revived computers.",
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(""));
    if signed {
        list.push(Line::from(Span::styled(
            "Your signed pledge hangs in a frame by the door.",
            Style::default().fg(Color::Green),
        )));
    } else {
        list.push(Line::from(Span::styled(
            "A volunteer pledge form sits squarely on the desk, pen beside it.",
            Style::default().fg(Color::Yellow),
        )));
    }
    list.push(Line::from(""));

    let form_label = if signed {
        "Reread the pledge form"
    } else {
        "Read the volunteer form"
    };
    list.push_choice('f', form_label, ACT_FORM);
    list.push(Line::from(""));
    list.push_clickable(
        Line::from(Span::styled(
            " ▸ Back to the hallway (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_EXIT,
    );

    let title = Line::from(Span::styled(
        " Staff Office ",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let inner_w = area.width.saturating_sub(2);
    {
        let mut cs = click_state.borrow_mut();
        list.register_targets(area, &mut cs, 1, 1, 0, inner_w);
    }
    f.render_widget(
        Paragraph::new(list.into_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false }),
        area,
    );
}
