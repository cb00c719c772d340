//! The server room: one tired machine, one console, and the Linux
//! install that brings it back.

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

const ACT_CONSOLE: u16 = 1;
const ACT_EXIT: u16 = 2;

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key('c') | InputEvent::Click(ACT_CONSOLE) => {
            app.open_overlay(Overlay::LinuxTerminal);
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
    let solved = app.nav.puzzle_done(PuzzleId::Server);
    let mut list = ClickableList::new();

    if solved {
        list.push(Line::from(Span::styled(
            "The rack hums steadily. Fans spin easy on the fresh system.",
            Style::default().fg(Color::Green),
        )));
        list.push(Line::from(Span::styled(
            "A sticky note on the bezel reads \"second life: granted\".",
            Style::default().fg(Color::Gray),
        )));
    } else {
        list.push(Line::from(Span::styled(
            "An elderly tower server idles behind a mesh door, its old",
            Style::default().fg(Color::Gray),
        )));
        list.push(Line::from(Span::styled(
            "system long out of support. A serial console sits ready.",
            Style::default().fg(Color::Gray),
        )));
    }
    list.push(Line::from(""));
    list.push(Line::from(Span::styled(
        "      ╔═════════╗",
        Style::default().fg(Color::DarkGray),
    )));
    list.push(Line::from(vec![
        Span::styled("      ║ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if solved { "o o o ●" } else { "o o o ○" },
            Style::default().fg(if solved { Color::Green } else { Color::Red }),
        ),
        Span::styled(" ║", Style::default().fg(Color::DarkGray)),
    ]));
    list.push(Line::from(Span::styled(
        "      ╚═════════╝",
        Style::default().fg(Color::DarkGray),
    )));
    list.push(Line::from(""));

    let console_label = if solved {
        "Sit at the console again"
    } else {
        "Sit at the console"
    };
    list.push_choice('c', console_label, ACT_CONSOLE);
    list.push(Line::from(""));
    list.push_clickable(
        Line::from(Span::styled(
            " ▸ Back to the hallway (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_EXIT,
    );

    let title = Line::from(Span::styled(
        " Server Room ",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Phase, RoomId};

    fn in_server_room() -> App {
        let mut app = App::new();
        app.nav.go_to_hallway();
        app.nav.enter_room(RoomId::Server);
        app
    }

    #[test]
    fn console_key_opens_the_terminal() {
        let mut app = in_server_room();
        assert!(handle_input(&mut app, &InputEvent::Key('c')));
        assert!(app.overlay_open());
        assert_eq!(app.nav.overlay(), Some(Overlay::LinuxTerminal));
    }

    #[test]
    fn esc_returns_to_the_hallway() {
        let mut app = in_server_room();
        assert!(handle_input(&mut app, &InputEvent::Esc));
        assert_eq!(app.nav.phase(), Phase::Hallway);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = in_server_room();
        assert!(!handle_input(&mut app, &InputEvent::Key('x')));
        assert_eq!(app.nav.phase(), Phase::Room);
    }
}
