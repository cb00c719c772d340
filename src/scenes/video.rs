//! The video corner: a donated TV looping short films from the project.
//! Nothing to solve, just a place to catch your breath.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;

const ACT_EXIT: u16 = 1;

/// Ticks each playlist entry stays highlighted.
const SLIDE_TICKS: u64 = 30;

const PLAYLIST: [&str; 4] = [
    "Why \"dead\" PCs are not dead",
    "A classroom runs on Linux",
    "Repair café: the grand tour",
    "Pupils talk durable tech",
];

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match event {
        InputEvent::Esc | InputEvent::Key('q') | InputEvent::Click(ACT_EXIT) => {
            app.nav.exit_room();
            true
        }
        _ => false,
    }
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let playing = ((app.now_tick() / SLIDE_TICKS) % PLAYLIST.len() as u64) as usize;
    let mut list = ClickableList::new();

    list.push(Line::from(Span::styled(
        "Bean bags, a humming projector, and a TV that was a skip find.",
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(""));
    list.push(Line::from(Span::styled(
        "NOW PLAYING",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, title) in PLAYLIST.iter().enumerate() {
        let line = if i == playing {
            Line::from(vec![
                Span::styled("  ▶ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!("    {}", title),
                Style::default().fg(Color::DarkGray),
            ))
        };
        list.push(line);
    }
    list.push(Line::from(""));
    list.push(Line::from(Span::styled(
        "No puzzle in here. Sit a minute, then get back to it.",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    list.push(Line::from(""));
    list.push_clickable(
        Line::from(Span::styled(
            " ▸ Back to the hallway (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_EXIT,
    );

    let inner_w = area.width.saturating_sub(2);
    {
        let mut cs = click_state.borrow_mut();
        list.register_targets(area, &mut cs, 1, 1, 0, inner_w);
    }
    f.render_widget(
        Paragraph::new(list.into_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Video Corner "),
            )
            .wrap(Wrap { trim: false }),
        area,
    );
}
