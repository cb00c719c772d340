//! The school gate: a shut gate, a guard booth, and the intercom chat
//! that the whole entry puzzle runs through. Keystrokes here belong to
//! the chat edit line, so the two gate actions (snake game, walking in)
//! are click-only rows.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::chat::ChatLine;
use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::nav::{Overlay, PuzzleId};
use crate::widgets::ClickableList;

const ACT_SNAKE: u16 = 1;
const ACT_WALK_IN: u16 = 2;

const MAX_CHAT_INPUT: usize = 80;

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key(c) => {
            if app.chat.input.len() < MAX_CHAT_INPUT && (c.is_ascii_graphic() || *c == ' ') {
                app.chat.input.push(*c);
            }
            true
        }
        InputEvent::Backspace => {
            app.chat.input.pop();
            true
        }
        InputEvent::Enter => {
            app.submit_chat();
            true
        }
        InputEvent::Esc => {
            if app.chat.input.is_empty() {
                false
            } else {
                app.chat.input.clear();
                true
            }
        }
        InputEvent::Click(ACT_SNAKE) => {
            if app.chat.snake_revealed {
                app.open_overlay(Overlay::Snake);
            }
            true
        }
        InputEvent::Click(ACT_WALK_IN) => {
            if app.nav.puzzle_done(PuzzleId::Gate) {
                app.walk_to_hallway();
            }
            true
        }
        InputEvent::Click(_) => false,
    }
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(8)])
            .split(area);
        render_gate_side(app, f, chunks[0], click_state);
        render_chat(app, f, chunks[1]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        render_gate_side(app, f, chunks[0], click_state);
        render_chat(app, f, chunks[1]);
    }
}

// ── Gate side ──────────────────────────────────────────────────

fn gate_art(open: bool) -> Vec<Line<'static>> {
    let color = if open { Color::Green } else { Color::DarkGray };
    let rows: [&str; 6] = if open {
        [
            "  ╔═══════════════════╗  ",
            "  ║   NIRD  SCHOOL    ║  ",
            "  ╠════╗         ╔════╣  ",
            "  ║    ║         ║    ║  ",
            "  ║    ║         ║    ║  ",
            "  ╩════╩         ╩════╩  ",
        ]
    } else {
        [
            "  ╔═══════════════════╗  ",
            "  ║   NIRD  SCHOOL    ║  ",
            "  ╠══╦══╦═══════╦══╦══╣  ",
            "  ║  ║  ║   ║   ║  ║  ║  ",
            "  ║  ║  ║   ║   ║  ║  ║  ",
            "  ╩══╩══╩═══════╩══╩══╩  ",
        ]
    };
    rows.iter()
        .map(|r| Line::from(Span::styled(*r, Style::default().fg(color))))
        .collect()
}

fn render_gate_side(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let gate_open = app.nav.puzzle_done(PuzzleId::Gate);

    let mut list = ClickableList::new();
    for line in gate_art(gate_open) {
        list.push(line);
    }
    let status = if app.chat.gate_opening {
        Span::styled(
            "The chain is off. In you go.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if gate_open {
        Span::styled("The gate stands open.", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "The gate is shut. The guard watches from his booth.",
            Style::default().fg(Color::Gray),
        )
    };
    list.push(Line::from(status));
    list.push(Line::from(""));

    if app.chat.snake_revealed && !app.overlay_open() {
        list.push_clickable(
            Line::from(Span::styled(
                " ▸ Try the guard's snake game",
                Style::default().fg(Color::Yellow),
            )),
            ACT_SNAKE,
        );
    }
    if gate_open {
        list.push_clickable(
            Line::from(Span::styled(
                " ▸ Walk through the open gate",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            ACT_WALK_IN,
        );
    }

    let block = Block::default().borders(Borders::ALL).title(" The gate ");
    let inner_w = area.width.saturating_sub(2);
    {
        let mut cs = click_state.borrow_mut();
        list.register_targets(area, &mut cs, 1, 1, 0, inner_w);
    }
    f.render_widget(
        Paragraph::new(list.into_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ── Chat panel ─────────────────────────────────────────────────

fn render_chat(app: &App, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    render_log(app, f, chunks[0]);
    render_input(app, f, chunks[1]);
}

fn render_log(app: &App, f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.chat.log.len() + 1);
    for entry in &app.chat.log {
        match entry {
            ChatLine::Player(text) => lines.push(Line::from(vec![
                Span::styled(
                    "You   ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(text.as_str()),
            ])),
            ChatLine::Guard(text) => lines.push(Line::from(vec![
                Span::styled(
                    "Guard ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(text.as_str(), Style::default().fg(Color::Gray)),
            ])),
        }
    }
    if app.chat.awaiting_reply {
        lines.push(Line::from(Span::styled(
            "Guard is typing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let inner_w = area.width.saturating_sub(2);
    let inner_h = area.height.saturating_sub(2);
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Intercom "))
        .wrap(Wrap { trim: false });
    // Wrapped height decides the scroll, so the newest line stays visible.
    let total = paragraph.line_count(inner_w) as u16;
    let scroll = total.saturating_sub(inner_h);
    f.render_widget(paragraph.scroll((scroll, 0)), area);
}

fn render_input(app: &App, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::raw(app.chat.input.as_str()),
        Span::styled("█", Style::default().fg(Color::Green)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
