//! Snake board rendering.
//!
//! The board draws each grid cell as two characters on wide screens and one
//! on narrow ones so the playfield stays roughly square either way.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::state::{RunState, SnakeState, GRID_H, GRID_W, WIN_LENGTH};
use super::{ACT_DOWN, ACT_LEAVE, ACT_LEFT, ACT_RESTART, ACT_RIGHT, ACT_UP};

pub fn render(
    state: &SnakeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);
    let cell_w: u16 = if narrow { 1 } else { 2 };
    let board_w = GRID_W * cell_w + 2;
    let board_h = GRID_H + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),       // score
            Constraint::Length(board_h), // playfield
            Constraint::Length(1),       // verdict
            Constraint::Min(3),          // controls
        ])
        .split(area);

    render_score(state, f, chunks[0]);

    // Center the board when the area is wider than it needs to be.
    let board_area = if chunks[1].width > board_w {
        let pad = (chunks[1].width - board_w) / 2;
        Rect::new(chunks[1].x + pad, chunks[1].y, board_w.min(chunks[1].width), chunks[1].height)
    } else {
        chunks[1]
    };
    render_board(state, f, board_area, cell_w);

    render_verdict(state, f, chunks[2]);
    render_controls(state, f, chunks[3], click_state);
}

fn render_score(state: &SnakeState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Length ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", state.len(), WIN_LENGTH),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Best ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", state.best_length), Style::default().fg(Color::Cyan)),
        Span::styled("  Wins ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", state.wins), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_board(state: &SnakeState, f: &mut Frame, area: Rect, cell_w: u16) {
    let head = state.body.first().copied();

    let mut lines: Vec<Line> = Vec::with_capacity(GRID_H as usize);
    for y in 0..GRID_H {
        let mut spans: Vec<Span> = Vec::with_capacity(GRID_W as usize);
        for x in 0..GRID_W {
            let cell = (x, y);
            let (text, style) = if head == Some(cell) {
                (
                    "█".repeat(cell_w as usize),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else if state.body.contains(&cell) {
                ("▓".repeat(cell_w as usize), Style::default().fg(Color::Green))
            } else if state.food == cell {
                // Food stays a single dot so it reads as a morsel, not a wall.
                let dot = if cell_w == 2 { " ●" } else { "●" };
                (dot.to_string(), Style::default().fg(Color::Red))
            } else {
                ("·".repeat(cell_w as usize), Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let border_color = match state.run {
        RunState::Playing => Color::DarkGray,
        RunState::Won => Color::Green,
        RunState::Crashed => Color::Red,
    };
    let block = Block::bordered()
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Snake ", Style::default().fg(Color::Green)));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_verdict(state: &SnakeState, f: &mut Frame, area: Rect) {
    let line = match state.run {
        RunState::Playing => Line::from(Span::styled(
            " Grow to the target length and the guard pays up.",
            Style::default().fg(Color::DarkGray),
        )),
        RunState::Won => Line::from(Span::styled(
            " The guard whistles. \"A deal's a deal. The gate code is yours.\"",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        RunState::Crashed => Line::from(Span::styled(
            " Thud. The guard smirks. Try again?",
            Style::default().fg(Color::Red),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_controls(
    state: &SnakeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    if state.run == RunState::Playing {
        let steer = Line::from(vec![
            Span::styled("[w]", Style::default().fg(Color::Yellow)),
            Span::raw(" up  "),
            Span::styled("[a]", Style::default().fg(Color::Yellow)),
            Span::raw(" left  "),
            Span::styled("[s]", Style::default().fg(Color::Yellow)),
            Span::raw(" down  "),
            Span::styled("[d]", Style::default().fg(Color::Yellow)),
            Span::raw(" right"),
        ]);
        cl.push(steer);
        // Row-wide steering buttons for touch screens.
        cl.push_choice('w', "Steer up", ACT_UP);
        cl.push_choice('a', "Steer left", ACT_LEFT);
        cl.push_choice('s', "Steer down", ACT_DOWN);
        cl.push_choice('d', "Steer right", ACT_RIGHT);
    } else {
        cl.push_choice('r', "Play again", ACT_RESTART);
    }
    cl.push_choice('q', "Back away from the booth", ACT_LEAVE);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 0, 0, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()), area);
}
