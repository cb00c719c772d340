//! Lab room content: the bench grid, the open bench modal, and the log.
//!
//! Bench positions come from the scrambled `slots`, so the grid never
//! betrays the completion order. The lit bench is the only clue.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::state::{station_info, RefurbState, StationId, STATION_COUNT};
use super::{ACT_CANCEL, ACT_CHOICE_BASE, ACT_RESET, ACT_SLOT_BASE, ACT_START};

pub fn render(
    state: &RefurbState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(8),    // body
            Constraint::Length(4), // log
        ])
        .split(area);

    render_header(state, f, chunks[0]);

    if let Some(id) = state.active {
        render_bench_modal(id, f, chunks[1], click_state);
    } else if state.complete {
        render_complete(state, f, chunks[1], click_state);
    } else if !state.started() {
        render_intro(f, chunks[1], click_state);
    } else {
        render_grid(state, f, chunks[1], click_state);
    }

    render_log(state, f, chunks[2]);
}

fn render_header(state: &RefurbState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Refurbishment hunt ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" benches {}/{} ", state.completed.len(), STATION_COUNT),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" score {} ", state.score),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_intro(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "Six workbenches, one donated PC. Each bench does one step of",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(Span::styled(
        "its journey, but somebody rearranged the room. Follow the light.",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::default());
    cl.push_choice('s', "Start the hunt", ACT_START);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 0, 0, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()), area);
}

fn render_complete(
    state: &RefurbState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "★ All six benches done!",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        "The refurbished machine is packed and ready for its new home.",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(Span::styled(
        format!("Final score: {}", state.score),
        Style::default().fg(Color::Yellow),
    )));
    cl.push(Line::default());
    cl.push_choice('r', "Run the hunt again", ACT_RESET);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 0, 0, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()), area);
}

/// Per-bench display colour and status tag.
fn bench_status(state: &RefurbState, id: StationId) -> (Color, &'static str) {
    if state.station_completed(id) {
        (Color::Green, "✔ done")
    } else if state.current_station() == Some(id) {
        (Color::Yellow, "★ lit")
    } else {
        (Color::DarkGray, "· dark")
    }
}

fn render_grid(
    state: &RefurbState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if is_narrow_layout(area.width) {
        render_grid_narrow(state, f, area, click_state);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let mut cs = click_state.borrow_mut();
    for row in 0..2 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[row]);
        for col in 0..3 {
            let slot = row * 3 + col;
            render_bench_cell(state, slot, f, cols[col], &mut cs);
        }
    }
}

fn render_bench_cell(
    state: &RefurbState,
    slot: usize,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
) {
    let id = state.slots[slot];
    let info = station_info(id);
    let (color, status) = bench_status(state, id);

    let block = Block::bordered().border_style(Style::default().fg(color));
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", slot + 1), Style::default().fg(Color::Yellow)),
            Span::styled(info.name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(status, Style::default().fg(color))),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
    cs.add_click_target(area, ACT_SLOT_BASE + slot as u16);
}

fn render_grid_narrow(
    state: &RefurbState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    for (slot, id) in state.slots.iter().enumerate() {
        let info = station_info(*id);
        let (color, status) = bench_status(state, *id);
        let line = Line::from(vec![
            Span::styled(format!("[{}] ", slot + 1), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<8}", info.name), Style::default().fg(color)),
            Span::styled(status, Style::default().fg(color)),
        ]);
        cl.push_clickable(line, ACT_SLOT_BASE + slot as u16);
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 0, 0, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()), area);
}

fn render_bench_modal(
    id: StationId,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let info = station_info(id);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        info.prompt,
        Style::default().fg(Color::White),
    )));
    cl.push(Line::default());
    for (i, choice) in info.choices.iter().enumerate() {
        let key = (b'1' + i as u8) as char;
        cl.push_choice(key, *choice, ACT_CHOICE_BASE + i as u16);
    }
    cl.push(Line::default());
    cl.push_clickable(
        Line::from(Span::styled(
            "▸ Step back (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_CANCEL,
    );

    let block = Block::bordered()
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" Bench: {} ", info.name),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

    let mut cs = click_state.borrow_mut();
    let inner_w = area.width.saturating_sub(2);
    cl.register_targets(area, &mut cs, 1, 1, 0, inner_w);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_log(state: &RefurbState, f: &mut Frame, area: Rect) {
    let take = area.height.min(4) as usize;
    let start = state.log.len().saturating_sub(take);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::DarkGray))))
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
