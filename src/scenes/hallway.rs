//! The hallway: four doors off a covered corridor, a progress strip, and
//! the finale banner once every room puzzle is solved.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::App;
use crate::input::{ClickState, InputEvent};
use crate::nav::{puzzle_info, room_info, ALL_PUZZLES, ALL_ROOMS};
use crate::widgets::ClickableList;

const ACT_DOOR_BASE: u16 = 10;
const ACT_GATE: u16 = 20;
const ACT_RESET: u16 = 21;

pub fn handle_input(app: &mut App, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key(c) => {
            for room in ALL_ROOMS {
                if room_info(room).door_key == *c {
                    app.walk_to_room(room);
                    return true;
                }
            }
            match c {
                'g' => {
                    app.walk_to_gate();
                    true
                }
                'r' if app.nav.all_rooms_solved() => {
                    app.reset();
                    true
                }
                _ => false,
            }
        }
        InputEvent::Click(id) => {
            let door_range = ACT_DOOR_BASE..ACT_DOOR_BASE + ALL_ROOMS.len() as u16;
            if door_range.contains(id) {
                app.walk_to_room(ALL_ROOMS[(id - ACT_DOOR_BASE) as usize]);
                return true;
            }
            match *id {
                ACT_GATE => {
                    app.walk_to_gate();
                    true
                }
                ACT_RESET if app.nav.all_rooms_solved() => {
                    app.reset();
                    true
                }
                _ => false,
            }
        }
        _ => false,
    }
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut list = ClickableList::new();

    list.push(Line::from(Span::styled(
        "A covered walkway, posters about free software on every pillar.",
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(""));

    if app.nav.all_rooms_solved() {
        list.push(Line::from(Span::styled(
            "★ Every room is done. The school is saved, one old PC at a time.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        list.push(Line::from(""));
        list.push_choice('r', "Start the whole escape over", ACT_RESET);
        list.push(Line::from(""));
    }

    list.push(Line::from(Span::styled(
        "Doors:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, room) in ALL_ROOMS.iter().enumerate() {
        let info = room_info(*room);
        let solved = info.puzzle.map(|p| app.nav.puzzle_done(p));
        let mark = match solved {
            Some(true) => Span::styled(" ✔", Style::default().fg(Color::Green)),
            Some(false) => Span::styled(" ·", Style::default().fg(Color::DarkGray)),
            None => Span::raw(""),
        };
        let line = Line::from(vec![
            Span::styled(
                format!("[{}] ", info.door_key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(info.name),
            mark,
            Span::styled(
                format!("  {}", info.tagline),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        list.push_clickable(line, ACT_DOOR_BASE + i as u16);
    }
    list.push(Line::from(""));
    list.push_choice('g', "Back out to the gate", ACT_GATE);

    let done: Vec<&str> = ALL_PUZZLES
        .iter()
        .filter(|&&p| app.nav.puzzle_done(p))
        .map(|&p| puzzle_info(p).done_note)
        .collect();
    if !done.is_empty() {
        list.push(Line::from(""));
        list.push(Line::from(Span::styled(
            format!("So far: {}", done.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let inner_w = area.width.saturating_sub(2);
    {
        let mut cs = click_state.borrow_mut();
        list.register_targets(area, &mut cs, 1, 1, 0, inner_w);
    }
    f.render_widget(
        Paragraph::new(list.into_lines())
            .block(Block::default().borders(Borders::ALL).title(" Hallway "))
            .wrap(Wrap { trim: false }),
        area,
    );
}
