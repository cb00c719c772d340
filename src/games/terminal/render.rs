//! Server console rendering.
//!
//! The console log autoscrolls: `Paragraph::line_count` gives the wrapped
//! height so the newest line always stays in view, whatever the width.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::state::{LineKind, TermState};
use super::{ACT_CAT, ACT_HELP, ACT_INSTALL, ACT_LEAVE, ACT_LS};

pub fn render(
    state: &TermState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // console log
            Constraint::Length(1), // prompt
            Constraint::Length(5), // quick commands
        ])
        .split(area);

    render_console(state, f, chunks[0]);
    render_prompt(state, f, chunks[1]);
    render_quick_commands(state, f, chunks[2], click_state);
}

fn render_console(state: &TermState, f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = state
        .lines
        .iter()
        .map(|l| {
            let style = match l.kind {
                LineKind::Command => Style::default().fg(Color::Cyan),
                LineKind::Output => Style::default().fg(Color::Gray),
                LineKind::Error => Style::default().fg(Color::Red),
                LineKind::Success => {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                }
            };
            Line::from(Span::styled(l.text.clone(), style))
        })
        .collect();

    let block = Block::bordered()
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " school-server (ttyS0) ",
            Style::default().fg(Color::Green),
        ));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    let inner_w = area.width.saturating_sub(2);
    let inner_h = area.height.saturating_sub(2);
    let total = paragraph.line_count(inner_w) as u16;
    let scroll = total.saturating_sub(inner_h);

    f.render_widget(paragraph.scroll((scroll, 0)), area);
}

fn render_prompt(state: &TermState, f: &mut Frame, area: Rect) {
    let line = if state.installing() {
        Line::from(Span::styled(
            " installer running...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled(" guest@school-server:~$ ", Style::default().fg(Color::Green)),
            Span::styled(state.input.clone(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::White)),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_quick_commands(
    state: &TermState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let cmd_style = Style::default().fg(Color::Yellow);
    let mut cl = ClickableList::new();
    if !state.installing() {
        cl.push_clickable(Line::from(Span::styled(" ▸ help", cmd_style)), ACT_HELP);
        cl.push_clickable(Line::from(Span::styled(" ▸ ls", cmd_style)), ACT_LS);
        cl.push_clickable(
            Line::from(Span::styled(" ▸ cat README.txt", cmd_style)),
            ACT_CAT,
        );
        cl.push_clickable(
            Line::from(Span::styled(" ▸ ./install.sh", cmd_style)),
            ACT_INSTALL,
        );
    }
    cl.push_clickable(
        Line::from(Span::styled(
            " ▸ step away from the console (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        ACT_LEAVE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 0, 0, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()), area);
}
