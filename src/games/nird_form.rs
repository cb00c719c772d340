//! The staff office's volunteer pledge form.
//!
//! One screen: tick every pledge box, sign, hand it in. A signed form
//! raises [`MiniGameEvent::Completed`]; the app marks the office puzzle
//! solved.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::games::{MiniGame, MiniGameEvent};
use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;

const PLEDGES: [&str; 4] = [
    "I will rescue working hardware before it reaches the skip.",
    "I will install free software on it, starting with Linux.",
    "I will hand refurbished machines to pupils who need them.",
    "I will teach at least one other person to do the same.",
];

const ACT_SUBMIT: u16 = 1;
const ACT_LEAVE: u16 = 2;
const ACT_TOGGLE_BASE: u16 = 10;

pub struct NirdFormGame {
    checks: [bool; PLEDGES.len()],
    /// Set when the player tried to hand in a half-filled form.
    nudged: bool,
    event: Option<MiniGameEvent>,
}

impl NirdFormGame {
    pub fn new() -> Self {
        Self {
            checks: [false; PLEDGES.len()],
            nudged: false,
            event: None,
        }
    }

    fn toggle(&mut self, idx: usize) {
        if let Some(check) = self.checks.get_mut(idx) {
            *check = !*check;
            self.nudged = false;
        }
    }

    fn all_checked(&self) -> bool {
        self.checks.iter().all(|&c| c)
    }

    fn submit(&mut self) {
        if self.all_checked() {
            self.event = Some(MiniGameEvent::Completed);
        } else {
            self.nudged = true;
        }
    }
}

impl MiniGame for NirdFormGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c @ '1'..='4') => {
                self.toggle(*c as usize - '1' as usize);
                true
            }
            InputEvent::Click(id)
                if (ACT_TOGGLE_BASE..ACT_TOGGLE_BASE + PLEDGES.len() as u16).contains(id) =>
            {
                self.toggle((*id - ACT_TOGGLE_BASE) as usize);
                true
            }
            InputEvent::Enter | InputEvent::Click(ACT_SUBMIT) => {
                self.submit();
                true
            }
            InputEvent::Key('q') | InputEvent::Esc | InputEvent::Click(ACT_LEAVE) => {
                self.event = Some(MiniGameEvent::Dismissed);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let mut cl = ClickableList::new();
        cl.push(Line::from(Span::styled(
            "The NIRD volunteer pledge, pinned under a coffee mug:",
            Style::default().fg(Color::Gray),
        )));
        cl.push(Line::default());

        for (i, pledge) in PLEDGES.iter().enumerate() {
            let (mark, mark_style) = if self.checks[i] {
                ("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                ("[ ]", Style::default().fg(Color::White))
            };
            let line = Line::from(vec![
                Span::styled(mark, mark_style),
                Span::raw(format!(" {}. {}", i + 1, pledge)),
            ]);
            cl.push_clickable(line, ACT_TOGGLE_BASE + i as u16);
        }

        cl.push(Line::default());
        if self.all_checked() {
            cl.push_clickable(
                Line::from(Span::styled(
                    "▸ Sign and hand it in (Enter)",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                ACT_SUBMIT,
            );
        } else {
            cl.push_clickable(
                Line::from(Span::styled(
                    "▸ Sign and hand it in (Enter)",
                    Style::default().fg(Color::DarkGray),
                )),
                ACT_SUBMIT,
            );
        }
        cl.push_clickable(
            Line::from(Span::styled(
                "▸ Put the form back (Esc)",
                Style::default().fg(Color::DarkGray),
            )),
            ACT_LEAVE,
        );
        if self.nudged {
            cl.push(Line::from(Span::styled(
                "Every box. The head teacher checks.",
                Style::default().fg(Color::Red),
            )));
        }

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Volunteer pledge ",
                Style::default().fg(Color::Yellow),
            ));

        let mut cs = click_state.borrow_mut();
        let inner_w = area.width.saturating_sub(2);
        cl.register_targets(area, &mut cs, 1, 1, 0, inner_w);
        let widget = Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(widget, area);
    }

    fn take_event(&mut self) -> Option<MiniGameEvent> {
        self.event.take()
    }
}
