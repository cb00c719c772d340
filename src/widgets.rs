//! The clickable-list builder every scene renders with.
//!
//! Scenes build their content as a list of rows, marking the actionable ones
//! as they go. After layout, one [`register_targets`](ClickableList::register_targets)
//! call turns the marked rows into click targets at whatever screen rows they
//! ended up on, so inserting a banner above a row never desyncs its target.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};

use crate::input::ClickState;

/// Rendered rows paired with their click actions.
///
/// ```ignore
/// let mut list = ClickableList::new();
/// list.push(Line::from("Doors:"));
/// list.push_choice('1', "Refurbishment Lab", ACT_DOOR_BASE);
/// list.register_targets(area, &mut cs, 1, 1, 0, 0);
/// f.render_widget(Paragraph::new(list.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    rows: Vec<(Line<'a>, Option<u16>)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// A plain, non-clickable row.
    pub fn push(&mut self, line: Line<'a>) {
        self.rows.push((line, None));
    }

    /// A row that fires `action_id` when clicked, wherever it lands.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.rows.push((line, Some(action_id)));
    }

    /// The standard `[k] label` choice row. The bracketed key doubles as the
    /// keyboard shortcut for the same action.
    pub fn push_choice(&mut self, key: char, label: impl Into<String>, action_id: u16) {
        let line = Line::from(vec![
            Span::styled(format!("[{key}] "), Style::default().fg(Color::Yellow)),
            Span::raw(label.into()),
        ]);
        self.push_clickable(line, action_id);
    }

    /// A dimmed `[k] label` row for a currently unavailable choice. Still
    /// clickable so tapping it can explain why it is locked.
    pub fn push_choice_dim(&mut self, key: char, label: impl Into<String>, action_id: u16) {
        let dim = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(format!("[{key}] "), dim),
            Span::styled(label.into(), dim),
        ]);
        self.push_clickable(line, action_id);
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.rows.into_iter().map(|(line, _)| line).collect()
    }

    /// Register click targets for every actionable row.
    ///
    /// * `area`: the widget area, borders included.
    /// * `top_offset`/`bottom_offset`: rows eaten by the block chrome (1 each
    ///   for `Borders::ALL`).
    /// * `scroll`: vertical scroll in visual rows.
    /// * `inner_width`: content width for the wrap calculation. Pass `0` for
    ///   widgets rendered without `Wrap`; every row then counts as one visual
    ///   row regardless of width.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        // Walk rows top to bottom, tracking the visual cursor. A wrapped row
        // is clickable on every display row it spans.
        let mut cursor: u16 = 0;
        for (line, action) in &self.rows {
            let height = if inner_width == 0 {
                1
            } else {
                (line.width().div_ceil(inner_width as usize) as u16).max(1)
            };
            if let Some(action_id) = *action {
                for vr in cursor..cursor + height {
                    let Some(offset) = vr.checked_sub(scroll) else {
                        continue;
                    };
                    let screen_row = content_y + offset;
                    if screen_row >= content_end {
                        break;
                    }
                    cs.add_row_target(area, screen_row, action_id);
                }
            }
            cursor += height;
        }
    }
}
