//! Input plumbing shared by every scene: the normalized event type, the
//! frame's click-target table, and the DOM-pixel to cell conversion.
//!
//! `main.rs` turns raw keyboard and mouse/touch input into [`InputEvent`]s;
//! scenes and mini-games only ever see those. Click targets are re-registered
//! on every frame by whatever is currently drawn, so the table always matches
//! the screen the player is looking at.

use ratzilla::ratatui::layout::{Position, Rect};

/// All possible input events, normalized from keyboard, mouse, and touch sources.
///
/// `Enter`, `Backspace` and `Esc` are separate variants (not control chars)
/// because the chat prompt and the terminal mini-game edit a text line and
/// need them distinguishable from printable input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key press.
    Key(char),
    /// Return/submit.
    Enter,
    /// Delete the character before the cursor.
    Backspace,
    /// Cancel/close the current modal or prompt.
    Esc,
    /// A click/tap on a registered target, identified by a semantic action ID.
    /// Each scene/game defines its own action ID constants.
    Click(u16),
}

/// One clickable region, in terminal cell coordinates.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    /// Semantic action ID. Each scene/game defines its own constants.
    pub action_id: u16,
}

/// Click-target table plus the terminal dimensions the mouse handler needs.
/// Rebuilt by the renderer every frame, read by the mouse handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a rectangular hit region for `action_id`.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width, one-row region at absolute `row`. Rows that
    /// fall outside `area` (scrolled or clipped away) register nothing.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if (area.top()..area.bottom()).contains(&row) {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// The action under a terminal cell, if any. Targets registered later
    /// sit on top (a bench modal over the bench grid), so the scan runs
    /// newest-first.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        let at = Position::new(col, row);
        self.targets
            .iter()
            .rev()
            .find(|t| t.rect.contains(at))
            .map(|t| t.action_id)
    }
}

/// Below this many columns the scenes stack their panels vertically.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Map a pixel offset inside the grid container to a cell index along one
/// axis. The container is `span` pixels for `cells` cells; anything outside
/// it is `None`.
fn pixel_to_cell(offset: f64, span: f64, cells: u16) -> Option<u16> {
    if span <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset * f64::from(cells) / span).floor() as u16;
    (cell < cells).then_some(cell)
}

/// Terminal column under a click `click_x` pixels from the grid's left edge.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

/// Terminal row under a click `click_y` pixels from the grid's top edge.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}
