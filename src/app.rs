//! The app context: one object carrying the navigation machine, the gate
//! chat, the refurbishment hunt, the active overlay, and the tick clock
//! with its task queue. Scenes receive `&mut App` and call back into the
//! walk/overlay/chat helpers here instead of mutating navigation on their
//! own, so every delayed effect stays cancellable.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::chat::{self, ChatBackend, ChatState, ChatTrigger, ScriptedBot, TYPING_DELAY_TICKS};
use crate::games::refurb::{self, RefurbState};
use crate::games::{clock_seed, create_overlay, MiniGame, MiniGameEvent};
use crate::input::{ClickState, InputEvent};
use crate::nav::{room_info, NavState, Overlay, Phase, PuzzleId, RoomId, ROOM_PUZZLES};
use crate::scenes;
use crate::time::{GameTime, Scheduler, TaskOwner};

/// Game ticks per real second.
pub const TICKS_PER_SEC: u32 = 10;

/// Ticks a walk between areas takes before the move commits.
pub const WALK_TICKS: u32 = 12;

/// Ticks a won overlay stays on screen before closing itself, so the
/// player sees the win state.
pub const OVERLAY_LINGER_TICKS: u32 = 10;

/// Deferred state-machine work. Every delayed mutation goes through one
/// of these so it can be cancelled by owner when the player moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppTask {
    /// A walk into a room finishes.
    CommitRoom(RoomId),
    /// A walk to the hallway finishes.
    CommitHallway,
    /// A walk back out to the gate finishes.
    CommitGate,
    /// A guard reply lands in the chat log.
    ChatReply(String),
    /// The accepted password takes effect: the gate flips open and the
    /// walk inside begins.
    OpenGateFromChat,
    /// A completed overlay has lingered long enough; close it.
    CloseOverlay,
}

pub struct App {
    pub nav: NavState,
    pub chat: ChatState,
    pub refurb: RefurbState,
    backend: Box<dyn ChatBackend>,
    overlay: Option<Box<dyn MiniGame>>,
    scheduler: Scheduler<AppTask>,
    time: GameTime,
    now_tick: u64,
    /// Where the current walk is headed, for the walking screen.
    walk_label: Option<&'static str>,
}

impl App {
    pub fn new() -> Self {
        Self {
            nav: NavState::new(),
            chat: ChatState::new(),
            refurb: RefurbState::new(clock_seed()),
            backend: Box::new(ScriptedBot::new()),
            overlay: None,
            scheduler: Scheduler::new(),
            time: GameTime::new(TICKS_PER_SEC),
            now_tick: 0,
            walk_label: None,
        }
    }

    pub fn now_tick(&self) -> u64 {
        self.now_tick
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Restart the whole experience from the gate. The clock keeps
    /// running; everything scheduled is dropped.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.nav.reset();
        self.chat = ChatState::new();
        refurb::reset_game(&mut self.refurb);
        self.overlay = None;
        self.walk_label = None;
    }

    // ── Clock ──────────────────────────────────────────────────

    /// Advance the clock from a wall-time sample and run whatever came
    /// due. Called once per animation frame.
    pub fn on_frame(&mut self, now_ms: f64) {
        let ticks = self.time.update(now_ms);
        if ticks > 0 {
            self.tick(ticks);
        }
    }

    /// Advance the game by whole ticks. Tests drive this directly.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        self.now_tick += u64::from(delta_ticks);
        for task in self.scheduler.drain_due(self.now_tick) {
            self.apply_task(task);
        }
        if let Some(game) = self.overlay.as_mut() {
            game.tick(delta_ticks);
        }
        self.pump_overlay_event();
        self.sync_lab_puzzle();
        // Watchdog: a raised transition flag with no commit task left
        // would swallow input forever. Clear it and say so.
        if self.nav.transitioning() && !self.scheduler.has_pending(TaskOwner::Transition) {
            warn("transition flag had no commit task pending; clearing it");
            self.nav.set_transitioning(false);
            self.walk_label = None;
        }
    }

    fn apply_task(&mut self, task: AppTask) {
        match task {
            AppTask::CommitRoom(room) => {
                self.walk_label = None;
                self.nav.enter_room(room);
            }
            AppTask::CommitHallway => {
                self.walk_label = None;
                if self.nav.phase() == Phase::Gate {
                    // Leaving the guard behind: pending chat work dies here.
                    self.scheduler.cancel_owner(TaskOwner::Chat);
                    self.scheduler.cancel_owner(TaskOwner::Gate);
                    self.chat.drop_pending_reply();
                }
                self.nav.go_to_hallway();
            }
            AppTask::CommitGate => {
                self.walk_label = None;
                self.nav.go_to_gate();
            }
            AppTask::ChatReply(line) => self.chat.push_guard(line),
            AppTask::OpenGateFromChat => self.begin_gate_opening(),
            AppTask::CloseOverlay => {
                let won_the_gate =
                    self.nav.phase() == Phase::Gate && self.nav.puzzle_done(PuzzleId::Gate);
                self.close_overlay();
                if won_the_gate {
                    // The guard keeps his word after a snake win.
                    self.chat.gate_opening = true;
                    self.walk_to_hallway();
                }
            }
        }
    }

    /// The lab puzzle is solved the moment the refurbishment hunt is.
    fn sync_lab_puzzle(&mut self) {
        if self.refurb.complete && !self.nav.puzzle_done(PuzzleId::Lab) {
            self.nav.complete_puzzle(PuzzleId::Lab);
        }
    }

    // ── Walks ──────────────────────────────────────────────────

    /// Start a walk into `room`. Ignored while another walk is running.
    pub fn walk_to_room(&mut self, room: RoomId) {
        if self.nav.transitioning() {
            return;
        }
        self.nav.set_transitioning(true);
        self.walk_label = Some(room_info(room).name);
        self.scheduler.schedule_in(
            self.now_tick,
            WALK_TICKS,
            TaskOwner::Transition,
            AppTask::CommitRoom(room),
        );
    }

    pub fn walk_to_hallway(&mut self) {
        if self.nav.transitioning() {
            return;
        }
        self.nav.set_transitioning(true);
        self.walk_label = Some("hallway");
        self.scheduler.schedule_in(
            self.now_tick,
            WALK_TICKS,
            TaskOwner::Transition,
            AppTask::CommitHallway,
        );
    }

    pub fn walk_to_gate(&mut self) {
        if self.nav.transitioning() {
            return;
        }
        self.nav.set_transitioning(true);
        self.walk_label = Some("gate");
        self.scheduler.schedule_in(
            self.now_tick,
            WALK_TICKS,
            TaskOwner::Transition,
            AppTask::CommitGate,
        );
    }

    // ── Overlays ───────────────────────────────────────────────

    /// Open `tag` as the active overlay, replacing any current one.
    pub fn open_overlay(&mut self, tag: Overlay) {
        self.scheduler.cancel_owner(TaskOwner::Overlay);
        self.nav.open_overlay(tag);
        self.overlay = Some(create_overlay(tag));
    }

    fn close_overlay(&mut self) {
        self.scheduler.cancel_owner(TaskOwner::Overlay);
        self.nav.close_overlay();
        self.overlay = None;
    }

    fn pump_overlay_event(&mut self) {
        let Some(game) = self.overlay.as_mut() else {
            return;
        };
        match game.take_event() {
            Some(MiniGameEvent::Completed) => {
                if let Some(puzzle) = overlay_puzzle(self.nav.overlay()) {
                    self.nav.complete_puzzle(puzzle);
                }
                self.scheduler.schedule_in(
                    self.now_tick,
                    OVERLAY_LINGER_TICKS,
                    TaskOwner::Overlay,
                    AppTask::CloseOverlay,
                );
            }
            Some(MiniGameEvent::Dismissed) => self.close_overlay(),
            None => {}
        }
    }

    // ── Gate chat ──────────────────────────────────────────────

    /// Submit the chat edit line and schedule whatever follows from it.
    /// The trigger takes effect now; the guard's words land after the
    /// typing delay.
    pub fn submit_chat(&mut self) {
        let Some((text, trigger)) = self.chat.submit() else {
            return;
        };
        match trigger {
            ChatTrigger::GatePassword => {
                self.nav.complete_puzzle(PuzzleId::Gate);
                self.scheduler.schedule_in(
                    self.now_tick,
                    TYPING_DELAY_TICKS,
                    TaskOwner::Chat,
                    AppTask::ChatReply(chat::GATE_OPEN_LINE.to_string()),
                );
                self.scheduler.schedule_in(
                    self.now_tick,
                    TYPING_DELAY_TICKS,
                    TaskOwner::Gate,
                    AppTask::OpenGateFromChat,
                );
            }
            ChatTrigger::SnakeHint => {
                self.chat.snake_revealed = true;
                self.scheduler.schedule_in(
                    self.now_tick,
                    TYPING_DELAY_TICKS,
                    TaskOwner::Chat,
                    AppTask::ChatReply(chat::SNAKE_REVEAL_LINE.to_string()),
                );
            }
            ChatTrigger::None => {
                let line = chat::guard_reply(self.backend.as_mut(), &text);
                self.scheduler.schedule_in(
                    self.now_tick,
                    TYPING_DELAY_TICKS,
                    TaskOwner::Chat,
                    AppTask::ChatReply(line),
                );
            }
        }
    }

    /// The password cleared: flip the gate-open flair and walk in.
    fn begin_gate_opening(&mut self) {
        if self.chat.gate_opening {
            return;
        }
        self.chat.gate_opening = true;
        self.walk_to_hallway();
    }

    // ── Input ──────────────────────────────────────────────────

    /// Route one input event. An active overlay captures everything, a
    /// running walk swallows everything, otherwise the current scene
    /// decides.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let Some(game) = self.overlay.as_mut() {
            game.handle_input(event);
            self.pump_overlay_event();
            return true;
        }
        if self.nav.transitioning() {
            return true;
        }
        let consumed = scenes::handle_input(self, event);
        self.sync_lab_puzzle();
        consumed
    }

    // ── Render ─────────────────────────────────────────────────

    pub fn render(&self, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
        let area = f.area();
        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = area.width;
            cs.terminal_rows = area.height;
            cs.clear_targets();
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);
        self.render_title(f, chunks[0]);
        if self.nav.transitioning() {
            self.render_walk(f, chunks[1]);
        } else {
            scenes::render(self, f, chunks[1], click_state);
        }
        self.render_help(f, chunks[2]);
        if let Some(game) = self.overlay.as_ref() {
            // Scene targets must not catch clicks under the overlay.
            click_state.borrow_mut().clear_targets();
            let rect = overlay_rect(area);
            f.render_widget(Clear, rect);
            game.render(f, rect, click_state);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let where_now = match self.nav.phase() {
            Phase::Gate => "At the school gate",
            Phase::Hallway => "In the hallway",
            Phase::Room => match self.nav.room() {
                Some(room) => room_info(room).name,
                None => "Inside the school",
            },
        };
        let line = Line::from(vec![
            Span::styled(
                " Escape from NIRD School ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("· {} ", where_now), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("· rooms {}/{} ", self.nav.rooms_solved(), ROOM_PUZZLES.len()),
                Style::default().fg(Color::Yellow),
            ),
        ]);
        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_walk(&self, f: &mut Frame, area: Rect) {
        let dest = self.walk_label.unwrap_or("somewhere");
        let dots = ".".repeat((self.now_tick % 4) as usize);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Walking to the {}{}", dest, dots),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "(footsteps on old linoleum)",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let hint = if self.overlay.is_some() {
            "The mini-game has the keyboard. Esc backs out."
        } else if self.nav.transitioning() {
            "Walking..."
        } else {
            match self.nav.phase() {
                Phase::Gate => "Type to the guard and press Enter.",
                Phase::Hallway => "Number keys or clicks open doors.",
                Phase::Room => "Esc returns to the hallway.",
            }
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", hint),
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
    }
}

/// Which puzzle an overlay marks solved when its game is won.
fn overlay_puzzle(tag: Option<Overlay>) -> Option<PuzzleId> {
    match tag? {
        Overlay::Snake => Some(PuzzleId::Gate),
        Overlay::LinuxTerminal => Some(PuzzleId::Server),
        Overlay::NirdForm => Some(PuzzleId::Office),
    }
}

/// Center the overlay inside `area`, capped so a strip of scene stays
/// visible around it.
fn overlay_rect(area: Rect) -> Rect {
    let w = area.width.saturating_sub(4).clamp(20, 70).min(area.width);
    let h = area.height.saturating_sub(2).clamp(10, 24).min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatError, ChatLine};
    use crate::games::refurb::{answer_station, open_station, station_info, ALL_STATIONS};

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_input(&InputEvent::Key(c));
        }
        app.handle_input(&InputEvent::Enter);
    }

    fn guard_lines(app: &App) -> Vec<&str> {
        app.chat
            .log
            .iter()
            .filter_map(|l| match l {
                ChatLine::Guard(g) => Some(g.as_str()),
                ChatLine::Player(_) => None,
            })
            .collect()
    }

    // ── gate chat ──────────────────────────────────────────────

    #[test]
    fn password_opens_the_gate_and_walks_in() {
        let mut app = App::new();
        type_line(&mut app, "nird");
        assert!(app.nav.puzzle_done(PuzzleId::Gate));
        assert!(app.chat.awaiting_reply);
        assert!(!app.chat.gate_opening);

        app.tick(TYPING_DELAY_TICKS);
        assert!(app.chat.gate_opening);
        assert!(app.nav.transitioning());
        assert!(guard_lines(&app).contains(&chat::GATE_OPEN_LINE));

        app.tick(WALK_TICKS);
        assert_eq!(app.nav.phase(), Phase::Hallway);
        assert!(!app.nav.transitioning());
    }

    #[test]
    fn snake_mention_reveals_the_button() {
        let mut app = App::new();
        type_line(&mut app, "heard you play snake");
        assert!(app.chat.snake_revealed);
        assert!(!app.nav.puzzle_done(PuzzleId::Gate));

        app.tick(TYPING_DELAY_TICKS);
        assert!(guard_lines(&app).contains(&chat::SNAKE_REVEAL_LINE));
        assert!(!app.chat.awaiting_reply);
    }

    #[test]
    fn ordinary_chat_gets_a_reply_after_the_typing_delay() {
        let mut app = App::new();
        type_line(&mut app, "hello");
        let before = guard_lines(&app).len();
        assert!(app.chat.awaiting_reply);

        app.tick(TYPING_DELAY_TICKS - 1);
        assert!(app.chat.awaiting_reply);
        assert_eq!(guard_lines(&app).len(), before);

        app.tick(1);
        assert!(!app.chat.awaiting_reply);
        assert_eq!(guard_lines(&app).len(), before + 1);
    }

    #[test]
    fn failing_backend_stays_in_character() {
        struct DownBot;
        impl ChatBackend for DownBot {
            fn reply(&mut self, _prompt: &str) -> Result<String, ChatError> {
                Err(ChatError::Unavailable)
            }
        }

        let mut app = App::new();
        app.backend = Box::new(DownBot);
        type_line(&mut app, "let me in");
        app.tick(TYPING_DELAY_TICKS);
        let lines = guard_lines(&app);
        let last = lines.last().copied().unwrap_or("");
        assert!(last.contains("intercom"), "got: {last}");
    }

    #[test]
    fn commit_to_hallway_cancels_gate_side_tasks() {
        let mut app = App::new();
        // A reply still in flight when the walk commits must never land.
        app.scheduler.schedule_in(
            app.now_tick,
            WALK_TICKS + 5,
            TaskOwner::Chat,
            AppTask::ChatReply("late line".to_string()),
        );
        app.chat.awaiting_reply = true;
        app.walk_to_hallway();

        app.tick(WALK_TICKS + 10);
        assert_eq!(app.nav.phase(), Phase::Hallway);
        assert!(!app.chat.awaiting_reply);
        assert!(!guard_lines(&app).contains(&"late line"));
    }

    // ── walks and the watchdog ─────────────────────────────────

    #[test]
    fn walks_swallow_input_until_the_commit() {
        let mut app = App::new();
        app.nav.go_to_hallway();
        app.walk_to_room(RoomId::Video);
        assert!(app.nav.transitioning());

        // Scene input and rival walks do nothing mid-walk.
        assert!(app.handle_input(&InputEvent::Key('1')));
        app.walk_to_room(RoomId::Lab);
        assert_eq!(app.nav.phase(), Phase::Hallway);

        app.tick(WALK_TICKS);
        assert_eq!(app.nav.room(), Some(RoomId::Video));

        // The video corner has no puzzle; leaving changes nothing.
        app.handle_input(&InputEvent::Esc);
        assert_eq!(app.nav.phase(), Phase::Hallway);
        assert_eq!(app.nav.rooms_solved(), 0);
    }

    #[test]
    fn watchdog_clears_a_stuck_transition() {
        let mut app = App::new();
        app.nav.set_transitioning(true);
        app.tick(1);
        assert!(!app.nav.transitioning());
    }

    // ── overlays ───────────────────────────────────────────────

    #[test]
    fn completed_overlay_lingers_then_closes() {
        let mut app = App::new();
        app.nav.go_to_hallway();
        app.nav.enter_room(RoomId::Office);
        app.open_overlay(Overlay::NirdForm);
        assert!(app.overlay_open());

        // The form takes the keys; check every pledge and sign.
        for c in ['1', '2', '3', '4'] {
            app.handle_input(&InputEvent::Key(c));
        }
        app.handle_input(&InputEvent::Enter);
        assert!(app.nav.puzzle_done(PuzzleId::Office));
        assert!(app.overlay_open());

        app.tick(OVERLAY_LINGER_TICKS);
        assert!(!app.overlay_open());
        assert_eq!(app.nav.overlay(), None);
        assert_eq!(app.nav.phase(), Phase::Room);
    }

    #[test]
    fn dismissed_overlay_closes_at_once() {
        let mut app = App::new();
        app.nav.go_to_hallway();
        app.nav.enter_room(RoomId::Office);
        app.open_overlay(Overlay::NirdForm);

        app.handle_input(&InputEvent::Esc);
        assert!(!app.overlay_open());
        assert_eq!(app.nav.overlay(), None);
        assert!(!app.nav.puzzle_done(PuzzleId::Office));
    }

    #[test]
    fn snake_win_at_the_gate_opens_it_and_walks_in() {
        struct InstantWin {
            fired: bool,
        }
        impl MiniGame for InstantWin {
            fn handle_input(&mut self, _event: &InputEvent) -> bool {
                false
            }
            fn tick(&mut self, _delta_ticks: u32) {}
            fn render(&self, _f: &mut Frame, _area: Rect, _cs: &Rc<RefCell<ClickState>>) {}
            fn take_event(&mut self) -> Option<MiniGameEvent> {
                if self.fired {
                    None
                } else {
                    self.fired = true;
                    Some(MiniGameEvent::Completed)
                }
            }
        }

        let mut app = App::new();
        app.nav.open_overlay(Overlay::Snake);
        app.overlay = Some(Box::new(InstantWin { fired: false }));

        app.tick(1);
        assert!(app.nav.puzzle_done(PuzzleId::Gate));
        assert!(app.overlay_open());

        app.tick(OVERLAY_LINGER_TICKS);
        assert!(!app.overlay_open());
        assert!(app.chat.gate_opening);
        assert!(app.nav.transitioning());

        app.tick(WALK_TICKS);
        assert_eq!(app.nav.phase(), Phase::Hallway);
    }

    // ── whole game ─────────────────────────────────────────────

    #[test]
    fn full_run_reaches_the_finale_and_resets() {
        let mut app = App::new();

        // Gate: the password.
        type_line(&mut app, "nird");
        app.tick(TYPING_DELAY_TICKS);
        app.tick(WALK_TICKS);
        assert_eq!(app.nav.phase(), Phase::Hallway);

        // Lab: the refurbishment hunt, benches in order.
        app.handle_input(&InputEvent::Key('1'));
        app.tick(WALK_TICKS);
        assert_eq!(app.nav.room(), Some(RoomId::Lab));
        app.handle_input(&InputEvent::Key('s'));
        for id in ALL_STATIONS {
            assert!(open_station(&mut app.refurb, id).is_accepted());
            answer_station(&mut app.refurb, station_info(id).answer);
        }
        app.tick(1);
        assert!(app.nav.puzzle_done(PuzzleId::Lab));
        app.handle_input(&InputEvent::Esc);
        assert_eq!(app.nav.phase(), Phase::Hallway);

        // Server room: run the installer to the end.
        app.handle_input(&InputEvent::Key('2'));
        app.tick(WALK_TICKS);
        app.handle_input(&InputEvent::Key('c'));
        assert!(app.overlay_open());
        for c in "./install.sh".chars() {
            app.handle_input(&InputEvent::Key(c));
        }
        app.handle_input(&InputEvent::Enter);
        app.tick(100);
        assert!(app.nav.puzzle_done(PuzzleId::Server));
        app.tick(OVERLAY_LINGER_TICKS);
        assert!(!app.overlay_open());
        app.handle_input(&InputEvent::Esc);

        // Office: the pledge form.
        app.handle_input(&InputEvent::Key('3'));
        app.tick(WALK_TICKS);
        app.handle_input(&InputEvent::Key('f'));
        assert!(app.overlay_open());
        for c in ['1', '2', '3', '4'] {
            app.handle_input(&InputEvent::Key(c));
        }
        app.handle_input(&InputEvent::Enter);
        assert!(app.nav.puzzle_done(PuzzleId::Office));
        app.tick(OVERLAY_LINGER_TICKS);
        app.handle_input(&InputEvent::Esc);

        assert!(app.nav.all_rooms_solved());

        // The finale banner offers a restart.
        app.handle_input(&InputEvent::Key('r'));
        assert_eq!(app.nav.phase(), Phase::Gate);
        assert!(!app.nav.puzzle_done(PuzzleId::Gate));
        assert!(!app.refurb.started());
        assert_eq!(app.chat.log.len(), 1);
    }

    #[test]
    fn reset_drops_everything_pending() {
        let mut app = App::new();
        type_line(&mut app, "nird");
        app.reset();

        app.tick(TYPING_DELAY_TICKS + WALK_TICKS);
        assert_eq!(app.nav.phase(), Phase::Gate);
        assert!(!app.nav.puzzle_done(PuzzleId::Gate));
        assert_eq!(app.chat.log.len(), 1);
        assert!(app.scheduler.is_empty());
    }
}
