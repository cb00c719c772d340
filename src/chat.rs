//! Gate guard chat: the conversation model and the backend seam.
//!
//! The guard's "brain" sits behind [`ChatBackend`] so a remote
//! text-generation client could be dropped in; the shipped build uses
//! [`ScriptedBot`], a keyword table with rotating fallbacks. Backend
//! failures never leave this module: [`guard_reply`] swallows them into an
//! in-character line.
//!
//! Exactly two player inputs carry game meaning (see [`detect_trigger`]):
//! the exact password opens the gate, and any mention of the snake reveals
//! the snake-game button. Everything else is flavor.

use std::fmt;

/// Ticks between a submitted line and the guard's reply appearing.
pub const TYPING_DELAY_TICKS: u32 = 8;

// ── Backend seam ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    /// The reply service could not be reached.
    Unavailable,
    /// The reply service answered with something unusable.
    Malformed,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Unavailable => write!(f, "chat service unreachable"),
            ChatError::Malformed => write!(f, "chat service returned garbage"),
        }
    }
}

/// Where guard replies come from.
pub trait ChatBackend {
    fn reply(&mut self, prompt: &str) -> Result<String, ChatError>;
}

/// Canned line used whenever the backend fails. In-character so the player
/// never sees a raw error.
const FALLBACK_OFFLINE: &str =
    "*adjusts cap* The intercom is crackling again. Ask me once more, or differently.";

/// Ask the backend, replacing any failure with an in-character line so
/// errors never reach the navigation core or the player.
pub fn guard_reply(backend: &mut dyn ChatBackend, prompt: &str) -> String {
    match backend.reply(prompt) {
        Ok(line) => line,
        Err(err) => {
            warn(&format!("chat backend failed: {}", err));
            FALLBACK_OFFLINE.to_string()
        }
    }
}

fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

// ── Scripted bot ───────────────────────────────────────────────

/// Keyword-matched guard lines. First matching entry wins; the table is
/// checked top to bottom against the lowercased prompt.
const SCRIPT: [(&str, &str); 8] = [
    (
        "hello",
        "Evening. School's closed, but the right word opens the gate.",
    ),
    (
        "who",
        "Gatekeeper, caretaker, and head of the refurbishment club. Busy man.",
    ),
    (
        "password",
        "Can't just hand it out. It's the name of our whole project. Four letters.",
    ),
    (
        "open",
        "The gate only moves for the project's name. Say it plainly.",
    ),
    (
        "nird",
        "Close! Speak the project's name on its own and the gate will listen.",
    ),
    (
        "linux",
        "Ah, a penguin friend. The server room could use someone like you.",
    ),
    (
        "school",
        "This school runs on rescued machines and free software. Proud of it.",
    ),
    (
        "help",
        "Try talking to me. Ask about the school, or about what we do here.",
    ),
];

/// Rotating replies for prompts no keyword matches.
const FALLBACKS: [&str; 3] = [
    "Hm. Doesn't ring a bell. The gate wants one particular word.",
    "You can ask about the school, the project, or just say hello.",
    "*leafs through a worn notebook* Nope, nothing under that.",
];

/// Guard line when the password lands. The app schedules this directly
/// instead of asking the backend, so the gate always opens with the same
/// words.
pub const GATE_OPEN_LINE: &str =
    "*unhooks the chain* That's the one. Welcome to the NIRD school. Mind the cables!";

/// Guard line when the snake game first comes up.
pub const SNAKE_REVEAL_LINE: &str =
    "*grins* Heard about my break-time snake, have you? Booth button's lit. \
     Grow it to ten and I'll open up myself.";

/// The shipped guard brain: no network, never fails.
pub struct ScriptedBot {
    fallback_idx: usize,
}

impl ScriptedBot {
    pub fn new() -> Self {
        Self { fallback_idx: 0 }
    }
}

impl ChatBackend for ScriptedBot {
    fn reply(&mut self, prompt: &str) -> Result<String, ChatError> {
        let lower = prompt.to_ascii_lowercase();
        for (keyword, line) in SCRIPT {
            if lower.contains(keyword) {
                return Ok(line.to_string());
            }
        }
        let line = FALLBACKS[self.fallback_idx % FALLBACKS.len()];
        self.fallback_idx += 1;
        Ok(line.to_string())
    }
}

// ── Trigger detection ──────────────────────────────────────────

/// What a submitted player line means for the rest of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTrigger {
    /// The exact password (trimmed, case-insensitive): unlock the gate.
    GatePassword,
    /// Mentions the snake: reveal the snake-game button.
    SnakeHint,
    None,
}

pub fn detect_trigger(input: &str) -> ChatTrigger {
    let trimmed = input.trim();
    // Exact match only. "the nird project" is a hint request, not the password.
    if trimmed.eq_ignore_ascii_case("nird") {
        return ChatTrigger::GatePassword;
    }
    if trimmed.to_ascii_lowercase().contains("snake") {
        return ChatTrigger::SnakeHint;
    }
    ChatTrigger::None
}

// ── Conversation state ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLine {
    Player(String),
    Guard(String),
}

/// The gate conversation: log, edit line, and the two reveal flags the
/// gate scene renders from.
pub struct ChatState {
    pub log: Vec<ChatLine>,
    pub input: String,
    /// A guard reply task is pending; the scene shows a typing indicator.
    pub awaiting_reply: bool,
    /// The snake-game button is visible.
    pub snake_revealed: bool,
    /// The password was accepted and the gate is swinging open.
    pub gate_opening: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            log: vec![ChatLine::Guard(
                "Halt! This is the NIRD school. Name the project, or state your business."
                    .to_string(),
            )],
            input: String::new(),
            awaiting_reply: false,
            snake_revealed: false,
            gate_opening: false,
        }
    }

    /// Consume the edit line: log it as the player's and classify it.
    /// Returns `None` for blank input. The caller schedules the reply.
    pub fn submit(&mut self) -> Option<(String, ChatTrigger)> {
        let text = self.input.trim().to_string();
        self.input.clear();
        if text.is_empty() {
            return None;
        }
        let trigger = detect_trigger(&text);
        self.log.push(ChatLine::Player(text.clone()));
        self.awaiting_reply = true;
        Some((text, trigger))
    }

    /// Deliver a guard line (a scheduled reply fired).
    pub fn push_guard(&mut self, line: String) {
        self.awaiting_reply = false;
        self.log.push(ChatLine::Guard(line));
    }

    /// Forget a pending reply (its task was cancelled).
    pub fn drop_pending_reply(&mut self) {
        self.awaiting_reply = false;
    }
}
