//! Serial-console state for the old school server.

/// Ticks between installer output lines.
pub const INSTALL_STEP_TICKS: u32 = 6;

/// Pause after the final installer line before the console reports done,
/// so the player gets to read it.
pub const DONE_LINGER_TICKS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An echoed command, prefixed with `$ `.
    Command,
    Output,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct TermLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    NotStarted,
    Running { step: usize, timer: u32 },
    /// All lines printed; holding the console briefly before reporting done.
    Lingering { timer: u32 },
    Done,
}

pub struct TermState {
    pub lines: Vec<TermLine>,
    pub input: String,
    pub install: InstallPhase,
}

impl TermState {
    pub fn new() -> Self {
        let mut state = Self {
            lines: Vec::new(),
            input: String::new(),
            install: InstallPhase::NotStarted,
        };
        state.push(LineKind::Output, "NIRD rescue shell on ttyS0. The old server waits.");
        state.push(LineKind::Output, "Type `help` if you are lost.");
        state
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TermLine {
            kind,
            text: text.into(),
        });
    }

    /// Once the installer starts the prompt stays locked; the console only
    /// reopens as a fresh session.
    pub fn installing(&self) -> bool {
        !matches!(self.install, InstallPhase::NotStarted)
    }
}
