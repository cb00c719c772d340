//! Navigation core: where the player is, what they have solved, and which
//! overlay covers the scene.
//!
//! This machine is deliberately permissive. Every operation is a total
//! function callable from any state, because scenes use [`NavState::go_to_hallway`]
//! as a generic abort path; there is no transition table and no legal
//! phase×room validation. The one structural rule (`room` is `Some` exactly
//! while the phase is `Room`) is checked by debug assertions after each
//! mutation and never enforced at runtime.

/// Top-level stage of the experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Gate,
    Hallway,
    Room,
}

/// A themed sub-area, reachable only while the phase is [`Phase::Room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomId {
    Lab,
    Server,
    Office,
    Video,
}

pub const ALL_ROOMS: [RoomId; 4] = [RoomId::Lab, RoomId::Server, RoomId::Office, RoomId::Video];

/// A gate-keeping challenge whose completion is tracked as a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleId {
    Gate,
    Lab,
    Server,
    Office,
}

pub const ALL_PUZZLES: [PuzzleId; 4] = [
    PuzzleId::Gate,
    PuzzleId::Lab,
    PuzzleId::Server,
    PuzzleId::Office,
];

/// The puzzles solved inside rooms. The gate puzzle is solved outside.
pub const ROOM_PUZZLES: [PuzzleId; 3] = [PuzzleId::Lab, PuzzleId::Server, PuzzleId::Office];

/// The modal mini-game currently covering the scene, if any.
///
/// A single tagged value rather than one flag per overlay, so two overlays
/// can never be open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Snake,
    NirdForm,
    LinuxTerminal,
}

// ── Static info tables ─────────────────────────────────────────

pub struct RoomInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    /// The puzzle solved inside this room, if it has one.
    pub puzzle: Option<PuzzleId>,
    /// Keyboard shortcut on the hallway door list.
    pub door_key: char,
}

pub fn room_info(id: RoomId) -> RoomInfo {
    match id {
        RoomId::Lab => RoomInfo {
            name: "Refurbishment Lab",
            tagline: "Donated PCs get a second life here",
            puzzle: Some(PuzzleId::Lab),
            door_key: '1',
        },
        RoomId::Server => RoomInfo {
            name: "Server Room",
            tagline: "Racks humming on rescued hardware",
            puzzle: Some(PuzzleId::Server),
            door_key: '2',
        },
        RoomId::Office => RoomInfo {
            name: "Staff Office",
            tagline: "Paperwork, pledges and planning",
            puzzle: Some(PuzzleId::Office),
            door_key: '3',
        },
        RoomId::Video => RoomInfo {
            name: "Video Corner",
            tagline: "A short film about durable tech",
            puzzle: None,
            door_key: '4',
        },
    }
}

pub struct PuzzleInfo {
    pub name: &'static str,
    /// Shown in the hallway status strip once solved.
    pub done_note: &'static str,
}

pub fn puzzle_info(id: PuzzleId) -> PuzzleInfo {
    match id {
        PuzzleId::Gate => PuzzleInfo {
            name: "Gate password",
            done_note: "gate opened",
        },
        PuzzleId::Lab => PuzzleInfo {
            name: "Refurbishment hunt",
            done_note: "six PCs refurbished",
        },
        PuzzleId::Server => PuzzleInfo {
            name: "Linux install",
            done_note: "server revived",
        },
        PuzzleId::Office => PuzzleInfo {
            name: "NIRD pledge",
            done_note: "pledge signed",
        },
    }
}

// ── State machine ──────────────────────────────────────────────

/// The navigation state machine. One instance lives in the app context and
/// is passed into the scenes that read or mutate it.
#[derive(Debug)]
pub struct NavState {
    phase: Phase,
    room: Option<RoomId>,
    transitioning: bool,
    /// Indexed by `PuzzleId as usize`. Entries only go false→true outside
    /// of `reset`.
    completed: [bool; ALL_PUZZLES.len()],
    overlay: Option<Overlay>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Gate,
            room: None,
            transitioning: false,
            completed: [false; ALL_PUZZLES.len()],
            overlay: None,
        }
    }

    fn debug_check(&self) {
        debug_assert!(
            (self.phase == Phase::Room) == self.room.is_some(),
            "room must be set exactly while phase is Room (phase {:?}, room {:?})",
            self.phase,
            self.room
        );
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn puzzle_done(&self, id: PuzzleId) -> bool {
        self.completed[id as usize]
    }

    /// How many room puzzles are solved. The gate puzzle does not count.
    pub fn rooms_solved(&self) -> usize {
        ROOM_PUZZLES.iter().filter(|&&p| self.puzzle_done(p)).count()
    }

    pub fn all_rooms_solved(&self) -> bool {
        self.rooms_solved() == ROOM_PUZZLES.len()
    }

    // ── Operations ─────────────────────────────────────────────

    /// Move to the hallway. Callable from any state; scenes also use this
    /// as a generic "abort whatever was happening" path.
    pub fn go_to_hallway(&mut self) {
        self.phase = Phase::Hallway;
        self.room = None;
        self.transitioning = false;
        self.debug_check();
    }

    /// Back to the gate (outside the school).
    pub fn go_to_gate(&mut self) {
        self.phase = Phase::Gate;
        self.room = None;
        self.transitioning = false;
        self.debug_check();
    }

    /// Commit entry into a room. Callers run their walk animation first;
    /// this just flips the state.
    pub fn enter_room(&mut self, room: RoomId) {
        self.phase = Phase::Room;
        self.room = Some(room);
        self.transitioning = false;
        self.debug_check();
    }

    /// The semantically-named exit path from inside a room. Identical in
    /// effect to [`go_to_hallway`](NavState::go_to_hallway).
    pub fn exit_room(&mut self) {
        self.go_to_hallway();
    }

    /// Raise or clear the transition flag. While set, the input layer
    /// ignores scene interactions. The caller that set it is responsible
    /// for clearing it; the app tick has a watchdog for lost clears.
    pub fn set_transitioning(&mut self, on: bool) {
        self.transitioning = on;
    }

    /// Mark a puzzle solved. Idempotent. Completion has no navigation side
    /// effects of its own; callers chain their own `go_to_*` if the win
    /// should move the player.
    pub fn complete_puzzle(&mut self, id: PuzzleId) {
        self.completed[id as usize] = true;
    }

    /// Replace the active overlay. Opening while another overlay is up
    /// swaps it out.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Full-state reset, equivalent to restarting the experience.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_state_is_gate() {
        let nav = NavState::new();
        assert_eq!(nav.phase(), Phase::Gate);
        assert_eq!(nav.room(), None);
        assert!(!nav.transitioning());
        assert_eq!(nav.overlay(), None);
        for p in ALL_PUZZLES {
            assert!(!nav.puzzle_done(p));
        }
    }

    #[test]
    fn enter_and_exit_room() {
        let mut nav = NavState::new();
        nav.go_to_hallway();

        nav.enter_room(RoomId::Server);
        assert_eq!(nav.phase(), Phase::Room);
        assert_eq!(nav.room(), Some(RoomId::Server));

        nav.exit_room();
        assert_eq!(nav.phase(), Phase::Hallway);
        assert_eq!(nav.room(), None);
    }

    #[test]
    fn hallway_is_a_generic_abort() {
        let mut nav = NavState::new();

        // From the gate
        nav.go_to_hallway();
        assert_eq!(nav.phase(), Phase::Hallway);

        // From inside a room, mid-transition
        nav.enter_room(RoomId::Lab);
        nav.set_transitioning(true);
        nav.go_to_hallway();
        assert_eq!(nav.phase(), Phase::Hallway);
        assert_eq!(nav.room(), None);
        assert!(!nav.transitioning());
    }

    #[test]
    fn go_to_gate_clears_room() {
        let mut nav = NavState::new();
        nav.enter_room(RoomId::Office);
        nav.go_to_gate();
        assert_eq!(nav.phase(), Phase::Gate);
        assert_eq!(nav.room(), None);
    }

    #[test]
    fn committing_navigation_clears_transitioning() {
        let mut nav = NavState::new();
        nav.set_transitioning(true);
        nav.enter_room(RoomId::Video);
        assert!(!nav.transitioning());

        nav.set_transitioning(true);
        nav.go_to_hallway();
        assert!(!nav.transitioning());

        nav.set_transitioning(true);
        nav.go_to_gate();
        assert!(!nav.transitioning());
    }

    #[test]
    fn complete_puzzle_is_idempotent() {
        let mut nav = NavState::new();
        nav.go_to_hallway();
        nav.complete_puzzle(PuzzleId::Gate);
        assert!(nav.puzzle_done(PuzzleId::Gate));

        nav.complete_puzzle(PuzzleId::Gate);
        assert!(nav.puzzle_done(PuzzleId::Gate));
        // Nothing else moved
        assert_eq!(nav.phase(), Phase::Hallway);
        assert_eq!(nav.room(), None);
        assert!(!nav.transitioning());
        assert!(!nav.puzzle_done(PuzzleId::Lab));
        assert!(!nav.puzzle_done(PuzzleId::Server));
        assert!(!nav.puzzle_done(PuzzleId::Office));
    }

    #[test]
    fn reset_restores_every_field() {
        let mut nav = NavState::new();
        nav.enter_room(RoomId::Lab);
        nav.set_transitioning(true);
        nav.complete_puzzle(PuzzleId::Gate);
        nav.complete_puzzle(PuzzleId::Lab);
        nav.open_overlay(Overlay::Snake);

        nav.reset();

        assert_eq!(nav.phase(), Phase::Gate);
        assert_eq!(nav.room(), None);
        assert!(!nav.transitioning());
        assert_eq!(nav.overlay(), None);
        for p in ALL_PUZZLES {
            assert!(!nav.puzzle_done(p));
        }
    }

    #[test]
    fn overlay_is_mutually_exclusive() {
        let mut nav = NavState::new();
        nav.open_overlay(Overlay::Snake);
        assert_eq!(nav.overlay(), Some(Overlay::Snake));

        // Opening another swaps, never stacks
        nav.open_overlay(Overlay::NirdForm);
        assert_eq!(nav.overlay(), Some(Overlay::NirdForm));

        nav.close_overlay();
        assert_eq!(nav.overlay(), None);
    }

    #[test]
    fn rooms_solved_excludes_gate() {
        let mut nav = NavState::new();
        nav.complete_puzzle(PuzzleId::Gate);
        assert_eq!(nav.rooms_solved(), 0);
        assert!(!nav.all_rooms_solved());

        nav.complete_puzzle(PuzzleId::Lab);
        nav.complete_puzzle(PuzzleId::Server);
        assert_eq!(nav.rooms_solved(), 2);
        assert!(!nav.all_rooms_solved());

        nav.complete_puzzle(PuzzleId::Office);
        assert!(nav.all_rooms_solved());
    }

    #[test]
    fn info_tables_are_consistent() {
        // Every room puzzle is owned by exactly one room
        for p in ROOM_PUZZLES {
            let owners = ALL_ROOMS
                .iter()
                .filter(|&&r| room_info(r).puzzle == Some(p))
                .count();
            assert_eq!(owners, 1, "puzzle {:?} must have one room", p);
        }
        assert_eq!(room_info(RoomId::Video).puzzle, None);

        // Door keys are unique
        for a in ALL_ROOMS {
            for b in ALL_ROOMS {
                if a != b {
                    assert_ne!(room_info(a).door_key, room_info(b).door_key);
                }
            }
        }

        // Every puzzle has display strings
        for p in ALL_PUZZLES {
            let info = puzzle_info(p);
            assert!(!info.name.is_empty());
            assert!(!info.done_note.is_empty());
        }
    }

    // ── Property tests ─────────────────────────────────────────

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Hallway,
        Gate,
        Enter(RoomId),
        Exit,
        SetTransitioning(bool),
        Complete(PuzzleId),
        OpenOverlay(Overlay),
        CloseOverlay,
    }

    fn apply(nav: &mut NavState, op: Op) {
        match op {
            Op::Hallway => nav.go_to_hallway(),
            Op::Gate => nav.go_to_gate(),
            Op::Enter(r) => nav.enter_room(r),
            Op::Exit => nav.exit_room(),
            Op::SetTransitioning(b) => nav.set_transitioning(b),
            Op::Complete(p) => nav.complete_puzzle(p),
            Op::OpenOverlay(o) => nav.open_overlay(o),
            Op::CloseOverlay => nav.close_overlay(),
        }
    }

    fn arb_room() -> impl Strategy<Value = RoomId> {
        prop_oneof![
            Just(RoomId::Lab),
            Just(RoomId::Server),
            Just(RoomId::Office),
            Just(RoomId::Video),
        ]
    }

    fn arb_puzzle() -> impl Strategy<Value = PuzzleId> {
        prop_oneof![
            Just(PuzzleId::Gate),
            Just(PuzzleId::Lab),
            Just(PuzzleId::Server),
            Just(PuzzleId::Office),
        ]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Hallway),
            Just(Op::Gate),
            arb_room().prop_map(Op::Enter),
            Just(Op::Exit),
            proptest::bool::ANY.prop_map(Op::SetTransitioning),
            arb_puzzle().prop_map(Op::Complete),
            prop_oneof![
                Just(Overlay::Snake),
                Just(Overlay::NirdForm),
                Just(Overlay::LinuxTerminal)
            ]
            .prop_map(Op::OpenOverlay),
            Just(Op::CloseOverlay),
        ]
    }

    proptest! {
        /// `room` is set exactly while the phase is `Room`, across any
        /// operation sequence.
        #[test]
        fn prop_room_set_iff_room_phase(ops in proptest::collection::vec(arb_op(), 0..40)) {
            let mut nav = NavState::new();
            for op in ops {
                apply(&mut nav, op);
                prop_assert_eq!(nav.room().is_some(), nav.phase() == Phase::Room);
                if let Op::Enter(r) = op {
                    prop_assert_eq!(nav.room(), Some(r));
                }
            }
        }

        /// Puzzle flags only go false→true while reset is not called.
        #[test]
        fn prop_puzzles_monotonic(ops in proptest::collection::vec(arb_op(), 0..60)) {
            let mut nav = NavState::new();
            let mut seen = [false; ALL_PUZZLES.len()];
            for op in ops {
                apply(&mut nav, op);
                for (i, p) in ALL_PUZZLES.into_iter().enumerate() {
                    let done = nav.puzzle_done(p);
                    prop_assert!(done || !seen[i], "{:?} went true→false", p);
                    seen[i] = done;
                }
            }
        }

        /// Navigation commits always leave the transition flag lowered.
        #[test]
        fn prop_commits_clear_transitioning(ops in proptest::collection::vec(arb_op(), 0..40)) {
            let mut nav = NavState::new();
            for op in ops {
                apply(&mut nav, op);
                match op {
                    Op::Hallway | Op::Gate | Op::Enter(_) | Op::Exit => {
                        prop_assert!(!nav.transitioning());
                    }
                    _ => {}
                }
            }
        }
    }
}
