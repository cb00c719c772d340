//! Refurbishment hunt state: six benches, a fixed order, scrambled placement.

pub const STATION_COUNT: usize = 6;

/// Reward each station pays on completion.
pub const STATION_REWARD: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationId {
    Collect,
    Diagnose,
    Clean,
    Install,
    Test,
    Deliver,
}

/// All stations in completion order (`order` 1..=6).
pub const ALL_STATIONS: [StationId; STATION_COUNT] = [
    StationId::Collect,
    StationId::Diagnose,
    StationId::Clean,
    StationId::Install,
    StationId::Test,
    StationId::Deliver,
];

pub struct StationInfo {
    pub name: &'static str,
    /// The question the bench asks when opened.
    pub prompt: &'static str,
    pub choices: [&'static str; 3],
    /// Index into `choices` of the right answer.
    pub answer: usize,
    /// Fixed completion order, 1-based.
    pub order: usize,
    pub reward: u32,
}

pub fn station_info(id: StationId) -> StationInfo {
    match id {
        StationId::Collect => StationInfo {
            name: "Collect",
            prompt: "Three donated towers on the trolley. Which come in?",
            choices: [
                "Only the shiny one",
                "All three, every machine counts",
                "None, they smell of chalk dust",
            ],
            answer: 1,
            order: 1,
            reward: STATION_REWARD,
        },
        StationId::Diagnose => StationInfo {
            name: "Diagnose",
            prompt: "The first tower beeps three times and won't boot. First check?",
            choices: ["Reseat the RAM", "Change the wallpaper", "Shake it gently"],
            answer: 0,
            order: 2,
            reward: STATION_REWARD,
        },
        StationId::Clean => StationInfo {
            name: "Clean",
            prompt: "The heatsink wears a jumper of dust. Your tool?",
            choices: [
                "A dishwasher, quick program",
                "A damp tea towel",
                "Soft brush and blown air",
            ],
            answer: 2,
            order: 3,
            reward: STATION_REWARD,
        },
        StationId::Install => StationInfo {
            name: "Install",
            prompt: "Disk wiped clean. What goes on it?",
            choices: ["NIRD Linux", "A 30-day trial OS", "Nothing, ship it blank"],
            answer: 0,
            order: 4,
            reward: STATION_REWARD,
        },
        StationId::Test => StationInfo {
            name: "Test",
            prompt: "Install finished. When is the machine ready?",
            choices: [
                "When it looks about right",
                "After it boots and passes the checklist",
                "Once the sticker is on",
            ],
            answer: 1,
            order: 5,
            reward: STATION_REWARD,
        },
        StationId::Deliver => StationInfo {
            name: "Deliver",
            prompt: "The machine hums happily. Where does it go?",
            choices: [
                "Into the cellar, for keeps",
                "To an online auction",
                "Home with a pupil who needs it",
            ],
            answer: 2,
            order: 6,
            reward: STATION_REWARD,
        },
    }
}

/// Outcome of a guarded station operation. Out-of-order attempts are
/// ignored, not errors; callers that don't care may discard this.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Accepted,
    Ignored,
}

impl Attempt {
    pub fn is_accepted(self) -> bool {
        self == Attempt::Accepted
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefurbState {
    /// `None` before the hunt starts and after it completes.
    pub station_index: Option<usize>,
    pub completed: Vec<StationId>,
    /// Station whose bench modal is open, if any.
    pub active: Option<StationId>,
    pub score: u32,
    pub complete: bool,
    /// Display positions: `slots[grid_slot] = station`. A permutation of
    /// [`ALL_STATIONS`], reshuffled each hunt.
    pub slots: [StationId; STATION_COUNT],
    pub log: Vec<String>,
    pub rng_seed: u64,
}

impl RefurbState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            station_index: None,
            completed: Vec::new(),
            active: None,
            score: 0,
            complete: false,
            slots: ALL_STATIONS,
            log: Vec::new(),
            rng_seed: seed,
        };
        super::logic::scramble_slots(&mut state);
        state.log.push("Six benches, one machine's journey.".to_string());
        state
    }

    /// The station the hunt expects next, if it is running.
    pub fn current_station(&self) -> Option<StationId> {
        self.station_index.map(|i| ALL_STATIONS[i])
    }

    pub fn station_active(&self, id: StationId) -> bool {
        self.active == Some(id)
    }

    pub fn station_completed(&self, id: StationId) -> bool {
        self.completed.contains(&id)
    }

    pub fn started(&self) -> bool {
        self.station_index.is_some() || self.complete
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_are_one_to_six_in_station_order() {
        for (i, id) in ALL_STATIONS.iter().enumerate() {
            assert_eq!(station_info(*id).order, i + 1);
        }
    }

    #[test]
    fn collect_is_first_and_diagnose_second() {
        assert_eq!(station_info(StationId::Collect).order, 1);
        assert_eq!(station_info(StationId::Diagnose).order, 2);
    }

    #[test]
    fn every_answer_index_is_in_range() {
        for id in ALL_STATIONS {
            let info = station_info(id);
            assert!(info.answer < info.choices.len());
        }
    }

    #[test]
    fn fresh_state_is_not_started() {
        let state = RefurbState::new(7);
        assert_eq!(state.station_index, None);
        assert!(!state.started());
        assert!(!state.complete);
        assert_eq!(state.score, 0);
        assert_eq!(state.current_station(), None);
    }

    #[test]
    fn slots_are_a_permutation() {
        let state = RefurbState::new(99);
        for id in ALL_STATIONS {
            assert_eq!(state.slots.iter().filter(|s| **s == id).count(), 1);
        }
    }
}
