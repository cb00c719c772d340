//! Refurbishment hunt rules: start, guarded open/complete, bench answers.
//!
//! Stations must be completed in their fixed `order` even though their
//! bench positions on screen are scrambled. Out-of-order attempts return
//! [`Attempt::Ignored`] and leave the state untouched.

use super::state::{station_info, Attempt, RefurbState, StationId, ALL_STATIONS, STATION_COUNT};

// ── RNG ──────────────────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

fn rng_range(state: &mut RefurbState, max: u32) -> u32 {
    state.rng_seed = next_rng(state.rng_seed);
    ((state.rng_seed >> 33) % max as u64) as u32
}

/// Shuffle the bench display positions.
pub fn scramble_slots(state: &mut RefurbState) {
    for i in (1..STATION_COUNT).rev() {
        let j = rng_range(state, i as u32 + 1) as usize;
        state.slots.swap(i, j);
    }
}

// ── Machine operations ───────────────────────────────────────

pub fn start_game(state: &mut RefurbState) {
    state.station_index = Some(0);
    state.completed.clear();
    state.active = None;
    state.score = 0;
    state.complete = false;
    scramble_slots(state);
    state.push_log("The hunt is on. One bench is waiting for you.");
}

/// The hunt's index when `id` is the station the order expects next.
fn guard(state: &RefurbState, id: StationId) -> Option<usize> {
    let i = state.station_index?;
    (station_info(id).order == i + 1).then_some(i)
}

/// Open a bench's modal. Succeeds only for the station whose order is
/// next; any other bench stays dark.
pub fn open_station(state: &mut RefurbState, id: StationId) -> Attempt {
    if guard(state, id).is_none() {
        return Attempt::Ignored;
    }
    state.active = Some(id);
    Attempt::Accepted
}

/// Close the open bench modal without touching progress.
pub fn close_station(state: &mut RefurbState) {
    state.active = None;
}

/// Complete a station, guarded like [`open_station`]. On success the
/// station's reward is added, the modal closes, and the hunt advances
/// (or finishes after the last station).
pub fn complete_station(state: &mut RefurbState, id: StationId, reward: u32) -> Attempt {
    let Some(i) = guard(state, id) else {
        return Attempt::Ignored;
    };
    state.completed.push(id);
    state.score += reward;
    state.active = None;

    let next = i + 1;
    if next >= STATION_COUNT {
        state.station_index = None;
        state.complete = true;
        state.push_log(format!("All six benches done. Score {}.", state.score));
    } else {
        state.station_index = Some(next);
        state.push_log(format!(
            "{} done (+{}). Another bench lights up.",
            station_info(id).name,
            reward
        ));
    }
    Attempt::Accepted
}

pub fn reset_game(state: &mut RefurbState) {
    state.station_index = None;
    state.completed.clear();
    state.active = None;
    state.score = 0;
    state.complete = false;
    state.log.clear();
    state.push_log("Six benches, one machine's journey.");
}

/// Answer the open bench's question. The right choice completes the
/// station; a wrong one keeps the modal open with a nudge.
pub fn answer_station(state: &mut RefurbState, choice: usize) {
    let Some(id) = state.active else {
        return;
    };
    let info = station_info(id);
    if choice >= info.choices.len() {
        return;
    }
    if choice == info.answer {
        if complete_station(state, id, info.reward).is_accepted() {
            return;
        }
        // Active but not current cannot happen through the guarded door;
        // close the stray modal if it somehow does.
        state.active = None;
    } else {
        state.push_log("The bench buzzes. Not that one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scenario_collect_then_diagnose() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);

        assert_eq!(open_station(&mut state, StationId::Collect), Attempt::Accepted);
        assert_eq!(open_station(&mut state, StationId::Diagnose), Attempt::Ignored);

        assert_eq!(
            complete_station(&mut state, StationId::Collect, 100),
            Attempt::Accepted
        );
        assert_eq!(state.station_index, Some(1));
        assert_eq!(state.score, 100);

        assert_eq!(open_station(&mut state, StationId::Diagnose), Attempt::Accepted);
    }

    #[test]
    fn nothing_opens_before_the_hunt_starts() {
        let mut state = RefurbState::new(1);
        for id in ALL_STATIONS {
            assert_eq!(open_station(&mut state, id), Attempt::Ignored);
            assert_eq!(complete_station(&mut state, id, 100), Attempt::Ignored);
        }
        assert_eq!(state.score, 0);
        assert!(state.completed.is_empty());
    }

    #[test]
    fn ignored_attempts_leave_state_unchanged() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let before = state.clone();

        assert_eq!(open_station(&mut state, StationId::Deliver), Attempt::Ignored);
        assert_eq!(state, before);

        assert_eq!(
            complete_station(&mut state, StationId::Test, 100),
            Attempt::Ignored
        );
        assert_eq!(state, before);
    }

    #[test]
    fn completing_does_not_require_opening() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        assert_eq!(
            complete_station(&mut state, StationId::Collect, 100),
            Attempt::Accepted
        );
        assert_eq!(state.station_index, Some(1));
    }

    #[test]
    fn close_station_cancels_without_progress() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let _ = open_station(&mut state, StationId::Collect);
        assert!(state.station_active(StationId::Collect));

        close_station(&mut state);
        assert_eq!(state.active, None);
        assert_eq!(state.station_index, Some(0));
        assert_eq!(state.score, 0);
        assert!(!state.station_completed(StationId::Collect));
    }

    #[test]
    fn last_station_sets_complete() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        for (i, id) in ALL_STATIONS.iter().enumerate() {
            assert!(!state.complete);
            assert_eq!(state.station_index, Some(i));
            assert_eq!(complete_station(&mut state, *id, 100), Attempt::Accepted);
        }
        assert!(state.complete);
        assert_eq!(state.station_index, None);
        assert_eq!(state.score, 600);
        assert_eq!(state.current_station(), None);

        // Nothing more to open or complete.
        for id in ALL_STATIONS {
            assert_eq!(open_station(&mut state, id), Attempt::Ignored);
        }
    }

    #[test]
    fn score_is_the_sum_of_rewards_passed() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let rewards = [10, 20, 30, 40, 50, 60];
        for (id, reward) in ALL_STATIONS.iter().zip(rewards) {
            assert_eq!(complete_station(&mut state, *id, reward), Attempt::Accepted);
        }
        assert_eq!(state.score, rewards.iter().sum::<u32>());
    }

    #[test]
    fn reset_returns_to_not_started() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let _ = complete_station(&mut state, StationId::Collect, 100);

        reset_game(&mut state);
        assert_eq!(state.station_index, None);
        assert!(!state.started());
        assert_eq!(state.score, 0);
        assert!(state.completed.is_empty());
        assert!(!state.complete);
    }

    #[test]
    fn start_game_restarts_a_finished_hunt() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        for id in ALL_STATIONS {
            let _ = complete_station(&mut state, id, 100);
        }
        assert!(state.complete);

        start_game(&mut state);
        assert_eq!(state.station_index, Some(0));
        assert!(!state.complete);
        assert_eq!(state.score, 0);
        assert!(state.completed.is_empty());
    }

    #[test]
    fn right_answer_completes_the_open_bench() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let _ = open_station(&mut state, StationId::Collect);

        let info = station_info(StationId::Collect);
        answer_station(&mut state, info.answer);
        assert!(state.station_completed(StationId::Collect));
        assert_eq!(state.active, None);
        assert_eq!(state.score, info.reward);
        assert_eq!(state.station_index, Some(1));
    }

    #[test]
    fn wrong_answer_keeps_the_bench_open() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let _ = open_station(&mut state, StationId::Collect);

        let info = station_info(StationId::Collect);
        let wrong = (info.answer + 1) % info.choices.len();
        answer_station(&mut state, wrong);
        assert!(state.station_active(StationId::Collect));
        assert!(!state.station_completed(StationId::Collect));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn answer_without_open_bench_is_a_no_op() {
        let mut state = RefurbState::new(1);
        start_game(&mut state);
        let before = state.clone();
        answer_station(&mut state, 0);
        assert_eq!(state, before);
    }

    #[test]
    fn scramble_keeps_all_stations() {
        let mut state = RefurbState::new(5);
        for _ in 0..10 {
            scramble_slots(&mut state);
            for id in ALL_STATIONS {
                assert_eq!(state.slots.iter().filter(|s| **s == id).count(), 1);
            }
        }
    }

    // ── Properties ───────────────────────────────────────────

    #[derive(Debug, Clone)]
    enum Op {
        Open(StationId),
        Complete(StationId),
        Close,
    }

    fn arb_station() -> impl Strategy<Value = StationId> {
        prop_oneof![
            Just(StationId::Collect),
            Just(StationId::Diagnose),
            Just(StationId::Clean),
            Just(StationId::Install),
            Just(StationId::Test),
            Just(StationId::Deliver),
        ]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            arb_station().prop_map(Op::Open),
            arb_station().prop_map(Op::Complete),
            Just(Op::Close),
        ]
    }

    proptest! {
        /// Ignored operations never change anything; accepted ones keep the
        /// machine's bookkeeping consistent.
        #[test]
        fn prop_guard_and_bookkeeping(ops in prop::collection::vec(arb_op(), 0..60)) {
            let mut state = RefurbState::new(42);
            start_game(&mut state);

            for op in ops {
                match op {
                    Op::Open(id) => {
                        let before = state.clone();
                        if open_station(&mut state, id) == Attempt::Ignored {
                            prop_assert_eq!(&state, &before);
                        } else {
                            prop_assert_eq!(state.active, Some(id));
                        }
                    }
                    Op::Complete(id) => {
                        let before = state.clone();
                        if complete_station(&mut state, id, 100) == Attempt::Ignored {
                            prop_assert_eq!(&state, &before);
                        }
                    }
                    Op::Close => close_station(&mut state),
                }

                let done = state.completed.len();
                prop_assert_eq!(state.score, done as u32 * 100);
                // Completed stations are exactly the order prefix.
                prop_assert_eq!(state.completed.as_slice(), &ALL_STATIONS[..done]);
                if state.complete {
                    prop_assert_eq!(done, STATION_COUNT);
                    prop_assert_eq!(state.station_index, None);
                } else {
                    prop_assert_eq!(state.station_index, Some(done));
                }
            }
        }

        /// The scrambled layout never loses or duplicates a bench.
        #[test]
        fn prop_slots_stay_a_permutation(seed in any::<u64>()) {
            let mut state = RefurbState::new(seed);
            scramble_slots(&mut state);
            for id in ALL_STATIONS {
                prop_assert_eq!(state.slots.iter().filter(|s| **s == id).count(), 1);
            }
        }
    }
}
