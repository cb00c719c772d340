//! Fixed-timestep game clock and tick-based task scheduling.
//!
//! `draw_web()` calls at ~60fps with variable delta. [`GameTime`] converts
//! this into a fixed number of discrete ticks per second, making game
//! logic deterministic and fully testable.
//!
//! [`Scheduler`] replaces ad-hoc wall-clock timeouts: every delayed action
//! (walk transitions, chat typing delays, overlay auto-close) is a task due
//! at an absolute tick, tagged with the [`TaskOwner`] that created it so it
//! can be cancelled when that owner's context ends.

pub struct GameTime {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl GameTime {
    /// Create a new GameTime with the given tick rate.
    /// `ticks_per_sec`: how many game ticks per real-time second (e.g. 10).
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of discrete ticks to process this frame.
    ///
    /// Call this once per draw frame. The returned tick count should be
    /// passed to `App::tick(delta_ticks)`.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp to avoid spiral-of-death if tab was backgrounded
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }

    /// Directly add ticks (useful for testing without timestamps).
    #[cfg(test)]
    pub fn add_ticks(&mut self, ticks: u32) {
        self.total_ticks += ticks as u64;
    }
}

// ── Scheduled tasks ─────────────────────────────────────────────────

/// Who created a pending task. Cancelling by owner drops every task that
/// owner scheduled without touching the rest of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOwner {
    /// Chat typing delays (gate guard replies).
    Chat,
    /// Gate scene effects other than chat (e.g. revealed-button flash).
    Gate,
    /// Walk/zoom transition commits.
    Transition,
    /// Overlay auto-close and similar modal-scoped delays.
    Overlay,
}

/// Handle to one pending task, returned by [`Scheduler::schedule_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(u64);

struct ScheduledTask<T> {
    id: TaskId,
    due_tick: u64,
    owner: TaskOwner,
    payload: T,
}

/// A queue of payloads due at absolute ticks.
///
/// Tasks are not self-firing: the app loop calls [`Scheduler::drain_due`]
/// once per tick batch and acts on the returned payloads. A task cancelled
/// (individually or via its owner) before its due tick never fires.
pub struct Scheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire `delay_ticks` ticks after `now_tick`.
    /// A zero delay fires on the next drain.
    pub fn schedule_in(
        &mut self,
        now_tick: u64,
        delay_ticks: u32,
        owner: TaskOwner,
        payload: T,
    ) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due_tick: now_tick + delay_ticks as u64,
            owner,
            payload,
        });
        id
    }

    /// Cancel one task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Drop every pending task tagged with `owner`.
    pub fn cancel_owner(&mut self, owner: TaskOwner) {
        self.tasks.retain(|t| t.owner != owner);
    }

    /// Drop everything. Used by full-state reset.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Whether any task tagged with `owner` is still pending.
    pub fn has_pending(&self, owner: TaskOwner) -> bool {
        self.tasks.iter().any(|t| t.owner == owner)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove and return all tasks due at or before `now_tick`, earliest due
    /// first. Tasks sharing a due tick come back in scheduling order.
    pub fn drain_due(&mut self, now_tick: u64) -> Vec<T> {
        let mut due = Vec::new();
        let mut rest = Vec::new();
        for t in self.tasks.drain(..) {
            if t.due_tick <= now_tick {
                due.push(t);
            } else {
                rest.push(t);
            }
        }
        self.tasks = rest;
        // Stable sort keeps insertion order within the same due tick.
        due.sort_by_key(|t| t.due_tick);
        due.into_iter().map(|t| t.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut gt = GameTime::new(10);
        assert_eq!(gt.update(0.0), 0);
    }

    #[test]
    fn one_tick_at_100ms() {
        let mut gt = GameTime::new(10); // 100ms per tick
        gt.update(0.0); // first frame
        assert_eq!(gt.update(100.0), 1);
        assert_eq!(gt.total_ticks, 1);
    }

    #[test]
    fn multiple_ticks_accumulated() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        assert_eq!(gt.update(350.0), 3); // 350ms = 3 ticks + 50ms remainder
        assert_eq!(gt.total_ticks, 3);
    }

    #[test]
    fn remainder_carried_over() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        gt.update(150.0); // 1 tick, 50ms remainder
        assert_eq!(gt.total_ticks, 1);
        assert_eq!(gt.update(200.0), 1); // 50ms delta + 50ms acc = 100ms = 1 tick
        assert_eq!(gt.total_ticks, 2);
    }

    #[test]
    fn clamp_large_delta() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        // Simulate 10 second gap (tab backgrounded) → clamped to 500ms = 5 ticks
        let ticks = gt.update(10000.0);
        assert_eq!(ticks, 5);
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut gt = GameTime::new(10); // 100ms/tick
        gt.update(0.0);
        assert_eq!(gt.update(16.0), 0); // 16ms < 100ms
        assert_eq!(gt.update(32.0), 0); // +16ms = 32ms total
        assert_eq!(gt.update(48.0), 0); // +16ms = 48ms
        assert_eq!(gt.update(64.0), 0); // +16ms = 64ms
        assert_eq!(gt.update(80.0), 0); // +16ms = 80ms
        assert_eq!(gt.update(96.0), 0); // +16ms = 96ms
        assert_eq!(gt.update(112.0), 1); // +16ms = 112ms → 1 tick, 12ms remainder
        assert_eq!(gt.total_ticks, 1);
    }

    #[test]
    fn steady_60fps() {
        let mut gt = GameTime::new(10);
        gt.update(0.0);
        let mut total = 0u32;
        // 60 frames at ~16.67ms each = 1 second
        for i in 1..=60 {
            total += gt.update(i as f64 * 16.667);
        }
        // Should be approximately 10 ticks (1 second at 10 ticks/sec)
        assert!(total >= 9 && total <= 11, "expected ~10 ticks, got {}", total);
    }

    #[test]
    fn add_ticks_directly() {
        let mut gt = GameTime::new(10);
        gt.add_ticks(5);
        assert_eq!(gt.total_ticks, 5);
        gt.add_ticks(3);
        assert_eq!(gt.total_ticks, 8);
    }

    // ── Scheduler tests ─────────────────────────────────────────────

    #[test]
    fn task_fires_at_due_tick() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule_in(0, 5, TaskOwner::Transition, "commit");

        assert!(s.drain_due(4).is_empty());
        assert_eq!(s.drain_due(5), vec!["commit"]);
        // Fired tasks are gone
        assert!(s.drain_due(100).is_empty());
    }

    #[test]
    fn zero_delay_fires_on_next_drain() {
        let mut s: Scheduler<u8> = Scheduler::new();
        s.schedule_in(7, 0, TaskOwner::Chat, 1);
        assert_eq!(s.drain_due(7), vec![1]);
    }

    #[test]
    fn drain_orders_by_due_tick() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule_in(0, 8, TaskOwner::Chat, "late");
        s.schedule_in(0, 3, TaskOwner::Chat, "early");
        s.schedule_in(0, 5, TaskOwner::Chat, "middle");

        assert_eq!(s.drain_due(10), vec!["early", "middle", "late"]);
    }

    #[test]
    fn same_due_tick_keeps_schedule_order() {
        let mut s: Scheduler<u8> = Scheduler::new();
        s.schedule_in(0, 4, TaskOwner::Chat, 1);
        s.schedule_in(0, 4, TaskOwner::Chat, 2);
        s.schedule_in(0, 4, TaskOwner::Chat, 3);

        assert_eq!(s.drain_due(4), vec![1, 2, 3]);
    }

    #[test]
    fn partial_drain_keeps_future_tasks() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule_in(0, 2, TaskOwner::Chat, "soon");
        s.schedule_in(0, 9, TaskOwner::Chat, "later");

        assert_eq!(s.drain_due(5), vec!["soon"]);
        assert!(!s.is_empty());
        assert_eq!(s.drain_due(9), vec!["later"]);
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_single_task() {
        let mut s: Scheduler<&str> = Scheduler::new();
        let keep = s.schedule_in(0, 5, TaskOwner::Chat, "keep");
        let drop = s.schedule_in(0, 5, TaskOwner::Chat, "drop");

        assert!(s.cancel(drop));
        // Cancelling again is a no-op
        assert!(!s.cancel(drop));

        assert_eq!(s.drain_due(5), vec!["keep"]);
        // Fired tasks can no longer be cancelled
        assert!(!s.cancel(keep));
    }

    #[test]
    fn cancel_owner_drops_only_that_owner() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule_in(0, 5, TaskOwner::Chat, "reply");
        s.schedule_in(0, 5, TaskOwner::Transition, "commit");
        s.schedule_in(0, 7, TaskOwner::Chat, "reply2");

        s.cancel_owner(TaskOwner::Chat);

        assert!(!s.has_pending(TaskOwner::Chat));
        assert!(s.has_pending(TaskOwner::Transition));
        assert_eq!(s.drain_due(10), vec!["commit"]);
    }

    #[test]
    fn cancel_all_empties_queue() {
        let mut s: Scheduler<u8> = Scheduler::new();
        s.schedule_in(0, 1, TaskOwner::Chat, 1);
        s.schedule_in(0, 2, TaskOwner::Gate, 2);
        s.schedule_in(0, 3, TaskOwner::Overlay, 3);

        s.cancel_all();
        assert!(s.is_empty());
        assert!(s.drain_due(100).is_empty());
    }

    #[test]
    fn has_pending_reflects_queue() {
        let mut s: Scheduler<u8> = Scheduler::new();
        assert!(!s.has_pending(TaskOwner::Overlay));

        s.schedule_in(0, 3, TaskOwner::Overlay, 9);
        assert!(s.has_pending(TaskOwner::Overlay));
        assert!(!s.has_pending(TaskOwner::Gate));

        s.drain_due(3);
        assert!(!s.has_pending(TaskOwner::Overlay));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule_in(0, 5, TaskOwner::Transition, "commit");
        s.cancel_owner(TaskOwner::Transition);

        assert!(s.drain_due(5).is_empty());
        assert!(s.drain_due(1000).is_empty());
    }
}
