//! Snake state: grid, body, food, and run outcome.

pub const GRID_W: u16 = 24;
pub const GRID_H: u16 = 14;
/// Reaching this length wins the gate guard's bet.
pub const WIN_LENGTH: usize = 10;
/// Ticks between snake moves (10 tick/s clock → 5 cells/s).
pub const MOVE_PERIOD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Playing,
    /// Reached the target length.
    Won,
    /// Hit a wall or itself.
    Crashed,
}

pub struct SnakeState {
    /// Head first.
    pub body: Vec<(u16, u16)>,
    pub dir: Dir,
    /// Applied at the next move. Queuing one turn per move prevents a
    /// quick double-press from reversing into the neck.
    pub pending_dir: Option<Dir>,
    pub food: (u16, u16),
    pub run: RunState,
    pub move_timer: u32,
    /// Longest body ever, across runs (persisted).
    pub best_length: usize,
    /// Wins across runs (persisted).
    pub wins: u32,
    pub rng_seed: u64,
}

impl SnakeState {
    pub fn new(seed: u64) -> Self {
        let cx = GRID_W / 2;
        let cy = GRID_H / 2;
        let mut state = Self {
            body: vec![(cx, cy), (cx - 1, cy), (cx - 2, cy)],
            dir: Dir::Right,
            pending_dir: None,
            food: (0, 0),
            run: RunState::Playing,
            move_timer: 0,
            best_length: 0,
            wins: 0,
            rng_seed: seed,
        };
        super::logic::spawn_food(&mut state);
        state
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_heading_right() {
        let state = SnakeState::new(1);
        assert_eq!(state.len(), 3);
        assert_eq!(state.dir, Dir::Right);
        assert_eq!(state.run, RunState::Playing);
        assert_eq!(state.body[0], (GRID_W / 2, GRID_H / 2));
    }

    #[test]
    fn food_spawns_off_the_body() {
        for seed in 0..50 {
            let state = SnakeState::new(seed);
            assert!(!state.body.contains(&state.food));
            assert!(state.food.0 < GRID_W);
            assert!(state.food.1 < GRID_H);
        }
    }

    #[test]
    fn opposite_directions() {
        assert_eq!(Dir::Up.opposite(), Dir::Down);
        assert_eq!(Dir::Left.opposite(), Dir::Right);
    }
}
