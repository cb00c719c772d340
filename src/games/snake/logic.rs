//! Snake movement, growth, and win/lose rules.

use super::state::{Dir, RunState, SnakeState, GRID_H, GRID_W, MOVE_PERIOD, WIN_LENGTH};

// ── RNG ──────────────────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

fn rng_range(state: &mut SnakeState, max: u32) -> u32 {
    state.rng_seed = next_rng(state.rng_seed);
    ((state.rng_seed >> 33) % max as u64) as u32
}

/// Place food on a cell the snake does not occupy.
pub fn spawn_food(state: &mut SnakeState) {
    if state.body.len() >= (GRID_W as usize) * (GRID_H as usize) {
        return;
    }
    loop {
        let x = rng_range(state, GRID_W as u32) as u16;
        let y = rng_range(state, GRID_H as u32) as u16;
        if !state.body.contains(&(x, y)) {
            state.food = (x, y);
            return;
        }
    }
}

/// Queue a turn for the next move. Reversals onto the neck are ignored.
pub fn steer(state: &mut SnakeState, dir: Dir) {
    if state.run != RunState::Playing {
        return;
    }
    if dir == state.dir.opposite() {
        return;
    }
    state.pending_dir = Some(dir);
}

pub fn tick(state: &mut SnakeState, delta_ticks: u32) {
    if state.run != RunState::Playing {
        return;
    }
    state.move_timer += delta_ticks;
    while state.move_timer >= MOVE_PERIOD {
        state.move_timer -= MOVE_PERIOD;
        step(state);
        if state.run != RunState::Playing {
            return;
        }
    }
}

/// Advance the snake one cell.
pub fn step(state: &mut SnakeState) {
    if let Some(dir) = state.pending_dir.take() {
        state.dir = dir;
    }

    let (dx, dy) = state.dir.delta();
    let (hx, hy) = state.body[0];
    let nx = hx as i32 + dx;
    let ny = hy as i32 + dy;

    if nx < 0 || ny < 0 || nx >= GRID_W as i32 || ny >= GRID_H as i32 {
        state.run = RunState::Crashed;
        return;
    }
    let next = (nx as u16, ny as u16);

    // The tail cell vacates this move, so it only blocks when growing.
    let grows = next == state.food;
    let blocking = if grows {
        &state.body[..]
    } else {
        &state.body[..state.body.len() - 1]
    };
    if blocking.contains(&next) {
        state.run = RunState::Crashed;
        return;
    }

    state.body.insert(0, next);
    if grows {
        if state.body.len() > state.best_length {
            state.best_length = state.body.len();
        }
        if state.body.len() >= WIN_LENGTH {
            state.run = RunState::Won;
            state.wins += 1;
            return;
        }
        spawn_food(state);
    } else {
        state.body.pop();
    }
}

/// Fresh run, keeping the cross-run records.
pub fn restart(state: &mut SnakeState) {
    let best = state.best_length;
    let wins = state.wins;
    let seed = next_rng(state.rng_seed);
    *state = SnakeState::new(seed);
    state.best_length = best;
    state.wins = wins;
}
