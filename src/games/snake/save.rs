//! Snake record persistence.
//!
//! Only the cross-run record (best length, wins) is stored; the run itself
//! and all navigation state deliberately reset on reload.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

#[cfg(any(target_arch = "wasm32", test))]
use super::state::SnakeState;

#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "nird_escape_snake_record";

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    record: SnakeRecord,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct SnakeRecord {
    best_length: u32,
    wins: u32,
}

#[cfg(any(target_arch = "wasm32", test))]
fn extract_record(state: &SnakeState) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        record: SnakeRecord {
            best_length: state.best_length as u32,
            wins: state.wins,
        },
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply_record(state: &mut SnakeState, record: &SnakeRecord) {
    state.best_length = record.best_length as usize;
    state.wins = record.wins;
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn save_record(state: &SnakeState) {
    let save_data = extract_record(state);
    let json = match serde_json::to_string(&save_data) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(&format!("Snake: record serialize failed: {e}").into());
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(&format!("Snake: localStorage write failed: {e:?}").into());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_record(state: &mut SnakeState) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save_data: SaveData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Snake: stored record unreadable, discarding: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }
    };

    if save_data.version < MIN_COMPATIBLE_VERSION {
        let _ = storage.remove_item(STORAGE_KEY);
        return false;
    }

    apply_record(state, &save_data.record);
    true
}
