//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use keycalc::batch::parse_keys;
use keycalc::ui::calculator::{CalcIntent, CalcReducer, CalculatorState};
use keycalc::ui::mvi::Reducer;
use std::path::PathBuf;
use tempfile::TempDir;

/// Replay a key string (batch syntax) from the initial state.
pub fn press(keys: &str) -> CalculatorState {
    press_from(CalculatorState::default(), keys)
}

/// Replay a key string from `state`.
pub fn press_from(state: CalculatorState, keys: &str) -> CalculatorState {
    let intents = parse_keys(keys).expect("test key string must be valid");
    CalcReducer::reduce_all(state, intents)
}

pub fn apply(state: CalculatorState, intent: CalcIntent) -> CalculatorState {
    CalcReducer::reduce(state, intent)
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
