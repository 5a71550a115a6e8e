//! Terminal calculator: an arithmetic entry engine behind a keypad UI.
//!
//! The engine lives in [`ui::calculator`] as a pure reducer. The terminal
//! layer ([`ui`]) and the batch replayer ([`batch`]) only turn input into
//! [`ui::calculator::CalcIntent`]s.

pub mod args;
pub mod batch;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ui;
