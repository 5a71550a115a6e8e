//! Model-View-Intent (MVI) architecture primitives.
//!
//! The calculator keeps all of its semantics in a reducer so the terminal
//! layer only translates input into intents and renders the resulting state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view renders
//! - **Intent**: Key presses, button clicks, replayed key strings
//! - **Reducer**: Pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
