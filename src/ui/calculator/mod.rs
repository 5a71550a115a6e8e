//! Calculator entry engine.
//!
//! Digit entry, pending binary operations, and the running display string.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Display plus operand/operation bookkeeping
//! - `intent.rs` - Digit, decimal point, operators, equals, clear, backspace
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `operator.rs` - Binary operators and their arithmetic
//! - `format.rs` - Result formatting for the display

mod format;
mod intent;
mod operator;
mod reducer;
mod state;

pub use intent::CalcIntent;
pub use operator::Operator;
pub use reducer::CalcReducer;
pub use state::CalculatorState;
