//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user input after it has been decoded from the
/// terminal (key press, keypad click) or from a batch key string.
/// They are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
