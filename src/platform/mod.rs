//! Platform abstraction layer
//!
//! Maps raw browser input to game actions. The wiring of DOM listeners lives
//! in the web entry point; the mapping here is platform-free.

pub mod input;

pub use input::{Action, BUTTON_IDS, action_for_button, action_for_key};
