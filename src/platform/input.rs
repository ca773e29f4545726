//! Key and button bindings

/// What a gesture asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fire,
    ToggleMute,
    Start,
    Restart,
}

/// Map a `KeyboardEvent` (`key`, `code`) to an action.
///
/// Space and Enter fire; M toggles mute. Start and restart are button-only.
pub fn action_for_key(key: &str, code: &str) -> Option<Action> {
    match (key, code) {
        (_, "Space") | (" ", _) | ("Enter", _) | (_, "NumpadEnter") => Some(Action::Fire),
        ("m", _) | ("M", _) => Some(Action::ToggleMute),
        _ => None,
    }
}

/// Map a button element id to an action
pub fn action_for_button(id: &str) -> Option<Action> {
    match id {
        "start-btn" => Some(Action::Start),
        "restart-btn" => Some(Action::Restart),
        "fire-btn" => Some(Action::Fire),
        "mute-btn" => Some(Action::ToggleMute),
        _ => None,
    }
}

/// Button ids the web entry point wires up
pub const BUTTON_IDS: [&str; 4] = ["start-btn", "restart-btn", "fire-btn", "mute-btn"];
