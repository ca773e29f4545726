//! HUD text and DOM panels
//!
//! Text formatting is platform-free; the `Hud` adapter that writes it into
//! the page only exists on the web.

const HEART: &str = "❤️";

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Lives as a row of hearts (never negative)
pub fn lives_text(lives: i64) -> String {
    let hearts = usize::try_from(lives.max(0)).unwrap_or(0);
    format!("Lives: {}", HEART.repeat(hearts))
}

pub fn final_score_text(score: u64) -> String {
    format!("Final score: {}", score)
}

/// Glyph for the mute button
pub fn mute_glyph(muted: bool) -> &'static str {
    if muted { "🔇" } else { "🔊" }
}

#[cfg(target_arch = "wasm32")]
pub use web::Hud;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use crate::sim::{GamePhase, GameState};

    /// Element ids the page is expected to provide
    pub mod ids {
        pub const SCORE: &str = "scoreDisplay";
        pub const LIVES: &str = "livesDisplay";
        pub const START_SCREEN: &str = "start-screen";
        pub const GAME_OVER: &str = "game-over";
        pub const FINAL_SCORE: &str = "final-score";
        pub const FIRE_BTN: &str = "fire-btn";
        pub const MUTE_BTN: &str = "mute-btn";
    }

    /// Writes session state into the page's HUD elements.
    ///
    /// Missing elements are skipped silently.
    pub struct Hud {
        document: Document,
    }

    impl Hud {
        pub fn new(document: Document) -> Self {
            Self { document }
        }

        fn element(&self, id: &str) -> Option<HtmlElement> {
            self.document
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.element(id) {
                el.set_inner_text(text);
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            if let Some(el) = self.element(id) {
                let _ = el.style().set_property("display", display);
            }
        }

        /// Refresh the score and lives slots
        pub fn update_stats(&self, state: &GameState) {
            self.set_text(ids::SCORE, &super::score_text(state.board.score));
            self.set_text(ids::LIVES, &super::lives_text(i64::from(state.board.lives)));
        }

        /// Show the panels that belong to the current phase
        pub fn update_panels(&self, state: &GameState) {
            match state.phase {
                GamePhase::Idle => {
                    self.set_display(ids::START_SCREEN, "block");
                    self.set_display(ids::GAME_OVER, "none");
                    self.set_display(ids::FIRE_BTN, "none");
                }
                GamePhase::Running => {
                    self.set_display(ids::START_SCREEN, "none");
                    self.set_display(ids::GAME_OVER, "none");
                    self.set_display(ids::FIRE_BTN, "flex");
                }
                GamePhase::GameOver => {
                    self.set_text(ids::FINAL_SCORE, &super::final_score_text(state.board.score));
                    self.set_display(ids::FIRE_BTN, "none");
                    self.set_display(ids::GAME_OVER, "block");
                }
            }
        }

        pub fn set_muted(&self, muted: bool) {
            self.set_text(ids::MUTE_BTN, super::mute_glyph(muted));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lives_are_hearts() {
        assert_eq!(lives_text(3), "Lives: ❤️❤️❤️");
        assert_eq!(lives_text(0), "Lives: ");
    }

    #[test]
    fn test_negative_lives_clamp_to_zero() {
        assert_eq!(lives_text(-2), "Lives: ");
    }

    #[test]
    fn test_score_texts() {
        assert_eq!(score_text(300), "Score: 300");
        assert_eq!(final_score_text(1200), "Final score: 1200");
    }

    #[test]
    fn test_mute_glyph() {
        assert_eq!(mute_glyph(true), "🔇");
        assert_eq!(mute_glyph(false), "🔊");
    }
}
