//! Session state and core simulation types
//!
//! One `GameState` is one play session: it owns the pig, the arrow and wolf
//! lists, the scoreboard and the RNG. Platform code reads it and drains its
//! events, but only mutates it through the methods here and `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arrow::Arrow;
use super::pig::Pig;
use super::wolf::Wolf;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated
    Idle,
    /// Active gameplay
    Running,
    /// Lives ran out, waiting for a restart
    GameOver,
}

/// Things that happened during a tick or an input action.
///
/// The frontend maps these to sound cues and HUD refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A session (re)started with a fresh scoreboard
    SessionStarted,
    ArrowFired,
    BalloonPopped,
    /// A popped wolf began its fall
    WolfFalling,
    /// A popped wolf landed; carries the new score
    WolfScored { score: u64 },
    /// A buoyant wolf landed; carries the remaining lives
    PlayerHurt { lives: u8 },
    /// Lives reached zero; carries the final score
    GameOver { score: u64 },
}

/// Score and lives for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Never decreases within a session
    pub score: u64,
    /// Never increases within a session
    pub lives: u8,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            lives: crate::consts::START_LIVES,
        }
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub board: Scoreboard,
    /// Ticks simulated since the session started
    pub time_ticks: u64,
    pub pig: Pig,
    /// Live arrows in firing order
    pub arrows: Vec<Arrow>,
    /// Live wolves in spawn order
    pub wolves: Vec<Wolf>,
    /// Events not yet drained by the frontend
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let field = tuning.field();
        Self {
            seed,
            board: Scoreboard {
                score: 0,
                lives: tuning.start_lives,
            },
            tuning,
            phase: GamePhase::Idle,
            time_ticks: 0,
            pig: Pig::new(&field),
            arrows: Vec::new(),
            wolves: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start the first session. Only accepted from the start screen.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.begin_session();
        log::info!("Session started (seed {})", self.seed);
        true
    }

    /// Start over after a game over. Only accepted from `GameOver`.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.begin_session();
        log::info!("Session restarted");
        true
    }

    fn begin_session(&mut self) {
        self.board = Scoreboard {
            score: 0,
            lives: self.tuning.start_lives,
        };
        self.time_ticks = 0;
        self.pig = Pig::new(&self.tuning.field());
        self.arrows.clear();
        self.wolves.clear();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::SessionStarted);
    }

    /// Loose an arrow from the pig. Ignored unless running.
    pub fn fire(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.arrows.push(Arrow::new(self.pig.muzzle()));
        self.events.push(GameEvent::ArrowFired);
        true
    }

    /// Add a wolf at a random spot in the spawn band
    pub fn spawn_wolf(&mut self) {
        let wolf = Wolf::spawn(
            &mut self.rng,
            &self.tuning.field(),
            self.tuning.drift_range(),
        );
        log::debug!(
            "Wolf spawned at x={:.1} drift={:.2}",
            wolf.pos.x,
            wolf.drift_speed
        );
        self.wolves.push(wolf);
    }

    /// Ticks between spawns at the current score (checked every tick)
    pub fn spawn_interval(&self) -> u64 {
        if self.board.score > self.tuning.fast_spawn_score {
            self.tuning.fast_spawn_interval
        } else {
            self.tuning.spawn_interval
        }
    }

    /// Enter game over if the last life is gone. Returns true on transition.
    pub(crate) fn check_game_over(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.board.lives > 0 {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.board.score,
        });
        log::info!(
            "Game over: score {} after {} ticks",
            self.board.score,
            self.time_ticks
        );
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.board.score, 0);
        assert_eq!(state.board.lives, START_LIVES);
        assert!(state.arrows.is_empty());
        assert!(state.wolves.is_empty());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(1, Tuning::default());
        assert!(!state.restart());
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.start());
        assert_eq!(state.drain_events(), vec![GameEvent::SessionStarted]);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.fire();
        state.spawn_wolf();
        state.board.score = 700;
        state.board.lives = 0;
        state.time_ticks = 999;
        assert!(state.check_game_over());
        assert!(!state.fire());

        assert!(state.restart());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.board, Scoreboard::default());
        assert_eq!(state.time_ticks, 0);
        assert!(state.arrows.is_empty());
        assert!(state.wolves.is_empty());
        assert_eq!(state.pig.pos.y, FIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_fire_only_while_running() {
        let mut state = GameState::new(1, Tuning::default());
        assert!(!state.fire());
        assert!(state.arrows.is_empty());

        state.start();
        state.drain_events();
        assert!(state.fire());
        assert_eq!(state.arrows.len(), 1);
        assert_eq!(state.arrows[0].pos, state.pig.muzzle());
        assert_eq!(state.drain_events(), vec![GameEvent::ArrowFired]);
    }

    #[test]
    fn test_spawn_interval_threshold() {
        let mut state = GameState::new(1, Tuning::default());
        assert_eq!(state.spawn_interval(), 120);
        state.board.score = 500;
        assert_eq!(state.spawn_interval(), 120);
        state.board.score = 600;
        assert_eq!(state.spawn_interval(), 100);
    }

    #[test]
    fn test_game_over_needs_zero_lives() {
        let mut state = GameState::new(1, Tuning::default());
        state.start();
        state.board.lives = 1;
        assert!(!state.check_game_over());
        state.board.lives = 0;
        assert!(state.check_game_over());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.check_game_over());
    }
}
