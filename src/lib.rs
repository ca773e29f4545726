//! Pig Archer - a pig on a rope shoots down balloon-carrying wolves
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `renderer`: Draw primitives and scene drawing (2D canvas on the web)
//! - `audio`: Sound cues driven by simulation events
//! - `ui`: HUD text and DOM panels
//! - `platform`: Input binding
//! - `tuning` / `settings` / `config`: Data-driven game balance and preferences

pub mod audio;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use config::GameConfig;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (logical canvas units, one step per tick)
pub mod consts {
    /// Default play field dimensions
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Pig hangs on a rope at a fixed x and bobs up and down
    pub const PIG_X: f32 = 60.0;
    pub const PIG_SIZE: f32 = 40.0;
    pub const PIG_SPEED: f32 = 3.0;

    /// Arrow body and horizontal speed
    pub const ARROW_WIDTH: f32 = 20.0;
    pub const ARROW_HEIGHT: f32 = 5.0;
    pub const ARROW_SPEED: f32 = 8.0;

    /// Wolf body
    pub const WOLF_WIDTH: f32 = 40.0;
    pub const WOLF_HEIGHT: f32 = 50.0;
    /// Wolves appear just under the tree branch
    pub const WOLF_START_Y: f32 = 90.0;
    /// Fall speed once the balloon is gone (faster than any drift speed)
    pub const WOLF_FALL_SPEED: f32 = 8.0;
    /// Drift speed range while buoyant (half-open)
    pub const WOLF_DRIFT_MIN: f32 = 0.3;
    pub const WOLF_DRIFT_MAX: f32 = 1.1;
    /// Spawn band: no wolves in the leftmost strip or the right margin
    pub const WOLF_SPAWN_LEFT: f32 = 400.0;
    pub const WOLF_SPAWN_RIGHT_MARGIN: f32 = 60.0;

    /// Balloon geometry, center sits above the wolf's top edge
    pub const BALLOON_RADIUS: f32 = 28.0;
    pub const BALLOON_OFFSET_Y: f32 = 15.0;
    /// Extra slack added to the balloon radius for hit tests
    pub const HIT_PADDING: f32 = 10.0;

    /// Points for a popped wolf hitting the ground
    pub const WOLF_REWARD: u64 = 100;
    pub const START_LIVES: u8 = 5;

    /// Spawn cadence in ticks
    pub const SPAWN_INTERVAL: u64 = 120;
    pub const FAST_SPAWN_INTERVAL: u64 = 100;
    /// Score above which the fast cadence applies
    pub const FAST_SPAWN_SCORE: u64 = 500;
}
