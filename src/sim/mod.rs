//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per display refresh
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each entity list)
//! - No rendering or platform dependencies; side effects leave as `GameEvent`s

pub mod arrow;
pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod pig;
pub mod state;
pub mod tick;
pub mod wolf;

pub use arrow::Arrow;
pub use autopilot::Autopilot;
pub use collision::{arrow_hits_balloon, resolve_collisions};
pub use entity::{Entity, Field, TickContext, prune};
pub use pig::Pig;
pub use state::{GameEvent, GamePhase, GameState, Scoreboard};
pub use tick::{TickInput, tick};
pub use wolf::{Landing, Wolf};
