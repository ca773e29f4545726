//! Data-driven game balance
//!
//! Defaults mirror `consts`. Any field may be overridden from the page's
//! JSON config block; missing fields keep their defaults.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Field;

/// Fastest allowed buoyant drift; a falling wolf must always be faster
const MAX_DRIFT: f32 = WOLF_FALL_SPEED - 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical play field width
    pub field_width: f32,
    /// Logical play field height (the lane the pig bobs in)
    pub field_height: f32,
    pub start_lives: u8,
    /// Ticks between wolf spawns
    pub spawn_interval: u64,
    /// Ticks between spawns once the score passes `fast_spawn_score`
    pub fast_spawn_interval: u64,
    pub fast_spawn_score: u64,
    /// Points for each popped wolf that lands
    pub wolf_reward: u64,
    /// Buoyant drift speed range, `[min, max)`
    pub wolf_drift_min: f32,
    pub wolf_drift_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            start_lives: START_LIVES,
            spawn_interval: SPAWN_INTERVAL,
            fast_spawn_interval: FAST_SPAWN_INTERVAL,
            fast_spawn_score: FAST_SPAWN_SCORE,
            wolf_reward: WOLF_REWARD,
            wolf_drift_min: WOLF_DRIFT_MIN,
            wolf_drift_max: WOLF_DRIFT_MAX,
        }
    }
}

impl Tuning {
    pub fn field(&self) -> Field {
        Field {
            width: self.field_width,
            height: self.field_height,
        }
    }

    pub fn drift_range(&self) -> Range<f32> {
        self.wolf_drift_min..self.wolf_drift_max
    }

    /// Repair values that would break the simulation.
    ///
    /// The field must fit the pig and leave a non-empty wolf spawn band, spawn
    /// intervals must be non-zero, and drift must stay slower than the fall.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let min_width = WOLF_SPAWN_LEFT + WOLF_SPAWN_RIGHT_MARGIN + WOLF_WIDTH;
        if !self.field_width.is_finite() {
            log::warn!("field_width {} is not finite, using default", self.field_width);
            self.field_width = defaults.field_width;
        } else if self.field_width < min_width {
            log::warn!(
                "field_width {} too narrow, using {}",
                self.field_width,
                min_width
            );
            self.field_width = min_width;
        }
        let min_height = WOLF_START_Y + WOLF_HEIGHT + PIG_SIZE;
        if !self.field_height.is_finite() {
            log::warn!("field_height {} is not finite, using default", self.field_height);
            self.field_height = defaults.field_height;
        } else if self.field_height < min_height {
            log::warn!(
                "field_height {} too short, using {}",
                self.field_height,
                min_height
            );
            self.field_height = min_height;
        }
        if self.start_lives == 0 {
            self.start_lives = defaults.start_lives;
        }
        if self.spawn_interval == 0 {
            self.spawn_interval = defaults.spawn_interval;
        }
        if self.fast_spawn_interval == 0 {
            self.fast_spawn_interval = defaults.fast_spawn_interval;
        }
        if !self.wolf_drift_min.is_finite() || !self.wolf_drift_max.is_finite() {
            self.wolf_drift_min = defaults.wolf_drift_min;
            self.wolf_drift_max = defaults.wolf_drift_max;
        }
        self.wolf_drift_min = self.wolf_drift_min.clamp(0.0, MAX_DRIFT);
        self.wolf_drift_max = self.wolf_drift_max.clamp(0.0, MAX_DRIFT);
        if self.wolf_drift_max < self.wolf_drift_min {
            std::mem::swap(&mut self.wolf_drift_min, &mut self.wolf_drift_max);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.start_lives, 5);
        assert_eq!(t.spawn_interval, 120);
        assert_eq!(t.fast_spawn_interval, 100);
        assert_eq!(t.fast_spawn_score, 500);
        assert_eq!(t.wolf_reward, 100);
        assert_eq!(t.drift_range(), 0.3..1.1);
        assert_eq!(t.clone().sanitized(), t);
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let t = Tuning {
            field_width: 100.0,
            field_height: 100.0,
            start_lives: 0,
            spawn_interval: 0,
            fast_spawn_interval: 0,
            wolf_drift_min: 3.0,
            wolf_drift_max: -1.0,
            ..Tuning::default()
        }
        .sanitized();

        assert_eq!(t.field_width, 500.0);
        assert_eq!(t.field_height, 180.0);
        assert_eq!(t.start_lives, START_LIVES);
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
        assert_eq!(t.fast_spawn_interval, FAST_SPAWN_INTERVAL);
        assert_eq!(t.wolf_drift_min, 0.0);
        assert_eq!(t.wolf_drift_max, 3.0);
    }

    #[test]
    fn test_sanitize_replaces_non_finite_values() {
        let t = Tuning {
            field_width: f32::INFINITY,
            field_height: f32::NAN,
            wolf_drift_min: f32::NEG_INFINITY,
            wolf_drift_max: 1.0,
            ..Tuning::default()
        }
        .sanitized();

        assert_eq!(t.field_width, FIELD_WIDTH);
        assert_eq!(t.field_height, FIELD_HEIGHT);
        assert_eq!(t.drift_range(), WOLF_DRIFT_MIN..WOLF_DRIFT_MAX);
    }

    #[test]
    fn test_out_of_range_json_number_still_spawns() {
        let config = crate::GameConfig::from_json(r#"{ "tuning": { "field_width": 1e39 } }"#)
            .unwrap();
        assert_eq!(config.tuning.field_width, FIELD_WIDTH);

        let mut state = crate::sim::GameState::new(8, config.tuning);
        state.start();
        for _ in 0..3 {
            state.spawn_wolf();
        }
        assert_eq!(state.wolves.len(), 3);
    }

    #[test]
    fn test_drift_stays_below_fall_speed() {
        let t = Tuning {
            wolf_drift_min: 8.0,
            wolf_drift_max: 50.0,
            ..Tuning::default()
        }
        .sanitized();

        assert!(t.wolf_drift_min < WOLF_FALL_SPEED);
        assert!(t.wolf_drift_max < WOLF_FALL_SPEED);
    }
}
