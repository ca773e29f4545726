//! One simulation step per display refresh
//!
//! Core game loop that advances a session deterministically.

use super::collision::resolve_collisions;
use super::entity::{TickContext, prune};
use super::state::{GamePhase, GameState};

/// Input gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button on the title screen
    pub start: bool,
    /// Restart button on the game over panel
    pub restart: bool,
    /// Fire presses since the last tick
    pub fire: u32,
}

/// Apply input, then advance the session one tick if it is running.
///
/// Outside `Running` this only handles start/restart; every other call is a
/// no-op, so a finished session can be ticked safely until restarted.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.start();
    }
    if input.restart {
        state.restart();
    }
    for _ in 0..input.fire {
        state.fire();
    }

    if state.phase != GamePhase::Running {
        return;
    }

    TickContext::new(&state.tuning, &mut state.board, &mut state.events)
        .advance(&mut state.pig);

    state.time_ticks += 1;
    // Cadence is re-evaluated every tick from the current score
    if state.time_ticks % state.spawn_interval() == 0 {
        state.spawn_wolf();
    }

    let mut ctx = TickContext::new(&state.tuning, &mut state.board, &mut state.events);
    for arrow in &mut state.arrows {
        ctx.advance(arrow);
    }
    prune(&mut state.arrows);

    for wolf in &mut state.wolves {
        ctx.advance(wolf);
    }
    prune(&mut state.wolves);

    resolve_collisions(&mut state.arrows, &mut state.wolves, &mut state.events);

    state.check_game_over();
}
