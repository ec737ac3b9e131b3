//! Demo controller
//!
//! Plays the game by holding left or right to keep the paddle under the ball.
//! It only produces the same directional flags a keyboard would.

use super::state::{Controls, GamePhase, GameState};

/// Choose which direction to hold this tick
pub fn steer(state: &GameState) -> Controls {
    if state.phase != GamePhase::Running {
        return Controls::default();
    }

    let ball = &state.ball;
    // Aim for where the ball is heading, not where it is
    let target = ball.pos.x + ball.vel.x;
    let center = state.paddle.center_x();
    // Close enough; another step would overshoot
    let dead_zone = state.paddle.step / 2.0;

    Controls {
        left_held: center > target + dead_zone,
        right_held: center < target - dead_zone,
    }
}
