//! Fixed-step simulation tick
//!
//! Advances the game by exactly one frame. Motion is measured in pixels per
//! tick, so there is no delta-time and no sub-stepping.

use super::collision::{PaddleContact, crosses_ceiling, crosses_side_wall, paddle_contact};
use super::state::{Controls, GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
    /// Edge-triggered: starts an idle game, otherwise resets
    pub start_or_reset: bool,
}

impl TickInput {
    pub fn controls(&self) -> Controls {
        Controls {
            left_held: self.left_held,
            right_held: self.right_held,
        }
    }
}

/// Advance the game state by one tick
///
/// Events produced during the tick are left in `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.start_or_reset {
        if state.phase == GamePhase::Idle {
            state.ball.follow_paddle(&state.paddle);
            state.start();
            state.events.push(GameEvent::Started);
            log::info!("Game started");
        } else {
            let was = state.phase;
            state.reset();
            state.events.push(GameEvent::Reset);
            log::info!("Game reset from {:?}", was);
        }
        return;
    }

    state.controls = input.controls();

    match state.phase {
        GamePhase::Idle => {
            // Ball rides on the paddle until launch
            state.ball.follow_paddle(&state.paddle);
        }
        GamePhase::Running => {
            state.time_ticks += 1;
            step_running(state);
        }
        GamePhase::Won | GamePhase::Lost => {}
    }
}

fn step_running(state: &mut GameState) {
    move_paddle(state);

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if crosses_side_wall(ball, state.config.board_width) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }

    if crosses_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::CeilingBounce);
    } else {
        match paddle_contact(ball, &state.paddle) {
            PaddleContact::Clear => {}
            PaddleContact::Deflect => {
                ball.vel.y = -ball.vel.y;
                // Lift the ball out so it can't stay embedded in the paddle
                ball.pos.y = state.paddle.pos.y - ball.radius;
                state.events.push(GameEvent::PaddleHit);
            }
            PaddleContact::Missed => {
                state.phase = GamePhase::Lost;
                state.events.push(GameEvent::Lost);
                log::info!(
                    "Game over: score {} of {} after {} ticks",
                    state.score,
                    state.total_bricks(),
                    state.time_ticks
                );
                return;
            }
        }
    }

    break_bricks(state);
}

/// Right takes priority; the guard decides whether to move at all and the
/// step never carries the paddle past an edge.
fn move_paddle(state: &mut GameState) {
    let max_x = state.paddle_max_x();
    let paddle = &mut state.paddle;

    if state.controls.right_held && paddle.right() < state.config.board_width {
        paddle.pos.x = (paddle.pos.x + paddle.step).min(max_x);
    } else if state.controls.left_held && paddle.pos.x > 0.0 {
        paddle.pos.x = (paddle.pos.x - paddle.step).max(0.0);
    }
}

/// Kill every live brick containing the ball center, then check for a win
fn break_bricks(state: &mut GameState) {
    let center = state.ball.pos;

    for brick in state.bricks.iter_mut().filter(|b| b.alive) {
        if brick.rect().contains_point(center) {
            brick.alive = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += 1;
            state.events.push(GameEvent::BrickDestroyed {
                row: brick.row,
                column: brick.column,
            });
            log::debug!(
                "Brick ({}, {}) destroyed, score {}",
                brick.row,
                brick.column,
                state.score
            );
        }
    }

    if state.score == state.config.total_bricks() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        log::info!("Board cleared in {} ticks", state.time_ticks);
    }
}
