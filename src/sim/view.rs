//! Renderer-facing snapshot of a frame
//!
//! Flat, serializable copy of exactly what a host needs to draw: ball, paddle,
//! bricks, score and phase. Hosts that cross a language boundary (the wasm
//! bridge) send this as JSON.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub row: u32,
    pub column: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub ball: BallView,
    pub paddle: PaddleView,
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub total_bricks: u32,
    pub phase: GamePhase,
}

impl From<&GameState> for FrameView {
    fn from(state: &GameState) -> Self {
        Self {
            ball: BallView {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
            },
            paddle: PaddleView {
                x: state.paddle.pos.x,
                y: state.paddle.pos.y,
                width: state.paddle.width,
                height: state.paddle.height,
            },
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    row: b.row,
                    column: b.column,
                    x: b.pos.x,
                    y: b.pos.y,
                    width: b.width,
                    height: b.height,
                    alive: b.alive,
                })
                .collect(),
            score: state.score,
            total_bricks: state.total_bricks(),
            phase: state.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_view_mirrors_state() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.bricks[9].alive = false;
        state.score = 1;

        let view = FrameView::from(&state);
        assert_eq!(view.ball.x, 400.0);
        assert_eq!(view.ball.radius, 10.0);
        assert_eq!(view.paddle.y, 570.0);
        assert_eq!(view.bricks.len(), 40);
        assert!(!view.bricks[9].alive);
        assert_eq!((view.bricks[9].row, view.bricks[9].column), (1, 1));
        assert_eq!(view.score, 1);
        assert_eq!(view.total_bricks, 40);
    }

    #[test]
    fn test_view_json_shape() {
        let state = GameState::new(Config::default()).unwrap();
        let json: serde_json::Value = serde_json::to_value(FrameView::from(&state)).unwrap();

        assert_eq!(json["phase"], "Idle");
        assert_eq!(json["paddle"]["width"], 100.0);
        assert_eq!(json["bricks"][0]["alive"], true);
        assert_eq!(json["bricks"].as_array().map(|b| b.len()), Some(40));
    }
}
