//! Brick Breaker - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Board, paddle, ball and brick-grid configuration
//! - `input`: Thread-safe input channel fed by the host's key events
//! - `game`: Engine that owns the state and advances it once per frame
//! - `web`: WebAssembly bridge (wasm32 only)

pub mod config;
pub mod game;
pub mod input;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{Config, ConfigError};
pub use game::Game;
pub use input::{InputChannel, Key};

/// Default game configuration constants
pub mod consts {
    /// Board (viewport) dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle's bottom edge and the board's bottom edge
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Horizontal distance covered per tick while a direction is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis speed, pixels per tick
    pub const BALL_SPEED: f32 = 5.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Largest brick count a config may ask for
    pub const MAX_BRICKS: u32 = 10_000;
}
