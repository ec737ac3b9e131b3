//! Game configuration
//!
//! Fixed for the lifetime of a session. Loaded from JSON (any missing field
//! falls back to the default) and validated before a game is built from it.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot be used to build a game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("brick grid must have at least one row and one column ({rows}x{columns})")]
    EmptyGrid { rows: u32, columns: u32 },

    #[error("paddle width {paddle} does not fit on a board {board} wide")]
    PaddleTooWide { paddle: f32, board: f32 },

    #[error("brick grid spans {extent} along the {axis} axis but the board only allows {limit}")]
    GridOverflow {
        axis: &'static str,
        extent: f32,
        limit: f32,
    },

    #[error("ball of radius {radius} cannot start above the paddle")]
    NoRoomToServe { radius: f32 },

    #[error("ball speed {speed} would skip the {band}px paddle band in a single tick")]
    BallTooFast { speed: f32, band: f32 },

    #[error("brick grid of {rows}x{columns} exceeds the limit of {limit} bricks", limit = MAX_BRICKS)]
    TooManyBricks { rows: u32, columns: u32 },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Board, paddle, ball and brick-grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Board ===
    pub board_width: f32,
    pub board_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between paddle bottom and board bottom
    pub paddle_margin: f32,
    /// Horizontal distance per tick
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed; the ball launches at (+speed, -speed)
    pub ball_speed: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl Config {
    /// Total number of bricks (the winning score)
    pub fn total_bricks(&self) -> u32 {
        self.brick_rows.saturating_mul(self.brick_columns)
    }

    /// Vertical distance over which the ball overlaps the paddle's rows
    pub fn paddle_band(&self) -> f32 {
        self.paddle_height + 2.0 * self.ball_radius
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.board_height - self.paddle_height - self.paddle_margin
    }

    /// Right edge of the rightmost brick column
    pub fn grid_right(&self) -> f32 {
        self.brick_offset_left + self.brick_columns as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding
    }

    /// Bottom edge of the lowest brick row
    pub fn grid_bottom(&self) -> f32 {
        self.brick_offset_top + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding
    }

    /// Check construction preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_rows,
                columns: self.brick_columns,
            });
        }

        match self.brick_rows.checked_mul(self.brick_columns) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::TooManyBricks {
                    rows: self.brick_rows,
                    columns: self.brick_columns,
                });
            }
        }

        // Misses are only seen while the ball is level with the paddle
        if self.ball_speed >= self.paddle_band() {
            return Err(ConfigError::BallTooFast {
                speed: self.ball_speed,
                band: self.paddle_band(),
            });
        }

        if self.paddle_width > self.board_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                board: self.board_width,
            });
        }

        if self.grid_right() > self.board_width {
            return Err(ConfigError::GridOverflow {
                axis: "x",
                extent: self.grid_right(),
                limit: self.board_width,
            });
        }

        // Bricks must sit above the serve position so the ball starts clear of them
        let serve_top = self.paddle_y() - 2.0 * self.ball_radius;
        if serve_top < 0.0 {
            return Err(ConfigError::NoRoomToServe {
                radius: self.ball_radius,
            });
        }
        if self.grid_bottom() > serve_top {
            return Err(ConfigError::GridOverflow {
                axis: "y",
                extent: self.grid_bottom(),
                limit: serve_top,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
