//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here. The state is only
//! mutated by [`tick`](super::tick::tick) and by full reconstruction on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::{Config, ConfigError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rests on the paddle, waiting for a start request
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Every brick destroyed
    Won,
    /// Ball fell past the paddle
    Lost,
}

impl GamePhase {
    /// Won and Lost only leave via an external reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Something that happened during the last tick, for sound/UI hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start request accepted, ball is in play
    Started,
    /// Ball reflected off the left or right wall
    WallBounce,
    /// Ball reflected off the top edge
    CeilingBounce,
    /// Ball reflected off the paddle
    PaddleHit,
    /// A brick was destroyed
    BrickDestroyed { row: u32, column: u32 },
    /// Last brick destroyed
    Won,
    /// Ball got past the paddle
    Lost,
    /// State rebuilt from the config
    Reset,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball resting on top of the paddle, ready to launch up and to the right
    pub fn new(config: &Config, paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
        };
        ball.follow_paddle(paddle);
        ball
    }

    /// Snap to the paddle's top center
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Position after one more tick at the current velocity
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per tick
    pub step: f32,
}

impl Paddle {
    /// Centered horizontally, `paddle_margin` above the bottom edge
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                (config.board_width - config.paddle_width) / 2.0,
                config.paddle_y(),
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            step: config.paddle_step,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// A brick in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub column: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Lay out the full grid, row-major, all bricks alive
pub fn build_bricks(config: &Config) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(config.total_bricks() as usize);
    for row in 0..config.brick_rows {
        for column in 0..config.brick_columns {
            let x = column as f32 * (config.brick_width + config.brick_padding)
                + config.brick_offset_left;
            let y =
                row as f32 * (config.brick_height + config.brick_padding) + config.brick_offset_top;
            bricks.push(Brick {
                row,
                column,
                pos: Vec2::new(x, y),
                width: config.brick_width,
                height: config.brick_height,
                alive: true,
            });
        }
    }
    bricks
}

/// Directional input held during the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    pub left_held: bool,
    pub right_held: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Validated configuration the state was built from
    pub config: Config,
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks advanced since the last reset
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid
    pub bricks: Vec<Brick>,
    /// Input applied on the most recent tick
    pub controls: Controls,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the config and build the initial state
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config, &paddle);
        let bricks = build_bricks(&config);
        Self {
            config,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            paddle,
            ball,
            bricks,
            controls: Controls::default(),
            events: Vec::new(),
        }
    }

    /// Rebuild everything from the config and return to Idle
    ///
    /// The replacement is constructed in full before it is swapped in, so a
    /// reader never sees a half-reset state.
    pub fn reset(&mut self) {
        let fresh = Self::build(self.config.clone());
        *self = fresh;
    }

    /// Idle -> Running. Returns false if the game is not idle.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        true
    }

    /// Score needed to win
    pub fn total_bricks(&self) -> u32 {
        self.config.total_bricks()
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Brick at a grid cell
    pub fn brick(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.config.brick_rows || column >= self.config.brick_columns {
            return None;
        }
        self.bricks
            .get((row * self.config.brick_columns + column) as usize)
    }

    /// Largest x the paddle may occupy
    pub fn paddle_max_x(&self) -> f32 {
        self.config.board_width - self.paddle.width
    }
}
