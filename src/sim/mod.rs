//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (velocities are pixels per tick)
//! - Stable iteration order (row-major brick grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{PaddleContact, Rect, crosses_ceiling, crosses_side_wall, paddle_contact};
pub use state::{Ball, Brick, Controls, GameEvent, GamePhase, GameState, Paddle, build_bricks};
pub use tick::{TickInput, tick};
pub use view::{BallView, BrickView, FrameView, PaddleView};
