//! Collision detection for axis-aligned geometry
//!
//! All checks are pure boolean guards over the current ball/paddle/brick
//! positions. Wall and ceiling checks look one tick ahead (`pos + vel`) and
//! account for the ball radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Strict containment: points on the border are outside
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// How the ball relates to the paddle this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball is not in the paddle's vertical band
    Clear,
    /// Ball overlaps the paddle and should bounce
    Deflect,
    /// Ball is level with the paddle but beside it
    Missed,
}

/// Would the next step carry the ball through the left or right wall?
pub fn crosses_side_wall(ball: &Ball, board_width: f32) -> bool {
    let next_x = ball.projected().x;
    next_x > board_width - ball.radius || next_x < ball.radius
}

/// Would the next step carry the ball through the top edge?
pub fn crosses_ceiling(ball: &Ball) -> bool {
    ball.projected().y < ball.radius
}

/// Classify the ball against the paddle using the ball's full extent
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> PaddleContact {
    let in_band = ball.bottom() > paddle.pos.y && ball.top() < paddle.bottom();
    if !in_band {
        return PaddleContact::Clear;
    }

    let in_span = ball.right() > paddle.pos.x && ball.left() < paddle.right();
    if in_span {
        PaddleContact::Deflect
    } else {
        PaddleContact::Missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: 10.0,
        }
    }

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 570.0),
            width: 100.0,
            height: 20.0,
            step: 7.0,
        }
    }

    #[test]
    fn test_rect_contains_point_is_strict() {
        let rect = Rect::new(Vec2::new(30.0, 30.0), Vec2::new(75.0, 20.0));
        assert!(rect.contains_point(Vec2::new(60.0, 40.0)));
        // Borders don't count
        assert!(!rect.contains_point(Vec2::new(30.0, 40.0)));
        assert!(!rect.contains_point(Vec2::new(105.0, 40.0)));
        assert!(!rect.contains_point(Vec2::new(60.0, 50.0)));
        assert!(!rect.contains_point(Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn test_side_walls() {
        // Moving right, next step reaches 795 > 790
        assert!(crosses_side_wall(&ball_at(790.0, 300.0, 5.0, 5.0), 800.0));
        // Next step lands exactly on the limit: not crossing yet
        assert!(!crosses_side_wall(&ball_at(785.0, 300.0, 5.0, 5.0), 800.0));
        // Moving left into the left wall
        assert!(crosses_side_wall(&ball_at(12.0, 300.0, -5.0, 5.0), 800.0));
        assert!(!crosses_side_wall(&ball_at(400.0, 300.0, -5.0, 5.0), 800.0));
    }

    #[test]
    fn test_ceiling() {
        assert!(crosses_ceiling(&ball_at(400.0, 12.0, 5.0, -5.0)));
        assert!(!crosses_ceiling(&ball_at(400.0, 15.0, 5.0, -5.0)));
        // Moving down is never a ceiling hit
        assert!(!crosses_ceiling(&ball_at(400.0, 12.0, 5.0, 5.0)));
    }

    #[test]
    fn test_paddle_contact() {
        let paddle = paddle_at(350.0);

        // Resting exactly on top is not an overlap
        assert_eq!(
            paddle_contact(&ball_at(400.0, 560.0, 5.0, 5.0), &paddle),
            PaddleContact::Clear
        );
        assert_eq!(
            paddle_contact(&ball_at(400.0, 565.0, 5.0, 5.0), &paddle),
            PaddleContact::Deflect
        );
        // Edge of the ball clips the paddle corner
        assert_eq!(
            paddle_contact(&ball_at(345.0, 565.0, 5.0, 5.0), &paddle),
            PaddleContact::Deflect
        );
        assert_eq!(
            paddle_contact(&ball_at(600.0, 565.0, 5.0, 5.0), &paddle),
            PaddleContact::Missed
        );
        assert_eq!(
            paddle_contact(&ball_at(100.0, 300.0, 5.0, 5.0), &paddle),
            PaddleContact::Clear
        );
    }
}
