//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is tested as its bounding box against
//! the field walls and the paddle rectangles.

use super::state::{Ball, Field, Paddle, Side};
use crate::consts::PADDLE_BOUNCE_SPEED;

/// Flip the ball's vertical velocity if it touches the top or bottom wall.
///
/// The new velocity always points back into the field, so a ball that is
/// still overlapping a wall on the next tick does not flip again.
pub fn reflect_off_walls(ball: &mut Ball, field: &Field) -> bool {
    if ball.top() <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.bottom() >= field.height {
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}

/// Whether the ball's vertical extent overlaps the paddle's
#[inline]
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.top() && ball.top() <= paddle.bottom()
}

/// Whether the ball has reached the face of `side`'s paddle
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let crossed = match side {
        Side::Player => ball.left() <= paddle.right(),
        Side::Ai => ball.right() >= paddle.left(),
    };
    crossed && overlaps_vertically(ball, paddle)
}

/// Vertical speed after a paddle hit.
///
/// Proportional to how far from the paddle center the ball struck: center hits
/// come off flat, edge hits steep. The offset is capped at one half-height so
/// the result stays within `±PADDLE_BOUNCE_SPEED`.
pub fn bounce_speed(ball_y: f32, paddle: &Paddle) -> f32 {
    let offset = (ball_y - paddle.center_y()) / paddle.half_height();
    PADDLE_BOUNCE_SPEED * offset.clamp(-1.0, 1.0)
}

/// Resolve a hit against `side`'s paddle.
///
/// Snaps the ball onto the paddle face, reverses its horizontal direction and
/// re-aims it vertically. Returns whether a hit happened.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !touches_paddle(ball, paddle, side) {
        return false;
    }
    ball.pos.x = match side {
        Side::Player => paddle.right() + ball.radius,
        Side::Ai => paddle.left() - ball.radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = bounce_speed(ball.pos.y, paddle);
    true
}

/// The side that scores if the ball has completely left the field
pub fn scoring_side(ball: &Ball, field: &Field) -> Option<Side> {
    if ball.right() < 0.0 {
        Some(Side::Ai)
    } else if ball.left() > field.width {
        Some(Side::Player)
    } else {
        None
    }
}
