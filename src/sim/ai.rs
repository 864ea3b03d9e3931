//! Opponent paddle controller

use super::state::{Ball, Field, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_SPEED};

/// Step the AI paddle one tick toward the ball's height.
///
/// Inside the dead zone around the paddle center the paddle holds still.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, field: &Field) {
    let center = paddle.center_y();
    if ball.pos.y < center - AI_DEAD_ZONE {
        paddle.pos.y -= AI_SPEED;
    } else if ball.pos.y > center + AI_DEAD_ZONE {
        paddle.pos.y += AI_SPEED;
    }
    paddle.clamp_to(field);
}
