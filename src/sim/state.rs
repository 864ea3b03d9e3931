//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; the renderer and
//! HUD only read it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Lifecycle phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for Start (initial, and after Reset)
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// A side reached the win score; updates are frozen until Reset
    GameOver,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human, left paddle
    Player,
    /// Computer, right paddle
    Ai,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    Scored(Side),
    GameOver { winner: Side },
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const PLAYER_PADDLE: Color = Color::rgb(0x4C, 0xAF, 0x50);
    pub const AI_PADDLE: Color = Color::rgb(0xF4, 0x43, 0x36);
    pub const BALL: Color = Color::rgb(0xFF, 0xC1, 0x07);
    pub const DIVIDER: Color = Color::rgb(0x88, 0x88, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#4CAF50`
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The fixed-size play area. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Paddle {
    /// Paddle at horizontal position `x`, vertically centered in the field
    pub fn centered(x: f32, field: &Field, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, (field.height - PADDLE_HEIGHT) / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            color,
        }
    }

    /// Human paddle in its starting spot
    pub fn player(field: &Field) -> Self {
        Self::centered(PADDLE_MARGIN, field, Color::PLAYER_PADDLE)
    }

    /// AI paddle in its starting spot
    pub fn ai(field: &Field) -> Self {
        Self::centered(
            field.width - PADDLE_WIDTH - PADDLE_MARGIN,
            field,
            Color::AI_PADDLE,
        )
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    /// Keep the paddle fully inside the field vertically
    pub fn clamp_to(&mut self, field: &Field) {
        let max_y = (field.height - self.size.y).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// Move the paddle so its center sits at `y`, then clamp
    pub fn set_center_y(&mut self, y: f32, field: &Field) {
        self.pos.y = y - self.half_height();
        self.clamp_to(field);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// A fresh ball at the field center with a random serve
    pub fn serve<R: Rng>(field: &Field, rng: &mut R) -> Self {
        let vx = if rng.random_bool(0.5) {
            BALL_SPEED_X
        } else {
            -BALL_SPEED_X
        };
        let vy = BALL_SPIN_RANGE * (rng.random::<f32>() - 0.5);
        Self {
            pos: field.center(),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
            color: Color::BALL,
        }
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
}

/// Points for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub ai: u32,
}

impl Scores {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// The side that has reached the win score, player checked first
    pub fn winner(&self) -> Option<Side> {
        if self.player >= WIN_SCORE {
            Some(Side::Player)
        } else if self.ai >= WIN_SCORE {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Complete game state (deterministic given the RNG, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub phase: GamePhase,
    /// Human paddle
    pub left: Paddle,
    /// AI paddle
    pub right: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    /// Set once the match is decided, cleared on reset
    pub winner: Option<Side>,
    /// Simulation ticks run while Running
    pub time_ticks: u64,
}

impl GameState {
    /// Create an idle game in the initial layout
    pub fn new<R: Rng>(field: Field, rng: &mut R) -> Self {
        Self {
            field,
            phase: GamePhase::Idle,
            left: Paddle::player(&field),
            right: Paddle::ai(&field),
            ball: Ball::serve(&field, rng),
            scores: Scores::default(),
            winner: None,
            time_ticks: 0,
        }
    }

    /// Put both paddles and the ball back in the starting layout
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        self.left = Paddle::player(&self.field);
        self.right = Paddle::ai(&self.field);
        self.ball = Ball::serve(&self.field, rng);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
