//! Canvas Pong - single-player Pong against an AI paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, AI)
//! - `renderer`: Drawing the field onto a 2D surface
//! - `ui`: Score display, game-over banner and localized text
//! - `app`: Frame driver owning the game state
//! - `platform`: Browser bindings (canvas, DOM)

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use app::App;
pub use ui::Locale;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Speeds below are in units per step.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Vertical ball speed at the very edge of a paddle
    pub const PADDLE_BOUNCE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_X: f32 = 4.0;
    /// Width of the symmetric range the serve's vertical speed is drawn from
    pub const BALL_SPIN_RANGE: f32 = 2.0;

    /// AI paddle
    pub const AI_SPEED: f32 = 3.0;
    pub const AI_DEAD_ZONE: f32 = 8.0;

    /// First side to reach this many points wins
    pub const WIN_SCORE: u32 = 5;

    /// Center divider dash pattern (on, off)
    pub const DIVIDER_DASH: [f64; 2] = [8.0, 8.0];
}
