//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per fixed timestep
//! - Randomness only through the injected RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, bounce_speed, reflect_off_walls, scoring_side};
pub use input::pointer_moved;
pub use state::{Ball, Color, Field, GameEvent, GamePhase, GameState, Paddle, Scores, Side};
pub use tick::{reset, start, tick};
