//! Field rendering
//!
//! [`render`] walks the game state and issues draw calls against a
//! [`Surface`]. In the browser the surface is a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::DIVIDER_DASH;
use crate::sim::{Color, GameState, Paddle};

/// Minimal 2D drawing surface
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    /// Stroke a straight line with an (on, off) dash pattern
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: [f64; 2], color: Color);
}

/// Draw the whole field. Reads `state` only.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    let w = state.field.width as f64;
    let h = state.field.height as f64;

    surface.clear_rect(0.0, 0.0, w, h);
    surface.dashed_line((w / 2.0, 0.0), (w / 2.0, h), DIVIDER_DASH, Color::DIVIDER);

    draw_paddle(&state.left, surface);
    draw_paddle(&state.right, surface);

    let ball = &state.ball;
    surface.fill_circle(
        ball.pos.x as f64,
        ball.pos.y as f64,
        ball.radius as f64,
        ball.color,
    );
}

fn draw_paddle(paddle: &Paddle, surface: &mut impl Surface) {
    surface.fill_rect(
        paddle.pos.x as f64,
        paddle.pos.y as f64,
        paddle.size.x as f64,
        paddle.size.y as f64,
        paddle.color,
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::{Field, GamePhase};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A draw call captured by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(f64, f64, f64, f64),
        Rect(f64, f64, f64, f64, Color),
        Circle(f64, f64, f64, Color),
        Dashed((f64, f64), (f64, f64), [f64; 2], Color),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(DrawCall::Clear(x, y, w, h));
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
            self.calls.push(DrawCall::Rect(x, y, w, h, color));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
            self.calls.push(DrawCall::Circle(x, y, radius, color));
        }

        fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), dash: [f64; 2], color: Color) {
            self.calls.push(DrawCall::Dashed(from, to, dash, color));
        }
    }

    #[test]
    fn test_render_initial_frame() {
        let mut rng = Pcg32::seed_from_u64(1);
        let state = GameState::new(Field::new(800.0, 500.0), &mut rng);
        let mut surface = RecordingSurface::default();

        render(&state, &mut surface);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear(0.0, 0.0, 800.0, 500.0),
                DrawCall::Dashed((400.0, 0.0), (400.0, 500.0), [8.0, 8.0], Color::DIVIDER),
                DrawCall::Rect(10.0, 210.0, 10.0, 80.0, Color::PLAYER_PADDLE),
                DrawCall::Rect(780.0, 210.0, 10.0, 80.0, Color::AI_PADDLE),
                DrawCall::Circle(400.0, 250.0, 8.0, Color::BALL),
            ]
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = GameState::new(Field::new(640.0, 480.0), &mut rng);
        state.phase = GamePhase::GameOver;
        let before = serde_json::to_string(&state).unwrap();

        render(&state, &mut RecordingSurface::default());

        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }
}
