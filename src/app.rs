//! Frame driver
//!
//! [`App`] owns the game state and the RNG. The platform layer forwards input
//! callbacks to it and calls [`App::frame`] once per display refresh.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{Surface, render};
use crate::sim::{self, Field, GameEvent, GamePhase, GameState, Side};
use crate::ui::{Hud, Locale, update_hud};

pub struct App {
    state: GameState,
    rng: Pcg32,
    locale: Locale,
    accumulator: f32,
    last_time: Option<f64>,
    stopped: bool,
}

impl App {
    pub fn new(field: Field, seed: u64, locale: Locale) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(field, &mut rng);
        Self {
            state,
            rng,
            locale,
            accumulator: 0.0,
            last_time: None,
            stopped: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Start button
    pub fn start(&mut self) {
        if sim::start(&mut self.state) {
            log::info!("Game started");
        } else if self.state.phase == GamePhase::GameOver {
            log::info!("Start ignored: game over, reset first");
        }
    }

    /// Reset button
    pub fn reset(&mut self) {
        sim::reset(&mut self.state, &mut self.rng);
        self.accumulator = 0.0;
        log::info!("Game reset");
    }

    /// Pointer moved to `y` (field units from the top edge)
    pub fn pointer_moved(&mut self, y: f32) {
        sim::pointer_moved(&mut self.state, y);
    }

    /// Run as many fixed steps as `dt` seconds cover
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(sim::tick(&mut self.state, &mut self.rng));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop time we could not catch up on rather than carry it forward
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        for event in &events {
            self.log_event(event);
        }
        events
    }

    /// One animation frame: update, then draw. `time` is the frame timestamp
    /// in milliseconds.
    ///
    /// Returns whether the caller should schedule another frame.
    pub fn frame(&mut self, time: f64, surface: &mut impl Surface, hud: &mut impl Hud) -> bool {
        let dt = match self.last_time {
            Some(last) => ((time - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time);

        self.update(dt);
        render(&self.state, surface);
        update_hud(&self.state, self.locale, hud);

        !self.stopped
    }

    /// Ask the loop to stop after the current frame
    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!("Frame loop stopping");
        }
        self.stopped = true;
    }

    /// Undo [`App::stop`] when the page comes back from the back/forward
    /// cache. Returns whether the caller must schedule a new frame.
    pub fn resume(&mut self) -> bool {
        if !self.stopped {
            return false;
        }
        self.stopped = false;
        // Time spent hidden is not simulated
        self.last_time = None;
        self.accumulator = 0.0;
        log::info!("Frame loop resuming");
        true
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn log_event(&self, event: &GameEvent) {
        match event {
            GameEvent::WallBounce => log::debug!("Wall bounce"),
            GameEvent::PaddleHit(side) => log::debug!("Paddle hit: {:?}", side),
            GameEvent::Scored(side) => {
                let scores = self.state.scores;
                log::info!(
                    "{:?} scored ({} - {})",
                    side,
                    scores.player,
                    scores.ai
                );
            }
            GameEvent::GameOver { winner } => match winner {
                Side::Player => log::info!("Game over: player wins"),
                Side::Ai => log::info!("Game over: AI wins"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{DrawCall, RecordingSurface};
    use crate::sim::Scores;
    use crate::ui::tests::RecordingHud;
    use glam::Vec2;

    fn app() -> App {
        App::new(Field::new(800.0, 500.0), 42, Locale::Chinese)
    }

    #[test]
    fn test_update_runs_fixed_steps() {
        let mut app = app();
        app.start();
        app.state.ball.vel = Vec2::new(4.0, 0.0);
        let start = app.state.ball.pos;

        // Three steps' worth of time
        app.update(SIM_DT * 3.0 + SIM_DT * 0.5);
        assert_eq!(app.state.time_ticks, 3);
        assert_eq!(app.state.ball.pos, start + Vec2::new(12.0, 0.0));

        // A long stall is capped
        app.update(5.0);
        assert_eq!(app.state.time_ticks, 3 + MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_frame_renders_while_idle() {
        let mut app = app();
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();

        assert!(app.frame(0.0, &mut surface, &mut hud));
        assert_eq!(app.state.time_ticks, 0);
        assert!(matches!(surface.calls.first(), Some(DrawCall::Clear(..))));
        assert_eq!(surface.calls.len(), 5);
        assert_eq!(hud.player, "玩家: 0");
        assert_eq!(hud.ai, "AI: 0");
        assert_eq!(hud.banner, None);
    }

    #[test]
    fn test_frame_advances_when_running() {
        let mut app = app();
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        app.start();
        let start = app.state.ball.pos;

        app.frame(1000.0, &mut surface, &mut hud);
        assert_eq!(app.state.time_ticks, 1);
        assert_ne!(app.state.ball.pos, start);
    }

    #[test]
    fn test_game_over_shows_banner_and_freezes() {
        let mut app = app();
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        app.start();
        app.state.scores = Scores { player: 4, ai: 0 };
        app.state.ball.pos = Vec2::new(806.0, 20.0);
        app.state.ball.vel = Vec2::new(4.0, 0.0);

        app.frame(0.0, &mut surface, &mut hud);
        assert_eq!(app.state.phase, GamePhase::GameOver);
        assert_eq!(hud.player, "玩家: 5");
        assert_eq!(hud.banner.as_deref(), Some("🎉 恭喜你获胜！"));

        let ball = app.state.ball.pos;
        app.start();
        for i in 1..20 {
            assert!(app.frame(i as f64 * 16.7, &mut surface, &mut hud));
        }
        assert_eq!(app.state.phase, GamePhase::GameOver);
        assert_eq!(app.state.ball.pos, ball);

        app.reset();
        app.frame(400.0, &mut surface, &mut hud);
        assert_eq!(app.state.phase, GamePhase::Idle);
        assert_eq!(app.state.scores, Scores::default());
        assert_eq!(hud.banner, None);
        assert_eq!(hud.player, "玩家: 0");
    }

    #[test]
    fn test_pointer_only_moves_paddle_when_running() {
        let mut app = app();
        let before = app.state.left.pos;
        app.pointer_moved(60.0);
        assert_eq!(app.state.left.pos, before);

        app.start();
        app.pointer_moved(60.0);
        assert_eq!(app.state.left.center_y(), 60.0);
    }

    #[test]
    fn test_stop_signal() {
        let mut app = app();
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        assert!(app.frame(0.0, &mut surface, &mut hud));
        app.stop();
        assert!(app.is_stopped());
        // The current frame still draws
        surface.calls.clear();
        assert!(!app.frame(16.0, &mut surface, &mut hud));
        assert!(!surface.calls.is_empty());
    }

    #[test]
    fn test_resume_after_stop() {
        let mut app = app();
        let mut surface = RecordingSurface::default();
        let mut hud = RecordingHud::default();
        app.start();
        assert!(app.frame(0.0, &mut surface, &mut hud));
        assert!(!app.resume());

        app.stop();
        for t in [16.0, 33.0, 50.0] {
            assert!(!app.frame(t, &mut surface, &mut hud));
        }
        let ticks = app.state.time_ticks;

        assert!(app.resume());
        assert!(!app.is_stopped());
        // A long gap while hidden runs a single step, not a catch-up burst
        assert!(app.frame(60_000.0, &mut surface, &mut hud));
        assert_eq!(app.state.time_ticks, ticks + 1);
        assert!(app.frame(60_016.7, &mut surface, &mut hud));
    }
}
