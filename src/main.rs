//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_pong::App;
    use canvas_pong::platform::web::{self, DomHud};
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::sim::input::client_to_field_y;

    /// Everything the frame callback touches
    struct Game {
        app: App,
        surface: CanvasSurface,
        hud: DomHud,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Canvas Pong starting...");

        let document = web::document()?;
        let canvas = web::canvas(&document, "pong")?;
        let field = web::field_of(&canvas);
        let locale = web::document_locale(&document);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            app: App::new(field, seed, locale),
            surface: CanvasSurface::new(&canvas)?,
            hud: DomHud::new(&document)?,
        }));

        log::info!(
            "Field {}x{}, locale {}, seed {}",
            field.width,
            field.height,
            locale.as_str(),
            seed
        );

        setup_input_handlers(&canvas, game.clone())?;
        setup_buttons(&document, game.clone())?;
        setup_page_lifecycle(game.clone())?;

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    /// Pointer height in field units
    fn pointer_y(canvas: &HtmlCanvasElement, client_y: i32, field_height: f32) -> f32 {
        // The bounding rect includes the border; client_top/client_height do not
        let rect = canvas.get_bounding_client_rect();
        let content_top = rect.top() as f32 + canvas.client_top() as f32;
        client_to_field_y(
            client_y as f32,
            content_top,
            canvas.client_height() as f32,
            field_height,
        )
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let height = g.app.state().field.height;
                let y = pointer_y(&canvas_clone, event.client_y(), height);
                g.app.pointer_moved(y);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let height = g.app.state().field.height;
                    let y = pointer_y(&canvas_clone, touch.client_y(), height);
                    g.app.pointer_moved(y);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Start
        {
            let game = game.clone();
            let btn = web::element(document, "startBtn")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().app.start();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Reset
        {
            let btn = web::element(document, "resetBtn")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().app.reset();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Stop scheduling frames when the page goes away, restart them when it
    /// is restored from the back/forward cache
    fn setup_page_lifecycle(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Page hide
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PageTransitionEvent| {
                game.borrow_mut().app.stop();
            });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Page show
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
                if !event.persisted() {
                    return;
                }
                let restart = game.borrow_mut().app.resume();
                if restart {
                    request_animation_frame(game.clone());
                }
            });
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop halted");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let Game { app, surface, hud } = &mut *g;
            app.frame(time, surface, hud)
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::renderer::Surface;
    use canvas_pong::sim::{Color, GamePhase};
    use canvas_pong::ui::Hud;
    use canvas_pong::{App, Locale, sim::Field};

    /// Counts draw calls instead of drawing
    #[derive(Default)]
    struct NullSurface {
        calls: u64,
    }

    impl Surface for NullSurface {
        fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
            self.calls += 1;
        }

        fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {
            self.calls += 1;
        }

        fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color) {
            self.calls += 1;
        }

        fn dashed_line(&mut self, _from: (f64, f64), _to: (f64, f64), _dash: [f64; 2], _color: Color) {
            self.calls += 1;
        }
    }

    /// Logs HUD text when it changes
    #[derive(Default)]
    struct LogHud {
        player: String,
        ai: String,
        banner: Option<String>,
    }

    impl Hud for LogHud {
        fn set_player_score(&mut self, text: &str) {
            if self.player != text {
                log::info!("{}", text);
                self.player = text.to_string();
            }
        }

        fn set_ai_score(&mut self, text: &str) {
            if self.ai != text {
                log::info!("{}", text);
                self.ai = text.to_string();
            }
        }

        fn show_banner(&mut self, text: &str) {
            if self.banner.as_deref() != Some(text) {
                log::info!("{}", text);
                self.banner = Some(text.to_string());
            }
        }

        fn hide_banner(&mut self) {
            self.banner = None;
        }
    }

    /// Play a match with a scripted pointer until someone wins or frames run out
    pub fn run(seed: u64, max_frames: u64) {
        let mut app = App::new(Field::new(800.0, 500.0), seed, Locale::English);
        let mut surface = NullSurface::default();
        let mut hud = LogHud::default();

        app.start();
        let mut frame = 0;
        while frame < max_frames && app.state().phase != GamePhase::GameOver {
            // Follow the ball only while it is coming back, otherwise drift home
            let state = app.state();
            let target = if state.ball.vel.x < 0.0 {
                state.ball.pos.y
            } else {
                state.field.height / 2.0
            };
            let current = state.left.center_y();
            app.pointer_moved(current + (target - current).clamp(-4.0, 4.0));

            let time = frame as f64 * 1000.0 / 60.0;
            app.frame(time, &mut surface, &mut hud);
            frame += 1;
        }

        log::info!("Ran {} frames, {} draw calls", frame, surface.calls);
        match serde_json::to_string_pretty(app.state()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize final state: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless match - use `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 5);

    headless::run(seed, frames);
}
