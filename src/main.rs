//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use flappy_canvas::input::InputEvent;
    use flappy_canvas::persistence::LocalStorageStore;
    use flappy_canvas::renderer::CanvasRenderer;
    use flappy_canvas::sim::TickInput;
    use flappy_canvas::ui::HudView;
    use flappy_canvas::{FrameDriver, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver<LocalStorageStore>,
        renderer: CanvasRenderer,
        settings: Settings,
        no_fail_toggle: Option<HtmlInputElement>,
        // Log a failing canvas only once
        render_failed: bool,
    }

    impl Game {
        /// Checkbox is read fresh every frame so toggling mid-run applies at once
        fn no_fail(&self) -> bool {
            self.no_fail_toggle
                .as_ref()
                .map(|el| el.checked())
                .unwrap_or(false)
        }

        /// Route an input event, honouring its propagation flags
        fn handle(&mut self, input: InputEvent, event: &web_sys::Event) {
            let d = self.driver.handle(&input, &self.settings.keys);
            if d.prevent_default {
                event.prevent_default();
            }
            if d.stop_propagation {
                event.stop_propagation();
            }
        }

        /// One display refresh: update, draw, then sync the HUD
        fn frame(&mut self) {
            let input = TickInput {
                no_fail: self.no_fail(),
            };
            let frame = self.driver.frame(&input);

            if let Err(e) = self.renderer.render(&frame.commands) {
                if !self.render_failed {
                    log::error!("Render error: {:?}", e);
                    self.render_failed = true;
                }
            }

            if !frame.events.is_empty() {
                update_hud(&HudView::from_state(self.driver.state()));
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    fn set_text(document: &Document, id: &str, value: u32) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    /// Copy the HUD model into the page
    fn update_hud(hud: &HudView) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        set_hidden(&document, "startScreen", !hud.start_screen);
        set_hidden(&document, "scoreDisplay", !hud.score_display);
        set_hidden(&document, "gameOverScreen", !hud.game_over_screen);
        set_text(&document, "scoreDisplay", hud.score);

        if let Some((score, best)) = hud.final_scores {
            set_text(&document, "currentScore", score);
            set_text(&document, "bestScore", best);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let tuning = Tuning {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
            ..Tuning::default()
        };

        let settings = Settings::load();
        let no_fail_toggle = document
            .get_element_by_id("infiniteMode")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(toggle) = &no_fail_toggle {
            toggle.set_checked(settings.no_fail);
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(tuning, seed, LocalStorageStore),
            renderer: CanvasRenderer::new(&canvas)?,
            settings,
            no_fail_toggle,
            render_failed: false,
        }));

        update_hud(&HudView::from_state(game.borrow().driver.state()));

        setup_input_handlers(&document, &canvas, game.clone());
        setup_mode_toggle(game.clone());

        request_animation_frame(game);

        log::info!("Flappy Canvas running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let input = InputEvent::Key { code: event.code() };
                game.borrow_mut().handle(input, &event);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Canvas click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().handle(InputEvent::PointerClick, &event);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Overlay buttons sit on top of the canvas
        for id in ["overlayStartBtn", "restartBtn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} missing", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().handle(InputEvent::Button, &event);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Remember the no-fail checkbox between visits
    fn setup_mode_toggle(game: Rc<RefCell<Game>>) {
        let Some(toggle) = game.borrow().no_fail_toggle.clone() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            g.settings.no_fail = g.no_fail();
            g.settings.save();
            log::info!("No-fail mode: {}", g.settings.no_fail);
        });
        let _ = toggle.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
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

/// Headless autopilot run
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, clap::Parser)]
#[command(name = "flappy-canvas", about = "Run a seeded headless session with an autopilot")]
struct Args {
    /// Number of frames to simulate
    #[arg(default_value_t = 3000)]
    ticks: u64,
    /// Seed for pipe placement
    #[arg(default_value_t = 2024)]
    seed: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use flappy_canvas::FrameDriver;
    use flappy_canvas::input::{InputEvent, KeyBindings};
    use flappy_canvas::persistence::MemoryStore;
    use flappy_canvas::sim::{GameEvent, GamePhase, GameState, TickInput};
    use flappy_canvas::tuning::Tuning;

    env_logger::init();

    let Args { ticks, seed } = Args::parse();

    log::info!("Flappy Canvas (native) starting headless run: {} ticks, seed {}", ticks, seed);

    /// Flap whenever the bird sinks below the centre of the next gap
    fn autopilot_wants_flap(state: &GameState) -> bool {
        let t = &state.tuning;
        let bird = &state.bird;
        let target = state
            .pipes
            .iter()
            .find(|p| p.x + t.pipe_width > bird.pos.x - bird.radius)
            .map(|p| p.y + t.pipe_height + t.pipe_gap / 2.0)
            .unwrap_or(t.hover_base_y);
        bird.pos.y > target + 10.0 && bird.speed >= 0.0
    }

    let keys = KeyBindings::default();
    let mut driver = FrameDriver::new(Tuning::default(), seed, MemoryStore::new());
    let mut runs = 0u32;

    for _ in 0..ticks {
        if driver.state().phase != GamePhase::Running
            || autopilot_wants_flap(driver.state())
        {
            driver.handle(&InputEvent::PointerClick, &keys);
        }

        let frame = driver.frame(&TickInput::default());
        for event in frame.events {
            match event {
                GameEvent::Scored { score, best } => log::info!("Score {} (best {})", score, best),
                GameEvent::GameOver { score, best } => {
                    runs += 1;
                    println!("Run {} over: score {} (best {})", runs, score, best);
                }
                _ => log::debug!("{:?}", event),
            }
        }
    }

    let state = driver.state();
    println!(
        "Finished {} ticks: current score {}, best {}",
        ticks, state.score.value, state.score.best
    );
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default() {
        let args = Args::try_parse_from(["flappy-canvas"]).unwrap();
        assert_eq!((args.ticks, args.seed), (3000, 2024));
    }

    #[test]
    fn test_args_positional() {
        let args = Args::try_parse_from(["flappy-canvas", "50", "7"]).unwrap();
        assert_eq!((args.ticks, args.seed), (50, 7));
    }

    #[test]
    fn test_args_reject_malformed_ticks() {
        assert!(Args::try_parse_from(["flappy-canvas", "5O0"]).is_err());
        assert!(Args::try_parse_from(["flappy-canvas", "50", "-1"]).is_err());
    }
}
