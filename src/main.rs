//! Phrase Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, Window};

    use phrase_runner::platform::TickSource;
    use phrase_runner::renderer::CanvasRenderer;
    use phrase_runner::{GameEvent, GameStateMachine, OptionId, QuestionBank, Tuning};

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Tick source backed by requestAnimationFrame
    struct AnimationFrameTicker {
        window: Window,
        callback: FrameCallback,
        pending: Option<i32>,
        running: bool,
    }

    impl AnimationFrameTicker {
        fn new(window: Window, callback: FrameCallback) -> Self {
            Self {
                window,
                callback,
                pending: None,
                running: false,
            }
        }

        fn request(&mut self) {
            let callback = self.callback.borrow();
            let Some(cb) = callback.as_ref() else {
                log::error!("Frame callback not installed");
                return;
            };
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending = Some(id),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }

        /// The pending request just fired
        fn frame_delivered(&mut self) {
            self.pending = None;
        }

        /// Queue the next frame unless the game stopped us meanwhile
        fn schedule_next(&mut self) {
            if self.running && self.pending.is_none() {
                self.request();
            }
        }
    }

    impl TickSource for AnimationFrameTicker {
        fn start(&mut self) {
            if self.running {
                return;
            }
            self.running = true;
            self.schedule_next();
        }

        fn stop(&mut self) {
            self.running = false;
            if let Some(id) = self.pending.take() {
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }

    /// DOM elements the game writes to
    struct Dom {
        document: Document,
        score: Element,
        final_score: Element,
        prompt: Element,
        answer: Element,
        buttons: Element,
        game_over_overlay: Element,
        start_overlay: Element,
    }

    impl Dom {
        fn lookup(document: Document) -> Result<Self, JsValue> {
            Ok(Self {
                score: element(&document, "score")?,
                final_score: element(&document, "final-score")?,
                prompt: element(&document, "jp-prompt")?,
                answer: element(&document, "en-answer-display")?,
                buttons: element(&document, "word-buttons-container")?,
                game_over_overlay: element(&document, "game-over-overlay")?,
                start_overlay: element(&document, "start-overlay")?,
                document,
            })
        }

        fn option_button(&self, option: OptionId) -> Option<Element> {
            let selector = format!("[data-option=\"{}\"]", option.0);
            self.buttons.query_selector(&selector).ok().flatten()
        }

        fn rebuild_buttons(&self, options: &[String]) -> Result<(), JsValue> {
            self.buttons.set_inner_html("");
            for (i, word) in options.iter().enumerate() {
                let btn = self.document.create_element("button")?;
                btn.set_text_content(Some(word));
                btn.class_list().add_1("word-btn")?;
                btn.set_attribute("data-option", &i.to_string())?;
                self.buttons.append_child(&btn)?;
            }
            Ok(())
        }
    }

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))
    }

    /// Game instance holding all state
    struct Game {
        machine: GameStateMachine<AnimationFrameTicker>,
        renderer: CanvasRenderer,
        dom: Dom,
        window: Window,
    }

    impl Game {
        /// Reflect drained game events in the DOM
        fn apply_events(&mut self) {
            for event in self.machine.drain_events() {
                if let Err(e) = self.apply_event(&event) {
                    log::warn!("UI update for {:?} failed: {:?}", event, e);
                }
            }
        }

        fn apply_event(&self, event: &GameEvent) -> Result<(), JsValue> {
            let dom = &self.dom;
            match event {
                GameEvent::Started => {
                    dom.score.set_text_content(Some("0"));
                    dom.start_overlay.class_list().add_1("hidden")?;
                    dom.game_over_overlay.class_list().add_1("hidden")?;
                }
                GameEvent::RoundStarted { prompt, options } => {
                    dom.prompt.set_text_content(Some(prompt));
                    dom.answer.set_text_content(Some(""));
                    dom.rebuild_buttons(options)?;
                }
                GameEvent::WordAccepted { option, transcript } => {
                    dom.answer.set_text_content(Some(transcript));
                    if let Some(btn) = dom.option_button(*option) {
                        btn.remove();
                    }
                }
                GameEvent::WordRejected { option } => {
                    if let Some(btn) = dom.option_button(*option) {
                        self.flash_wrong(btn)?;
                    }
                }
                GameEvent::RoundCleared { score } => {
                    dom.score.set_text_content(Some(&score.to_string()));
                }
                GameEvent::GameOver { final_score } => {
                    dom.final_score.set_text_content(Some(&final_score.to_string()));
                    dom.game_over_overlay.class_list().remove_1("hidden")?;
                }
            }
            Ok(())
        }

        /// Mark a button wrong, then clear it after the flash delay
        fn flash_wrong(&self, btn: Element) -> Result<(), JsValue> {
            btn.class_list().add_1("wrong")?;
            let clear = Closure::once_into_js(move || {
                if let Err(e) = btn.class_list().remove_1("wrong") {
                    log::warn!("Clearing wrong-word flash failed: {:?}", e);
                }
            });
            self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.unchecked_ref(),
                self.machine.tuning().wrong_flash_ms as i32,
            )?;
            Ok(())
        }

        fn render(&self) {
            self.renderer.render(self.machine.session());
        }
    }

    fn on_frame(game: &Rc<RefCell<Game>>) {
        let g = &mut *game.borrow_mut();
        g.machine.ticker_mut().frame_delivered();
        g.machine.frame();
        g.render();
        g.apply_events();
        g.machine.ticker_mut().schedule_next();
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Phrase Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = element(&document, "game-canvas")?.dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let bank = QuestionBank::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut tuning = Tuning::default();
        tuning.arena_width = canvas.width() as f32;
        tuning.arena_height = canvas.height() as f32;
        tuning
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let ticker = AnimationFrameTicker::new(window.clone(), callback.clone());
        let renderer = CanvasRenderer::new(
            ctx,
            tuning.arena_width as f64,
            tuning.arena_height as f64,
        );
        let machine = GameStateMachine::new(bank, tuning, ticker, seed);
        let game = Rc::new(RefCell::new(Game {
            machine,
            renderer,
            dom: Dom::lookup(document.clone())?,
            window,
        }));
        log::info!("Game initialized with seed: {}", seed);

        {
            let game = game.clone();
            *callback.borrow_mut() = Some(Closure::new(move |_time: f64| on_frame(&game)));
        }

        setup_start_buttons(&document, game.clone())?;
        setup_word_buttons(game.clone())?;

        // Idle draw before any round
        game.borrow().render();

        log::info!("Phrase Runner ready");
        Ok(())
    }

    fn setup_start_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let g = &mut *game.borrow_mut();
                g.machine.start();
                g.apply_events();
            });
            element(document, "start-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let g = &mut *game.borrow_mut();
            g.machine.restart();
            g.apply_events();
        });
        element(document, "restart-btn")?
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// One delegated listener for all word buttons
    fn setup_word_buttons(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let container = game.borrow().dom.buttons.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(option) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-option"))
                .and_then(|idx| idx.parse::<usize>().ok())
            else {
                return;
            };
            let g = &mut *game.borrow_mut();
            g.machine.submit(OptionId(option));
            g.apply_events();
        });
        container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Phrase Runner (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    demo::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a scripted player clears a few rounds, then stops answering
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use phrase_runner::platform::{ManualTicker, TickSource};
    use phrase_runner::{FrameOutcome, GameStateMachine, QuestionBank, Tuning};

    /// Rounds the bot answers before letting the enemy through
    const ROUNDS_TO_CLEAR: u32 = 3;
    /// Frames the bot waits between clicks
    const THINK_FRAMES: u32 = 40;

    pub fn run() -> Result<(), Box<dyn Error>> {
        let tuning = match std::env::var("PHRASE_RUNNER_TUNING") {
            Ok(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
            Err(_) => Tuning::default(),
        };
        let seed = match std::env::args().nth(1) {
            Some(arg) => arg.parse()?,
            None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
        };
        log::info!("Seed: {}", seed);

        let bank = QuestionBank::builtin()?;
        let mut machine = GameStateMachine::new(bank, tuning, ManualTicker::new(), seed);
        machine.start();

        let mut frames = 0u32;
        while machine.ticker().is_running() {
            if machine.frame() == FrameOutcome::Collided {
                break;
            }
            frames += 1;

            if machine.score() < ROUNDS_TO_CLEAR && frames % THINK_FRAMES == 0 {
                click_next_word(&mut machine);
            }
            for event in machine.drain_events() {
                log::info!("{:?}", event);
            }
        }
        for event in machine.drain_events() {
            log::info!("{:?}", event);
        }

        log::info!(
            "Final score {} after {} frames",
            machine.session().final_score.unwrap_or_default(),
            machine.session().time_ticks
        );
        Ok(())
    }

    /// Click the expected word, or a wrong one first if there is a choice
    fn click_next_word(machine: &mut GameStateMachine) {
        let Some(round) = machine.round() else {
            return;
        };
        let index = round.next_expected_index();
        let expected = round.round().target[index].clone();
        let wrong = round
            .available_options()
            .find(|(_, word)| *word != expected)
            .map(|(id, _)| id);

        if index == 0 {
            if let Some(wrong) = wrong {
                machine.submit(wrong);
            }
        }
        machine.submit_token(&expected);
    }
}
