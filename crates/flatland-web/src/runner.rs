use std::cell::RefCell;
use std::rc::Rc;

use flatland::{Engine, Game, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::canvas::Canvas2dSink;
use crate::input::{listen_keys, NavigatorGamepad};
use crate::resources::{HtmlSound, HtmlTexture};
use crate::scheduler::{FrameCallback, RafScheduler};

/// Engine type every browser game runs against.
pub type WebEngine = Engine<HtmlTexture, HtmlSound>;

/// Owns a game, its engine and the canvas it draws to, and drives them
/// from `requestAnimationFrame`.
///
/// Each frame runs game logic first, then draws the current state, then
/// advances the engine, which requests the next frame.
pub struct GameRunner<G: Game<HtmlTexture, HtmlSound>> {
    game: G,
    engine: WebEngine,
    sink: Canvas2dSink,
    frame_callback: FrameCallback,
    initialized: bool,
}

impl<G: Game<HtmlTexture, HtmlSound> + 'static> GameRunner<G> {
    /// Bind `game` to the canvas named in its config.
    pub fn new(game: G) -> Result<Self, JsValue> {
        let config = game.config();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", config.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas
            .style()
            .set_property("background-color", &config.background)?;

        let sink = Canvas2dSink::new(&canvas)?;
        let window_size = Size::new(f64::from(canvas.width()), f64::from(canvas.height()));

        let scheduler = RafScheduler::new(window.clone());
        let frame_callback = scheduler.callback();
        let gamepad = NavigatorGamepad::new(window.navigator());

        let engine = Engine::new(config, window_size, Box::new(scheduler), Box::new(gamepad))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(Self {
            game,
            engine,
            sink,
            frame_callback,
            initialized: false,
        })
    }

    /// Let the game create its initial entities. Call once.
    pub fn init(&mut self) {
        self.game.init(&mut self.engine);
        self.initialized = true;
    }

    /// One animation frame at host time `elapsed_ms`.
    pub fn frame(&mut self, elapsed_ms: f64) {
        if !self.initialized || !self.engine.is_running() {
            return;
        }
        self.game.update(&mut self.engine);
        self.engine.draw(&mut self.sink);
        self.engine.update(elapsed_ms);
    }

    pub fn stop(&mut self) {
        self.engine.stop(&mut self.sink);
    }

    pub fn engine(&self) -> &WebEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WebEngine {
        &mut self.engine
    }

    /// Install the frame closure and keyboard listeners, then start the
    /// loop. The runner is shared with those callbacks for the life of the page.
    pub fn launch(runner: Rc<RefCell<Self>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let for_frame = Rc::clone(&runner);
        let cb = Closure::<dyn FnMut(f64)>::new(move |elapsed_ms: f64| {
            for_frame.borrow_mut().frame(elapsed_ms);
        });
        let slot = Rc::clone(&runner.borrow().frame_callback);
        *slot.borrow_mut() = Some(cb);

        let for_down = Rc::clone(&runner);
        let for_up = Rc::clone(&runner);
        listen_keys(
            &window,
            move |code| for_down.borrow_mut().engine_mut().key_down(code),
            move |code| for_up.borrow_mut().engine_mut().key_up(code),
        )?;

        runner.borrow_mut().engine_mut().start();
        Ok(())
    }
}
