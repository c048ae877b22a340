pub mod canvas;
pub mod input;
pub mod resources;
pub mod runner;
pub mod scheduler;

pub use canvas::Canvas2dSink;
pub use input::NavigatorGamepad;
pub use resources::{HtmlSound, HtmlTexture};
pub use runner::{GameRunner, WebEngine};
pub use scheduler::RafScheduler;

use std::cell::RefCell;
use std::thread::LocalKey;

/// Route `log` to the browser console and panics to `console.error`.
/// Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}

/// Fill `slot` with `build()` unless it already holds a value.
/// Returns `Ok(false)` without calling `build` when the slot was taken.
pub fn start_once<T, E>(
    slot: &'static LocalKey<RefCell<Option<T>>>,
    build: impl FnOnce() -> Result<T, E>,
) -> Result<bool, E> {
    if slot.with(|cell| cell.borrow().is_some()) {
        return Ok(false);
    }
    let value = build()?;
    slot.with(|cell| *cell.borrow_mut() = Some(value));
    Ok(true)
}

/// Generate the `#[wasm_bindgen]` entry points for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `game_start()`: installs logging, builds the runner, runs `Game::init`
///   and starts the frame loop; later calls do nothing
/// - `game_stop()`: cancels the pending frame and clears the canvas
/// - `game_show_fps()`
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// flatland_web::export_game!(MyGame, "my-game");
/// ```
///
/// `$game_type` must provide `fn new() -> Self` and implement
/// `flatland::Game<HtmlTexture, HtmlSound>`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use std::rc::Rc;

        thread_local! {
            static RUNNER: RefCell<Option<Rc<RefCell<$crate::GameRunner<$game_type>>>>> =
                RefCell::new(None);
        }

        #[wasm_bindgen]
        pub fn game_start() -> Result<(), JsValue> {
            $crate::init_logging(log::Level::Info);

            let started = $crate::start_once(&RUNNER, || {
                let mut runner = $crate::GameRunner::new(<$game_type>::new())?;
                runner.init();
                let runner = Rc::new(RefCell::new(runner));
                $crate::GameRunner::launch(Rc::clone(&runner))?;
                Ok::<_, JsValue>(runner)
            })?;

            if started {
                log::info!("{}: started", $game_name);
            } else {
                log::warn!("{}: already started", $game_name);
            }
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_stop() {
            RUNNER.with(|cell| {
                if let Some(runner) = cell.borrow().as_ref() {
                    runner.borrow_mut().stop();
                }
            });
        }

        #[wasm_bindgen]
        pub fn game_show_fps() {
            RUNNER.with(|cell| {
                if let Some(runner) = cell.borrow().as_ref() {
                    runner.borrow_mut().engine_mut().show_fps();
                }
            });
        }
    };
}
