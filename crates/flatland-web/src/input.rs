//! DOM keyboard listeners and `navigator.getGamepads()` polling.

use flatland::{GamepadSnapshot, GamepadSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Gamepad, GamepadButton, KeyboardEvent, Navigator, Window};

/// Build a snapshot from `pressed` flags in standard-mapping order.
/// Buttons past the sixteenth are ignored; missing ones read as released.
pub fn snapshot_from_pressed(pressed: impl IntoIterator<Item = bool>) -> GamepadSnapshot {
    let mut snapshot = GamepadSnapshot::default();
    for (slot, down) in snapshot.buttons.iter_mut().zip(pressed) {
        *slot = down;
    }
    snapshot
}

/// Reads pad 0 from the browser on every query.
pub struct NavigatorGamepad {
    navigator: Navigator,
}

impl NavigatorGamepad {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    fn pad(&self) -> Option<Gamepad> {
        let pads = self.navigator.get_gamepads().ok()?;
        pads.get(0).dyn_into::<Gamepad>().ok()
    }
}

impl GamepadSource for NavigatorGamepad {
    fn snapshot(&self) -> Option<GamepadSnapshot> {
        let pad = self.pad()?;
        let buttons = pad.buttons();
        let pressed = buttons.iter().map(|b| {
            b.dyn_into::<GamepadButton>()
                .map(|b| b.pressed())
                .unwrap_or(false)
        });
        Some(snapshot_from_pressed(pressed))
    }
}

/// Register `keydown` / `keyup` listeners on `window`. Each handler gets
/// the raw key code and returns whether the key is one the game tracks, in
/// which case the browser default (scrolling, tab focus) is suppressed.
///
/// The listeners live as long as the page.
pub fn listen_keys(
    window: &Window,
    mut on_down: impl FnMut(u32) -> bool + 'static,
    mut on_up: impl FnMut(u32) -> bool + 'static,
) -> Result<(), JsValue> {
    let down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if on_down(event.key_code()) {
            event.prevent_default();
        }
    });
    let up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if on_up(event.key_code()) {
            event.prevent_default();
        }
    });

    window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    down.forget();
    up.forget();
    Ok(())
}
