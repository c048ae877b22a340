//! Edge- and level-triggered input state for the keyboard and one gamepad.
//!
//! Each device class has a single debounce flag shared by all of its keys or
//! buttons. After one `press` succeeds, no other press on that device can
//! fire until the flag is cleared: by any key-up on the keyboard, or by
//! `joy_clear` noticing a release on the gamepad.

use super::keys::{JoyButton, Key, GAMEPAD_BUTTONS};

/// Live `pressed` state of pad 0's buttons in standard-mapping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamepadSnapshot {
    pub buttons: [bool; GAMEPAD_BUTTONS],
}

impl GamepadSnapshot {
    pub fn is_pressed(&self, button: JoyButton) -> bool {
        self.buttons[button.code()]
    }

    pub fn with_pressed(mut self, button: JoyButton) -> Self {
        self.buttons[button.code()] = true;
        self
    }
}

/// Host side of the gamepad: returns pad 0's state, or `None` when no pad
/// is connected.
pub trait GamepadSource {
    fn snapshot(&self) -> Option<GamepadSnapshot>;
}

/// Used when the host has no gamepad support at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGamepad;

impl GamepadSource for NoGamepad {
    fn snapshot(&self) -> Option<GamepadSnapshot> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct InputTracker {
    /// Level per key, indexed by `Key::index`.
    keys: [bool; Key::COUNT],
    /// Set by a successful `key_press`, cleared by any key-up.
    key_latched: bool,
    /// Buttons whose press was reported and not yet seen released.
    joy_down: [bool; JoyButton::COUNT],
    /// Set by a successful `joy_press`, cleared by `joy_clear`.
    joy_latched: bool,
    joypad_enabled: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            key_latched: false,
            joy_down: [false; JoyButton::COUNT],
            joy_latched: false,
            joypad_enabled: false,
        }
    }

    // -- Keyboard events --

    /// Raw key-down from the host. Ignored while a press is latched.
    /// Returns true if the code is in the key table.
    pub fn key_down(&mut self, code: u32) -> bool {
        let key = Key::from_code(code);
        if self.key_latched {
            return key.is_some();
        }
        match key {
            Some(key) => {
                self.keys[key.index()] = true;
                true
            }
            None => false,
        }
    }

    /// Raw key-up from the host. Any key-up clears the press latch.
    /// Returns true if the code is in the key table.
    pub fn key_up(&mut self, code: u32) -> bool {
        self.key_latched = false;
        match Key::from_code(code) {
            Some(key) => {
                self.keys[key.index()] = false;
                true
            }
            None => false,
        }
    }

    // -- Keyboard queries --

    /// True at most once per physical press of any key.
    pub fn key_press(&mut self, key: Key) -> bool {
        if !self.key_latched && self.keys[key.index()] {
            self.key_latched = true;
            return true;
        }
        false
    }

    /// True for as long as `key` is down.
    pub fn key_hold(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    // -- Gamepad --

    pub fn is_joypad_enabled(&self) -> bool {
        self.joypad_enabled
    }

    pub fn enable_joypad(&mut self) {
        self.joypad_enabled = true;
    }

    pub fn disable_joypad(&mut self) {
        self.joypad_enabled = false;
    }

    /// True at most once per press of `button` while the gamepad latch is clear.
    pub fn joy_press(&mut self, button: JoyButton, pad: Option<&GamepadSnapshot>) -> bool {
        let Some(pad) = pad else {
            return false;
        };
        if !pad.is_pressed(button) || self.joy_latched || self.joy_down[button.index()] {
            return false;
        }
        self.joy_latched = true;
        self.joy_down[button.index()] = true;
        true
    }

    /// True for as long as `button` is down on the live pad.
    pub fn joy_hold(&self, button: JoyButton, pad: Option<&GamepadSnapshot>) -> bool {
        pad.is_some_and(|pad| pad.is_pressed(button))
    }

    /// Release the first tracked-down button that the live pad no longer
    /// reports pressed, and clear the latch. Does nothing unless latched.
    pub fn joy_clear(&mut self, pad: Option<&GamepadSnapshot>) {
        if !self.joy_latched {
            return;
        }
        let Some(pad) = pad else {
            return;
        };
        let released = JoyButton::ALL
            .into_iter()
            .find(|b| self.joy_down[b.index()] && !pad.is_pressed(*b));
        if let Some(button) = released {
            self.joy_down[button.index()] = false;
            self.joy_latched = false;
        }
    }

    /// Forget all key and button state. The joypad enable switch is kept.
    pub fn reset(&mut self) {
        let enabled = self.joypad_enabled;
        *self = Self::new();
        self.joypad_enabled = enabled;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fires_once_hold_stays() {
        let mut input = InputTracker::new();
        input.key_down(Key::Space.code());

        let presses: Vec<bool> = (0..3).map(|_| input.key_press(Key::Space)).collect();
        assert_eq!(presses, vec![true, false, false]);
        assert!(input.key_hold(Key::Space));
    }

    #[test]
    fn release_rearms_press() {
        let mut input = InputTracker::new();
        input.key_down(Key::A.code());
        assert!(input.key_press(Key::A));
        input.key_up(Key::A.code());
        assert!(!input.key_hold(Key::A));
        assert!(!input.key_press(Key::A));

        input.key_down(Key::A.code());
        assert!(input.key_press(Key::A));
    }

    #[test]
    fn latch_is_shared_across_keys() {
        let mut input = InputTracker::new();
        input.key_down(Key::Left.code());
        input.key_down(Key::Right.code());
        assert!(input.key_press(Key::Left));
        // Right is down, but the keyboard latch is taken.
        assert!(!input.key_press(Key::Right));
        assert!(input.key_hold(Key::Right));
    }

    #[test]
    fn any_key_up_clears_latch() {
        let mut input = InputTracker::new();
        input.key_down(Key::Left.code());
        input.key_down(Key::Right.code());
        assert!(input.key_press(Key::Left));

        input.key_up(Key::Up.code());
        assert!(input.key_press(Key::Right));
    }

    #[test]
    fn key_down_ignored_while_latched() {
        let mut input = InputTracker::new();
        input.key_down(Key::W.code());
        assert!(input.key_press(Key::W));

        input.key_down(Key::S.code());
        assert!(!input.key_hold(Key::S));
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let mut input = InputTracker::new();
        assert!(!input.key_down(112));
        assert!(!input.key_up(112));
        assert!(Key::ALL.iter().all(|k| !input.key_hold(*k)));
    }

    #[test]
    fn joy_press_once_until_cleared() {
        let mut input = InputTracker::new();
        let down = GamepadSnapshot::default().with_pressed(JoyButton::Button1);

        assert!(input.joy_press(JoyButton::Button1, Some(&down)));
        assert!(!input.joy_press(JoyButton::Button1, Some(&down)));
        assert!(input.joy_hold(JoyButton::Button1, Some(&down)));

        // Still held: clear finds nothing released.
        input.joy_clear(Some(&down));
        assert!(!input.joy_press(JoyButton::Button1, Some(&down)));

        let up = GamepadSnapshot::default();
        input.joy_clear(Some(&up));
        assert!(input.joy_press(JoyButton::Button1, Some(&down)));
    }

    #[test]
    fn joy_latch_blocks_other_buttons() {
        let mut input = InputTracker::new();
        let both = GamepadSnapshot::default()
            .with_pressed(JoyButton::Start)
            .with_pressed(JoyButton::Up);

        assert!(input.joy_press(JoyButton::Start, Some(&both)));
        assert!(!input.joy_press(JoyButton::Up, Some(&both)));

        let only_up = GamepadSnapshot::default().with_pressed(JoyButton::Up);
        input.joy_clear(Some(&only_up));
        assert!(input.joy_press(JoyButton::Up, Some(&only_up)));
    }

    #[test]
    fn joy_queries_without_pad() {
        let mut input = InputTracker::new();
        assert!(!input.joy_press(JoyButton::Start, None));
        assert!(!input.joy_hold(JoyButton::Start, None));
        input.joy_clear(None);
    }

    #[test]
    fn reset_keeps_enable_switch() {
        let mut input = InputTracker::new();
        input.enable_joypad();
        input.key_down(Key::Z.code());
        input.reset();
        assert!(input.is_joypad_enabled());
        assert!(!input.key_hold(Key::Z));
    }
}
