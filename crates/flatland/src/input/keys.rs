//! Fixed tables mapping raw DOM key codes and standard-mapping gamepad
//! button indices to symbolic names.

/// Keyboard keys the tracker understands. Codes outside this table are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Tab,
    Return,
    Esc,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Tilde,
}

impl Key {
    pub const COUNT: usize = 52;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Backspace, Key::Tab, Key::Return, Key::Esc, Key::Space,
        Key::PageUp, Key::PageDown, Key::End, Key::Home,
        Key::Left, Key::Up, Key::Right, Key::Down, Key::Insert, Key::Delete,
        Key::Num0, Key::Num1, Key::Num2, Key::Num3, Key::Num4,
        Key::Num5, Key::Num6, Key::Num7, Key::Num8, Key::Num9,
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
        Key::Tilde,
    ];

    /// Look up a DOM `keyCode`.
    pub fn from_code(code: u32) -> Option<Key> {
        let key = match code {
            8 => Key::Backspace,
            9 => Key::Tab,
            13 => Key::Return,
            27 => Key::Esc,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            45 => Key::Insert,
            46 => Key::Delete,
            48..=57 => Key::ALL[Key::Num0.index() + (code - 48) as usize],
            65..=90 => Key::ALL[Key::A.index() + (code - 65) as usize],
            192 => Key::Tilde,
            _ => return None,
        };
        Some(key)
    }

    /// The DOM `keyCode` for this key.
    pub fn code(self) -> u32 {
        match self {
            Key::Backspace => 8,
            Key::Tab => 9,
            Key::Return => 13,
            Key::Esc => 27,
            Key::Space => 32,
            Key::PageUp => 33,
            Key::PageDown => 34,
            Key::End => 35,
            Key::Home => 36,
            Key::Left => 37,
            Key::Up => 38,
            Key::Right => 39,
            Key::Down => 40,
            Key::Insert => 45,
            Key::Delete => 46,
            Key::Tilde => 192,
            digit if digit.index() <= Key::Num9.index() => {
                48 + (digit.index() - Key::Num0.index()) as u32
            }
            letter => 65 + (letter.index() - Key::A.index()) as u32,
        }
    }

    /// Position in `Key::ALL`, used to index level tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Number of buttons in a standard-mapping gamepad snapshot.
pub const GAMEPAD_BUTTONS: usize = 16;

/// Tracked gamepad buttons (standard mapping indices). Stick clicks (10, 11)
/// are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoyButton {
    /// Bottom face button (A).
    Button1,
    /// Right face button (B).
    Button2,
    /// Left face button (X).
    Button3,
    /// Top face button (Y).
    Button4,
    Rt1,
    Lt1,
    Rt2,
    Lt2,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl JoyButton {
    pub const COUNT: usize = 14;

    pub const ALL: [JoyButton; JoyButton::COUNT] = [
        JoyButton::Button1, JoyButton::Button2, JoyButton::Button3, JoyButton::Button4,
        JoyButton::Rt1, JoyButton::Lt1, JoyButton::Rt2, JoyButton::Lt2,
        JoyButton::Select, JoyButton::Start,
        JoyButton::Up, JoyButton::Down, JoyButton::Left, JoyButton::Right,
    ];

    /// Index into the gamepad's `buttons` array.
    pub fn code(self) -> usize {
        match self {
            JoyButton::Button1 => 0,
            JoyButton::Button2 => 1,
            JoyButton::Button3 => 2,
            JoyButton::Button4 => 3,
            JoyButton::Rt1 => 4,
            JoyButton::Lt1 => 5,
            JoyButton::Rt2 => 6,
            JoyButton::Lt2 => 7,
            JoyButton::Select => 8,
            JoyButton::Start => 9,
            JoyButton::Up => 12,
            JoyButton::Down => 13,
            JoyButton::Left => 14,
            JoyButton::Right => 15,
        }
    }

    pub fn from_code(code: usize) -> Option<JoyButton> {
        JoyButton::ALL.into_iter().find(|b| b.code() == code)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key), "{:?}", key);
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(Key::from_code(32), Some(Key::Space));
        assert_eq!(Key::from_code(48), Some(Key::Num0));
        assert_eq!(Key::from_code(57), Some(Key::Num9));
        assert_eq!(Key::from_code(65), Some(Key::A));
        assert_eq!(Key::from_code(90), Some(Key::Z));
        assert_eq!(Key::from_code(192), Some(Key::Tilde));
        assert_eq!(Key::from_code(91), None);
        assert_eq!(Key::from_code(112), None);
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        for (i, button) in JoyButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn stick_clicks_are_untracked() {
        assert_eq!(JoyButton::from_code(10), None);
        assert_eq!(JoyButton::from_code(11), None);
        assert_eq!(JoyButton::from_code(12), Some(JoyButton::Up));
        assert_eq!(JoyButton::from_code(16), None);
    }
}
