use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps physical key codes into these variants. Only keys the
/// sketch binds get one; the rest use `Key::Unknown(u32)` carrying the
/// platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    ArrowUp,
    ArrowLeft,
    ArrowRight,

    // Pen down / pen up
    D,
    U,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    /// Numeric value of a digit key, `None` for every other key.
    pub fn digit(self) -> Option<u8> {
        let d = match self {
            Key::Digit0 => 0,
            Key::Digit1 => 1,
            Key::Digit2 => 2,
            Key::Digit3 => 3,
            Key::Digit4 => 4,
            Key::Digit5 => 5,
            Key::Digit6 => 6,
            Key::Digit7 => 7,
            Key::Digit8 => 8,
            Key::Digit9 => 9,
            _ => return None,
        };
        Some(d)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic events emitted by the runtime, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat of a held key.
        repeat: bool,
    },

    /// Window content area changed size, in logical pixels.
    ///
    /// Also emitted once when the window is created so consumers start with
    /// the real size.
    Resized { width: u32, height: u32 },

    /// The user asked the window to close (title-bar button, WM shortcut).
    CloseRequested,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a non-repeat key press.
    pub fn key_down(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    /// Shorthand for a key release.
    pub fn key_up(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
