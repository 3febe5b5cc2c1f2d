//! Polled input: keyboard and mouse snapshots handed to widgets once per frame.
//!
//! The host samples its devices at the start of every frame and builds a
//! [`FrameInput`]. Widgets never talk to devices directly; they compare the
//! snapshot they are given with the one they kept from the previous frame.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::time::Duration;

macro_rules! keys {
    ($( $(#[$doc:meta])* $name:ident = $code:literal, )*) => {
        /// Keyboard key identifiers, numbered with the host's virtual key codes.
        ///
        /// Printable keys sit in the ASCII range: letters use their uppercase
        /// code, digits their digit code, and space is 32.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Key {
            $( $(#[$doc])* $name = $code, )*
        }

        impl Key {
            /// Every key, in ascending code order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            /// Look a key up by its code.
            #[must_use]
            pub const fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$name), )*
                    _ => None,
                }
            }

            /// The key's name as the host prints it (`"A"`, `"Space"`, `"D1"`).
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }
        }
    };
}

keys! {
    /// Backspace
    Back = 8,
    /// Tab
    Tab = 9,
    /// Enter/Return
    Enter = 13,
    /// Pause
    Pause = 19,
    /// Caps Lock
    CapsLock = 20,
    /// Escape
    Escape = 27,
    /// Space bar
    Space = 32,
    /// Page Up
    PageUp = 33,
    /// Page Down
    PageDown = 34,
    /// End
    End = 35,
    /// Home
    Home = 36,
    /// Left arrow
    Left = 37,
    /// Up arrow
    Up = 38,
    /// Right arrow
    Right = 39,
    /// Down arrow
    Down = 40,
    /// Select
    Select = 41,
    /// Print
    Print = 42,
    /// Execute
    Execute = 43,
    /// Print Screen
    PrintScreen = 44,
    /// Insert
    Insert = 45,
    /// Delete
    Delete = 46,
    /// Help
    Help = 47,
    /// 0
    D0 = 48,
    /// 1
    D1 = 49,
    /// 2
    D2 = 50,
    /// 3
    D3 = 51,
    /// 4
    D4 = 52,
    /// 5
    D5 = 53,
    /// 6
    D6 = 54,
    /// 7
    D7 = 55,
    /// 8
    D8 = 56,
    /// 9
    D9 = 57,
    /// A
    A = 65,
    /// B
    B = 66,
    /// C
    C = 67,
    /// D
    D = 68,
    /// E
    E = 69,
    /// F
    F = 70,
    /// G
    G = 71,
    /// H
    H = 72,
    /// I
    I = 73,
    /// J
    J = 74,
    /// K
    K = 75,
    /// L
    L = 76,
    /// M
    M = 77,
    /// N
    N = 78,
    /// O
    O = 79,
    /// P
    P = 80,
    /// Q
    Q = 81,
    /// R
    R = 82,
    /// S
    S = 83,
    /// T
    T = 84,
    /// U
    U = 85,
    /// V
    V = 86,
    /// W
    W = 87,
    /// X
    X = 88,
    /// Y
    Y = 89,
    /// Z
    Z = 90,
    /// Left Windows/Command
    LeftWindows = 91,
    /// Right Windows/Command
    RightWindows = 92,
    /// Application (context menu)
    Apps = 93,
    /// Sleep
    Sleep = 95,
    /// Numpad 0
    NumPad0 = 96,
    /// Numpad 1
    NumPad1 = 97,
    /// Numpad 2
    NumPad2 = 98,
    /// Numpad 3
    NumPad3 = 99,
    /// Numpad 4
    NumPad4 = 100,
    /// Numpad 5
    NumPad5 = 101,
    /// Numpad 6
    NumPad6 = 102,
    /// Numpad 7
    NumPad7 = 103,
    /// Numpad 8
    NumPad8 = 104,
    /// Numpad 9
    NumPad9 = 105,
    /// Numpad *
    Multiply = 106,
    /// Numpad +
    Add = 107,
    /// Numpad separator
    Separator = 108,
    /// Numpad -
    Subtract = 109,
    /// Numpad .
    Decimal = 110,
    /// Numpad /
    Divide = 111,
    /// F1
    F1 = 112,
    /// F2
    F2 = 113,
    /// F3
    F3 = 114,
    /// F4
    F4 = 115,
    /// F5
    F5 = 116,
    /// F6
    F6 = 117,
    /// F7
    F7 = 118,
    /// F8
    F8 = 119,
    /// F9
    F9 = 120,
    /// F10
    F10 = 121,
    /// F11
    F11 = 122,
    /// F12
    F12 = 123,
    /// Num Lock
    NumLock = 144,
    /// Scroll Lock
    Scroll = 145,
    /// Left Shift
    LeftShift = 160,
    /// Right Shift
    RightShift = 161,
    /// Left Control
    LeftControl = 162,
    /// Right Control
    RightControl = 163,
    /// Left Alt
    LeftAlt = 164,
    /// Right Alt
    RightAlt = 165,
    /// Browser Home
    BrowserHome = 172,
    /// ; key
    OemSemicolon = 186,
    /// = key
    OemPlus = 187,
    /// , key
    OemComma = 188,
    /// - key
    OemMinus = 189,
    /// . key
    OemPeriod = 190,
    /// / key
    OemQuestion = 191,
    /// ` key
    OemTilde = 192,
    /// [ key
    OemOpenBrackets = 219,
    /// \ key
    OemPipe = 220,
    /// ] key
    OemCloseBrackets = 221,
    /// ' key
    OemQuotes = 222,
}

impl Key {
    /// The virtual key code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Top-row digit keys `D0`..=`D9`.
    #[must_use]
    pub const fn is_digit(self) -> bool {
        matches!(self.code(), 48..=57)
    }

    /// Either shift key.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::LeftShift | Self::RightShift)
    }

    /// Code lies in the printable ASCII range 32..=126.
    #[must_use]
    pub const fn is_printable_code(self) -> bool {
        matches!(self.code(), 32..=126)
    }
}

/// Snapshot of every key held down at one instant.
///
/// Stored as a 256-bit set indexed by key code, so iteration is always in
/// ascending code order regardless of the order keys went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    bits: [u64; 4],
}

impl KeyboardState {
    /// A snapshot with no keys down.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    /// Build a snapshot from the given held keys.
    #[must_use]
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        let mut state = Self::new();
        for key in keys {
            state.press(key);
        }
        state
    }

    /// Mark a key as held.
    pub fn press(&mut self, key: Key) {
        let code = usize::from(key.code());
        self.bits[code / 64] |= 1 << (code % 64);
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: Key) {
        let code = usize::from(key.code());
        self.bits[code / 64] &= !(1 << (code % 64));
    }

    /// Check if a key is held.
    #[must_use]
    pub const fn is_key_down(&self, key: Key) -> bool {
        let code = key.code() as usize;
        self.bits[code / 64] & (1 << (code % 64)) != 0
    }

    /// Check if a key is not held.
    #[must_use]
    pub const fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    /// Check if no key is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|word| *word == 0)
    }

    /// Either shift key is held.
    #[must_use]
    pub const fn is_shift_down(&self) -> bool {
        self.is_key_down(Key::LeftShift) || self.is_key_down(Key::RightShift)
    }

    /// Held keys in ascending code order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|key| self.is_key_down(*key))
    }

    /// The held key with the highest code, the one treated as "most recent".
    #[must_use]
    pub fn last_pressed(&self) -> Option<Key> {
        Key::ALL
            .iter()
            .rev()
            .copied()
            .find(|key| self.is_key_down(*key))
    }

    /// Keys held here but not in `previous`.
    pub fn newly_pressed<'a>(&'a self, previous: &'a Self) -> impl Iterator<Item = Key> + 'a {
        self.pressed_keys().filter(|key| previous.is_key_up(*key))
    }
}

/// Mouse button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    /// Button up
    #[default]
    Released,
    /// Button held
    Pressed,
}

impl ButtonState {
    /// Check if the button is held.
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            Self::Pressed
        } else {
            Self::Released
        }
    }
}

/// Snapshot of the mouse at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseState {
    /// Pointer position in screen coordinates
    pub position: Point,
    /// Left button
    pub left: ButtonState,
    /// Right button
    pub right: ButtonState,
    /// Middle button
    pub middle: ButtonState,
}

impl MouseState {
    /// Pointer at `position` with every button released.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Same position, left button set to `state`.
    #[must_use]
    pub const fn with_left(mut self, state: ButtonState) -> Self {
        self.left = state;
        self
    }
}

/// Everything a widget reads during one update tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Keys held this frame
    pub keyboard: KeyboardState,
    /// Mouse position and buttons this frame
    pub mouse: MouseState,
    /// Time since the previous frame
    pub elapsed: Duration,
}

impl FrameInput {
    /// Create a frame input.
    #[must_use]
    pub const fn new(keyboard: KeyboardState, mouse: MouseState, elapsed: Duration) -> Self {
        Self {
            keyboard,
            mouse,
            elapsed,
        }
    }
}
