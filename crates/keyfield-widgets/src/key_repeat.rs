//! Focus and key-hold state machine driving auto-repeat.

use keyfield_core::Key;
use std::time::Duration;

/// Auto-repeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTiming {
    /// How long a key must be held before it starts repeating
    pub initial_delay: Duration,
    /// Time between repeats once repeating
    pub repeat_interval: Duration,
}

impl Default for KeyTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(80),
        }
    }
}

/// Typing state of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingState {
    /// Not focused; keyboard input is ignored.
    #[default]
    Idle,
    /// Focused, with `key` (if any) held for `held`.
    Focused {
        /// Most recent held key
        key: Option<Key>,
        /// Time it has been held
        held: Duration,
        /// Repeat time left over from the previous key, counted toward the
        /// first repeat of this one
        carry: Duration,
    },
    /// Focused and auto-repeating `key`.
    Repeating {
        /// Repeating key
        key: Key,
        /// Time since the last repeat (or since repeating began)
        since_repeat: Duration,
    },
}

/// Keys that never edit the buffer and suspend processing while they are the
/// most recent key held.
#[must_use]
pub const fn is_control_key(key: Key) -> bool {
    matches!(
        key,
        Key::CapsLock
            | Key::Up
            | Key::Down
            | Key::Left
            | Key::Right
            | Key::LeftWindows
            | Key::RightWindows
            | Key::LeftControl
            | Key::RightControl
            | Key::LeftAlt
            | Key::RightAlt
            | Key::Tab
            | Key::Home
            | Key::BrowserHome
            | Key::End
            | Key::PageUp
            | Key::PageDown
            | Key::Escape
            | Key::Insert
            | Key::Pause
            | Key::PrintScreen
            | Key::F1
            | Key::F2
            | Key::F3
            | Key::F4
            | Key::F5
            | Key::F6
            | Key::F7
            | Key::F8
            | Key::F9
            | Key::F10
            | Key::F11
            | Key::F12
    )
}

/// Tracks focus and how long the most recent key has been held.
///
/// A key change drops back to [`TypingState::Focused`] with a fresh hold
/// timer but keeps the repeat timer, so switching keys mid-repeat counts the
/// time already accumulated toward the new key's first repeat. Only releasing
/// every key (or losing focus) clears both timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyRepeat {
    timing: KeyTiming,
    state: TypingState,
}

impl KeyRepeat {
    /// Create an unfocused tracker.
    #[must_use]
    pub const fn new(timing: KeyTiming) -> Self {
        Self {
            timing,
            state: TypingState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TypingState {
        self.state
    }

    /// Timing in use.
    #[must_use]
    pub const fn timing(&self) -> KeyTiming {
        self.timing
    }

    /// Whether keyboard input is being accepted.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        !matches!(self.state, TypingState::Idle)
    }

    /// The key currently being timed.
    #[must_use]
    pub const fn key(&self) -> Option<Key> {
        match self.state {
            TypingState::Idle => None,
            TypingState::Focused { key, .. } => key,
            TypingState::Repeating { key, .. } => Some(key),
        }
    }

    /// Start accepting input. Has no effect when already focused.
    pub fn focus(&mut self) {
        if !self.is_focused() {
            self.state = TypingState::Focused {
                key: None,
                held: Duration::ZERO,
                carry: Duration::ZERO,
            };
        }
    }

    /// Stop accepting input and forget any held key.
    pub fn blur(&mut self) {
        self.state = TypingState::Idle;
    }

    /// Record this frame's most recent key, restarting the hold timer if it
    /// differs from the key being timed. `None` clears the repeat timer too.
    pub fn observe(&mut self, last: Option<Key>) {
        if !self.is_focused() || self.key() == last {
            return;
        }
        let carry = match (last, self.state) {
            (None, _) | (_, TypingState::Idle) => Duration::ZERO,
            (Some(_), TypingState::Focused { carry, .. }) => carry,
            (Some(_), TypingState::Repeating { since_repeat, .. }) => since_repeat,
        };
        self.state = TypingState::Focused {
            key: last,
            held: Duration::ZERO,
            carry,
        };
    }

    /// Advance the timers by `elapsed`, returning the key to repeat if a
    /// repeat fires this frame.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Key> {
        match self.state {
            TypingState::Idle | TypingState::Focused { key: None, .. } => None,
            TypingState::Focused {
                key: Some(key),
                held,
                carry,
            } => {
                let held = held.saturating_add(elapsed);
                if held > self.timing.initial_delay {
                    self.repeat(key, carry.saturating_add(elapsed))
                } else {
                    self.state = TypingState::Focused {
                        key: Some(key),
                        held,
                        carry,
                    };
                    None
                }
            }
            TypingState::Repeating { key, since_repeat } => {
                self.repeat(key, since_repeat.saturating_add(elapsed))
            }
        }
    }

    fn repeat(&mut self, key: Key, since_repeat: Duration) -> Option<Key> {
        if since_repeat > self.timing.repeat_interval {
            self.state = TypingState::Repeating {
                key,
                since_repeat: Duration::ZERO,
            };
            Some(key)
        } else {
            self.state = TypingState::Repeating { key, since_repeat };
            None
        }
    }
}
