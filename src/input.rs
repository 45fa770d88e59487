use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::cooldown::Clock;

/// Logical keys the score screen listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Cancel,
    Confirm,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Esc => Some(Key::Cancel),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Key::Confirm),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
            _ => None,
        }
    }
}

pub trait Input {
    fn is_down(&self, key: Key) -> bool;
}

/// Held-key state rebuilt from terminal key events.
///
/// Most terminals only report presses and auto-repeats, so a key stays down
/// for `hold` after its last event. Release events, when the terminal sends
/// them, clear the key at once.
pub struct KeyState {
    clock: Rc<dyn Clock>,
    hold: Duration,
    last_seen: HashMap<Key, Instant>,
}

impl KeyState {
    pub fn new(clock: Rc<dyn Clock>, hold: Duration) -> Self {
        KeyState { clock, hold, last_seen: HashMap::new() }
    }

    pub fn handle(&mut self, event: KeyEvent) {
        let Some(key) = Key::from_code(event.code) else { return };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, self.clock.now());
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key);
            }
        }
    }
}

impl Input for KeyState {
    fn is_down(&self, key: Key) -> bool {
        self.last_seen
            .get(&key)
            .is_some_and(|&at| self.clock.now().duration_since(at) < self.hold)
    }
}

#[cfg(test)]
pub use held::HeldKeys;

#[cfg(test)]
mod held {
    use super::{Input, Key};

    /// Fixed set of held keys for driving screens in tests.
    #[derive(Clone, Default)]
    pub struct HeldKeys(Vec<Key>);

    impl HeldKeys {
        pub fn none() -> Self {
            Self::default()
        }

        pub fn of(keys: &[Key]) -> Self {
            HeldKeys(keys.to_vec())
        }
    }

    impl Input for HeldKeys {
        fn is_down(&self, key: Key) -> bool {
            self.0.contains(&key)
        }
    }
}
