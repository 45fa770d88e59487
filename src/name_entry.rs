use crate::input::{Input, Key};
use crate::scores::{Name, NAME_LEN};

const FIRST_CHAR: u8 = b'A';
const LAST_CHAR: u8 = b'Z';

/// Cursor-based editor for a three letter name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameEntry {
    name: Name,
    selected: usize,
}

impl Default for NameEntry {
    fn default() -> Self {
        NameEntry { name: Name::DEFAULT, selected: 0 }
    }
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_right(&mut self) {
        self.selected = if self.selected == NAME_LEN - 1 { 0 } else { self.selected + 1 };
    }

    pub fn move_left(&mut self) {
        self.selected = if self.selected == 0 { NAME_LEN - 1 } else { self.selected - 1 };
    }

    pub fn next_char(&mut self) {
        let c = self.current();
        self.name.set(self.selected, if c == LAST_CHAR { FIRST_CHAR } else { c + 1 });
    }

    pub fn prev_char(&mut self) {
        let c = self.current();
        self.name.set(self.selected, if c == FIRST_CHAR { LAST_CHAR } else { c - 1 });
    }

    fn current(&self) -> u8 {
        self.name.get(self.selected).unwrap_or(FIRST_CHAR)
    }

    /// Applies every held direction once. Opposite directions are not
    /// exclusive, so left+right held together both fire.
    ///
    /// Returns whether any direction fired.
    pub fn apply(&mut self, input: &dyn Input) -> bool {
        let mut fired = false;
        if input.is_down(Key::Right) {
            self.move_right();
            fired = true;
        }
        if input.is_down(Key::Left) {
            self.move_left();
            fired = true;
        }
        if input.is_down(Key::Up) {
            self.next_char();
            fired = true;
        }
        if input.is_down(Key::Down) {
            self.prev_char();
            fired = true;
        }
        fired
    }
}
