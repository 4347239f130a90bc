//! Single-line edit buffer behind the search field.
//!
//! Characters are stored as `char`s so the cursor is a character index and
//! multi-byte input never splits a code point.

use unicode_width::UnicodeWidthChar;

/// Single-line text buffer with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditState {
    chars: Vec<char>,
    cursor: usize,
}

impl TextEditState {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.chars = s.chars().collect();
        self.cursor = self.chars.len();
    }

    /// The character buffer.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Cursor position (char index, 0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.chars[..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert a character at the cursor and advance.
    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, dropping control characters. Returns
    /// the number of characters inserted.
    pub fn insert_str(&mut self, s: &str) -> usize {
        let mut inserted = 0;
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
            inserted += 1;
        }
        inserted
    }

    /// Delete the character before the cursor (backspace).
    /// Returns true if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the character at the cursor (delete key).
    /// Returns true if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Delete everything before the cursor (Ctrl+U).
    /// Returns true if anything was deleted.
    pub fn kill_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.chars.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_value() {
        let mut ed = TextEditState::new();
        ed.insert_char('h');
        ed.insert_char('i');
        assert_eq!(ed.value(), "hi");
        assert_eq!(ed.cursor(), 2);
    }

    #[test]
    fn insert_in_middle() {
        let mut ed = TextEditState::new();
        ed.set_value("ac");
        ed.move_left();
        ed.insert_char('b');
        assert_eq!(ed.value(), "abc");
        assert_eq!(ed.cursor(), 2);
    }

    #[test]
    fn delete_back_at_start_is_noop() {
        let mut ed = TextEditState::new();
        ed.set_value("x");
        ed.move_home();
        assert!(!ed.delete_back());
        assert_eq!(ed.value(), "x");
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut ed = TextEditState::new();
        ed.set_value("x");
        assert!(!ed.delete_forward());
        ed.move_home();
        assert!(ed.delete_forward());
        assert!(ed.is_empty());
    }

    #[test]
    fn kill_to_start_keeps_tail() {
        let mut ed = TextEditState::new();
        ed.set_value("banana");
        ed.move_left();
        ed.move_left();
        assert!(ed.kill_to_start());
        assert_eq!(ed.value(), "na");
        assert_eq!(ed.cursor(), 0);
        assert!(!ed.kill_to_start());
    }

    #[test]
    fn insert_str_drops_control_chars() {
        let mut ed = TextEditState::new();
        assert_eq!(ed.insert_str("a\nb\tc"), 3);
        assert_eq!(ed.value(), "abc");
    }

    #[test]
    fn multibyte_cursor_is_char_based() {
        let mut ed = TextEditState::new();
        ed.set_value("café");
        assert_eq!(ed.cursor(), 4);
        ed.delete_back();
        assert_eq!(ed.value(), "caf");
    }

    #[test]
    fn cursor_column_counts_wide_chars() {
        let mut ed = TextEditState::new();
        ed.set_value("日本a");
        assert_eq!(ed.cursor_column(), 5);
        ed.move_home();
        ed.move_right();
        assert_eq!(ed.cursor_column(), 2);
    }
}
