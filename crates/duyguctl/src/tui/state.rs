//! TUI state - the form controller plus terminal-only concerns
//!
//! Cursor, focus and spinner live here. Every text edit is turned into a
//! full new string and handed to `SentimentForm::on_input_change`, so the
//! controller stays the single owner of the input.

use duygu_common::{SentimentForm, SUGGESTIONS};

/// Braille spinner frames shown next to "Loading..."
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Focusable controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Suggestion(usize),
    Analyze,
    Clear,
}

impl Focus {
    fn order() -> Vec<Focus> {
        let mut order = vec![Focus::Input];
        order.extend((0..SUGGESTIONS.len()).map(Focus::Suggestion));
        order.push(Focus::Analyze);
        order.push(Focus::Clear);
        order
    }

    pub fn next(self) -> Focus {
        let order = Self::order();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    pub fn prev(self) -> Focus {
        let order = Self::order();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }
}

#[derive(Debug, Clone)]
pub struct FormTuiState {
    pub form: SentimentForm,
    /// Cursor position in chars, not bytes
    pub cursor_pos: usize,
    pub focus: Focus,
    pub spinner_frame: usize,
    /// Shown in the status bar
    pub endpoint: String,
}

impl FormTuiState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            form: SentimentForm::new(),
            cursor_pos: 0,
            focus: Focus::Input,
            spinner_frame: 0,
            endpoint: endpoint.into(),
        }
    }

    fn char_count(&self) -> usize {
        self.form.input().chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.form
            .input()
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.form.input().len())
    }

    pub fn insert_char(&mut self, c: char) {
        let mut text = self.form.input().to_string();
        text.insert(self.byte_index(self.cursor_pos), c);
        self.form.on_input_change(text);
        self.cursor_pos += 1;
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, pasted: &str) {
        let flat: String = pasted
            .replace("\r\n", "\n")
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flat.is_empty() {
            return;
        }

        let mut text = self.form.input().to_string();
        text.insert_str(self.byte_index(self.cursor_pos), &flat);
        self.form.on_input_change(text);
        self.cursor_pos += flat.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let mut text = self.form.input().to_string();
        text.remove(self.byte_index(self.cursor_pos - 1));
        self.form.on_input_change(text);
        self.cursor_pos -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor_pos >= self.char_count() {
            return;
        }
        let mut text = self.form.input().to_string();
        text.remove(self.byte_index(self.cursor_pos));
        self.form.on_input_change(text);
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    /// Empty the input through the controller (Ctrl+U)
    pub fn clear_input(&mut self) {
        self.form.on_input_change("");
        self.cursor_pos = 0;
    }

    pub fn click_suggestion(&mut self, index: usize) {
        if self.form.on_suggestion_index(index) {
            self.move_end();
        }
    }

    pub fn clear(&mut self) {
        self.form.on_clear();
        self.cursor_pos = 0;
    }

    /// Advance the spinner while a request is pending
    pub fn tick(&mut self) {
        if self.form.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Input broken into rows of `width` chars. A cursor at the very end
    /// gets an extra cell, which may start a new row.
    pub fn input_rows(&self, width: u16) -> Vec<String> {
        let width = usize::from(width.max(1));
        let mut chars: Vec<char> = self.form.input().chars().collect();
        if self.cursor_pos >= chars.len() {
            chars.push(' ');
        }
        chars.chunks(width).map(|row| row.iter().collect()).collect()
    }

    /// Row of `input_rows` holding the cursor
    pub fn cursor_row(&self, width: u16) -> u16 {
        let row = self.cursor_pos / usize::from(width.max(1));
        u16::try_from(row).unwrap_or(u16::MAX)
    }

    /// Vertical scroll that keeps the cursor row inside a box of `height` rows
    pub fn input_scroll(&self, width: u16, height: u16) -> u16 {
        self.cursor_row(width).saturating_sub(height.saturating_sub(1))
    }
}
