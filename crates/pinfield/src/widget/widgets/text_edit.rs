//! Single-line text editing buffer.
//!
//! [`TextEdit`] holds the text, a cursor, and an optional maximum length,
//! and turns key presses into edits. It draws nothing; widgets embed it and
//! render its contents their own way.
//!
//! Lengths and positions visible to callers are counted in grapheme
//! clusters, so a character built from several code points (an emoji with
//! a skin tone modifier, a letter with a combining accent) counts once.
//!
//! # Signals
//!
//! - `text_changed(String)`: emitted after every edit that changes the text
//! - `return_pressed(())`: emitted when Enter is pressed

use pinfield_core::Signal;
use pinfield_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use crate::widget::events::{Key, KeyPressEvent};

/// What a key press did to a [`TextEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// The key is not an editing key; let it propagate.
    Ignored,
    /// The key was consumed without changing the text (cursor movement,
    /// or an insert rejected by the length limit).
    Handled,
    /// The text changed.
    TextChanged,
    /// Enter was pressed.
    Submitted,
}

impl EditAction {
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A single-line text buffer with grapheme-aware editing.
pub struct TextEdit {
    text: String,
    /// Cursor position as a byte offset, always on a grapheme boundary.
    cursor_pos: usize,
    /// Maximum length in graphemes.
    max_length: Option<usize>,

    /// The full text after each edit.
    pub text_changed: Signal<String>,

    /// Enter.
    pub return_pressed: Signal<()>,
}

impl Default for TextEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEdit {
    /// Create an empty buffer with no length limit.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            max_length: None,
            text_changed: Signal::new(),
            return_pressed: Signal::new(),
        }
    }

    /// Limit the buffer to `max` graphemes.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in graphemes, not bytes.
    pub fn text_length(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn grapheme_at(&self, index: usize) -> Option<&str> {
        self.text.graphemes(true).nth(index)
    }

    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.text.graphemes(true)
    }

    /// Replace the text content and move the cursor to the end.
    ///
    /// Text beyond the maximum length is dropped. Returns `true` if the
    /// text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let mut new_text = text.into();

        if let Some(max) = self.max_length {
            truncate_graphemes(&mut new_text, max);
        }

        if self.text == new_text {
            self.cursor_pos = self.text.len();
            return false;
        }

        self.text = new_text;
        self.cursor_pos = self.text.len();
        self.emit_changed();
        true
    }

    /// Clear all text. Returns `true` if there was any.
    pub fn clear(&mut self) -> bool {
        self.set_text(String::new())
    }

    // =========================================================================
    // Length Limit
    // =========================================================================

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set the maximum text length, truncating the current text to fit.
    ///
    /// Returns `true` if the text was truncated.
    pub fn set_max_length(&mut self, max: Option<usize>) -> bool {
        self.max_length = max;
        match max {
            Some(max) if self.text_length() > max => {
                let mut truncated = self.text.clone();
                truncate_graphemes(&mut truncated, max);
                self.set_text(truncated)
            }
            _ => false,
        }
    }

    /// Number of graphemes that can still be inserted.
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.max_length
            .map(|max| max.saturating_sub(self.text_length()))
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Byte offset of the cursor.
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.prev_grapheme_boundary(self.cursor_pos);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_pos = self.next_grapheme_boundary(self.cursor_pos);
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_pos = self.text.len();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert at the cursor. Input longer than the remaining capacity keeps
    /// its leading graphemes; `false` when nothing went in.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut inserted = text.to_owned();
        if let Some(remaining) = self.remaining_capacity() {
            if remaining == 0 {
                tracing::trace!(target: targets::WIDGET, "text edit full, dropping input");
                return false;
            }
            truncate_graphemes(&mut inserted, remaining);
        }

        self.text.insert_str(self.cursor_pos, &inserted);
        self.cursor_pos += inserted.len();
        self.emit_changed();
        true
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }

        let prev_pos = self.prev_grapheme_boundary(self.cursor_pos);
        self.text.replace_range(prev_pos..self.cursor_pos, "");
        self.cursor_pos = prev_pos;
        self.emit_changed();
        true
    }

    /// Forward delete.
    pub fn delete_char_after(&mut self) -> bool {
        if self.cursor_pos >= self.text.len() {
            return false;
        }

        let next_pos = self.next_grapheme_boundary(self.cursor_pos);
        self.text.replace_range(self.cursor_pos..next_pos, "");
        self.emit_changed();
        true
    }

    // =========================================================================
    // Key Handling
    // =========================================================================

    /// Apply a key press to the buffer.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> EditAction {
        let shortcut = event.modifiers.is_shortcut();

        match event.key {
            Key::ArrowLeft => {
                self.move_cursor_left();
                EditAction::Handled
            }
            Key::ArrowRight => {
                self.move_cursor_right();
                EditAction::Handled
            }
            Key::Home => {
                self.move_cursor_to_start();
                EditAction::Handled
            }
            Key::End => {
                self.move_cursor_to_end();
                EditAction::Handled
            }
            Key::Backspace => changed_or_handled(self.delete_char_before()),
            Key::Delete => changed_or_handled(self.delete_char_after()),
            Key::Enter => {
                self.return_pressed.emit(());
                EditAction::Submitted
            }
            Key::Escape | Key::Tab => EditAction::Ignored,
            _ => {
                if event.text.is_empty() || shortcut || event.text.chars().any(char::is_control) {
                    EditAction::Ignored
                } else {
                    changed_or_handled(self.insert_text(&event.text))
                }
            }
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn emit_changed(&self) {
        self.text_changed.emit(self.text.clone());
    }

    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .take_while(|&offset| offset < pos)
            .last()
            .unwrap_or(0)
    }

    fn next_grapheme_boundary(&self, pos: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .map(|(offset, grapheme)| offset + grapheme.len())
            .find(|&end| end > pos)
            .unwrap_or(self.text.len())
    }
}

fn changed_or_handled(changed: bool) -> EditAction {
    if changed {
        EditAction::TextChanged
    } else {
        EditAction::Handled
    }
}

/// Cut `text` down to at most `max` graphemes.
fn truncate_graphemes(text: &mut String, max: usize) {
    if let Some((offset, _)) = text.grapheme_indices(true).nth(max) {
        text.truncate(offset);
    }
}

static_assertions::assert_impl_all!(TextEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::KeyboardModifiers;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_insert_and_length() {
        let mut edit = TextEdit::new();
        assert!(edit.insert_text("12"));
        assert!(edit.insert_text("3"));
        assert_eq!(edit.text(), "123");
        assert_eq!(edit.text_length(), 3);
        assert_eq!(edit.cursor_position(), 3);
        assert!(!edit.insert_text(""));
    }

    #[test]
    fn test_max_length_truncates_insert() {
        let mut edit = TextEdit::new().with_max_length(4);
        assert!(edit.insert_text("123456"));
        assert_eq!(edit.text(), "1234");
        assert_eq!(edit.remaining_capacity(), Some(0));
        assert!(!edit.insert_text("5"));
        assert_eq!(edit.text(), "1234");
    }

    #[test]
    fn test_set_max_length_truncates_text() {
        let mut edit = TextEdit::new();
        edit.set_text("abcdef");
        assert!(edit.set_max_length(Some(3)));
        assert_eq!(edit.text(), "abc");
        assert!(!edit.set_max_length(Some(10)));
        assert!(!edit.set_max_length(None));
    }

    #[test]
    fn test_graphemes_count_once() {
        let mut edit = TextEdit::new().with_max_length(2);
        // "e" + combining acute accent, then a flag made of two regional indicators.
        edit.set_text("e\u{301}\u{1F1EF}\u{1F1F5}x");
        assert_eq!(edit.text_length(), 2);
        assert_eq!(edit.grapheme_at(0), Some("e\u{301}"));
        assert_eq!(edit.grapheme_at(1), Some("\u{1F1EF}\u{1F1F5}"));
        assert_eq!(edit.grapheme_at(2), None);

        assert!(edit.delete_char_before());
        assert_eq!(edit.text(), "e\u{301}");
    }

    #[test]
    fn test_delete_after_cursor() {
        let mut edit = TextEdit::new();
        edit.set_text("abc");
        assert!(!edit.delete_char_after());

        edit.move_cursor_left();
        edit.move_cursor_left();
        assert!(edit.delete_char_after());
        assert_eq!(edit.text(), "ac");
        assert_eq!(edit.cursor_position(), 1);

        edit.move_cursor_to_start();
        assert!(!edit.delete_char_before());
        edit.move_cursor_to_end();
        assert_eq!(edit.cursor_position(), 2);
    }

    #[test]
    fn test_set_text_same_value_is_noop() {
        let mut edit = TextEdit::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        edit.text_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(edit.set_text("42"));
        assert!(!edit.set_text("42"));
        assert!(edit.clear());
        assert!(!edit.clear());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_key_presses() {
        let mut edit = TextEdit::new();

        let action = edit.handle_key_press(&KeyPressEvent::typed(Key::Digit1, "1"));
        assert_eq!(action, EditAction::TextChanged);

        let action = edit.handle_key_press(&KeyPressEvent::typed(Key::Digit2, "2"));
        assert_eq!(action, EditAction::TextChanged);
        assert_eq!(edit.text(), "12");

        let action = edit.handle_key_press(&KeyPressEvent::key(Key::Backspace));
        assert_eq!(action, EditAction::TextChanged);
        assert_eq!(edit.text(), "1");

        let action = edit.handle_key_press(&KeyPressEvent::key(Key::Delete));
        assert_eq!(action, EditAction::Handled);

        let action = edit.handle_key_press(&KeyPressEvent::key(Key::Escape));
        assert_eq!(action, EditAction::Ignored);
        assert!(!action.is_handled());

        let ctrl_a = KeyPressEvent::new(Key::A, KeyboardModifiers::CTRL, "a", false);
        assert_eq!(edit.handle_key_press(&ctrl_a), EditAction::Ignored);

        let shift_a = KeyPressEvent::new(Key::A, KeyboardModifiers::SHIFT, "A", false);
        assert_eq!(edit.handle_key_press(&shift_a), EditAction::TextChanged);
        assert_eq!(edit.text(), "1A");
    }

    #[test]
    fn test_enter_emits_return_pressed() {
        let mut edit = TextEdit::new();
        let pressed = Arc::new(AtomicUsize::new(0));
        let pressed_clone = pressed.clone();
        edit.return_pressed.connect(move |_| {
            pressed_clone.fetch_add(1, Ordering::SeqCst);
        });

        let action = edit.handle_key_press(&KeyPressEvent::key(Key::Enter));
        assert_eq!(action, EditAction::Submitted);
        assert_eq!(pressed.load(Ordering::SeqCst), 1);
    }
}
