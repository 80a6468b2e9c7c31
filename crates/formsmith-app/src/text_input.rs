//! Cursor-based single-buffer text editing.
//!
//! The cursor is a char index (not a byte index) so multi-byte input such as
//! accented names edits correctly. Operations take the current text and
//! return the edited copy; the caller routes it through
//! `FieldList::update` like any other field change.

/// Edit operation on a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Drop everything before the cursor (Ctrl+U)
    ClearToStart,
}

/// Char-indexed cursor into a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCursor {
    pos: usize,
}

impl TextCursor {
    /// Cursor placed after the last char of `text`
    pub fn at_end(text: &str) -> Self {
        Self {
            pos: text.chars().count(),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Apply `edit` to `text`. Returns the new text when it changed.
    pub fn apply(&mut self, text: &str, edit: TextEdit) -> Option<String> {
        let len = text.chars().count();
        self.pos = self.pos.min(len);

        match edit {
            TextEdit::Insert(c) => {
                let mut out = String::with_capacity(text.len() + c.len_utf8());
                out.push_str(&text[..byte_index(text, self.pos)]);
                out.push(c);
                out.push_str(&text[byte_index(text, self.pos)..]);
                self.pos += 1;
                Some(out)
            }
            TextEdit::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let start = byte_index(text, self.pos - 1);
                let end = byte_index(text, self.pos);
                self.pos -= 1;
                Some(format!("{}{}", &text[..start], &text[end..]))
            }
            TextEdit::Delete => {
                if self.pos >= len {
                    return None;
                }
                let start = byte_index(text, self.pos);
                let end = byte_index(text, self.pos + 1);
                Some(format!("{}{}", &text[..start], &text[end..]))
            }
            TextEdit::Left => {
                self.pos = self.pos.saturating_sub(1);
                None
            }
            TextEdit::Right => {
                self.pos = (self.pos + 1).min(len);
                None
            }
            TextEdit::Home => {
                self.pos = 0;
                None
            }
            TextEdit::End => {
                self.pos = len;
                None
            }
            TextEdit::ClearToStart => {
                if self.pos == 0 {
                    return None;
                }
                let rest = text[byte_index(text, self.pos)..].to_string();
                self.pos = 0;
                Some(rest)
            }
        }
    }
}

/// Byte offset of the `char_pos`-th char, or `text.len()` past the end
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
