//! Row counting for word-wrapped text
//!
//! Paragraphs rendered with `Wrap { trim: false }` need their height known
//! up front (modal sizing, card heights, scroll bounds). The count follows
//! the same greedy word wrapping: whitespace that falls on a break is
//! dropped, and a word wider than the row is split across rows. When in
//! doubt it errs on the high side, so the tail of the text is never
//! unreachable.

use unicode_width::UnicodeWidthChar;

/// Rows `text` occupies when wrapped at `width` columns
pub fn wrapped_rows(text: &str, width: u16) -> usize {
    let width = usize::from(width.max(1));
    text.split('\n').map(|line| line_rows(line, width)).sum()
}

/// Wrapped row holding the cursor at char index `cursor`
pub fn cursor_row(text: &str, cursor: usize, width: u16) -> usize {
    let width = usize::from(width.max(1));
    let mut rows = 0;
    let mut start = 0;

    for line in text.split('\n') {
        let len = line.chars().count();
        if cursor <= start + len {
            // Count up to and including the cursor cell
            let mut prefix: String = line.chars().take(cursor - start).collect();
            prefix.push('x');
            return rows + line_rows(&prefix, width) - 1;
        }
        rows += line_rows(line, width);
        start += len + 1;
    }

    rows.saturating_sub(1)
}

struct RowCounter {
    width: usize,
    rows: usize,
    col: usize,
}

impl RowCounter {
    fn push(&mut self, gap: usize, word: usize) {
        if self.col > 0 && self.col + gap + word > self.width {
            self.rows += 1;
            self.col = 0;
        } else {
            self.col += gap;
        }

        self.col += word;
        while self.col > self.width {
            self.rows += 1;
            self.col -= self.width;
        }
    }
}

fn line_rows(line: &str, width: usize) -> usize {
    let mut counter = RowCounter {
        width,
        rows: 1,
        col: 0,
    };
    let (mut gap, mut word) = (0, 0);

    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if ch.is_whitespace() {
            if word > 0 {
                counter.push(gap, word);
                gap = 0;
                word = 0;
            }
            gap += w;
        } else {
            word += w;
        }
    }
    if gap > 0 || word > 0 {
        counter.push(gap, word);
    }

    counter.rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_take_one_row_each() {
        assert_eq!(wrapped_rows("Name: Dr. Smith", 40), 1);
        assert_eq!(wrapped_rows("A: 1\nB: 2\nC: 3", 40), 3);
        assert_eq!(wrapped_rows("", 40), 1);
    }

    #[test]
    fn test_words_wrap_at_width() {
        // "aaaa bbbb" fits in 9, breaks at 8
        assert_eq!(wrapped_rows("aaaa bbbb", 9), 1);
        assert_eq!(wrapped_rows("aaaa bbbb", 8), 2);
        assert_eq!(wrapped_rows("aaaa bbbb cccc", 9), 2);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrapped_rows(&"x".repeat(25), 10), 3);
        assert_eq!(wrapped_rows(&"x".repeat(20), 10), 2);
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(wrapped_rows("日本語日本語", 6), 2);
    }

    #[test]
    fn test_long_summary_line() {
        let words: Vec<String> = (0..60).map(|i| format!("w{:02}", i)).collect();
        let line = format!("Bio: {} ENDMARK", words.join(" "));
        // 252 columns of short words can never fit in fewer than 4 rows of 68
        assert!(wrapped_rows(&line, 68) >= 4);
    }

    #[test]
    fn test_cursor_row_follows_wrapping() {
        assert_eq!(cursor_row("aaaa bbbb", 0, 8), 0);
        assert_eq!(cursor_row("aaaa bbbb", 9, 8), 1);
        assert_eq!(cursor_row("one\ntwo", 5, 20), 1);
        assert_eq!(cursor_row("one\n", 4, 20), 1);
    }
}
