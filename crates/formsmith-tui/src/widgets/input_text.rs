//! Rendering of text being edited, with a visible cursor cell

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Single line with the cursor drawn at char index `cursor`.
///
/// At the end of the text the cursor is a highlighted blank cell.
pub fn cursor_line(text: &str, cursor: usize, style: Style) -> Line<'static> {
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let at = rest.next().map(String::from).unwrap_or_else(|| " ".into());
    let after: String = rest.collect();

    Line::from(vec![
        Span::styled(before, style),
        Span::styled(at, style.patch(styles::cursor())),
        Span::styled(after, style),
    ])
}

/// `cursor_line` scrolled horizontally so the cursor cell fits in `width`
/// columns. Text past the right edge is left for the renderer to clip.
pub fn cursor_line_window(
    text: &str,
    cursor: usize,
    width: u16,
    style: Style,
) -> Line<'static> {
    let width = usize::from(width.max(1));
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let cell = chars.get(cursor).and_then(|c| c.width()).unwrap_or(1);
    let mut used = cell + chars[..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum::<usize>();
    let mut start = 0;
    while used > width && start < cursor {
        used -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let visible: String = chars[start..].iter().collect();
    cursor_line(&visible, cursor - start, style)
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis
pub fn ellipsize(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if text.width() <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Multi-line text with the cursor drawn on the line that holds it.
///
/// Returns the lines and the index of the cursor line.
pub fn cursor_lines(text: &str, cursor: usize, style: Style) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_row = 0;
    let mut start = 0;
    let mut placed = false;

    for (row, line) in text.split('\n').enumerate() {
        let len = line.chars().count();
        if !placed && cursor <= start + len {
            lines.push(cursor_line(line, cursor - start, style));
            cursor_row = row;
            placed = true;
        } else {
            lines.push(Line::styled(line.to_string(), style));
        }
        start += len + 1;
    }

    (lines, cursor_row)
}
