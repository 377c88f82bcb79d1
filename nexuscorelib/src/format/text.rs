//! Padding, indentation and separator lines.
//!
//! Widths are measured in characters (Unicode scalar values). A zero width
//! or level yields an empty string rather than an error, and absent text
//! (`None`) is treated as the empty string.

use std::iter;

/// Platform line terminator used to join formatted lines.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator used to join formatted lines.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Characters per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;
/// Character repeated for each indentation level.
pub const DEFAULT_INDENT_CHAR: char = ' ';
/// Character used to pad text to a width.
pub const DEFAULT_PAD_CHAR: char = ' ';
/// Character repeated in separator lines.
pub const DEFAULT_SEPARATOR_CHAR: char = '-';

/// Display width of `text` in characters.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn repeat_char(ch: char, count: usize) -> String {
    iter::repeat(ch).take(count).collect()
}

/// Pad `text` on the right with spaces to `width` characters.
///
/// Text that is already `width` characters or wider is returned unchanged;
/// nothing is ever truncated.
///
/// ```rust
/// use nexuscorelib::format::pad_right;
///
/// assert_eq!(pad_right("ab", 4), "ab  ");
/// assert_eq!(pad_right("abcdef", 4), "abcdef");
/// assert_eq!(pad_right("ab", 0), "");
/// ```
pub fn pad_right<'a>(text: impl Into<Option<&'a str>>, width: usize) -> String {
    pad_right_with(text, width, DEFAULT_PAD_CHAR)
}

/// Pad `text` on the right with `pad` to `width` characters.
pub fn pad_right_with<'a>(text: impl Into<Option<&'a str>>, width: usize, pad: char) -> String {
    if width == 0 {
        return String::new();
    }
    let text = text.into().unwrap_or("");
    let len = text_width(text);
    if len >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + (width - len) * pad.len_utf8());
    padded.push_str(text);
    padded.extend(iter::repeat(pad).take(width - len));
    padded
}

/// Pad `text` on the left with spaces to `width` characters.
pub fn pad_left<'a>(text: impl Into<Option<&'a str>>, width: usize) -> String {
    pad_left_with(text, width, DEFAULT_PAD_CHAR)
}

/// Pad `text` on the left with `pad` to `width` characters.
pub fn pad_left_with<'a>(text: impl Into<Option<&'a str>>, width: usize, pad: char) -> String {
    if width == 0 {
        return String::new();
    }
    let text = text.into().unwrap_or("");
    let len = text_width(text);
    if len >= width {
        return text.to_string();
    }
    let mut padded = repeat_char(pad, width - len);
    padded.push_str(text);
    padded
}

/// Indentation string for `level` using four spaces per level.
pub fn indent(level: usize) -> String {
    indent_with(level, DEFAULT_INDENT_WIDTH, DEFAULT_INDENT_CHAR)
}

/// Indentation string of `level * chars_per_level` copies of `ch`.
pub fn indent_with(level: usize, chars_per_level: usize, ch: char) -> String {
    if level == 0 || chars_per_level == 0 {
        return String::new();
    }
    repeat_char(ch, level.saturating_mul(chars_per_level))
}

/// Prefix every line of `text` with the indentation for `level`.
///
/// ```rust
/// use nexuscorelib::format::{indent_lines, LINE_ENDING};
///
/// let indented = indent_lines("Line 1\nLine 2", 1);
/// assert_eq!(indented, format!("    Line 1{LINE_ENDING}    Line 2"));
/// ```
pub fn indent_lines<'a>(text: impl Into<Option<&'a str>>, level: usize) -> String {
    indent_lines_with(text, level, DEFAULT_INDENT_WIDTH, DEFAULT_INDENT_CHAR)
}

/// Prefix every line of `text` with `indent_with(level, chars_per_level, ch)`.
///
/// Any line-break sequence splits lines, and a trailing break keeps its
/// (indented) empty last line. Lines are rejoined with [`LINE_ENDING`].
/// Level zero returns the text unchanged.
pub fn indent_lines_with<'a>(
    text: impl Into<Option<&'a str>>,
    level: usize,
    chars_per_level: usize,
    ch: char,
) -> String {
    let text = text.into().unwrap_or("");
    if text.is_empty() || level == 0 {
        return text.to_string();
    }
    let prefix = indent_with(level, chars_per_level, ch);
    if prefix.is_empty() {
        return text.to_string();
    }

    split_line_breaks(text)
        .into_iter()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

/// Split on every line-break sequence, keeping a trailing empty segment.
///
/// `\r\n` counts as a single break; so do lone `\r`, `\n`, vertical tab,
/// form feed, NEL and the Unicode line/paragraph separators.
pub(crate) fn split_line_breaks(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            '\n' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                lines.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);
    lines
}

/// A line of `width` dashes.
pub fn separator_line(width: usize) -> String {
    separator_line_with(width, DEFAULT_SEPARATOR_CHAR)
}

/// A line of `width` copies of `ch`.
pub fn separator_line_with(width: usize, ch: char) -> String {
    repeat_char(ch, width)
}
