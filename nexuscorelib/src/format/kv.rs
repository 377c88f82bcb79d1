//! Aligned key-value listings.

use std::fmt;

use super::text::{indent, pad_right, text_width, LINE_ENDING};

/// Text placed between a key and its value.
pub const DEFAULT_KV_SEPARATOR: &str = ": ";

/// Renders an optional value, writing `null` when absent.
///
/// Tables and key-value listings show missing values as the literal text
/// `null` so they stay visible in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNull<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

impl<T> From<Option<T>> for OrNull<T> {
    fn from(value: Option<T>) -> Self {
        OrNull(value)
    }
}

/// Options for [`format_key_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueOptions {
    /// Indentation level applied to every line
    pub indent_level: usize,
    /// Text placed between the padded key and the value
    pub separator: String,
}

impl Default for KeyValueOptions {
    fn default() -> Self {
        Self {
            indent_level: 0,
            separator: DEFAULT_KV_SEPARATOR.to_string(),
        }
    }
}

impl KeyValueOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation level.
    pub fn indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Set the key/value separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Format entries as one `key<sep>value` line each, values aligned.
///
/// Keys are right-padded to the longest key; entries keep their iteration
/// order. Wrap optional keys or values in [`OrNull`] to print `null`.
///
/// ```rust
/// use nexuscorelib::format::{format_key_value, KeyValueOptions, LINE_ENDING};
///
/// let out = format_key_value([("Key1", "Value1"), ("LongerKey", "Value2")], &KeyValueOptions::new());
/// assert_eq!(out, format!("Key1     : Value1{LINE_ENDING}LongerKey: Value2"));
/// ```
pub fn format_key_value<I, K, V>(entries: I, options: &KeyValueOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: fmt::Display,
    V: fmt::Display,
{
    let rendered: Vec<(String, String)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if rendered.is_empty() {
        return String::new();
    }

    let key_width = rendered
        .iter()
        .map(|(k, _)| text_width(k))
        .max()
        .unwrap_or(0);
    let prefix = indent(options.indent_level);

    rendered
        .iter()
        .map(|(k, v)| {
            format!(
                "{prefix}{}{}{v}",
                pad_right(k.as_str(), key_width),
                options.separator
            )
        })
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}
