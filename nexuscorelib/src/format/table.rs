//! ASCII table rendering.
//!
//! A [`Table`] is plain data: header labels and rows of cells, any of which
//! may be absent. [`format_table`] lays it out with aligned columns and an
//! optional border:
//!
//! ```text
//! +-------+----------+------+
//! | Col A | Column B | C    |
//! +-------+----------+------+
//! | 1     | 2        | null |
//! +-------+----------+------+
//! ```
//!
//! Absent headers, cells and whole rows are shown as `null`.

use serde::{Deserialize, Serialize};

use super::text::{indent, pad_right, separator_line_with, text_width, LINE_ENDING};

const NULL_CELL: &str = "null";

pub const DEFAULT_CELL_PADDING: usize = 1;
pub const DEFAULT_BORDER_CHAR: char = '-';
pub const DEFAULT_VERTICAL_CHAR: char = '|';
pub const DEFAULT_CORNER_CHAR: char = '+';

/// Table data: headers plus rows of optional cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers; may be empty
    pub headers: Vec<Option<String>>,
    /// Data rows; `None` is a row that is absent as a whole
    pub rows: Vec<Option<Vec<Option<String>>>>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header labels.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|h| Some(h.into())).collect();
        self
    }

    /// Set header labels, some of which may be absent.
    pub fn header_cells<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|h| h.map(Into::into)).collect();
        self
    }

    /// Append a row of present cells.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(Some(cells.into_iter().map(|c| Some(c.into())).collect()));
        self
    }

    /// Append a row whose cells may be absent.
    pub fn row_cells<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.rows
            .push(Some(cells.into_iter().map(|c| c.map(Into::into)).collect()));
        self
    }

    /// Append a row that is absent as a whole.
    pub fn missing_row(mut self) -> Self {
        self.rows.push(None);
        self
    }

    /// True if the table has neither headers nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of columns the table renders with.
    ///
    /// The header count when headers are present, otherwise the longest row.
    pub fn column_count(&self) -> usize {
        if !self.headers.is_empty() {
            return self.headers.len();
        }
        self.rows
            .iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Render with the given options. Same as [`format_table`].
    pub fn render(&self, options: &TableOptions) -> String {
        format_table(self, options)
    }
}

/// Layout options for [`format_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Indentation level applied to every line
    pub indent_level: usize,
    /// Spaces on each side of a cell's content
    pub cell_padding: usize,
    /// Draw rule lines and vertical separators
    pub border: bool,
    /// Character for horizontal rules
    pub border_char: char,
    /// Character between columns
    pub vertical_char: char,
    /// Character where rules meet column boundaries
    pub corner_char: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            indent_level: 0,
            cell_padding: DEFAULT_CELL_PADDING,
            border: true,
            border_char: DEFAULT_BORDER_CHAR,
            vertical_char: DEFAULT_VERTICAL_CHAR,
            corner_char: DEFAULT_CORNER_CHAR,
        }
    }
}

impl TableOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a borderless table.
    pub fn plain() -> Self {
        Self::default().border(false)
    }

    /// Set indentation level.
    pub fn indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Set cell padding.
    pub fn cell_padding(mut self, padding: usize) -> Self {
        self.cell_padding = padding;
        self
    }

    /// Enable or disable the border.
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Set the horizontal rule character.
    pub fn border_char(mut self, ch: char) -> Self {
        self.border_char = ch;
        self
    }

    /// Set the column separator character.
    pub fn vertical_char(mut self, ch: char) -> Self {
        self.vertical_char = ch;
        self
    }

    /// Set the corner character.
    pub fn corner_char(mut self, ch: char) -> Self {
        self.corner_char = ch;
        self
    }
}

fn cell_text(cell: Option<&String>) -> &str {
    cell.map(String::as_str).unwrap_or(NULL_CELL)
}

/// Cell text for column `i` of a row; short rows and absent rows yield `null`.
fn row_cell(row: Option<&Vec<Option<String>>>, i: usize) -> &str {
    cell_text(row.and_then(|cells| cells.get(i)).and_then(Option::as_ref))
}

/// Compute the content width of each column.
fn column_widths(table: &Table, columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];

    for (i, header) in table.headers.iter().take(columns).enumerate() {
        widths[i] = widths[i].max(text_width(cell_text(header.as_ref())));
    }
    for row in &table.rows {
        for (i, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(text_width(row_cell(row.as_ref(), i)));
        }
    }

    widths
}

/// Render one header or data line.
fn render_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    prefix: &str,
    padding: &str,
    options: &TableOptions,
) -> String {
    let mut line = prefix.to_string();
    if options.border {
        line.push(options.vertical_char);
    }
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        line.push_str(padding);
        line.push_str(&pad_right(cell, *width));
        line.push_str(padding);
        if options.border {
            line.push(options.vertical_char);
        } else if i + 1 < widths.len() {
            line.push(' ');
        }
    }
    line
}

/// Render a table as aligned text.
///
/// Bordered output has a rule above the header, below the header and below
/// the last row. Borderless output separates columns with a single space.
/// The result has no trailing line terminator.
///
/// ```rust
/// use nexuscorelib::format::{format_table, Table, TableOptions, LINE_ENDING};
///
/// let table = Table::new().headers(["Name", "Qty"]).row(["apple", "3"]);
/// let out = format_table(&table, &TableOptions::new());
/// let lines: Vec<&str> = out.split(LINE_ENDING).collect();
/// assert_eq!(lines, vec![
///     "+-------+-----+",
///     "| Name  | Qty |",
///     "+-------+-----+",
///     "| apple | 3   |",
///     "+-------+-----+",
/// ]);
/// ```
pub fn format_table(table: &Table, options: &TableOptions) -> String {
    if table.is_empty() {
        return String::new();
    }
    let columns = table.column_count();
    if columns == 0 {
        return String::new();
    }

    let widths = column_widths(table, columns);
    let prefix = indent(options.indent_level);
    let padding = " ".repeat(options.cell_padding);

    let rule = options.border.then(|| {
        let mut rule = String::new();
        rule.push(options.corner_char);
        for width in &widths {
            rule.push_str(&separator_line_with(
                width + options.cell_padding * 2,
                options.border_char,
            ));
            rule.push(options.corner_char);
        }
        rule
    });

    let mut lines: Vec<String> = Vec::new();
    if let Some(rule) = &rule {
        lines.push(format!("{prefix}{rule}"));
    }

    if !table.headers.is_empty() {
        let headers =
            (0..columns).map(|i| cell_text(table.headers.get(i).and_then(Option::as_ref)));
        lines.push(render_row(headers, &widths, &prefix, &padding, options));
        if let Some(rule) = &rule {
            lines.push(format!("{prefix}{rule}"));
        }
    }

    for row in &table.rows {
        let cells = (0..columns).map(|i| row_cell(row.as_ref(), i));
        lines.push(render_row(cells, &widths, &prefix, &padding, options));
    }

    if let Some(rule) = &rule {
        if !table.rows.is_empty() {
            lines.push(format!("{prefix}{rule}"));
        }
    }

    lines.join(LINE_ENDING)
}
