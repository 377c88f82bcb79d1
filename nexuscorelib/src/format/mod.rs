//! Console text formatting.
//!
//! Every function here is pure and returns a `String`, leaving it to the
//! caller to decide where the output goes:
//!
//! - **text**: padding, indentation, separator lines
//! - **kv**: aligned key-value listings
//! - **table**: ASCII tables with optional borders
//!
//! ## Example
//!
//! ```rust
//! use nexuscorelib::format::{format_key_value, indent_lines, KeyValueOptions};
//!
//! let summary = format_key_value([("files", 3), ("lines", 120)], &KeyValueOptions::new());
//! println!("Summary:\n{}", indent_lines(summary.as_str(), 1));
//! ```

pub mod kv;
pub mod table;
pub mod text;

pub use kv::{format_key_value, KeyValueOptions, OrNull, DEFAULT_KV_SEPARATOR};
pub use table::{format_table, Table, TableOptions};
pub use text::{
    indent, indent_lines, indent_lines_with, indent_with, pad_left, pad_left_with, pad_right,
    pad_right_with, separator_line, separator_line_with, LINE_ENDING,
};
