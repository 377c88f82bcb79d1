//! # nexuscorelib
//!
//! Small, stateless utility helpers for command-line programs.
//!
//! ## Overview
//!
//! The crate is three independent modules of free functions:
//!
//! - **platform**: classify an OS name into a coarse family (Windows, Mac,
//!   Linux, Solaris, Unknown) and detect the family of the current process
//! - **format**: padding, indentation, separator lines, aligned key-value
//!   listings and ASCII tables, all returning `String`s
//! - **files**: whole-file and line-based reads and writes, directory
//!   creation, existence checks and deletion, with typed errors
//!
//! Nothing here keeps state between calls except the OS name, which is
//! resolved once and cached for the life of the process.
//!
//! ## Example
//!
//! ```rust
//! use nexuscorelib::format::{format_table, Table, TableOptions};
//! use nexuscorelib::platform::{classify, OsFamily};
//!
//! assert_eq!(classify("Linux"), OsFamily::Linux);
//!
//! let table = Table::new()
//!     .headers(["OS", "Family"])
//!     .row(["SunOS", &classify("SunOS").to_string()]);
//! println!("{}", format_table(&table, &TableOptions::new()));
//! ```

pub mod error;
pub mod files;
pub mod format;
pub mod platform;

pub use encoding_rs;
pub use error::NexusError;
pub use files::WriteMode;
pub use format::{format_key_value, format_table, KeyValueOptions, OrNull, Table, TableOptions};
pub use platform::{classify, os_family, os_name, OsFamily, PlatformReport};

/// Result type for nexuscorelib operations
pub type Result<T> = std::result::Result<T, NexusError>;
