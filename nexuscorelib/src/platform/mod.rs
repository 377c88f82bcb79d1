//! Platform detection: classify an OS name into a coarse family.
//!
//! - **classify**: pure classifier over any raw OS name
//! - **os_name / os_family / is_***: the same checks for the current process,
//!   computed once and cached
//! - **PlatformReport**: serializable snapshot of every check
//!
//! ## Example
//!
//! ```rust
//! use nexuscorelib::platform::{self, OsFamily};
//!
//! assert_eq!(platform::classify("SunOS"), OsFamily::Solaris);
//! println!("running on {} ({})", platform::os_name().unwrap_or("?"), platform::os_family());
//! ```

pub mod detect;
pub mod family;

pub use detect::{
    is_linux, is_mac, is_solaris, is_windows, os_family, os_name, PlatformReport, OS_NAME_ENV,
};
pub use family::{classify, OsFamily};
