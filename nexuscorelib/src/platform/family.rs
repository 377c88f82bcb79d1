//! OS family classification from a raw OS name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name used when no OS name is available.
pub(crate) const UNKNOWN_OS_NAME: &str = "unknown";

/// Coarse operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    /// Any Windows release
    Windows,
    /// macOS / Mac OS X
    Mac,
    /// Linux and other Unix-like systems (AIX, generic *nix)
    Linux,
    /// Solaris (SunOS)
    Solaris,
    /// Anything else
    Unknown,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "Windows",
            OsFamily::Mac => "Mac",
            OsFamily::Linux => "Linux",
            OsFamily::Solaris => "Solaris",
            OsFamily::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

impl FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(OsFamily::Windows),
            "mac" | "macos" => Ok(OsFamily::Mac),
            "linux" | "unix" => Ok(OsFamily::Linux),
            "solaris" | "sunos" => Ok(OsFamily::Solaris),
            "unknown" => Ok(OsFamily::Unknown),
            _ => Err(format!("Unknown OS family: {}", s)),
        }
    }
}

pub(crate) fn is_windows_name(lower: &str) -> bool {
    lower.contains("win")
}

pub(crate) fn is_mac_name(lower: &str) -> bool {
    lower.contains("mac")
}

pub(crate) fn is_linux_name(lower: &str) -> bool {
    lower.contains("nix") || lower.contains("nux") || lower.contains("aix")
}

pub(crate) fn is_solaris_name(lower: &str) -> bool {
    lower.contains("sunos")
}

/// Lower-case a raw OS name, mapping an absent name to `"unknown"`.
pub(crate) fn normalize(raw: Option<&str>) -> String {
    raw.unwrap_or(UNKNOWN_OS_NAME).to_lowercase()
}

/// Classify a raw OS name into an [`OsFamily`].
///
/// Matching is case-insensitive and ordered; the first hit wins:
/// `win`, then `mac`, then `nix`/`nux`/`aix`, then `sunos`. Mac is tested
/// before the Unix-like substrings because some macOS names contain them.
///
/// ```rust
/// use nexuscorelib::platform::{classify, OsFamily};
///
/// assert_eq!(classify("Windows 10"), OsFamily::Windows);
/// assert_eq!(classify("Mac OS X"), OsFamily::Mac);
/// assert_eq!(classify(None::<&str>), OsFamily::Unknown);
/// ```
pub fn classify<'a>(raw_os_name: impl Into<Option<&'a str>>) -> OsFamily {
    let lower = normalize(raw_os_name.into());

    if is_windows_name(&lower) {
        OsFamily::Windows
    } else if is_mac_name(&lower) {
        OsFamily::Mac
    } else if is_linux_name(&lower) {
        OsFamily::Linux
    } else if is_solaris_name(&lower) {
        OsFamily::Solaris
    } else {
        OsFamily::Unknown
    }
}
