//! Detection of the current process's OS name and family.
//!
//! The raw OS name is resolved on first use and memoized for the lifetime
//! of the process. `NEXUSCORE_OS_NAME` overrides the detected name, which is
//! otherwise the conventional display name of the compile target's OS.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::family::{
    classify, is_linux_name, is_mac_name, is_solaris_name, is_windows_name, normalize, OsFamily,
};

/// Environment variable that overrides the detected OS name.
pub const OS_NAME_ENV: &str = "NEXUSCORE_OS_NAME";

struct OsName {
    raw: Option<String>,
    lower: String,
}

static OS_NAME: OnceLock<OsName> = OnceLock::new();

fn cached() -> &'static OsName {
    OS_NAME.get_or_init(|| {
        let raw = resolve_os_name(std::env::var(OS_NAME_ENV).ok(), std::env::consts::OS);
        tracing::debug!(os_name = ?raw, "resolved OS name");
        let lower = normalize(raw.as_deref());
        OsName { raw, lower }
    })
}

/// Pick the raw OS name from an override or a target OS identifier.
fn resolve_os_name(env_override: Option<String>, target_os: &str) -> Option<String> {
    if let Some(name) = env_override.filter(|n| !n.is_empty()) {
        return Some(name);
    }
    let name = display_name(target_os);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Map a `std::env::consts::OS` identifier to its conventional display name.
fn display_name(target_os: &str) -> &str {
    match target_os {
        "windows" => "Windows",
        "macos" => "Mac OS X",
        "linux" | "android" => "Linux",
        "solaris" | "illumos" => "SunOS",
        "aix" => "AIX",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

/// The raw OS name of the current process, if one is available.
pub fn os_name() -> Option<&'static str> {
    cached().raw.as_deref()
}

/// The OS family of the current process.
pub fn os_family() -> OsFamily {
    classify(os_name())
}

/// True if the OS name contains `win`.
pub fn is_windows() -> bool {
    is_windows_name(&cached().lower)
}

/// True if the OS name contains `mac`.
pub fn is_mac() -> bool {
    is_mac_name(&cached().lower)
}

/// True if the OS name looks Unix-like (`nix`, `nux` or `aix`).
///
/// Unlike [`os_family`], this does not exclude names that also match `mac`.
pub fn is_linux() -> bool {
    is_linux_name(&cached().lower)
}

/// True if the OS name contains `sunos`.
pub fn is_solaris() -> bool {
    is_solaris_name(&cached().lower)
}

/// Snapshot of the platform checks for one OS name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformReport {
    /// Raw OS name (None if unavailable)
    pub os_name: Option<String>,
    /// Classified family
    pub family: OsFamily,
    pub is_windows: bool,
    pub is_mac: bool,
    pub is_linux: bool,
    pub is_solaris: bool,
}

impl PlatformReport {
    /// Report for the current process.
    pub fn detect() -> Self {
        Self::for_name(os_name())
    }

    /// Report for an arbitrary OS name.
    pub fn for_name<'a>(raw_os_name: impl Into<Option<&'a str>>) -> Self {
        let raw = raw_os_name.into();
        let lower = normalize(raw);
        PlatformReport {
            os_name: raw.map(str::to_string),
            family: classify(raw),
            is_windows: is_windows_name(&lower),
            is_mac: is_mac_name(&lower),
            is_linux: is_linux_name(&lower),
            is_solaris: is_solaris_name(&lower),
        }
    }
}
