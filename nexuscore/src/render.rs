//! Report rendering for CLI output

use console::Style;
use nexuscorelib::format::{format_key_value, KeyValueOptions, OrNull, LINE_ENDING};
use nexuscorelib::PlatformReport;
use std::str::FromStr;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned key-value text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Render the report as indented key-value lines under a title.
pub fn render_text(report: &PlatformReport, styled: bool) -> String {
    let title = if styled {
        Style::new().bold().apply_to("Platform").to_string()
    } else {
        "Platform".to_string()
    };

    let entries: Vec<(&str, String)> = vec![
        ("OS Name", OrNull(report.os_name.as_deref()).to_string()),
        ("OS Family", report.family.to_string()),
        ("Is Windows?", yes_no(report.is_windows).to_string()),
        ("Is Linux/Unix?", yes_no(report.is_linux).to_string()),
        ("Is Mac?", yes_no(report.is_mac).to_string()),
        ("Is Solaris?", yes_no(report.is_solaris).to_string()),
    ];
    let body = format_key_value(entries, &KeyValueOptions::new().indent_level(1));

    format!("{title}{LINE_ENDING}{body}{LINE_ENDING}")
}

/// Render the report as pretty JSON.
pub fn render_json(report: &PlatformReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render the report in the requested mode.
pub fn render(report: &PlatformReport, mode: OutputMode, styled: bool) -> anyhow::Result<String> {
    match mode {
        OutputMode::Text => Ok(render_text(report, styled)),
        OutputMode::Json => Ok(render_json(report)? + "\n"),
    }
}
