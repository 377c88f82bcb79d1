//! # nexuscore
//!
//! Diagnostic CLI for nexuscorelib.
//!
//! ## Overview
//!
//! Prints the raw OS name the library detected, the OS family it classifies
//! to, and the result of each individual platform check. Useful for checking
//! what a given machine (or a given OS name string) resolves to.
//!
//! ## Usage
//!
//! ```bash
//! # Report on the current machine
//! nexuscore
//!
//! # Classify an arbitrary OS name
//! nexuscore --os-name "SunOS"
//!
//! # Output as JSON
//! nexuscore --output json
//!
//! # Pretend to be another OS for the whole process
//! NEXUSCORE_OS_NAME="Windows 10" nexuscore
//! ```

mod logging;
mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use nexuscorelib::PlatformReport;

use render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("nexuscore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the detected OS name, OS family and platform checks")
        .arg(
            Arg::new("os-name")
                .short('n')
                .long("os-name")
                .value_name("NAME")
                .help("Classify this OS name instead of the detected one"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
}

/// Run the report for parsed arguments and return what to print.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let mode: OutputMode = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("text")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let report = match matches.get_one::<String>("os-name") {
        Some(name) => {
            tracing::debug!(os_name = %name, "classifying given OS name");
            PlatformReport::for_name(name.as_str())
        }
        None => PlatformReport::detect(),
    };

    render::render(&report, mode, console::colors_enabled())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init(matches.get_flag("debug"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
