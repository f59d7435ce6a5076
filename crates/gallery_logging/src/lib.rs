#![deny(missing_docs)]
//! Shared logging setup for the gallery workspace.
//!
//! The binary initializes a terminal logger once at startup; tests use the
//! idempotent initializer so any test can run first.

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initializes the terminal logger for the application binary.
///
/// Call once before any other work; later calls are ignored.
pub fn initialize_terminal(level: LevelFilter) {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        build_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
