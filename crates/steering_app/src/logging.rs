//! Terminal logging for the `fetch-docs` binary.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install the terminal logger. Errors go to stderr, everything else to stdout.
pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    if let Err(err) = TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not install logger: {err}");
    }
}
