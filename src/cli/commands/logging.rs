//! `-v` and `KINDRED_LOG_LEVEL` share one argument: repeat `-v` to raise the
//! level, or name it in the environment.

use clap::{Arg, ArgAction, Command, builder::ValueParser};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Position is the verbosity value: no `-v` is `error`, `-vvvv` is `trace`.
pub const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

/// Accepts a level name or its position in [`LEVELS`].
fn parse_level(value: &str) -> Result<u8, String> {
    let value = value.trim().to_lowercase();

    let index = match value.parse::<usize>() {
        Ok(index) => Some(index).filter(|index| *index < LEVELS.len()),
        Err(_) => LEVELS.iter().position(|(name, _)| *name == value),
    };

    index.and_then(|index| u8::try_from(index).ok()).ok_or_else(|| {
        format!("invalid log level '{value}': use error, warn, info, debug, trace or 0-4")
    })
}

/// Tracing level for a verbosity count; anything past `trace` stays `trace`.
#[must_use]
pub fn level(verbosity: u8) -> Level {
    LEVELS
        .get(usize::from(verbosity))
        .map_or(Level::TRACE, |(_, level)| *level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
            .long_help(
                "Log more: -v warn, -vv info, -vvv debug, -vvvv trace (default: error). KINDRED_LOG_LEVEL takes a level name or 0-4. RUST_LOG directives override both.",
            )
            .env("KINDRED_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(ValueParser::from(parse_level)),
    )
}
