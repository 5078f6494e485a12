//! Logger setup for the binary.

use log::LevelFilter;
use std::io::Write;

/// Initialise `env_logger`, reading `RUST_LOG` first and letting `level`
/// override it for this crate. Safe to call more than once.
pub fn init_logger(level: Option<LevelFilter>) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if let Some(level) = level {
        builder.filter_module("geo_mentions", level);
    }
    builder.filter_module("rusqlite", LevelFilter::Warn);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "  [{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()
}

/// Parse a `--log-level` value.
pub fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>().map_err(|_| {
        format!(
            "Unknown log level '{}'. Use off, error, warn, info, debug or trace.",
            s
        )
    })
}
