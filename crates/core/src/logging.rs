use tracing::Level;

/// Maps a `LOG_LEVEL` value to a tracing level, ignoring case and surrounding
/// whitespace. Unknown levels fall back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
