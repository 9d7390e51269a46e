use std::str::FromStr;
use tracing::Level;

/// Maps a configured level name onto a tracing level, falling back to INFO.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // stdout belongs to the menu.
        .with_writer(std::io::stderr)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::parse_level;

    #[tokio::test]
    async fn test_should_parse_level() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::WARN, parse_level(" WARN "));
        assert_eq!(Level::INFO, parse_level("loud"));
    }
}
