//! Log subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps `-v` occurrences to a log level (0=warn, 1=info, 2=debug, 3+=trace).
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(200), Level::TRACE);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
