use tracing::level_filters::LevelFilter;

use crate::config::Config;

/// Set up the global subscriber from the numeric config level.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logger(config: &Config) {
    let level = match config.log_level {
        0 => LevelFilter::TRACE,
        1 => LevelFilter::DEBUG,
        2 => LevelFilter::INFO,
        3 => LevelFilter::WARN,
        4 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init();
}
