use crate::config::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

/// Daily rolling file log under `LOG_DIR`. Keep the guard alive until exit
/// or buffered lines are lost.
pub fn init(config: &Config) -> WorkerGuard {
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Already checked by `Config::from_env`
    let filter = EnvFilter::new(&config.log_level);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    guard
}
