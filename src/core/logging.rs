use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::config::ServerConfig;

/// Install the global subscriber. Keep the returned guard alive until the
/// process exits; dropping it flushes buffered log lines.
pub fn init_tracing(config: &ServerConfig) -> Result<WorkerGuard> {
    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            let file = tracing_appender::rolling::daily(dir, format!("{}.log", config.service.name()));
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_writer(writer)
            // no colour codes in log files
            .with_ansi(config.log_dir.is_none())
            .with_line_number(true)
            .with_file(true)
            .finish(),
    )?;

    Ok(guard)
}
