use std::env;
use std::path::Path;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Set up tracing with a concise ANSI stdout layer and a plain-text file
/// layer. Returns the appender guard; dropping it flushes the file.
pub fn init_logger() -> impl Drop {
    let filter_layer =
        EnvFilter::try_from_env("TRACING_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/foldersize.log".to_string());
    let log_file = Path::new(&log_file);
    let log_dir = log_file.parent().filter(|p| !p.as_os_str().is_empty());

    let file_appender = tracing_appender::rolling::never(
        log_dir.unwrap_or_else(|| Path::new(".")),
        log_file.file_name().unwrap_or_else(|| "foldersize.log".as_ref()),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_target(false)
                .without_time()
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter_layer)
        .init();

    guard
}
