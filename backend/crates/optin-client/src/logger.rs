use crate::ClientResult;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use log::info;

/// Initialize logger with fern
///
/// The terminal belongs to the views, so records go to the log file when one
/// is configured and to stderr otherwise.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
pub fn initialize(log_level: optin_config::LogLevel, log_file: Option<PathBuf>) -> ClientResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new()
        .level(level_filter)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("sqlx", log::LevelFilter::Warn);

    let format = Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = record.level(),
            message = message,
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    });

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        format.chain(fern::log_file(log_path)?)
    } else {
        format.chain(std::io::stderr())
    };

    // A logger may already be installed (tests); keep the first one
    if base_dispatch.chain(dispatch).apply().is_err() {
        return Ok(());
    }

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
