use crate::error::{Result as ServerErrorResult, ServerError};

use um_config::LoggingConfig;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::info;

/// Install the global fern logger.
///
/// Logs go to `log_file` when given, else stdout. Colors only apply to stdout.
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level = *logging.level;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            (file.into(), None)
        }
        None => (
            std::io::stdout().into(),
            logging.colored.then(level_colors),
        ),
    };

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            match colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    colors.color(record.level())
                )),
                None => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    record.level()
                )),
            }
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={level}, file={}", path.display()),
        None => info!("Logger initialized: level={level}, stdout"),
    }

    // Bridge tracing records from dependencies (hyper, reqwest) into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
