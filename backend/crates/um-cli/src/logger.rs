use std::time::SystemTime;

use fern::Dispatch;
use log::{LevelFilter, SetLoggerError};

/// Log to stderr so stdout carries only command output.
pub fn initialize(level: LevelFilter) -> Result<(), SetLoggerError> {
    Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply()
}
