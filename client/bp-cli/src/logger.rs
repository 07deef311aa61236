use crate::{CliError, CliResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Route `log` output to `log_file`, or to stderr so stdout stays free for
/// command output. Colors only apply to stderr.
#[track_caller]
pub fn initialize(
    log_level: bp_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter: LevelFilter = log_level.0;
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {level}] {message} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        });

    let dispatch = match &log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(e.to_string()))?;

    match log_file {
        Some(path) => info!("Logging at {level_filter} to {}", path.display()),
        None => info!("Logging at {level_filter} to stderr"),
    }
    Ok(())
}
