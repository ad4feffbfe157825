use crate::error::{CliError, Result as CliErrorResult};

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Install the global logger.
///
/// Standard output carries command results, so console logs go to stderr.
/// A log file, when configured, replaces the console and records call sites.
#[track_caller]
pub fn initialize(
    log_level: sk_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => {
            let file = open_log_file(path)?;
            Dispatch::new()
                .format(|out, message, record| {
                    let site = record.file().map(|file| (file, record.line().unwrap_or(0)));
                    out.finish(format_args!("{}", render(record.level(), message, site)))
                })
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        render(colors.color(record.level()), message, None)
                    ))
                })
                .chain(std::io::stderr())
        }
        None => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", render(record.level(), message, None)))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    let target = log_file
        .as_deref()
        .map_or_else(|| "stderr".to_string(), |path| path.display().to_string());
    debug!("Logger initialized: level={level_filter:?}, output={target}");

    Ok(())
}

/// Open `path` for appending, creating its directory first.
#[track_caller]
pub(crate) fn open_log_file(path: &Path) -> CliErrorResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {e}", path.display())))
}

/// One log line: timestamp, level, message and optionally the call site.
pub(crate) fn render(
    level: impl Display,
    message: impl Display,
    site: Option<(&str, u32)>,
) -> String {
    let stamp = humantime::format_rfc3339_seconds(SystemTime::now());
    match site {
        Some((file, line)) => format!("[{stamp} {level}] {message} ({file}:{line})"),
        None => format!("[{stamp} {level}] {message}"),
    }
}
