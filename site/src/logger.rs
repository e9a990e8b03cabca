use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

pub fn setup_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let log_level = match config.level().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info for any other value
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    // A short-lived build tool logs to stderr unless a file is configured.
    if let Some(file_path) = config.file() {
        match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => {
                base_config.chain(file).apply()?;
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Continuing with console logging.");
                base_config.chain(std::io::stderr()).apply()?;
            }
        }
    } else {
        base_config.chain(std::io::stderr()).apply()?;
    }

    log::debug!("Logger initialized with level: {}", config.level());
    Ok(())
}
