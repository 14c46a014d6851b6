use sigi::domain::config::LoggingConfig;
use sigi_logger::{FileSink, LevelFilter, Logger, LoggerBuilder, LoggerError, Named};

/// Logger builder for the settings of the `[logging]` config section.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level.
pub fn logger_builder(name: &str, config: &LoggingConfig) -> Result<LoggerBuilder<Named>, LoggerError> {
    let level: LevelFilter = config.level.parse().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{}'", config.level).into(),
        context: None,
    })?;

    let mut builder = Logger::builder().name(name).level(level);
    if let Some(directives) = &config.directives {
        builder = builder.directives(directives);
    }
    if let Some(directory) = &config.directory {
        builder = builder.file(FileSink::new(directory).json(config.json));
    }

    Ok(builder)
}
