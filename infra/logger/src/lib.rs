//! # Logger
//!
//! Installs the global `tracing` subscriber used by every SiGI binary.
//!
//! * Compact, colored console output.
//! * Optional rolling log files written through a non-blocking worker, plain or JSON.
//! * Filtering via a default level, optional directives (`"sigi_member_form=debug"`)
//!   and the `RUST_LOG` environment variable.
//!
//! ## Example
//!
//! ```rust
//! # use sigi_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("sigi-desktop")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use sealed::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling log file destination.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Writes one JSON object per event instead of plain text.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod sealed {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Builder for the global subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    name: N,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    file: Option<FileSink>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; the name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            directives: self.directives,
            console: self.console,
            file: self.file,
        }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives, e.g. `sigi_member_form=trace`.
    ///
    /// `RUST_LOG` entries are layered on top and win for the targets they name.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, sink: FileSink) -> Self {
        self.file = Some(sink);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the program; dropping it
    /// stops the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   bad directives, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !self.console && self.file.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Neither console nor file output is enabled".into(),
                context: None,
            });
        }

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(self.level, self.directives.as_deref(), env.as_deref())?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(sink) => {
                let (file_layer, guard) = file_layer(&name, sink)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

fn file_layer<S>(
    name: &str,
    sink: FileSink,
) -> Result<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard), LoggerError>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if sink.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    fs::create_dir_all(&sink.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create {}", sink.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(sink.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sink.max_files)
        .build(&sink.directory)
        .context(format!("Log directory {}", sink.directory.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if sink.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

/// Configured directives are strict; `env` entries are lossy and added last.
fn env_filter(
    level: LevelFilter,
    directives: Option<&str>,
    env: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    let mut filter = match directives {
        None => builder.parse_lossy(""),
        Some(raw) => builder.parse(raw).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid filter directives '{raw}': {e}").into(),
            context: None,
        })?,
    };

    for entry in env.unwrap_or_default().split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Ignoring {} entry '{entry}': {e}", EnvFilter::DEFAULT_ENV),
        }
    }
    Ok(filter)
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            level: LevelFilter::INFO,
            directives: None,
            console: true,
            file: None,
        }
    }

    /// Whether a file writer is attached.
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing log files");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("sigi-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.directives.is_none());
        assert!(builder.file.is_none());
    }

    #[test]
    fn builder_collects_settings() {
        let builder = Logger::builder()
            .level(LevelFilter::TRACE)
            .name("sigi-test")
            .console(false)
            .directives("sigi_member_form=debug")
            .file(FileSink::new("logs").max_files(3).json(true).rotation(Rotation::HOURLY));

        assert!(!builder.console);
        assert_eq!(builder.level, LevelFilter::TRACE);
        assert_eq!(builder.directives.as_deref(), Some("sigi_member_form=debug"));
        let sink = builder.file.expect("file sink");
        assert_eq!(sink.directory(), Path::new("logs"));
        assert_eq!(sink.max_files, 3);
        assert!(sink.json);
        assert_eq!(sink.rotation, Rotation::HOURLY);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_no_outputs() {
        let err = Logger::builder().name("silent").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn init_creates_log_directory() -> Result<(), LoggerError> {
        let tmp = tempdir().map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to create temp dir".into()),
        })?;
        let dir = tmp.path().join("nested").join("logs");

        let logger =
            Logger::builder().name("sigi-unit").console(false).file(FileSink::new(&dir)).init()?;

        assert!(logger.writes_files());
        assert!(dir.is_dir(), "init should create the log directory");
        Ok(())
    }

    #[test]
    #[serial]
    fn zero_max_files_is_rejected_before_install() {
        let err = Logger::builder()
            .name("sigi-unit")
            .file(FileSink::new("unused").max_files(0))
            .init()
            .expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_bad_directives() {
        let err = env_filter(LevelFilter::INFO, Some("sigi=loud"), None).expect_err("bad level");
        assert!(err.to_string().contains("sigi=loud"));
    }

    #[test]
    fn env_entries_override_configured_directives() {
        let configured = env_filter(LevelFilter::INFO, Some("sigi=info"), None).expect("filter");
        assert_eq!(configured.max_level_hint(), Some(LevelFilter::INFO));

        let raised = env_filter(LevelFilter::INFO, Some("sigi=info"), Some("sigi=trace"))
            .expect("filter");
        assert_eq!(raised.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn malformed_env_entries_are_skipped() {
        let filter = env_filter(LevelFilter::WARN, None, Some("sigi=loud, sigi_logger=debug"))
            .expect("lossy env");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
