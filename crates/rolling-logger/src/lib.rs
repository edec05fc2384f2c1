//! Rolling File Logger
//!
//! Writes log events to one file per day under the application's log
//! directory. Installs a global tracing subscriber; records emitted through
//! the `log` facade are picked up as well.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;
use tracing_subscriber::fmt::MakeWriter;

static SINK: OnceLock<RollingSink> = OnceLock::new();

/// Errors reported by the logger itself
#[derive(Debug)]
pub enum LoggerError {
    NotInitialized,
    AlreadyInitialized,
    Io(String),
    Subscriber(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::Io(msg) => write!(f, "log file error: {}", msg),
            LoggerError::Subscriber(msg) => write!(f, "subscriber error: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

/// The open log file plus the day it belongs to
struct SinkState {
    day: String,
    file: File,
}

/// Shared writer that reopens the log file when the date changes
#[derive(Clone)]
struct RollingSink {
    dir: PathBuf,
    app_name: String,
    state: Arc<Mutex<Option<SinkState>>>,
}

impl RollingSink {
    fn new(dir: PathBuf, app_name: &str) -> Self {
        Self {
            dir,
            app_name: app_name.to_lowercase(),
            state: Arc::new(Mutex::new(None)),
        }
    }

    fn file_name(&self, day: &str) -> String {
        format!("{}-{}.log", self.app_name, day)
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let day = Local::now().format("%Y-%m-%d").to_string();
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger lock poisoned"))?;

        let needs_rotate = match state.as_ref() {
            Some(current) => current.day != day,
            None => true,
        };
        if needs_rotate {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.dir.join(self.file_name(&day)))?;
            *state = Some(SinkState { day, file });
        }

        match state.as_mut() {
            Some(current) => io::Write::write(&mut current.file, buf),
            None => Ok(buf.len()),
        }
    }
}

/// Handle given to the subscriber for each event
struct RollingHandle {
    sink: RollingSink,
}

impl io::Write for RollingHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RollingSink {
    type Writer = RollingHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RollingHandle { sink: self.clone() }
    }
}

/// Initialize the global logger, writing to `<log_dir>/<app_name>-YYYY-MM-DD.log`.
///
/// Must be called once, before any of the logging helpers.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    fs::create_dir_all(&log_dir).map_err(|e| LoggerError::Io(e.to_string()))?;

    let sink = RollingSink::new(log_dir, app_name);
    SINK.set(sink.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_writer(sink)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))
}

fn ensure_initialized() -> Result<(), LoggerError> {
    SINK.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{message}");
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{message}");
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{message}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_app_and_day() {
        let sink = RollingSink::new(PathBuf::from("/tmp"), "Curio");
        assert_eq!(sink.file_name("2026-08-07"), "curio-2026-08-07.log");
    }

    #[test]
    fn writes_lines_to_dated_file() {
        let dir = tempfile::tempdir().expect("tempdir");

        assert!(info("before init").is_err());

        init_logger(dir.path().to_path_buf(), "Curio").expect("init failed");
        info("hello from the logger").expect("log failed");

        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("read log dir")
            .collect::<Result<_, _>>()
            .expect("dir entry");
        assert_eq!(entries.len(), 1);

        let content = fs::read_to_string(entries[0].path()).expect("read log file");
        assert!(content.contains("hello from the logger"));

        // A second init must refuse rather than clobber the subscriber
        assert!(init_logger(dir.path().to_path_buf(), "Curio").is_err());
    }
}
