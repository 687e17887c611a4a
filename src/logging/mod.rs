
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// Session log file, opened on first use.
struct SessionFile {
    dir: PathBuf,
    opened: Option<(File, PathBuf)>,
    attempted: bool,
}

impl SessionFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            opened: None,
            attempted: false,
        }
    }

    fn open(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("sitectl-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn write_line(&mut self, line: &str) {
        if !self.attempted {
            self.attempted = true;
            match Self::open(&self.dir) {
                Ok(opened) => self.opened = Some(opened),
                Err(err) => eprintln!(
                    "WARN: File logging unavailable; continuing without a log file. ({err})"
                ),
            }
        }
        if let Some((file, _)) = self.opened.as_mut() {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// Console lines go to stdout (info) or stderr (warn/error); file lines carry
/// a timestamp and level.
#[derive(Clone)]
pub struct Logger {
    file: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            file: Arc::new(Mutex::new(SessionFile::new(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            match level {
                LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }

        if target.file() && self.file_logging_enabled() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            if let Ok(mut file) = self.file.lock() {
                file.write_line(&format!("[{timestamp}] {level:<5} {message}"));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Ignored once the log file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut file) = self.file.lock()
            && !file.attempted
        {
            file.dir = dir.as_ref().to_path_buf();
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file.lock().ok().map(|f| f.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file
            .lock()
            .ok()
            .and_then(|f| f.opened.as_ref().map(|(_, path)| path.clone()))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .finish()
    }
}
