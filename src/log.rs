// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

pub use tracing;

static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static START: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn echoes(self) -> bool {
        matches!(self, Level::Warn | Level::Error)
    }
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Route log lines to `path` (parent dirs are created). Without this
/// call only warnings and errors reach stderr.
pub fn set_log_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    // Touch now so a bad path fails at startup, not mid-run.
    OpenOptions::new().create(true).append(true).open(path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(path.to_path_buf());
    }
    start();
    Ok(())
}

pub fn format_line(level: Level, msg: &str) -> String {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    format!("[{elapsed}][{}] {msg}", level.as_str())
}

/// Internal logging function; use the `log*!` macros.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(level, msg);

    if level.echoes() {
        eprintln!("{line}");
    }

    if let Ok(guard) = LOG_FILE.lock() {
        if let Some(path) = guard.as_ref() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}
