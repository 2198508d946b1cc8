use crate::shared::constants;
use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static! {
    static ref LOG_PATHS: Mutex<Option<(PathBuf, PathBuf)>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_fresh(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(file, "=== {} Started: {} ===", title, chrono::Local::now());
    }
}

/// Truncates the log files in the working directory and installs a
/// panic hook that records the panic before the process dies.
pub fn init() {
    let cwd = std::env::current_dir().unwrap_or_default();
    let error_path = cwd.join(constants::ERROR_LOG_FILE);
    let debug_path = cwd.join(constants::DEBUG_LOG_FILE);

    start_fresh(&error_path, "Error Log");
    start_fresh(&debug_path, "Debug Log");

    *LOG_PATHS.lock().unwrap() = Some((error_path.clone(), debug_path.clone()));

    panic::set_hook(Box::new(move |info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => info
                .payload()
                .downcast_ref::<String>()
                .map(|s| s.as_str())
                .unwrap_or("Box<Any>"),
        };
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let report = format!(
            "\nPANIC at {}:\n{}\nBacktrace:\n{:?}\n",
            location,
            msg,
            Backtrace::capture()
        );
        append_line(&error_path, &report);
        append_line(&debug_path, &report);

        eprintln!(
            "{} crashed. See {} for details.",
            constants::APP_NAME,
            error_path.display()
        );
    }));
}

pub fn log(level: &str, msg: &str) {
    if let Some((error_path, debug_path)) = LOG_PATHS.lock().unwrap().as_ref() {
        let line = format!(
            "[{}][{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            level,
            msg
        );
        append_line(debug_path, &line);
        if level == "ERROR" {
            append_line(error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}
