use std::sync::atomic::{AtomicBool, Ordering};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;
use once_cell::sync::Lazy;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);
static LOG_TO_FILE: AtomicBool = AtomicBool::new(false);
static LOG_FILE: Lazy<Mutex<Option<std::fs::File>>> = Lazy::new(|| Mutex::new(None));

const DEFAULT_LOG_FILE: &str = "tangle.log";

/// Initializes logging based on environment variables:
/// - TANGLE_LOGGING: enables/disables logging (true/false)
/// - TANGLE_LOG_TO_FILE: write to a file instead of stdout (true/false, default false)
/// - TANGLE_LOG_FILE: path of the log file (default `tangle.log`)
///
/// To enable logging in tests, run: TANGLE_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("TANGLE_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => {
                    ENABLE_LOGGING.store(true, Ordering::SeqCst);
                    if env::var("TANGLE_LOG_TO_FILE").unwrap_or_else(|_| "false".to_string()) == "true" {
                        open_log_file();
                    }
                },
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: TANGLE_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  TANGLE_LOGGING=true cargo run\n  TANGLE_LOGGING=false cargo run\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }
}

/// Whether `log` currently emits anything
pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

fn open_log_file() {
    let path = env::var("TANGLE_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
                LOG_TO_FILE.store(true, Ordering::SeqCst);
            }
        }
        // Fall back to stdout
        Err(e) => eprintln!("Failed to open log file {}: {}", path, e),
    }
}

pub fn log(prefix: &str, message: &str) {
    if !is_enabled() {
        return;
    }
    let log_message = format!("  [{}]   {}\n", prefix, message);

    if LOG_TO_FILE.load(Ordering::SeqCst) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                if let Err(e) = file.write_all(log_message.as_bytes()) {
                    eprintln!("Failed to write to log file: {}", e);
                }
                if let Err(e) = file.flush() {
                    eprintln!("Failed to flush log file: {}", e);
                }
            }
        }
    } else {
        print!("{}", log_message);
    }
}
