//! File logging via `simplelog`.
//!
//! Logs go to `absview.log` next to the configuration file; the terminal is
//! reserved for the table and user messages.

use crate::config::Config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};

pub fn parse_level(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Start the file logger. Failing to open the log file only disables logging.
pub fn init(cfg: &Config) {
    let level = parse_level(&cfg.log_level);
    if level == LevelFilter::Off {
        return;
    }

    let path = cfg.log_file();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let log_cfg = ConfigBuilder::new()
                .add_filter_allow_str("absview")
                .build();
            if WriteLogger::init(level, log_cfg, file).is_ok() {
                log::info!("absview {} started", env!("CARGO_PKG_VERSION"));
            }
        }
        Err(e) => {
            eprintln!("⚠️  Logging disabled, cannot open {}: {e}", path.display());
        }
    }
}
