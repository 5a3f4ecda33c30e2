// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use crate::core::config::Config;

/// Installs the global env_logger according to `config`.
///
/// Logs go to stderr unless a log file is configured, in which case the file
/// (and its parent directory) is created and appended to. `RUST_LOG`, when
/// set, refines the configured level.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_env("RUST_LOG");

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if let Err(e) = builder.try_init() {
        // Already installed, e.g. by a test harness.
        log::debug!("Logger not installed: {}", e);
    }

    Ok(())
}
