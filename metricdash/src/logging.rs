//! tracing setup. The dashboard owns the terminal, so logs go to a file
//! unless running headless.

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILE: &str = "METRICDASH_LOG_FILE";

pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// `$METRICDASH_LOG_FILE`, else `<cache dir>/metricdash/metricdash.log`.
pub fn default_log_path() -> PathBuf {
    if let Some(p) = std::env::var_os(ENV_LOG_FILE).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("metricdash")
        .join("metricdash.log")
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
pub fn init(target: LogTarget, default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))
        }
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("install subscriber: {e}")),
    }
}
