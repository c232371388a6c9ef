//! File logging; the terminal belongs to the UI

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Configured level, or info when it does not name a tracing level
fn level_directive(raw: &str) -> String {
    raw.trim()
        .parse::<Level>()
        .unwrap_or(Level::INFO)
        .to_string()
        .to_lowercase()
}

/// Single, never-rotated log file at exactly `path`
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("opening {}", path.display()))
}

/// Install the global subscriber. RUST_LOG wins over the configured level.
///
/// Events are written by a background worker; keep the returned guard alive
/// until shutdown so buffered lines are flushed.
pub fn init(config: &Config) -> Result<(PathBuf, WorkerGuard)> {
    let path = config
        .log_path()
        .ok_or_else(|| anyhow!("no data directory for the log file"))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender(&path)?);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.log_level)));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))?;

    Ok((path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("debug"), "debug");
        assert_eq!(level_directive(" WARN "), "warn");
        assert_eq!(level_directive("chatty"), "info");
    }

    #[test]
    fn test_appender_writes_to_configured_file() {
        let dir = std::env::temp_dir().join(format!("cardiorehab-log-{}", std::process::id()));
        let path = dir.join("nested").join("cardiorehab.log");

        let mut appender = file_appender(&path).expect("appender");
        appender.write_all(b"section changed\n").expect("write");
        appender.flush().expect("flush");

        let written = fs::read_to_string(&path).expect("log file");
        assert!(written.contains("section changed"));
        let _ = fs::remove_dir_all(&dir);
    }
}
