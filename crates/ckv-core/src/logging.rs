//! Logging init. `ckv` prints digests on stdout, so diagnostics go to a log
//! file under the XDG state dir; stderr is the fallback.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

impl LogTarget {
    /// Default directives when `RUST_LOG` is unset. Stderr only gets warnings
    /// so `ckv hash` output stays pipe-friendly.
    pub fn default_directives(self) -> &'static str {
        match self {
            LogTarget::File => "info,ckv=debug,ckv_core=debug",
            LogTarget::Stderr => "warn",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ckv")?;
    Ok(xdg_dirs.get_state_home().join("ckv").join("ckv.log"))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn install<W>(writer: W, target: LogTarget) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(target.filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Log to `~/.local/state/ckv/ckv.log`. On failure the caller should use
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_log_file(&path)?;
    install(Mutex::new(file), LogTarget::File)?;
    tracing::info!("ckv logging initialized at {}", path.display());
    Ok(())
}

/// Log warnings and above to stderr.
pub fn init_logging_stderr() {
    if let Err(e) = install(io::stderr, LogTarget::Stderr) {
        eprintln!("ckv: logging disabled: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn stderr_is_quieter_than_file() {
        assert_eq!(LogTarget::Stderr.default_directives(), "warn");
        assert!(LogTarget::File
            .default_directives()
            .contains("ckv_core=debug"));
    }

    #[test]
    fn open_log_file_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("ckv").join("ckv.log");

        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn open_log_file_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let err = open_log_file(&blocker.join("ckv.log")).unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }
}
