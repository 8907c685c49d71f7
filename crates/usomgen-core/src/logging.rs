//! Logging init: file under XDG state dir mirrored to stderr, or stderr alone.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,usomgen_cli=debug";

/// Writes every record to the log file (when its handle could be cloned) and to stderr.
struct FileAndStderr(Option<fs::File>);

impl io::Write for FileAndStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(f) = self.0.as_mut() {
            io::Write::write_all(f, buf)?;
        }
        io::Write::write_all(&mut io::stderr().lock(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(f) = self.0.as_mut() {
            io::Write::flush(f)?;
        }
        io::Write::flush(&mut io::stderr().lock())
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `~/.local/state/usomgen/usomgen.log`. Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("usomgen")?;
    Ok(xdg_dirs.place_state_file("usomgen.log")?)
}

/// Initialize structured logging to the XDG state log file and stderr.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let log_file_path = log_file_path()?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct TeeMakeWriter(fs::File);

    impl<'a> MakeWriter<'a> for TeeMakeWriter {
        type Writer = FileAndStderr;

        fn make_writer(&'a self) -> Self::Writer {
            FileAndStderr(self.0.try_clone().ok())
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(TeeMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {}", e))?;

    tracing::debug!("logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
