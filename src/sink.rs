//! Destinations for a generated document.
//!
//! The generator only ever hands a sink one complete document, so no sink
//! sees partial output.

use crate::error::{MacrogenError, Result};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait OutputSink {
    fn write_document(&mut self, text: &str) -> Result<()>;
}

/// Writes to a file via a temporary sibling that is renamed into place, so
/// the destination either keeps its old contents or gets the whole document.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    fn write_document(&mut self, text: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |e: std::io::Error| MacrogenError::io(&self.path, e);

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(text.as_bytes()).map_err(io_err)?;
        if let Some(permissions) = target_permissions(&self.path) {
            tmp.as_file().set_permissions(permissions).map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::info!(path = %self.path.display(), bytes = text.len(), "wrote document");
        Ok(())
    }
}

/// Mode the renamed file should end up with: the destination's current mode
/// when it exists, otherwise the usual mode for a new source file.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Writes to stdout, for piping.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_document(&mut self, text: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())
            .and_then(|()| lock.flush())
            .map_err(|e| MacrogenError::io("<stdout>", e))
    }
}

/// Collects the document in memory.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn write_document(&mut self, text: &str) -> Result<()> {
        self.buffer.clear();
        self.buffer.push_str(text);
        Ok(())
    }
}
