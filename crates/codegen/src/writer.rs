use api_cli_core::CoreError;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Filesystem side of scaffolding. Never overwrites an existing file.
#[derive(Debug, Clone, Copy)]
pub struct CodeWriter;

impl CodeWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_dir(&self, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating directory");
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Creates `path` with `content`; fails with `AlreadyExists` if it is there
    pub fn write_new(&self, path: &Path, content: &str) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => CoreError::already_exists(path),
                _ => CoreError::Io(e),
            })?;
        file.write_all(content.as_bytes())?;

        tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
