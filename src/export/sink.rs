use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::StudioResult;

/// Destination of exported PNG files.
pub trait ExportSink: Send {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> StudioResult<()>;
}

/// Writes each export as a file in one directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> StudioResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create export dir '{}'", self.dir.display()))?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, png)
            .with_context(|| format!("write export '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "wrote export");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered files in delivery order.
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    pub fn last(&self) -> Option<&(String, Vec<u8>)> {
        self.files.last()
    }
}

impl ExportSink for InMemorySink {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> StudioResult<()> {
        self.files.push((file_name.to_string(), png.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
