use std::path::{Path, PathBuf};

use eyre::Result;

/// A rendered output file with a path relative to the output directory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path relative to the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rendered file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write under `base`, creating parent directories as needed.
    pub fn write_to(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(&self.path);
        write_file(&path, &self.content)?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
