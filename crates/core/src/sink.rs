// ABOUTME: Artifact persistence capability used by the CSV exporter.
// ABOUTME: DirectorySink writes files to disk; MemorySink captures them for tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// Persists a named text artifact, returning where it ended up.
pub trait ArtifactSink {
    fn persist(&mut self, name: &str, contents: &str) -> Result<PathBuf>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn persist(&mut self, name: &str, contents: &str) -> Result<PathBuf> {
        (**self).persist(name, contents)
    }
}

/// Writes artifacts into a directory, creating it on first use.
#[derive(Debug, Clone)]
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

impl ArtifactSink for DirectorySink {
    fn persist(&mut self, name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ExportError::persist(name, format!("cannot create {}", self.dir.display()))
                .with_source(e.into())
        })?;
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|e| {
            ExportError::persist(name, format!("cannot write {}", path.display()))
                .with_source(e.into())
        })?;
        Ok(path)
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub artifacts: Vec<(String, String)>,
}

impl ArtifactSink for MemorySink {
    fn persist(&mut self, name: &str, contents: &str) -> Result<PathBuf> {
        self.artifacts.push((name.to_string(), contents.to_string()));
        Ok(PathBuf::from(name))
    }
}
