//! Artifact sink.

use crate::config::OutputPaths;
use crate::error::{BuildError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The four files a build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Json,
    Less,
    Scss,
    Css,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Json,
        ArtifactKind::Less,
        ArtifactKind::Scss,
        ArtifactKind::Css,
    ];
}

pub trait ArtifactSink: Send + Sync {
    /// Persist one artifact, returning where it went.
    fn write(&self, kind: ArtifactKind, contents: &str) -> Result<PathBuf>;
}

/// Writes artifacts to the configured paths, creating parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    paths: OutputPaths,
}

impl FileSink {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Json => &self.paths.json,
            ArtifactKind::Less => &self.paths.less,
            ArtifactKind::Scss => &self.paths.scss,
            ArtifactKind::Css => &self.paths.css,
        }
    }
}

impl ArtifactSink for FileSink {
    fn write(&self, kind: ArtifactKind, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(kind);
        let write_error = |source| BuildError::Write {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, contents).map_err(write_error)?;

        info!("Wrote {:?} to {}", kind, path.display());
        Ok(path.to_path_buf())
    }
}
