//! File store port - Staged uploads and synthesized artifacts

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::{AudioArtifact, DocumentFormat};
#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::error::ApplicationError;
use crate::ports::SynthesizedAudio;

/// An uploaded document written to a uniquely named temporary file
///
/// The file is removed when the guard is dropped. That covers every exit
/// path of a request, including a handler future dropped after the client
/// disconnects. Removal tolerates the file already being gone.
pub struct StagedDocument {
    path: PathBuf,
    format: DocumentFormat,
}

impl StagedDocument {
    /// Take ownership of a file that has already been written
    pub const fn new(path: PathBuf, format: DocumentFormat) -> Self {
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn format(&self) -> DocumentFormat {
        self.format
    }
}

impl fmt::Debug for StagedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedDocument")
            .field("path", &self.path)
            .field("format", &self.format)
            .finish()
    }
}

impl Drop for StagedDocument {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed staged upload"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {},
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload"),
        }
    }
}

/// Port for the uploads and results directories
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileStorePort: Send + Sync {
    /// Write an upload to `uploads/<uuid>.<ext>`
    async fn stage_upload(
        &self,
        content: Vec<u8>,
        format: DocumentFormat,
    ) -> Result<StagedDocument, ApplicationError>;

    /// Write synthesized audio to `results/summary_<uuid>.<ext>`
    ///
    /// The extension follows the audio's actual format. Existing files are
    /// never overwritten.
    async fn store_artifact(
        &self,
        audio: SynthesizedAudio,
    ) -> Result<AudioArtifact, ApplicationError>;

    /// Whether both directories accept writes
    async fn is_writable(&self) -> bool;
}
