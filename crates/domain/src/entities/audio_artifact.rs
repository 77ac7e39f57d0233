//! Synthesized audio artifacts

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ArtifactId;

/// URL prefix under which artifacts are served
pub const RESULTS_URL_PREFIX: &str = "/results";

/// Prefix of every artifact file name
pub const ARTIFACT_PREFIX: &str = "summary_";

/// Container format of a synthesized artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
    /// Text placeholder written by the offline stub backend
    PlainText,
}

impl AudioFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::PlainText => "txt",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::PlainText => "text/plain; charset=utf-8",
        }
    }
}

/// A file written by the speech synthesizer
///
/// The file name always reflects the format actually produced, so a fallback
/// that switches formats still hands back the path that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioArtifact {
    id: ArtifactId,
    file_name: String,
    path: PathBuf,
    format: AudioFormat,
}

impl AudioArtifact {
    /// Allocate a fresh artifact location inside `results_dir`
    #[must_use]
    pub fn allocate(results_dir: &Path, format: AudioFormat) -> Self {
        let id = ArtifactId::new();
        let file_name = format!("{ARTIFACT_PREFIX}{id}.{}", format.extension());
        Self {
            id,
            path: results_dir.join(&file_name),
            file_name,
            format,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ArtifactId {
        self.id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Retrieval path, e.g. `/results/summary_<uuid>.mp3`
    #[must_use]
    pub fn url(&self) -> String {
        format!("{RESULTS_URL_PREFIX}/{}", self.file_name)
    }
}
