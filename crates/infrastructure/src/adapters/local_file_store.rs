//! Local file store - Implements FileStorePort on two directories

use std::io;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::{FileStorePort, StagedDocument, SynthesizedAudio};
use async_trait::async_trait;
use domain::{AudioArtifact, DocumentFormat};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::StorageConfig;

/// Uploads and artifacts on the local filesystem
///
/// Every file is created with `create_new` under a fresh UUID name, so
/// concurrent requests never share or overwrite a path.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    uploads_dir: PathBuf,
    results_dir: PathBuf,
}

impl LocalFileStore {
    pub fn new(uploads_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            results_dir: results_dir.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.uploads_dir, &config.results_dir)
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Create both directories if they do not exist
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Storage` if a directory cannot be created.
    pub async fn ensure_directories(&self) -> Result<(), ApplicationError> {
        for dir in [&self.uploads_dir, &self.results_dir] {
            fs::create_dir_all(dir).await.map_err(|e| {
                ApplicationError::Storage(format!("Cannot create {}: {e}", dir.display()))
            })?;
        }
        info!(
            uploads = %self.uploads_dir.display(),
            results = %self.results_dir.display(),
            "Storage directories ready"
        );
        Ok(())
    }

    async fn write_new(path: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        file.write_all(data).await?;
        file.flush().await
    }

    async fn probe(dir: &Path) -> bool {
        let probe = dir.join(format!(".probe-{}", Uuid::new_v4()));
        match Self::write_new(&probe, b"").await {
            Ok(()) => {
                if let Err(e) = fs::remove_file(&probe).await {
                    warn!(path = %probe.display(), error = %e, "Failed to remove probe file");
                }
                true
            },
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Directory not writable");
                false
            },
        }
    }
}

#[async_trait]
impl FileStorePort for LocalFileStore {
    #[instrument(skip(self, content), fields(bytes = content.len(), format = %format.extension()))]
    async fn stage_upload(
        &self,
        content: Vec<u8>,
        format: DocumentFormat,
    ) -> Result<StagedDocument, ApplicationError> {
        let path = self
            .uploads_dir
            .join(format!("{}.{}", Uuid::new_v4(), format.extension()));

        // The guard owns the path before the first byte lands, so a failed
        // write still removes the partial file.
        let staged = StagedDocument::new(path, format);
        Self::write_new(staged.path(), &content)
            .await
            .map_err(|e| ApplicationError::Storage(format!("Cannot stage upload: {e}")))?;

        debug!(path = %staged.path().display(), "Upload staged");
        Ok(staged)
    }

    #[instrument(skip(self, audio), fields(bytes = audio.data.len(), format = ?audio.format))]
    async fn store_artifact(
        &self,
        audio: SynthesizedAudio,
    ) -> Result<AudioArtifact, ApplicationError> {
        let artifact = AudioArtifact::allocate(&self.results_dir, audio.format);

        if let Err(e) = Self::write_new(artifact.path(), &audio.data).await {
            if e.kind() != io::ErrorKind::AlreadyExists {
                let _ = fs::remove_file(artifact.path()).await;
            }
            return Err(ApplicationError::Storage(format!(
                "Cannot write {}: {e}",
                artifact.file_name()
            )));
        }

        info!(file = artifact.file_name(), "Artifact stored");
        Ok(artifact)
    }

    async fn is_writable(&self) -> bool {
        Self::probe(&self.uploads_dir).await && Self::probe(&self.results_dir).await
    }
}

#[cfg(test)]
mod tests {
    use domain::AudioFormat;
    use tempfile::TempDir;

    use super::*;

    async fn store() -> (TempDir, LocalFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("uploads"), dir.path().join("results"));
        store.ensure_directories().await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn staged_upload_is_removed_on_drop() {
        let (_dir, store) = store().await;

        let staged = store
            .stage_upload(b"hello".to_vec(), DocumentFormat::Txt)
            .await
            .unwrap();
        let path = staged.path().to_path_buf();

        assert!(path.starts_with(store.uploads_dir()));
        assert_eq!(path.extension().unwrap(), "txt");
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn concurrent_uploads_get_distinct_paths() {
        let (_dir, store) = store().await;

        let (a, b) = tokio::join!(
            store.stage_upload(b"a".to_vec(), DocumentFormat::Pdf),
            store.stage_upload(b"b".to_vec(), DocumentFormat::Pdf),
        );

        assert_ne!(a.unwrap().path(), b.unwrap().path());
    }

    #[tokio::test]
    async fn artifact_named_after_produced_format() {
        let (_dir, store) = store().await;

        let artifact = store
            .store_artifact(SynthesizedAudio::new(vec![1, 2, 3], AudioFormat::Mp3))
            .await
            .unwrap();

        assert!(artifact.file_name().starts_with("summary_"));
        assert!(artifact.file_name().ends_with(".mp3"));
        assert!(artifact.url().starts_with("/results/summary_"));
        assert_eq!(std::fs::read(artifact.path()).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn missing_results_dir_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("u"), dir.path().join("absent"));

        let err = store
            .store_artifact(SynthesizedAudio::new(vec![0], AudioFormat::Wav))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[tokio::test]
    async fn writability_probe() {
        let (_dir, store) = store().await;
        assert!(store.is_writable().await);

        let missing = LocalFileStore::new("/nonexistent/uploads", "/nonexistent/results");
        assert!(!missing.is_writable().await);
    }
}
