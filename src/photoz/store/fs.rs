use super::backend::StorageBackend;
use crate::error::{PhotozError, Result};
use crate::model::Photo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PHOTOS_FILENAME: &str = "photos.json";

/// Keeps the record set as a pretty-printed JSON array in `photos.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(PHOTOS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PhotozError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_photos(&self) -> Result<Vec<Photo>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(PhotozError::Io)?;
        let photos: Vec<Photo> =
            serde_json::from_str(&content).map_err(PhotozError::Serialization)?;
        debug!(path = %data_file.display(), count = photos.len(), "loaded photos");
        Ok(photos)
    }

    fn save_photos(&self, photos: &[Photo]) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(photos).map_err(PhotozError::Serialization)?;

        // Atomic write
        let tmp_file = self
            .root
            .join(format!(".photos-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(PhotozError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.data_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhotozError::Io(e));
        }

        debug!(path = %self.data_file().display(), count = photos.len(), "saved photos");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file()
    }
}
