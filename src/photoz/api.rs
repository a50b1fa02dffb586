//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every photoz operation, whatever the UI.
//!
//! Each call loads a [`PhotoStore`] from the backend using the configured capacity,
//! hands it to the matching command, and writes the record set back only when the
//! command actually changed something. Failed commands never touch the backend.
//!
//! `PhotozApi<B: StorageBackend>` is generic over the backend:
//! - Production: `PhotozApi<FsBackend>`
//! - Testing: `PhotozApi<MemBackend>`

use crate::commands;
use crate::config::PhotozConfig;
use crate::error::{PhotozError, Result};
use crate::model::PhotoKey;
use crate::store::backend::StorageBackend;
use crate::store::PhotoStore;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// The main API facade for photoz operations.
pub struct PhotozApi<B: StorageBackend> {
    backend: B,
    paths: commands::PhotozPaths,
    config: PhotozConfig,
}

impl<B: StorageBackend> PhotozApi<B> {
    pub fn new(backend: B, paths: commands::PhotozPaths, config: PhotozConfig) -> Self {
        Self {
            backend,
            paths,
            config,
        }
    }

    pub fn add_photo(&mut self, new_photo: commands::NewPhoto) -> Result<commands::CmdResult> {
        self.mutate(|store| commands::add::run(store, new_photo))
    }

    pub fn remove_photo(&mut self, album_id: i32, photo_id: i32) -> Result<commands::CmdResult> {
        let key = PhotoKey::new(album_id, photo_id);
        self.mutate(|store| commands::remove::run(store, key))
    }

    pub fn update_photo(
        &mut self,
        album_id: i32,
        photo_id: i32,
        url: Option<String>,
    ) -> Result<commands::CmdResult> {
        let key = PhotoKey::new(album_id, photo_id);
        self.mutate(|store| commands::update::run(store, key, url))
    }

    pub fn get_photo(&self, album_id: i32, photo_id: i32) -> Result<commands::CmdResult> {
        let store = self.load()?;
        commands::get::run(&store, PhotoKey::new(album_id, photo_id))
    }

    pub fn album_photos(&self, album_id: i32) -> Result<commands::CmdResult> {
        let store = self.load()?;
        commands::album::run(&store, album_id)
    }

    pub fn photos_between<F: AsRef<str>, T: AsRef<str>>(
        &self,
        date_from: F,
        date_to: T,
    ) -> Result<commands::CmdResult> {
        let from = parse_date(date_from.as_ref())?;
        let to = parse_date(date_to.as_ref())?;
        let store = self.load()?;
        commands::between::run(&store, from, to)
    }

    pub fn list_photos(&self) -> Result<commands::CmdResult> {
        let store = self.load()?;
        commands::list::run(&store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let count = self.backend.load_photos()?.len();
        let result = commands::config::run(&self.paths, action, count)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn paths(&self) -> &commands::PhotozPaths {
        &self.paths
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load(&self) -> Result<PhotoStore> {
        let photos = self.backend.load_photos()?;
        PhotoStore::from_photos(self.config.capacity, photos)
    }

    fn mutate<F>(&mut self, command: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut PhotoStore) -> Result<commands::CmdResult>,
    {
        let mut store = self.load()?;
        let result = command(&mut store)?;
        if result.is_mutation() {
            debug!(count = store.len(), location = %self.backend.location().display(), "persisting photos");
            self.backend.save_photos(store.photos())?;
        }
        Ok(result)
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PhotozError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", input)))
}

/// Parse a capture moment.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` or a
/// bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

    if let Some(dt) = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| PhotozError::Api(format!("Invalid date/time: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewPhoto, PhotozPaths};
