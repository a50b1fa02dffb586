//! Thread-safe handle around a [`PhotoStore`].
//!
//! Every operation holds one exclusive lock for its whole duration, which keeps
//! the capacity, uniqueness and ordering invariants intact across threads.
//! Lookups copy the record out because a reference cannot outlive the guard.

use super::{PhotoStore, Rejection};
use crate::error::{PhotozError, Result};
use crate::model::Photo;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct SharedPhotoStore {
    inner: Arc<Mutex<PhotoStore>>,
}

impl SharedPhotoStore {
    pub fn new(store: PhotoStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::new(PhotoStore::new(capacity)?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, PhotoStore>> {
        self.inner
            .lock()
            .map_err(|_| PhotozError::Store("lock poisoned".into()))
    }

    pub fn add<P: Into<Option<Photo>>>(&self, photo: P) -> Result<bool> {
        Ok(self.lock()?.add(photo))
    }

    pub fn try_add<P: Into<Option<Photo>>>(
        &self,
        photo: P,
    ) -> Result<std::result::Result<(), Rejection>> {
        Ok(self.lock()?.try_add(photo))
    }

    pub fn remove(&self, photo_id: i32, album_id: i32) -> Result<bool> {
        Ok(self.lock()?.remove(photo_id, album_id))
    }

    pub fn update(&self, photo_id: i32, album_id: i32, url: Option<String>) -> Result<bool> {
        Ok(self.lock()?.update(photo_id, album_id, url))
    }

    /// Copy-on-read lookup.
    pub fn get(&self, photo_id: i32, album_id: i32) -> Result<Option<Photo>> {
        Ok(self.lock()?.get(photo_id, album_id).cloned())
    }

    pub fn all_in_album(&self, album_id: i32) -> Result<Vec<Photo>> {
        Ok(self.lock()?.all_in_album(album_id))
    }

    pub fn between_dates(&self, date_from: NaiveDate, date_to: NaiveDate) -> Result<Vec<Photo>> {
        Ok(self.lock()?.between_dates(date_from, date_to))
    }

    pub fn find_by<F>(&self, predicate: F) -> Result<Vec<Photo>>
    where
        F: Fn(&Photo) -> bool,
    {
        Ok(self.lock()?.find_by(predicate))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of the current record set, e.g. for persisting.
    pub fn snapshot(&self) -> Result<Vec<Photo>> {
        Ok(self.lock()?.photos().to_vec())
    }
}
