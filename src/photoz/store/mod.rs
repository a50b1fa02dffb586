//! # Storage Layer
//!
//! [`PhotoStore`] is the heart of photoz: a bounded, ordered collection of
//! [`Photo`] records that enforces identity uniqueness and answers point and
//! predicate queries by linear scan.
//!
//! ## Invariants
//!
//! - The number of stored photos never exceeds the capacity fixed at construction.
//! - No two stored photos share an `(album_id, photo_id)` pair.
//! - Photos keep their relative insertion order; removal closes the gap without
//!   reordering and updates happen in place.
//!
//! A failed mutation is always a no-op: the store looks exactly as it did before.
//!
//! ## Query results
//!
//! [`PhotoStore::all_in_album`], [`PhotoStore::between_dates`] and
//! [`PhotoStore::find_by`] return freshly allocated vectors of cloned photos.
//! Mutating a result never touches the store, and later store mutations never
//! show up in a result already handed out. [`PhotoStore::get`] is the exception:
//! it borrows straight into the store, so the borrow checker keeps the store
//! frozen for as long as the reference lives.
//!
//! ## Persistence
//!
//! The store itself never touches disk. A [`backend::StorageBackend`] loads and
//! saves the whole record set:
//!
//! - [`fs::FsBackend`]: JSON snapshot in `photos.json` under the data directory
//! - [`memory::MemBackend`]: in-memory snapshot for tests
//!
//! [`shared::SharedPhotoStore`] wraps a store behind a single mutex for callers
//! that need to share it across threads.

use crate::error::{PhotozError, Result};
use crate::model::{Photo, PhotoKey};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

pub mod backend;
pub mod fs;
pub mod memory;
pub mod shared;

/// Why [`PhotoStore::try_add`] refused a photo.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no photo given")]
    Absent,

    #[error("store is full ({capacity} photos)")]
    Full { capacity: usize },

    #[error("photo {0} already exists")]
    Duplicate(PhotoKey),
}

#[derive(Debug, Clone)]
pub struct PhotoStore {
    photos: Vec<Photo>,
    capacity: usize,
}

impl PhotoStore {
    /// Create an empty store holding at most `capacity` photos.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(PhotozError::InvalidCapacity(capacity));
        }
        Ok(Self {
            photos: Vec::new(),
            capacity,
        })
    }

    /// Rebuild a store from a saved snapshot.
    ///
    /// Photos are replayed through [`PhotoStore::try_add`] in order, so a snapshot
    /// that is larger than `capacity` or carries duplicate identities is refused
    /// as a whole.
    pub fn from_photos<I>(capacity: usize, photos: I) -> Result<Self>
    where
        I: IntoIterator<Item = Photo>,
    {
        let mut store = Self::new(capacity)?;
        for photo in photos {
            if let Err(rejection) = store.try_add(photo) {
                warn!(%rejection, capacity, "snapshot does not fit the store");
                return Err(PhotozError::Store(format!(
                    "Snapshot cannot be loaded: {}",
                    rejection
                )));
            }
        }
        Ok(store)
    }

    /// Add a photo, returning `false` when it is absent, the store is full, or
    /// its identity is already taken.
    ///
    /// Accepts either a `Photo` or an `Option<Photo>`.
    pub fn add<P: Into<Option<Photo>>>(&mut self, photo: P) -> bool {
        self.try_add(photo).is_ok()
    }

    /// Like [`PhotoStore::add`], but reports why a photo was refused.
    ///
    /// Checks run in order: absent, full, duplicate.
    pub fn try_add<P: Into<Option<Photo>>>(
        &mut self,
        photo: P,
    ) -> std::result::Result<(), Rejection> {
        let Some(photo) = photo.into() else {
            return Err(Rejection::Absent);
        };
        if self.is_full() {
            return Err(Rejection::Full {
                capacity: self.capacity,
            });
        }
        if self.get(photo.photo_id(), photo.album_id()).is_some() {
            return Err(Rejection::Duplicate(photo.key()));
        }

        debug!(key = %photo.key(), "adding photo");
        self.photos.push(photo);
        Ok(())
    }

    /// Remove the photo with the given identity, keeping the others in order.
    pub fn remove(&mut self, photo_id: i32, album_id: i32) -> bool {
        self.take(photo_id, album_id).is_some()
    }

    /// Like [`PhotoStore::remove`], but hands back the removed photo.
    pub fn take(&mut self, photo_id: i32, album_id: i32) -> Option<Photo> {
        let pos = self.position(photo_id, album_id)?;
        let removed = self.photos.remove(pos);
        debug!(key = %removed.key(), "removed photo");
        Some(removed)
    }

    /// Replace the url of the photo with the given identity.
    pub fn update(&mut self, photo_id: i32, album_id: i32, url: Option<String>) -> bool {
        match self.get_mut(photo_id, album_id) {
            Some(photo) => {
                debug!(key = %photo.key(), "updating photo url");
                photo.set_url(url);
                true
            }
            None => false,
        }
    }

    /// Point lookup by identity.
    pub fn get(&self, photo_id: i32, album_id: i32) -> Option<&Photo> {
        self.photos.iter().find(|p| p.matches(photo_id, album_id))
    }

    fn get_mut(&mut self, photo_id: i32, album_id: i32) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| p.matches(photo_id, album_id))
    }

    fn position(&self, photo_id: i32, album_id: i32) -> Option<usize> {
        self.photos.iter().position(|p| p.matches(photo_id, album_id))
    }

    /// Every photo of `album_id`, in store order.
    pub fn all_in_album(&self, album_id: i32) -> Vec<Photo> {
        self.find_by(|p| p.album_id() == album_id)
    }

    /// Photos captured from the start of `date_from` through the end of
    /// `date_to`, both days included. Empty when `date_from > date_to`.
    pub fn between_dates(&self, date_from: NaiveDate, date_to: NaiveDate) -> Vec<Photo> {
        self.find_by(|p| {
            let day = p.date().date();
            day >= date_from && day <= date_to
        })
    }

    /// Copy out, in store order, every photo for which `predicate` holds.
    pub fn find_by<F>(&self, predicate: F) -> Vec<Photo>
    where
        F: Fn(&Photo) -> bool,
    {
        self.photos.iter().filter(|p| predicate(*p)).cloned().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.photos.len() >= self.capacity
    }
}

impl<'a> IntoIterator for &'a PhotoStore {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::{reference_time, StoreFixture};
    use super::*;
    use chrono::{Duration, NaiveDateTime, NaiveTime};

    fn photo(album_id: i32, photo_id: i32, date: NaiveDateTime) -> Photo {
        Photo::new(
            album_id,
            photo_id,
            Some(format!("Title{}", photo_id)),
            Some(format!("url{}", photo_id)),
            date,
        )
    }

    fn keys(photos: &[Photo]) -> Vec<PhotoKey> {
        photos.iter().map(Photo::key).collect()
    }

    #[test]
    fn rejects_zero_capacity() {
        match PhotoStore::new(0) {
            Err(PhotozError::InvalidCapacity(0)) => {}
            other => panic!("Expected InvalidCapacity, got {:?}", other),
        }
    }

    #[test]
    fn huge_capacity_is_not_preallocated() {
        let mut store = PhotoStore::new(usize::MAX).unwrap();
        assert_eq!(store.capacity(), usize::MAX);
        assert!(store.add(Photo::new(1, 1, None, None, reference_time())));
        assert_eq!(store.len(), 1);
        assert!(!store.is_full());

        let restored = PhotoStore::from_photos(usize::MAX, store.photos().to_vec()).unwrap();
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn starts_empty() {
        let store = PhotoStore::new(3).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 3);
        assert!(!store.is_full());
    }

    #[test]
    fn scenario_setup_holds_five() {
        let fixture = StoreFixture::scenario();
        assert_eq!(fixture.store.len(), 5);
        assert_eq!(fixture.store.capacity(), 6);
    }

    #[test]
    fn add_rejects_absent_duplicate_and_overflow() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;

        assert!(!store.add(None::<Photo>));
        assert!(!store.add(fixture.photos[2].clone()));
        assert!(store.add(fixture.photos[5].clone()));
        assert_eq!(store.len(), 6);
        assert!(!store.add(photo(10, 4, fixture.now - Duration::days(2))));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn try_add_reports_reason() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;

        assert_eq!(store.try_add(None::<Photo>), Err(Rejection::Absent));
        assert_eq!(
            store.try_add(photo(1, 3, fixture.now)),
            Err(Rejection::Duplicate(PhotoKey::new(1, 3)))
        );
        assert_eq!(store.try_add(fixture.photos[5].clone()), Ok(()));
        assert_eq!(
            store.try_add(photo(10, 4, fixture.now)),
            Err(Rejection::Full { capacity: 6 })
        );
    }

    #[test]
    fn full_store_rejects_even_duplicates_as_full() {
        let mut store = PhotoStore::new(1).unwrap();
        let now = reference_time();
        assert!(store.add(photo(1, 1, now)));
        assert_eq!(
            store.try_add(photo(1, 1, now)),
            Err(Rejection::Full { capacity: 1 })
        );
    }

    #[test]
    fn duplicate_check_ignores_other_fields() {
        let mut store = PhotoStore::new(4).unwrap();
        let now = reference_time();
        assert!(store.add(photo(1, 1, now)));
        let lookalike = Photo::new(1, 1, None, None, now - Duration::days(30));
        assert!(!store.add(lookalike));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1, 1).unwrap().title(), Some("Title1"));
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;

        assert!(!store.remove(4, 1));
        assert_eq!(store.len(), 5);
        assert!(store.remove(1, 1));
        assert_eq!(store.len(), 4);
        assert!(store.get(1, 1).is_none());
        assert!(!store.remove(1, 1));
    }

    #[test]
    fn take_returns_removed_photo() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;

        let taken = store.take(2, 1).unwrap();
        assert_eq!(taken.key(), PhotoKey::new(1, 2));
        assert_eq!(taken.title(), Some("Title2"));
        assert_eq!(store.len(), 4);
        assert!(store.take(2, 1).is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_preserves_order() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;

        assert!(store.remove(3, 1));
        assert_eq!(
            keys(store.photos()),
            vec![
                PhotoKey::new(1, 1),
                PhotoKey::new(1, 2),
                PhotoKey::new(2, 1),
                PhotoKey::new(2, 4),
            ]
        );
    }

    #[test]
    fn remove_frees_capacity() {
        let mut store = PhotoStore::new(1).unwrap();
        let now = reference_time();
        assert!(store.add(photo(1, 1, now)));
        assert!(!store.add(photo(1, 2, now)));
        assert!(store.remove(1, 1));
        assert!(store.add(photo(1, 2, now)));
    }

    #[test]
    fn update_changes_only_url() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;
        let before = store.get(1, 2).unwrap().clone();

        assert!(store.update(1, 2, Some("newUrl".into())));

        let after = store.get(1, 2).unwrap();
        assert_eq!(after.url(), Some("newUrl"));
        assert_eq!(after.title(), before.title());
        assert_eq!(after.date(), before.date());
        assert_eq!(after.key(), before.key());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn update_missing_is_noop() {
        let mut fixture = StoreFixture::scenario();
        let store = &mut fixture.store;
        let snapshot = store.photos().to_vec();

        assert!(!store.update(9, 9, Some("nope".into())));
        assert_eq!(store.photos(), snapshot.as_slice());
        let urls: Vec<_> = store.iter().map(|p| p.url().map(str::to_string)).collect();
        let before: Vec<_> = snapshot.iter().map(|p| p.url().map(str::to_string)).collect();
        assert_eq!(urls, before);
    }

    #[test]
    fn get_finds_by_identity() {
        let fixture = StoreFixture::scenario();
        assert_eq!(fixture.store.get(1, 1), Some(&fixture.photos[0]));
        assert!(fixture.store.get(4, 1).is_none());
    }

    #[test]
    fn all_in_album_in_store_order() {
        let fixture = StoreFixture::scenario();
        let actual = fixture.store.all_in_album(2);
        assert_eq!(
            keys(&actual),
            vec![PhotoKey::new(2, 1), PhotoKey::new(2, 4)]
        );
        assert!(fixture.store.all_in_album(42).is_empty());
    }

    #[test]
    fn query_results_do_not_alias_store() {
        let fixture = StoreFixture::scenario();
        let mut album = fixture.store.all_in_album(1);
        album[0].set_url(Some("changed".into()));
        album.clear();

        assert_eq!(fixture.store.get(1, 1).unwrap().url(), Some("url1"));
        assert_eq!(fixture.store.all_in_album(1).len(), 3);
    }

    #[test]
    fn between_dates_matches_scenario() {
        let fixture = StoreFixture::scenario();
        let today = fixture.now.date();
        let actual = fixture
            .store
            .between_dates(today - Duration::days(6), today - Duration::days(3));

        let mut actual = keys(&actual);
        actual.sort();
        assert_eq!(
            actual,
            vec![
                PhotoKey::new(1, 2),
                PhotoKey::new(1, 3),
                PhotoKey::new(2, 1),
                PhotoKey::new(2, 4),
            ]
        );
    }

    #[test]
    fn between_dates_boundaries_are_inclusive_whole_days() {
        let from = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        let start = from.and_time(NaiveTime::MIN);
        let last_instant = to.and_hms_milli_opt(23, 59, 59, 999).unwrap();

        let mut store = PhotoStore::new(4).unwrap();
        store.add(photo(1, 1, start));
        store.add(photo(1, 2, last_instant));
        store.add(photo(1, 3, start - Duration::milliseconds(1)));
        store.add(photo(1, 4, (to + Duration::days(1)).and_time(NaiveTime::MIN)));

        let actual = store.between_dates(from, to);
        assert_eq!(
            keys(&actual),
            vec![PhotoKey::new(1, 1), PhotoKey::new(1, 2)]
        );
    }

    #[test]
    fn between_dates_single_day_and_inverted_range() {
        let fixture = StoreFixture::scenario();
        let today = fixture.now.date();
        let four_days_ago = today - Duration::days(4);

        let single = fixture.store.between_dates(four_days_ago, four_days_ago);
        assert_eq!(keys(&single), vec![PhotoKey::new(2, 1)]);

        let inverted = fixture.store.between_dates(today, today - Duration::days(7));
        assert!(inverted.is_empty());
    }

    #[test]
    fn find_by_custom_predicate() {
        let fixture = StoreFixture::scenario();
        let titled_one = fixture.store.find_by(|p| p.title() == Some("Title1"));
        assert_eq!(
            keys(&titled_one),
            vec![PhotoKey::new(1, 1), PhotoKey::new(2, 1)]
        );
        assert!(fixture.store.find_by(|_| false).is_empty());
        assert_eq!(fixture.store.find_by(|_| true).len(), 5);
    }

    #[test]
    fn full_scenario() {
        let mut fixture = StoreFixture::scenario();
        let today = fixture.now.date();
        let store = &mut fixture.store;

        assert!(store.add(fixture.photos[5].clone()));
        assert_eq!(store.len(), 6);

        assert!(store.remove(1, 1));
        assert_eq!(store.len(), 5);
        assert!(store.get(1, 1).is_none());

        assert!(store.update(2, 1, Some("newUrl".into())));
        assert_eq!(store.get(2, 1).unwrap().url(), Some("newUrl"));

        assert_eq!(
            keys(&store.all_in_album(2)),
            vec![PhotoKey::new(2, 1), PhotoKey::new(2, 4)]
        );

        let ranged = store.between_dates(today - Duration::days(6), today - Duration::days(3));
        assert_eq!(
            keys(&ranged),
            vec![
                PhotoKey::new(1, 2),
                PhotoKey::new(1, 3),
                PhotoKey::new(2, 1),
                PhotoKey::new(2, 4),
            ]
        );
    }

    #[test]
    fn from_photos_restores_order() {
        let fixture = StoreFixture::scenario();
        let restored = PhotoStore::from_photos(6, fixture.store.photos().to_vec()).unwrap();
        assert_eq!(keys(restored.photos()), keys(fixture.store.photos()));
    }

    #[test]
    fn from_photos_rejects_oversized_snapshot() {
        let fixture = StoreFixture::scenario();
        let result = PhotoStore::from_photos(2, fixture.store.photos().to_vec());
        assert!(matches!(result, Err(PhotozError::Store(_))));
    }

    #[test]
    fn from_photos_rejects_duplicates() {
        let now = reference_time();
        let result = PhotoStore::from_photos(5, vec![photo(1, 1, now), photo(1, 1, now)]);
        assert!(matches!(result, Err(PhotozError::Store(_))));
    }

    #[test]
    fn iterates_by_reference() {
        let fixture = StoreFixture::scenario();
        let count = (&fixture.store).into_iter().count();
        assert_eq!(count, fixture.store.len());
    }
}
