use super::backend::StorageBackend;
use crate::error::{PhotozError, Result};
use crate::model::Photo;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the API layer is single-threaded.
/// This keeps `StorageBackend` on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    photos: RefCell<Vec<Photo>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    pub fn with_photos(photos: Vec<Photo>) -> Self {
        let backend = Self::new();
        *backend.photos.borrow_mut() = photos;
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn load_photos(&self) -> Result<Vec<Photo>> {
        Ok(self.photos.borrow().clone())
    }

    fn save_photos(&self, photos: &[Photo]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PhotozError::Store("Simulated write error".to_string()));
        }
        *self.photos.borrow_mut() = photos.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://photos")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Photo;
    use crate::store::PhotoStore;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    /// Fixed "now" shared by fixtures so date-based tests never depend on the clock.
    pub fn reference_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    pub struct StoreFixture {
        pub store: PhotoStore,
        /// Every photo the fixture knows about, including ones not yet added.
        pub photos: Vec<Photo>,
        pub now: NaiveDateTime,
    }

    impl StoreFixture {
        pub fn new(capacity: usize, now: NaiveDateTime) -> Self {
            Self {
                store: PhotoStore::new(capacity).unwrap(),
                photos: Vec::new(),
                now,
            }
        }

        /// Capacity 6 holding five photos dated 7..=3 days before `now`:
        /// (1,1) (1,2) (1,3) (2,1) (2,4). A sixth photo (1,4), two days old,
        /// is prepared in `photos[5]` but not added.
        pub fn scenario() -> Self {
            Self::scenario_at(reference_time())
        }

        pub fn scenario_at(now: NaiveDateTime) -> Self {
            let mut fixture = Self::new(6, now)
                .with_photo(1, 1, "Title1", "url1", 7)
                .with_photo(1, 2, "Title2", "url2", 6)
                .with_photo(1, 3, "Title3", "url3", 5)
                .with_photo(2, 1, "Title1", "url1", 4)
                .with_photo(2, 4, "Title4", "url4", 3);
            fixture.photos.push(Photo::new(
                1,
                4,
                Some("Title4".to_string()),
                Some("url4".to_string()),
                now - Duration::days(2),
            ));
            fixture
        }

        /// Add a photo dated `days_ago` days before `now`.
        pub fn with_photo(
            mut self,
            album_id: i32,
            photo_id: i32,
            title: &str,
            url: &str,
            days_ago: i64,
        ) -> Self {
            let photo = Photo::new(
                album_id,
                photo_id,
                Some(title.to_string()),
                Some(url.to_string()),
                self.now - Duration::days(days_ago),
            );
            assert!(self.store.add(photo.clone()), "fixture photo rejected");
            self.photos.push(photo);
            self
        }
    }
}
