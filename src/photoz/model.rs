use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The `(album, photo)` pair that identifies a photo inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoKey {
    pub album_id: i32,
    pub photo_id: i32,
}

impl PhotoKey {
    pub fn new(album_id: i32, photo_id: i32) -> Self {
        Self { album_id, photo_id }
    }
}

impl fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.album_id, self.photo_id)
    }
}

/// A single photo record.
///
/// Equality, hashing and ordering look at the identity pair only, so two
/// photos with the same album and photo ids compare equal even when their
/// title, url or capture date differ. `url` is the only field that can change
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    album_id: i32,
    photo_id: i32,
    title: Option<String>,
    url: Option<String>,
    date: NaiveDateTime,
}

impl Photo {
    pub fn new(
        album_id: i32,
        photo_id: i32,
        title: Option<String>,
        url: Option<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            album_id,
            photo_id,
            title,
            url,
            date,
        }
    }

    pub fn album_id(&self) -> i32 {
        self.album_id
    }

    pub fn photo_id(&self) -> i32 {
        self.photo_id
    }

    pub fn key(&self) -> PhotoKey {
        PhotoKey::new(self.album_id, self.photo_id)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Capture moment of the photo.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    pub(crate) fn matches(&self, photo_id: i32, album_id: i32) -> bool {
        self.album_id == album_id && self.photo_id == photo_id
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Photo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Photo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
