use crate::config::PhotozConfig;
use crate::model::Photo;
use chrono::NaiveDateTime;
use std::path::PathBuf;

pub mod add;
pub mod album;
pub mod between;
pub mod config;
pub mod get;
pub mod list;
pub mod remove;
pub mod update;

#[derive(Debug, Clone)]
pub struct PhotozPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Photos created or changed by the command, as they look afterwards.
    pub affected_photos: Vec<Photo>,
    /// Photos the command selected for display.
    pub listed_photos: Vec<Photo>,
    pub config: Option<PhotozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_photos(mut self, photos: Vec<Photo>) -> Self {
        self.affected_photos = photos;
        self
    }

    pub fn with_listed_photos(mut self, photos: Vec<Photo>) -> Self {
        self.listed_photos = photos;
        self
    }

    pub fn with_config(mut self, config: PhotozConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed the record set.
    pub fn is_mutation(&self) -> bool {
        !self.affected_photos.is_empty()
    }
}

/// Input for [`add::run`].
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub album_id: i32,
    pub photo_id: i32,
    pub title: Option<String>,
    pub url: Option<String>,
    pub date: NaiveDateTime,
}

impl NewPhoto {
    pub fn new(album_id: i32, photo_id: i32, date: NaiveDateTime) -> Self {
        Self {
            album_id,
            photo_id,
            title: None,
            url: None,
            date,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn into_photo(self) -> Photo {
        Photo::new(self.album_id, self.photo_id, self.title, self.url, self.date)
    }
}
