use crate::commands::CmdResult;
use crate::error::{PhotozError, Result};
use crate::model::PhotoKey;
use crate::store::PhotoStore;

pub fn run(store: &PhotoStore, key: PhotoKey) -> Result<CmdResult> {
    let photo = store
        .get(key.photo_id, key.album_id)
        .cloned()
        .ok_or(PhotozError::PhotoNotFound(key))?;
    Ok(CmdResult::default().with_listed_photos(vec![photo]))
}
