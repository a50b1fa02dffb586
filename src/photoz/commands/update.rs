use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhotozError, Result};
use crate::model::PhotoKey;
use crate::store::PhotoStore;

pub fn run(store: &mut PhotoStore, key: PhotoKey, url: Option<String>) -> Result<CmdResult> {
    if !store.update(key.photo_id, key.album_id, url) {
        return Err(PhotozError::PhotoNotFound(key));
    }

    let updated = store
        .get(key.photo_id, key.album_id)
        .cloned()
        .ok_or(PhotozError::PhotoNotFound(key))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Photo updated ({}): {}",
        key,
        updated.url().unwrap_or("<no url>")
    )));
    Ok(result.with_affected_photos(vec![updated]))
}
