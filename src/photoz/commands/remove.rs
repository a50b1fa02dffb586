use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhotozError, Result};
use crate::model::PhotoKey;
use crate::store::PhotoStore;

pub fn run(store: &mut PhotoStore, key: PhotoKey) -> Result<CmdResult> {
    let removed = store
        .take(key.photo_id, key.album_id)
        .ok_or(PhotozError::PhotoNotFound(key))?;

    let mut result = CmdResult::default().with_affected_photos(vec![removed]);
    result.add_message(CmdMessage::success(format!("Photo removed: {}", key)));
    Ok(result)
}
