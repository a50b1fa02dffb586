use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PhotoStore;

pub fn run(store: &PhotoStore, album_id: i32) -> Result<CmdResult> {
    let photos = store.all_in_album(album_id);
    let mut result = CmdResult::default();
    if photos.is_empty() {
        result.add_message(CmdMessage::info(format!("No photos in album {}", album_id)));
    }
    Ok(result.with_listed_photos(photos))
}
