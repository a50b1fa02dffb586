use crate::commands::{CmdMessage, CmdResult, NewPhoto};
use crate::error::{PhotozError, Result};
use crate::store::PhotoStore;

pub fn run(store: &mut PhotoStore, new_photo: NewPhoto) -> Result<CmdResult> {
    let photo = new_photo.into_photo();
    let key = photo.key();

    store.try_add(photo.clone()).map_err(PhotozError::Rejected)?;

    let mut result = CmdResult::default().with_affected_photos(vec![photo]);
    result.add_message(CmdMessage::success(format!("Photo added: {}", key)));
    if store.is_full() {
        result.add_message(CmdMessage::warning(format!(
            "Catalog is now full ({} photos)",
            store.capacity()
        )));
    }
    Ok(result)
}
