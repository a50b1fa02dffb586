use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PhotoStore;

pub fn run(store: &PhotoStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} photos",
        store.len(),
        store.capacity()
    )));
    Ok(result.with_listed_photos(store.find_by(|_| true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_everything_with_usage() {
        let fixture = StoreFixture::scenario();
        let result = run(&fixture.store).unwrap();

        assert_eq!(result.listed_photos.len(), 5);
        assert_eq!(result.messages[0].content, "5 of 6 photos");
    }
}
