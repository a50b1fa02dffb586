use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PhotoStore;
use chrono::NaiveDate;

pub fn run(store: &PhotoStore, date_from: NaiveDate, date_to: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if date_from > date_to {
        result.add_message(CmdMessage::warning(format!(
            "Start date {} is after end date {}",
            date_from, date_to
        )));
    }

    let photos = store.between_dates(date_from, date_to);
    if photos.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No photos taken between {} and {}",
            date_from, date_to
        )));
    }
    Ok(result.with_listed_photos(photos))
}
