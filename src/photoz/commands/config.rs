use crate::commands::{CmdMessage, CmdResult, PhotozPaths};
use crate::config::PhotozConfig;
use crate::error::{PhotozError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// `photo_count` is the number of photos currently stored; capacity may not
/// drop below it.
pub fn run(paths: &PhotozPaths, action: ConfigAction, photo_count: usize) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = PhotozConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PhotozConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| PhotozError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PhotozConfig::load(dir)?;
            config.set(&key, &value).map_err(PhotozError::Api)?;
            if config.capacity < photo_count {
                return Err(PhotozError::Api(format!(
                    "Capacity {} is below the {} photos already stored",
                    config.capacity, photo_count
                )));
            }
            config.save(dir)?;
            let mut result = CmdResult::default();
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result.with_config(config))
        }
    }
}
