use crate::constants::SETTINGS_STORAGE_KEY;
use crate::core::{AppSettings, SettingsError};
use thiserror::Error;
use web_sys as web;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage read failed: {0}")]
    Read(String),
    #[error("localStorage write failed: {0}")]
    Write(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn local_storage() -> Result<web::Storage, StorageError> {
    web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Stored settings, `None` when nothing was saved yet.
pub fn try_load() -> Result<Option<AppSettings>, StorageError> {
    let raw = local_storage()?
        .get_item(SETTINGS_STORAGE_KEY)
        .map_err(|e| StorageError::Read(format!("{:?}", e)))?;
    match raw {
        Some(json) => Ok(Some(AppSettings::from_json(&json)?)),
        None => Ok(None),
    }
}

pub fn try_save(settings: &AppSettings) -> Result<(), StorageError> {
    let json = settings.to_json()?;
    local_storage()?
        .set_item(SETTINGS_STORAGE_KEY, &json)
        .map_err(|e| StorageError::Write(format!("{:?}", e)))
}

/// Restore the saved preset; any failure falls back to defaults.
pub fn load_or_default() -> AppSettings {
    match try_load() {
        Ok(Some(settings)) => {
            log::info!("[storage] restored saved settings");
            settings
        }
        Ok(None) => {
            log::info!("[storage] no saved settings, using defaults");
            AppSettings::default()
        }
        Err(e) => {
            log::warn!("[storage] load failed, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Persist, logging instead of failing.
pub fn save(settings: &AppSettings) {
    if let Err(e) = try_save(settings) {
        log::warn!("[storage] save failed: {}", e);
    }
}
