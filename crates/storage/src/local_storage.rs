use gloo_storage::{LocalStorage as GlooStorage, Storage as _};
use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;

use sculpt_domain::StorageError;

use crate::Backend;

/// Backend using the local storage of the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl Backend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        GlooStorage::raw().get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        GlooStorage::raw()
            .set_item(key, value)
            .map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> StorageError {
    match JsError::try_from(value) {
        Ok(err) if err.name == "QuotaExceededError" => StorageError::QuotaExceeded,
        Ok(err) if err.name == "SecurityError" => StorageError::Unavailable,
        Ok(err) => StorageError::Other(Box::new(err)),
        Err(err) => StorageError::Other(Box::new(err)),
    }
}
