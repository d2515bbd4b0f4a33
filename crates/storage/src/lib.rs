#![warn(clippy::pedantic)]

use std::collections::VecDeque;

use log::warn;
use serde::{Serialize, de::DeserializeOwned};

use sculpt_app::log as app_log;
use sculpt_domain::{
    CustomPreset, PresetRepository, ReadError, StorageError, WorkoutRecord, WorkoutRepository,
    WriteError,
};

pub mod dto;
pub mod file;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;

/// Key-value store holding one JSON document per slot.
///
/// Documents are passed as text, so that numbers keep the shortest
/// representation of their original precision.
#[allow(clippy::missing_errors_doc)]
pub trait Backend {
    /// Returns `None` if nothing has been stored under the key.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(strum::AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    #[strum(serialize = "sculpt_history")]
    History,
    #[strum(serialize = "sculpt_custom_presets")]
    CustomPresets,
    #[strum(serialize = "sculpt_log")]
    Log,
}

/// Persists presets, workout history and log entries in a backend.
#[derive(Debug, Clone)]
pub struct Storage<B> {
    backend: B,
}

impl<B: Backend> Storage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>, ReadError> {
        match self.backend.get_item(slot.as_ref())? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|err| ReadError::Other(Box::new(err))),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, slot: Slot, value: &T) -> Result<(), WriteError> {
        let text = serde_json::to_string(value).map_err(|err| WriteError::Other(Box::new(err)))?;
        Ok(self.backend.set_item(slot.as_ref(), &text)?)
    }
}

/// Converts the stored documents, skipping the ones that cannot be restored.
fn convert<D, T>(slot: Slot, documents: Vec<D>) -> Vec<T>
where
    T: TryFrom<D, Error = dto::InvalidValue>,
{
    documents
        .into_iter()
        .filter_map(|document| match T::try_from(document) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("skipped invalid entry in {}: {err}", slot.as_ref());
                None
            }
        })
        .collect()
}

impl<B: Backend> PresetRepository for Storage<B> {
    fn read_presets(&self) -> Result<Vec<CustomPreset>, ReadError> {
        let presets: Vec<dto::CustomPreset> = self.read(Slot::CustomPresets)?.unwrap_or_default();
        Ok(convert(Slot::CustomPresets, presets))
    }

    fn write_presets(&self, presets: &[CustomPreset]) -> Result<(), WriteError> {
        self.write(
            Slot::CustomPresets,
            &presets
                .iter()
                .map(dto::CustomPreset::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl<B: Backend> WorkoutRepository for Storage<B> {
    fn read_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError> {
        let workouts: Vec<dto::WorkoutRecord> = self.read(Slot::History)?.unwrap_or_default();
        Ok(convert(Slot::History, workouts))
    }

    fn write_workouts(&self, workouts: &[WorkoutRecord]) -> Result<(), WriteError> {
        self.write(
            Slot::History,
            &workouts
                .iter()
                .map(dto::WorkoutRecord::from)
                .collect::<Vec<_>>(),
        )
    }
}

// Must not log, as it is called by the logger itself.
impl<B: Backend + Send + Sync + 'static> app_log::Repository for Storage<B> {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        self.read(Slot::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(app_log::MAX_ENTRIES);
        self.write(Slot::Log, &entries)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }
}
