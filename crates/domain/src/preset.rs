use chrono::{DateTime, Utc};
use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{Name, Plan, PlanEntry, PlanItem, ReadError, ValidationError, WriteError, code};

pub trait PresetRepository {
    fn read_presets(&self) -> Result<Vec<CustomPreset>, ReadError>;
    fn write_presets(&self, presets: &[CustomPreset]) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomPreset {
    pub id: PresetID,
    pub name: Name,
    pub items: Vec<PlanItem>,
    pub created_at: DateTime<Utc>,
}

impl CustomPreset {
    /// Entries with a fresh identity and names taken from the current catalog.
    ///
    /// Items of exercises missing from the catalog are skipped.
    #[must_use]
    pub fn load(&self) -> Vec<PlanEntry> {
        self.items
            .iter()
            .cloned()
            .filter_map(|item| {
                let exercise_id = item.exercise_id.clone();
                let entry = item.hydrate();
                if entry.is_none() {
                    debug!("skipped unknown exercise {exercise_id} of preset {}", self.name);
                }
                entry
            })
            .collect()
    }

    #[must_use]
    pub fn code(&self) -> String {
        code::encode_items(&self.items)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PresetID(Uuid);

impl PresetID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PresetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PresetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Custom presets in creation order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Presets(Vec<CustomPreset>);

impl Presets {
    #[must_use]
    pub fn new(presets: Vec<CustomPreset>) -> Self {
        Self(presets)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CustomPreset] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, id: PresetID) -> Option<&CustomPreset> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Snapshots the configuration of the plan under the given name.
    ///
    /// Nothing is changed if the plan is empty or the name is blank.
    pub fn save(&mut self, name: &str, plan: &Plan) -> Result<&CustomPreset, ValidationError> {
        if plan.is_empty() {
            return Err(ValidationError::EmptyPlan);
        }
        let name = Name::new(name)?;
        self.0.push(CustomPreset {
            id: PresetID::new(),
            name,
            items: plan.items(),
            created_at: Utc::now(),
        });
        Ok(&self.0[self.0.len() - 1])
    }

    /// Returns whether a preset was removed.
    pub fn delete(&mut self, id: PresetID) -> bool {
        let len = self.0.len();
        self.0.retain(|p| p.id != id);
        self.0.len() != len
    }
}
