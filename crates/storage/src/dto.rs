use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sculpt_domain as domain;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InvalidValue {
    #[error("invalid date: {0}")]
    Date(String),
    #[error("invalid creation time: {0}")]
    CreatedAt(i64),
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Sets(#[from] domain::SetsError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
}

/// Interprets a persisted identifier.
///
/// Besides UUIDs, plain numbers are accepted, as they were used as
/// identifiers by earlier versions.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id)
        .ok()
        .or_else(|| id.parse::<u128>().ok().map(|n| Uuid::from_bytes(n.to_be_bytes())))
}

fn id_or_new<T: From<Uuid>>(id: &str, new: impl FnOnce() -> T) -> T {
    if let Some(uuid) = parse_id(id) {
        T::from(uuid)
    } else {
        debug!("replaced unrecognized identifier {id:?}");
        new()
    }
}

/// Converts the exercises of a preset or record, skipping invalid ones.
///
/// A single broken exercise must not cost the whole preset or record.
fn valid_items<D, T>(items: Vec<D>) -> Vec<T>
where
    T: TryFrom<D, Error = InvalidValue>,
{
    items
        .into_iter()
        .filter_map(|item| {
            T::try_from(item)
                .inspect_err(|err| warn!("skipped invalid exercise: {err}"))
                .ok()
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub exercise_id: String,
    pub variant: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
}

impl From<&domain::PlanItem> for PlanItem {
    fn from(value: &domain::PlanItem) -> Self {
        Self {
            exercise_id: value.exercise_id.clone(),
            variant: value.variant.clone(),
            name: domain::catalog::find_by_id(&value.exercise_id)
                .map(|e| e.name.to_string())
                .unwrap_or_default(),
            sets: value.sets.into(),
            reps: value.reps.into(),
            weight: value.weight.into(),
        }
    }
}

impl TryFrom<PlanItem> for domain::PlanItem {
    type Error = InvalidValue;

    fn try_from(value: PlanItem) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id,
            variant: value.variant,
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(value.reps)?,
            weight: domain::Weight::new(value.weight)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub instance_id: String,
    pub exercise_id: String,
    pub variant: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
    #[serde(default)]
    pub completed: bool,
}

impl From<&domain::PlanEntry> for PlanEntry {
    fn from(value: &domain::PlanEntry) -> Self {
        Self {
            instance_id: value.instance_id.to_string(),
            exercise_id: value.exercise_id.clone(),
            variant: value.variant.clone(),
            name: value.name.clone(),
            sets: value.sets.into(),
            reps: value.reps.into(),
            weight: value.weight.into(),
            completed: value.completed,
        }
    }
}

impl TryFrom<PlanEntry> for domain::PlanEntry {
    type Error = InvalidValue;

    fn try_from(value: PlanEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            instance_id: id_or_new(&value.instance_id, domain::InstanceID::new),
            exercise_id: value.exercise_id,
            variant: value.variant,
            name: value.name,
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(value.reps)?,
            weight: domain::Weight::new(value.weight)?,
            completed: value.completed,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomPreset {
    pub id: String,
    pub name: String,
    pub items: Vec<PlanItem>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl From<&domain::CustomPreset> for CustomPreset {
    fn from(value: &domain::CustomPreset) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            items: value.items.iter().map(PlanItem::from).collect(),
            created_at: value.created_at.timestamp_millis(),
        }
    }
}

impl TryFrom<CustomPreset> for domain::CustomPreset {
    type Error = InvalidValue;

    fn try_from(value: CustomPreset) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_or_new(&value.id, domain::PresetID::new),
            name: domain::Name::new(&value.name)?,
            items: valid_items(value.items),
            created_at: DateTime::from_timestamp_millis(value.created_at)
                .ok_or(InvalidValue::CreatedAt(value.created_at))?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: String,
    /// RFC 3339 timestamp.
    pub date: String,
    pub items: Vec<PlanEntry>,
    pub total_sets: u32,
    pub total_volume: f32,
}

impl From<&domain::WorkoutRecord> for WorkoutRecord {
    fn from(value: &domain::WorkoutRecord) -> Self {
        Self {
            id: value.id.to_string(),
            date: value.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            items: value.items.iter().map(PlanEntry::from).collect(),
            total_sets: value.total_sets,
            total_volume: value.total_volume,
        }
    }
}

impl TryFrom<WorkoutRecord> for domain::WorkoutRecord {
    type Error = InvalidValue;

    fn try_from(value: WorkoutRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_or_new(&value.id, domain::WorkoutID::new),
            date: DateTime::parse_from_rfc3339(&value.date)
                .map_err(|_| InvalidValue::Date(value.date.clone()))?
                .with_timezone(&Utc),
            items: valid_items(value.items),
            total_sets: value.total_sets,
            total_volume: value.total_volume,
        })
    }
}
