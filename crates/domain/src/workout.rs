use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{PlanEntry, ReadError, WriteError, code};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError>;
    fn write_workouts(&self, workouts: &[WorkoutRecord]) -> Result<(), WriteError>;
}

/// Snapshot of a finished workout session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: WorkoutID,
    pub date: DateTime<Utc>,
    pub items: Vec<PlanEntry>,
    pub total_sets: u32,
    pub total_volume: f32,
}

impl WorkoutRecord {
    #[must_use]
    pub fn new(entries: &[PlanEntry]) -> Self {
        Self {
            id: WorkoutID::new(),
            date: Utc::now(),
            items: entries.to_vec(),
            total_sets: total_sets(entries),
            total_volume: total_volume(entries),
        }
    }

    /// Entries for doing the same workout again.
    #[must_use]
    pub fn repeat(&self) -> Vec<PlanEntry> {
        self.items.iter().map(PlanEntry::renewed).collect()
    }

    #[must_use]
    pub fn code(&self) -> String {
        code::encode(&self.items)
    }
}

/// Sets of all completed entries.
#[must_use]
pub fn total_sets(entries: &[PlanEntry]) -> u32 {
    entries
        .iter()
        .filter(|e| e.completed)
        .map(|e| u32::from(e.sets))
        .sum()
}

/// Sets × reps × weight of all completed entries.
///
/// Bodyweight entries are counted with a weight of 1, so that they contribute
/// their repetitions instead of nothing.
#[must_use]
pub fn total_volume(entries: &[PlanEntry]) -> f32 {
    entries
        .iter()
        .filter(|e| e.completed)
        .map(|e| {
            let weight = if e.weight.is_bodyweight() {
                1.0
            } else {
                f32::from(e.weight)
            };
            #[allow(clippy::cast_precision_loss)]
            let reps = (u32::from(e.sets) * u32::from(e.reps)) as f32;
            reps * weight
        })
        .sum()
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
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

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Finished workouts, most recent first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History(Vec<WorkoutRecord>);

impl History {
    #[must_use]
    pub fn new(workouts: Vec<WorkoutRecord>) -> Self {
        Self(workouts)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WorkoutRecord] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, id: WorkoutID) -> Option<&WorkoutRecord> {
        self.0.iter().find(|w| w.id == id)
    }

    /// Records the entries as a finished workout.
    ///
    /// Clearing the plan is up to the caller.
    pub fn finalize(&mut self, entries: &[PlanEntry]) -> &WorkoutRecord {
        self.0.insert(0, WorkoutRecord::new(entries));
        &self.0[0]
    }
}
