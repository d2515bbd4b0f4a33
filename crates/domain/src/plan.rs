use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::catalog::{self, SystemPreset};

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstanceID(Uuid);

impl InstanceID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for InstanceID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for InstanceID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Display, Into, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub const DEFAULT: Sets = Sets(3);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be at least 1")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Into, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub const DEFAULT: Reps = Reps(10);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be at least 1")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Load in kg, zero denotes bodyweight.
#[derive(Debug, Display, Into, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const BODYWEIGHT: Weight = Weight(0.0);

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn is_bodyweight(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a finite number of at least 0 kg")]
    OutOfRange,
    #[error("Weight must be a decimal number")]
    ParseError,
}

/// Exercise configuration without any session state.
///
/// This is the shape carried by plan codes and custom presets.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    pub exercise_id: String,
    pub variant: String,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
}

impl PlanItem {
    /// Turns the item into a live entry, deriving the name from the catalog.
    ///
    /// Returns `None` if the exercise is not part of the catalog.
    #[must_use]
    pub fn hydrate(self) -> Option<PlanEntry> {
        let exercise = catalog::find_by_id(&self.exercise_id)?;
        Some(PlanEntry {
            instance_id: InstanceID::new(),
            exercise_id: self.exercise_id,
            variant: self.variant,
            name: exercise.name.to_string(),
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            completed: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub instance_id: InstanceID,
    pub exercise_id: String,
    pub variant: String,
    pub name: String,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
    pub completed: bool,
}

impl PlanEntry {
    #[must_use]
    pub fn item(&self) -> PlanItem {
        PlanItem {
            exercise_id: self.exercise_id.clone(),
            variant: self.variant.clone(),
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
        }
    }

    /// Copy with a new identity and the completion state reset.
    #[must_use]
    pub fn renewed(&self) -> Self {
        Self {
            instance_id: InstanceID::new(),
            completed: false,
            ..self.clone()
        }
    }
}

/// Entries of a system preset with default volume and the default variant.
#[must_use]
pub fn system_preset_entries(preset: SystemPreset) -> Vec<PlanEntry> {
    catalog::preset_ids(preset)
        .iter()
        .filter_map(|id| catalog::find_by_id(id))
        .map(|exercise| PlanEntry {
            instance_id: InstanceID::new(),
            exercise_id: exercise.id.to_string(),
            variant: exercise.default_variant().to_string(),
            name: exercise.name.to_string(),
            sets: Sets::DEFAULT,
            reps: Reps::DEFAULT,
            weight: Weight::BODYWEIGHT,
            completed: false,
        })
        .collect()
}

/// The plan of the ongoing session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Plan {
    entries: Vec<PlanEntry>,
}

impl Plan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(
        &mut self,
        exercise: &catalog::Exercise,
        variant: &str,
        sets: Sets,
        reps: Reps,
        weight: Weight,
    ) -> InstanceID {
        let instance_id = InstanceID::new();
        self.entries.push(PlanEntry {
            instance_id,
            exercise_id: exercise.id.to_string(),
            variant: variant.to_string(),
            name: exercise.name.to_string(),
            sets,
            reps,
            weight,
            completed: false,
        });
        instance_id
    }

    pub fn remove(&mut self, instance_id: InstanceID) {
        self.entries.retain(|e| e.instance_id != instance_id);
    }

    pub fn toggle_completed(&mut self, instance_id: InstanceID) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.instance_id == instance_id)
        {
            entry.completed = !entry.completed;
        }
    }

    /// Installs new entries, each with a fresh identity and reset completion.
    pub fn replace_all(&mut self, entries: &[PlanEntry]) {
        self.entries = entries.iter().map(PlanEntry::renewed).collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn items(&self) -> Vec<PlanItem> {
        self.entries.iter().map(PlanEntry::item).collect()
    }

    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.entries.iter().map(|e| u32::from(e.sets)).sum()
    }

    #[must_use]
    pub fn num_completed(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn plan() -> Plan {
        let mut plan = Plan::new();
        let squat = catalog::find_by_id("legs-1").unwrap();
        let bench = catalog::find_by_id("chest-2").unwrap();
        plan.add(
            squat,
            "槓鈴頸後 Back Squat",
            Sets::new(5).unwrap(),
            Reps::new(5).unwrap(),
            Weight::new(100.0).unwrap(),
        );
        plan.add(
            bench,
            bench.default_variant(),
            Sets::new(3).unwrap(),
            Reps::new(8).unwrap(),
            Weight::new(60.0).unwrap(),
        );
        plan
    }

    #[rstest]
    #[case("3", Ok(Sets(3)))]
    #[case(" 12 ", Ok(Sets(12)))]
    #[case("0", Err(SetsError::OutOfRange))]
    #[case("100", Ok(Sets(100)))]
    #[case("-1", Err(SetsError::ParseError))]
    #[case("three", Err(SetsError::ParseError))]
    fn test_sets_try_from(#[case] value: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(value), expected);
    }

    #[rstest]
    #[case("10", Ok(Reps(10)))]
    #[case("999", Ok(Reps(999)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("1000", Ok(Reps(1000)))]
    #[case("1.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("0", Ok(Weight(0.0)))]
    #[case("62.5", Ok(Weight(62.5)))]
    #[case("-2.5", Err(WeightError::OutOfRange))]
    #[case("1000", Ok(Weight(1000.0)))]
    #[case("1200.5", Ok(Weight(1200.5)))]
    #[case("NaN", Err(WeightError::OutOfRange))]
    #[case("inf", Err(WeightError::OutOfRange))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[test]
    fn test_plan_add() {
        let plan = plan();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries()[0].exercise_id, "legs-1");
        assert_eq!(plan.entries()[0].name, "深蹲 Squat");
        assert_eq!(plan.entries()[0].variant, "槓鈴頸後 Back Squat");
        assert_eq!(plan.entries()[1].exercise_id, "chest-2");
        assert!(plan.entries().iter().all(|e| !e.completed));
        assert_ne!(plan.entries()[0].instance_id, plan.entries()[1].instance_id);
    }

    #[test]
    fn test_plan_remove() {
        let mut plan = plan();
        let instance_id = plan.entries()[0].instance_id;

        plan.remove(instance_id);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].exercise_id, "chest-2");

        plan.remove(instance_id);

        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_plan_toggle_completed() {
        let mut plan = plan();
        let instance_id = plan.entries()[1].instance_id;

        plan.toggle_completed(instance_id);

        assert!(!plan.entries()[0].completed);
        assert!(plan.entries()[1].completed);
        assert_eq!(plan.num_completed(), 1);

        plan.toggle_completed(instance_id);

        assert!(!plan.entries()[1].completed);

        let before = plan.clone();
        plan.toggle_completed(InstanceID::from(42));

        assert_eq!(plan, before);
    }

    #[test]
    fn test_plan_replace_all() {
        let mut source = plan();
        source.toggle_completed(source.entries()[0].instance_id);
        let mut plan = Plan::new();

        plan.replace_all(source.entries());

        assert_eq!(plan.items(), source.items());
        assert!(plan.entries().iter().all(|e| !e.completed));
        for (new, old) in plan.entries().iter().zip(source.entries()) {
            assert_ne!(new.instance_id, old.instance_id);
            assert_eq!(new.name, old.name);
        }

        plan.toggle_completed(plan.entries()[1].instance_id);

        assert!(!source.entries()[1].completed);
    }

    #[test]
    fn test_plan_clear() {
        let mut plan = plan();

        plan.clear();

        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_total_sets() {
        assert_eq!(plan().total_sets(), 8);
        assert_eq!(Plan::new().total_sets(), 0);
    }

    #[test]
    fn test_plan_item_hydrate() {
        let item = PlanItem {
            exercise_id: "core-1".to_string(),
            variant: "側向 Side Plank".to_string(),
            sets: Sets(2),
            reps: Reps(30),
            weight: Weight(0.0),
        };

        let entry = item.clone().hydrate().unwrap();

        assert_eq!(entry.name, "平板支撐 Plank");
        assert_eq!(entry.item(), item);
        assert!(!entry.completed);

        assert_eq!(
            PlanItem {
                exercise_id: "core-9".to_string(),
                ..item
            }
            .hydrate(),
            None
        );
    }

    #[test]
    fn test_system_preset_entries() {
        let entries = system_preset_entries(SystemPreset::LowerBody);

        assert_eq!(
            entries
                .iter()
                .map(|e| e.exercise_id.as_str())
                .collect::<Vec<_>>(),
            vec!["legs-1", "legs-3", "legs-2", "legs-4", "core-2"]
        );
        assert_eq!(entries[0].variant, "徒手 Bodyweight");
        assert!(entries.iter().all(|e| e.sets == Sets::DEFAULT
            && e.reps == Reps::DEFAULT
            && e.weight.is_bodyweight()
            && !e.completed));
        assert_eq!(
            entries
                .iter()
                .map(|e| e.instance_id)
                .collect::<HashSet<_>>()
                .len(),
            5
        );
    }
}
