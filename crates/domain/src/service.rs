use log::{debug, error, info};

use crate::{
    CustomPreset, History, InstanceID, InvalidCodeError, Plan, PresetID, PresetRepository,
    Presets, Reps, Sets, ValidationError, Weight, WorkoutID, WorkoutRecord, WorkoutRepository,
    WriteError, catalog, code, plan,
};

/// Outcome of an operation whose in-memory effect has been applied.
///
/// `error` is set if persisting the change failed. The in-memory state stays
/// valid in that case, only the persisted copy is behind.
#[must_use]
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub error: Option<WriteError>,
}

impl<T> Committed<T> {
    fn new(value: T, result: Result<(), WriteError>) -> Self {
        Self {
            value,
            error: result.err(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.error.is_none()
    }
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                crate::$error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

/// State of a session: the ongoing plan, the custom presets and the history.
pub struct Service<R> {
    repository: R,
    plan: Plan,
    presets: Presets,
    history: History,
}

impl<R> Service<R>
where
    R: PresetRepository + WorkoutRepository,
{
    /// Reads the persisted presets and history.
    ///
    /// A slot that cannot be read is treated as empty.
    pub fn new(repository: R) -> Self {
        let presets = log_on_error!(repository.read_presets(), ReadError, "read", "presets")
            .unwrap_or_default();
        let history = log_on_error!(repository.read_workouts(), ReadError, "read", "history")
            .unwrap_or_default();
        info!(
            "loaded {} presets and {} workouts",
            presets.len(),
            history.len()
        );
        Self {
            repository,
            plan: Plan::new(),
            presets: Presets::new(presets),
            history: History::new(history),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn presets(&self) -> &[CustomPreset] {
        self.presets.as_slice()
    }

    pub fn history(&self) -> &[WorkoutRecord] {
        self.history.as_slice()
    }

    pub fn add_exercise(
        &mut self,
        exercise: &catalog::Exercise,
        variant: &str,
        sets: Sets,
        reps: Reps,
        weight: Weight,
    ) -> InstanceID {
        self.plan.add(exercise, variant, sets, reps, weight)
    }

    pub fn remove_entry(&mut self, instance_id: InstanceID) {
        self.plan.remove(instance_id);
    }

    pub fn toggle_completed(&mut self, instance_id: InstanceID) {
        self.plan.toggle_completed(instance_id);
    }

    pub fn clear_plan(&mut self) {
        self.plan.clear();
    }

    pub fn load_system_preset(&mut self, preset: catalog::SystemPreset) {
        self.plan.replace_all(&plan::system_preset_entries(preset));
    }

    /// Replaces the plan by the decoded code.
    ///
    /// The plan is left untouched if the code is rejected.
    pub fn import_code(&mut self, code: &str) -> Result<usize, InvalidCodeError> {
        let entries = code::decode(code)?;
        self.plan.replace_all(&entries);
        info!("imported {} exercises", entries.len());
        Ok(entries.len())
    }

    pub fn plan_code(&self) -> Result<String, ValidationError> {
        if self.plan.is_empty() {
            return Err(ValidationError::EmptyPlan);
        }
        Ok(code::encode(self.plan.entries()))
    }

    pub fn save_current_as_preset(
        &mut self,
        name: &str,
    ) -> Result<Committed<CustomPreset>, ValidationError> {
        let preset = self.presets.save(name, &self.plan)?.clone();
        let result = log_on_error!(
            self.repository.write_presets(self.presets.as_slice()),
            WriteError,
            "write",
            "presets"
        );
        Ok(Committed::new(preset, result))
    }

    pub fn delete_preset(&mut self, id: PresetID) -> Committed<bool> {
        if !self.presets.delete(id) {
            return Committed::new(false, Ok(()));
        }
        let result = log_on_error!(
            self.repository.write_presets(self.presets.as_slice()),
            WriteError,
            "write",
            "presets"
        );
        Committed::new(true, result)
    }

    /// Returns whether the preset exists.
    pub fn load_preset(&mut self, id: PresetID) -> bool {
        let Some(preset) = self.presets.get(id) else {
            return false;
        };
        self.plan.replace_all(&preset.load());
        true
    }

    pub fn preset_code(&self, id: PresetID) -> Option<String> {
        self.presets.get(id).map(CustomPreset::code)
    }

    /// Records the plan as a finished workout and clears the plan.
    pub fn finish_workout(&mut self) -> Committed<WorkoutRecord> {
        let record = self.history.finalize(self.plan.entries()).clone();
        let result = log_on_error!(
            self.repository.write_workouts(self.history.as_slice()),
            WriteError,
            "write",
            "history"
        );
        self.plan.clear();
        info!(
            "finished workout with {} sets and a volume of {}",
            record.total_sets, record.total_volume
        );
        Committed::new(record, result)
    }

    /// Returns whether the workout exists.
    pub fn repeat_workout(&mut self, id: WorkoutID) -> bool {
        let Some(record) = self.history.get(id) else {
            return false;
        };
        self.plan.replace_all(&record.repeat());
        true
    }

    pub fn workout_code(&self, id: WorkoutID) -> Option<String> {
        self.history.get(id).map(WorkoutRecord::code)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use crate::{Name, NameError, ReadError, StorageError, catalog::SystemPreset};

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        presets: RefCell<Vec<CustomPreset>>,
        workouts: RefCell<Vec<WorkoutRecord>>,
        broken: Cell<bool>,
    }

    impl PresetRepository for FakeRepository {
        fn read_presets(&self) -> Result<Vec<CustomPreset>, ReadError> {
            if self.broken.get() {
                return Err(ReadError::Other("invalid JSON".into()));
            }
            Ok(self.presets.borrow().clone())
        }

        fn write_presets(&self, presets: &[CustomPreset]) -> Result<(), WriteError> {
            if self.broken.get() {
                return Err(WriteError::Storage(StorageError::QuotaExceeded));
            }
            *self.presets.borrow_mut() = presets.to_vec();
            Ok(())
        }
    }

    impl WorkoutRepository for FakeRepository {
        fn read_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError> {
            if self.broken.get() {
                return Err(ReadError::Storage(StorageError::Unavailable));
            }
            Ok(self.workouts.borrow().clone())
        }

        fn write_workouts(&self, workouts: &[WorkoutRecord]) -> Result<(), WriteError> {
            if self.broken.get() {
                return Err(WriteError::Storage(StorageError::QuotaExceeded));
            }
            *self.workouts.borrow_mut() = workouts.to_vec();
            Ok(())
        }
    }

    fn service() -> Service<FakeRepository> {
        let mut service = Service::new(FakeRepository::default());
        let squat = catalog::find_by_id("legs-1").unwrap();
        let row = catalog::find_by_id("back-2").unwrap();
        service.add_exercise(
            squat,
            squat.default_variant(),
            Sets::new(3).unwrap(),
            Reps::new(10).unwrap(),
            Weight::BODYWEIGHT,
        );
        service.add_exercise(
            row,
            row.default_variant(),
            Sets::new(5).unwrap(),
            Reps::new(5).unwrap(),
            Weight::new(20.0).unwrap(),
        );
        service
    }

    #[test]
    fn test_new_reads_persisted_state() {
        let repository = FakeRepository::default();
        repository.presets.borrow_mut().push(CustomPreset {
            id: 1.into(),
            name: Name::new("A").unwrap(),
            items: vec![],
            created_at: chrono::DateTime::default(),
        });
        repository
            .workouts
            .borrow_mut()
            .push(WorkoutRecord::new(&[]));

        let service = Service::new(repository);

        assert_eq!(service.presets().len(), 1);
        assert_eq!(service.history().len(), 1);
        assert!(service.plan().is_empty());
    }

    #[test]
    fn test_new_with_unreadable_storage() {
        let repository = FakeRepository::default();
        repository.broken.set(true);

        let service = Service::new(repository);

        assert!(service.presets().is_empty());
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_finish_workout() {
        let mut service = service();
        let instance_id = service.plan().entries()[0].instance_id;
        service.toggle_completed(instance_id);

        let committed = service.finish_workout();

        assert!(committed.is_persisted());
        assert_eq!(committed.value.total_sets, 3);
        assert_eq!(committed.value.total_volume, 30.0);
        assert!(service.plan().is_empty());
        assert_eq!(service.history(), &[committed.value.clone()]);
        assert_eq!(
            *service.repository().workouts.borrow(),
            vec![committed.value]
        );
    }

    #[test]
    fn test_finish_workout_prepends() {
        let mut service = service();
        let first = service.finish_workout().value.id;
        service.load_system_preset(SystemPreset::FullBody);
        let second = service.finish_workout().value.id;

        assert_eq!(
            service.history().iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![second, first]
        );
    }

    #[test]
    fn test_finish_workout_with_failing_storage() {
        let mut service = service();
        service.repository().broken.set(true);

        let committed = service.finish_workout();

        assert!(!committed.is_persisted());
        assert_eq!(service.history().len(), 1);
        assert!(service.repository().workouts.borrow().is_empty());
        assert!(service.plan().is_empty());
    }

    #[test]
    fn test_save_current_as_preset() {
        let mut service = service();

        let committed = service.save_current_as_preset("Pull").unwrap();

        assert!(committed.is_persisted());
        assert_eq!(committed.value.items, service.plan().items());
        assert_eq!(*service.repository().presets.borrow(), vec![committed.value]);
    }

    #[test]
    fn test_save_current_as_preset_invalid() {
        let mut service = service();

        assert!(matches!(
            service.save_current_as_preset("   "),
            Err(ValidationError::Name(NameError::Empty))
        ));

        service.clear_plan();

        assert!(matches!(
            service.save_current_as_preset("Pull"),
            Err(ValidationError::EmptyPlan)
        ));
        assert!(service.presets().is_empty());
        assert!(service.repository().presets.borrow().is_empty());
    }

    #[test]
    fn test_save_current_as_preset_with_failing_storage() {
        let mut service = service();
        service.repository().broken.set(true);

        let committed = service.save_current_as_preset("Pull").unwrap();

        assert!(!committed.is_persisted());
        assert_eq!(service.presets().len(), 1);
    }

    #[test]
    fn test_delete_preset() {
        let mut service = service();
        let id = service.save_current_as_preset("Pull").unwrap().value.id;

        assert!(service.delete_preset(id).value);
        assert!(service.presets().is_empty());
        assert!(service.repository().presets.borrow().is_empty());

        let committed = service.delete_preset(id);

        assert!(!committed.value);
        assert!(committed.is_persisted());
    }

    #[test]
    fn test_load_preset() {
        let mut service = service();
        let id = service.save_current_as_preset("Pull").unwrap().value.id;
        let items = service.plan().items();
        service.clear_plan();

        assert!(service.load_preset(id));
        assert_eq!(service.plan().items(), items);
        assert!(!service.load_preset(PresetID::nil()));
        assert_eq!(service.plan().items(), items);
    }

    #[test]
    fn test_import_code() {
        let mut service = service();
        let code = service.plan_code().unwrap();
        let items = service.plan().items();
        service.clear_plan();

        assert_eq!(service.import_code(&code), Ok(2));
        assert_eq!(service.plan().items(), items);
    }

    #[test]
    fn test_import_invalid_code() {
        let mut service = service();
        let before = service.plan().clone();

        assert_eq!(
            service.import_code("not a code"),
            Err(InvalidCodeError::Base64)
        );
        assert_eq!(service.plan(), &before);
    }

    #[test]
    fn test_plan_code_of_empty_plan() {
        let mut service = service();
        service.clear_plan();

        assert_eq!(service.plan_code(), Err(ValidationError::EmptyPlan));
    }

    #[test]
    fn test_repeat_workout() {
        let mut service = service();
        let instance_id = service.plan().entries()[1].instance_id;
        service.toggle_completed(instance_id);
        let record = service.finish_workout().value;

        assert!(service.repeat_workout(record.id));
        assert_eq!(
            service.plan().items(),
            record.items.iter().map(|e| e.item()).collect::<Vec<_>>()
        );
        assert_eq!(service.plan().num_completed(), 0);
        assert!(service.history()[0].items[1].completed);
        assert!(!service.repeat_workout(WorkoutID::nil()));
    }

    #[test]
    fn test_codes_of_presets_and_workouts() {
        let mut service = service();
        let preset_id = service.save_current_as_preset("Pull").unwrap().value.id;
        let plan_code = service.plan_code().unwrap();
        let workout_id = service.finish_workout().value.id;

        assert_eq!(service.preset_code(preset_id), Some(plan_code.clone()));
        assert_eq!(service.workout_code(workout_id), Some(plan_code));
        assert_eq!(service.preset_code(PresetID::nil()), None);
        assert_eq!(service.workout_code(WorkoutID::nil()), None);
    }
}
