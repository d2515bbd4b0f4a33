#![warn(clippy::pedantic)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use ::log::{debug, info};
use sculpt_domain::{PresetRepository, Service, WorkoutRepository};

pub mod log;

/// A running instance of the planner.
///
/// Owns the domain service for the lifetime of the session and routes log
/// records into the same repository.
pub struct Session<R> {
    service: Service<R>,
    log: R,
}

impl<R> Session<R>
where
    R: PresetRepository + WorkoutRepository + log::Repository + Clone,
{
    /// Installs the logger and reads the persisted presets and history.
    pub fn start(repository: R) -> Self {
        if let Err(err) = log::init(Arc::new(Mutex::new(repository.clone()))) {
            debug!("logger already installed: {err}");
        }
        info!("starting session");
        Self {
            service: Service::new(repository.clone()),
            log: repository,
        }
    }

    pub fn service(&self) -> &Service<R> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut Service<R> {
        &mut self.service
    }

    /// Recently logged entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.log.read_entries()
    }

    /// Ends the session, discarding the plan.
    pub fn end(self) -> R {
        info!(
            "ending session with {} planned exercises",
            self.service.plan().len()
        );
        self.log
    }
}
