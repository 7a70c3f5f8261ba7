//! Shared state of one expedition run.
//!
//! The environment owns the pool, the roster, the found list, the random
//! number source and the logger. It is passed explicitly to every actor;
//! there are no globals.
//!
//! Mutation rules:
//! - actors move artifacts from the pool to the found list through
//!   [`EnvironmentState::draw_artifact`] and [`EnvironmentState::record_find`]
//! - the roster is fixed once the run starts
//! - the logger is write-only

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::Actor;
use crate::artifact::Artifact;
use crate::error::{ExpeditionError, ExpeditionResult, ValidationError};
use crate::logger::Logger;
use crate::pool::ArtifactPool;

/// Stable identifier for an expedition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpeditionId(Uuid);

impl ExpeditionId {
    /// Create a new random expedition ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpeditionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpeditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Actors may still be registered.
    Ready,
    /// Turns are being played; the roster is sealed.
    Running,
    /// The run is over.
    Finished,
}

/// The single shared context of an expedition.
pub struct EnvironmentState {
    /// Run identity.
    pub id: ExpeditionId,
    pool: ArtifactPool,
    roster: Vec<Rc<dyn Actor>>,
    found: Vec<Artifact>,
    rng: ChaCha8Rng,
    log: Logger,
    state: RunState,
}

impl fmt::Debug for EnvironmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentState")
            .field("id", &self.id)
            .field("pool", &self.pool)
            .field("roster", &self.roster_names())
            .field("found", &self.found)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl EnvironmentState {
    /// Creates an environment with an empty roster.
    #[must_use]
    pub fn new(pool: ArtifactPool, rng: ChaCha8Rng, log: Logger) -> Self {
        Self {
            id: ExpeditionId::new(),
            pool,
            roster: Vec::new(),
            found: Vec::new(),
            rng,
            log,
            state: RunState::Ready,
        }
    }

    /// Creates an environment whose random source is seeded from the OS.
    #[must_use]
    pub fn with_os_rng(pool: ArtifactPool, log: Logger) -> Self {
        Self::new(pool, ChaCha8Rng::from_os_rng(), log)
    }

    /// Appends an actor to the roster. Registration order is turn order.
    ///
    /// # Errors
    ///
    /// Returns `ExpeditionError::RosterSealed` once the run has started and
    /// a validation error if the actor has an empty name.
    pub fn register(&mut self, actor: impl Actor + 'static) -> ExpeditionResult<()> {
        if self.state != RunState::Ready {
            return Err(ExpeditionError::RosterSealed);
        }
        if actor.name().trim().is_empty() {
            return Err(ValidationError::EmptyActorName.into());
        }
        self.roster.push(Rc::new(actor));
        Ok(())
    }

    /// Draws a random artifact out of the pool.
    pub fn draw_artifact(&mut self) -> Option<Artifact> {
        self.pool.draw_random(&mut self.rng)
    }

    /// Appends a drawn artifact to the found list.
    pub fn record_find(&mut self, artifact: Artifact) {
        self.found.push(artifact);
    }

    /// The write-only logger handle.
    pub fn log(&mut self) -> &mut Logger {
        &mut self.log
    }

    /// Read access to the logger, for inspecting in-memory output.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.log
    }

    /// Artifacts found so far, in draw order.
    #[must_use]
    pub fn found(&self) -> &[Artifact] {
        &self.found
    }

    /// Artifacts not yet found.
    #[must_use]
    pub const fn pool(&self) -> &ArtifactPool {
        &self.pool
    }

    /// Names of the registered actors, in turn order.
    #[must_use]
    pub fn roster_names(&self) -> Vec<&str> {
        self.roster.iter().map(|actor| actor.name()).collect()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    pub(crate) fn begin_run(&mut self) -> ExpeditionResult<Vec<Rc<dyn Actor>>> {
        if self.state != RunState::Ready {
            return Err(ExpeditionError::AlreadyRun);
        }
        self.state = RunState::Running;
        Ok(self.roster.clone())
    }

    pub(crate) fn finish_run(&mut self) {
        self.state = RunState::Finished;
    }

    /// Verifies that no artifact was lost or duplicated.
    ///
    /// # Errors
    ///
    /// Returns `ExpeditionError::InvariantViolation` if the pool and the
    /// found list no longer add up to the initial pool.
    pub fn check_invariants(&self) -> ExpeditionResult<()> {
        let total = self.pool.len() + self.found.len();
        if total != self.pool.initial_len() {
            return Err(ExpeditionError::invariant(format!(
                "pool ({}) + found ({}) = {total}, expected {}",
                self.pool.len(),
                self.found.len(),
                self.pool.initial_len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.found.len());
        for artifact in &self.found {
            if !seen.insert(&artifact.id) {
                return Err(ExpeditionError::invariant(format!(
                    "artifact '{}' was found twice",
                    artifact.id
                )));
            }
            if self.pool.contains(&artifact.id) {
                return Err(ExpeditionError::invariant(format!(
                    "artifact '{}' is both in the pool and in the found list",
                    artifact.id
                )));
            }
        }
        Ok(())
    }
}
