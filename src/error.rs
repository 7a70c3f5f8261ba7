//! Error types for the expedition.
//!
//! Domain outcomes (an empty-handed explorer, a cursed find) are not
//! errors; they travel as [`TurnOutcome`](crate::outcome::TurnOutcome)
//! values. The types here cover bad construction input and internal
//! consistency bugs only.

use thiserror::Error;

use crate::artifact::ArtifactId;

/// Validation errors that occur while building an expedition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Two artifacts share an id.
    #[error("Artifact id '{id}' appears more than once in the pool")]
    DuplicateArtifactId {
        /// The repeated id.
        id: ArtifactId,
    },

    /// An artifact id is blank.
    #[error("Artifact id cannot be empty")]
    EmptyArtifactId,

    /// An artifact name is blank.
    #[error("Artifact '{id}' has an empty name")]
    EmptyArtifactName {
        /// Id of the nameless artifact.
        id: ArtifactId,
    },

    /// An actor name is blank.
    #[error("Actor name cannot be empty")]
    EmptyActorName,
}

/// Top-level error type for an expedition run.
#[derive(Debug, Error)]
pub enum ExpeditionError {
    /// Bad construction input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The pool and the found list disagree. This is always a bug.
    #[error("Invariant violation: {reason}")]
    InvariantViolation {
        /// What disagreed.
        reason: String,
    },

    /// An actor was registered after the run started.
    #[error("Roster is sealed; actors can only be registered before the run")]
    RosterSealed,

    /// The environment was run a second time.
    #[error("Expedition has already run")]
    AlreadyRun,
}

impl ExpeditionError {
    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an invariant violation.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

/// Result type alias for expedition operations.
pub type ExpeditionResult<T> = Result<T, ExpeditionError>;
