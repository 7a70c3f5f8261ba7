//! The result of a single actor turn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag of a [`TurnOutcome`], without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// An artifact was found and the run continues.
    Success,
    /// Nothing was found; the run continues with the next actor.
    RecoverableFailure,
    /// The run halts after this turn.
    FatalFailure,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::RecoverableFailure => write!(f, "recoverable_failure"),
            Self::FatalFailure => write!(f, "fatal_failure"),
        }
    }
}

/// What happened during an actor's turn.
///
/// Returned from [`Actor::act`](crate::actor::Actor::act) and inspected by
/// the driver. None of these variants is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// A non-epic artifact was found.
    Success {
        /// Human-readable description.
        message: String,
    },

    /// No artifact was available.
    RecoverableFailure {
        /// Human-readable description.
        message: String,
    },

    /// An epic artifact was found.
    FatalFailure {
        /// Human-readable description.
        message: String,
    },
}

impl TurnOutcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    /// Creates a recoverable failure outcome.
    #[must_use]
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self::RecoverableFailure {
            message: message.into(),
        }
    }

    /// Creates a fatal failure outcome.
    #[must_use]
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::FatalFailure {
            message: message.into(),
        }
    }

    /// The carried message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::RecoverableFailure { message }
            | Self::FatalFailure { message } => message,
        }
    }

    /// The outcome tag.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success { .. } => OutcomeKind::Success,
            Self::RecoverableFailure { .. } => OutcomeKind::RecoverableFailure,
            Self::FatalFailure { .. } => OutcomeKind::FatalFailure,
        }
    }

    /// Returns true if the run must halt after this turn.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::FatalFailure { .. })
    }
}
