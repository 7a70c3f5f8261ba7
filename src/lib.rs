//! # Lighthouse Expedition
//!
//! A small turn-based console expedition. A fixed pool of artifacts is
//! hidden around a lighthouse; each explorer on the roster takes one turn
//! and draws a random artifact from the pool.
//!
//! ## Core Concepts
//!
//! - **Artifact**: An immutable item with an id, a name and a rarity tier
//! - **ArtifactPool**: The artifacts not yet found; it only shrinks
//! - **Actor**: A participant with a single capability, `act`
//! - **TurnOutcome**: Success, recoverable failure (nothing found) or fatal
//!   failure (an epic find, which ends the run)
//! - **EnvironmentState**: The one shared context passed to every actor
//!
//! ## Usage
//!
//! ```rust
//! use lighthouse_expedition::{driver, ExpeditionConfig, Logger};
//!
//! let mut env = ExpeditionConfig::default()
//!     .with_seed(7)
//!     .build(Logger::in_memory())?;
//! let report = driver::run(&mut env)?;
//! assert!(report.found.len() <= 3);
//! # Ok::<(), lighthouse_expedition::ExpeditionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod artifact;
pub mod config;
pub mod driver;
pub mod environment;
pub mod error;
pub mod logger;
pub mod outcome;
pub mod pool;

// Re-export primary types at crate root for convenience
pub use actor::{Actor, Explorer};
pub use artifact::{Artifact, ArtifactId, Rarity};
pub use config::ExpeditionConfig;
pub use driver::{run, ExpeditionReport, HaltReason, TurnRecord};
pub use environment::{EnvironmentState, ExpeditionId, RunState};
pub use error::{ExpeditionError, ExpeditionResult, ValidationError};
pub use logger::Logger;
pub use outcome::{OutcomeKind, TurnOutcome};
pub use pool::ArtifactPool;
