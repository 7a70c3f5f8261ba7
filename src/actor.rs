//! Expedition participants.

use crate::environment::EnvironmentState;
use crate::outcome::TurnOutcome;

/// A participant that takes exactly one turn per run.
///
/// Actors may draw from the pool and append to the found list through the
/// environment. They never touch the roster.
pub trait Actor {
    /// Display name, also used in log lines.
    fn name(&self) -> &str;

    /// Plays one turn against the shared environment.
    fn act(&self, env: &mut EnvironmentState) -> TurnOutcome;
}

/// Searches the lighthouse grounds for a single artifact.
///
/// # Examples
///
/// ```
/// use lighthouse_expedition::{Actor, Explorer};
///
/// let explorer = Explorer::new("Alice");
/// assert_eq!(explorer.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    name: String,
}

impl Explorer {
    /// Creates an explorer with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Actor for Explorer {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&self, env: &mut EnvironmentState) -> TurnOutcome {
        let Some(artifact) = env.draw_artifact() else {
            env.log()
                .write(format!("{} found nothing and returned to camp.", self.name));
            return TurnOutcome::recoverable(format!("{} could not find an artifact.", self.name));
        };

        env.log().write(format!("{} found artifact: {artifact}", self.name));
        let cursed = artifact.rarity.is_top_tier();
        let found_name = artifact.name.clone();
        env.record_find(artifact);

        if cursed {
            TurnOutcome::fatal(format!("{} ran into an ancient curse!", self.name))
        } else {
            TurnOutcome::success(format!("{} found {found_name}", self.name))
        }
    }
}
