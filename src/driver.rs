//! The turn loop.
//!
//! Each registered actor gets exactly one turn, in registration order.
//! A fatal outcome halts the run and the remaining actors never act.
//! Invariants are checked after every turn and a violation aborts the run
//! with an error instead of being logged.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::artifact::Artifact;
use crate::environment::{EnvironmentState, ExpeditionId};
use crate::error::ExpeditionResult;
use crate::outcome::{OutcomeKind, TurnOutcome};

/// One played turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Actor who played the turn.
    pub actor: String,
    /// Outcome tag.
    pub kind: OutcomeKind,
    /// Outcome message.
    pub message: String,
}

/// Why the run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum HaltReason {
    /// Every actor took its turn.
    RosterExhausted,
    /// An actor produced a fatal outcome.
    Fatal {
        /// Name of that actor.
        actor: String,
    },
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionReport {
    /// Run identity.
    pub id: ExpeditionId,
    /// Turns in the order they were played.
    pub turns: Vec<TurnRecord>,
    /// Found artifacts in draw order.
    pub found: Vec<Artifact>,
    /// Artifacts left in the pool.
    pub remaining: usize,
    /// Why the run stopped.
    pub halted: HaltReason,
}

impl ExpeditionReport {
    /// Returns true if the run stopped on a fatal outcome.
    #[must_use]
    pub const fn halted_by_fatal(&self) -> bool {
        matches!(self.halted, HaltReason::Fatal { .. })
    }

    /// Names of the actors that took a turn, in order.
    #[must_use]
    pub fn actors_played(&self) -> Vec<&str> {
        self.turns.iter().map(|turn| turn.actor.as_str()).collect()
    }
}

/// Runs the expedition to completion.
///
/// # Errors
///
/// Returns `ExpeditionError::AlreadyRun` if the environment has already been
/// used, and `ExpeditionError::InvariantViolation` if an actor lost or
/// duplicated an artifact.
pub fn run(env: &mut EnvironmentState) -> ExpeditionResult<ExpeditionReport> {
    env.check_invariants()?;
    let roster = env.begin_run()?;

    env.log().write("Expedition started!");

    // The environment is finished even when a turn breaks an invariant.
    let played = play_turns(env, roster);
    env.finish_run();
    let (turns, halted) = played?;

    write_summary(env);

    Ok(ExpeditionReport {
        id: env.id,
        turns,
        found: env.found().to_vec(),
        remaining: env.pool().len(),
        halted,
    })
}

fn play_turns(
    env: &mut EnvironmentState,
    roster: Vec<Rc<dyn Actor>>,
) -> ExpeditionResult<(Vec<TurnRecord>, HaltReason)> {
    let mut turns = Vec::with_capacity(roster.len());
    let mut halted = HaltReason::RosterExhausted;

    for actor in roster {
        let outcome = actor.act(env);
        env.check_invariants()?;

        match &outcome {
            TurnOutcome::Success { .. } => {}
            TurnOutcome::RecoverableFailure { message } => env.log().warn(message),
            TurnOutcome::FatalFailure { message } => {
                env.log().fatal(message);
                env.log().write("Expedition ended due to a fatal failure!");
            }
        }

        turns.push(TurnRecord {
            actor: actor.name().to_string(),
            kind: outcome.kind(),
            message: outcome.message().to_string(),
        });

        if outcome.is_fatal() {
            halted = HaltReason::Fatal {
                actor: actor.name().to_string(),
            };
            break;
        }
    }

    Ok((turns, halted))
}

fn write_summary(env: &mut EnvironmentState) {
    let lines: Vec<String> = env
        .found()
        .iter()
        .map(|artifact| format!("• {artifact}"))
        .collect();

    let log = env.log();
    log.write("\nExpedition summary:");
    for line in lines {
        log.write(line);
    }
    log.write("\nRun complete.");
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::actor::{Actor, Explorer};
    use crate::artifact::Rarity;
    use crate::environment::RunState;
    use crate::error::ExpeditionError;
    use crate::logger::Logger;
    use crate::pool::ArtifactPool;

    /// Draws an artifact and throws it away.
    struct Looter;

    impl Actor for Looter {
        fn name(&self) -> &str {
            "Looter"
        }

        fn act(&self, env: &mut EnvironmentState) -> TurnOutcome {
            let _ = env.draw_artifact();
            TurnOutcome::success("Looter pocketed something")
        }
    }

    fn env_with(artifacts: Vec<Artifact>, seed: u64) -> EnvironmentState {
        EnvironmentState::new(
            ArtifactPool::new(artifacts).unwrap(),
            ChaCha8Rng::seed_from_u64(seed),
            Logger::in_memory(),
        )
    }

    fn messages(env: &EnvironmentState) -> Vec<&str> {
        env.logger()
            .lines()
            .iter()
            .map(|line| line.split_once("] ").map_or(line.as_str(), |(_, msg)| msg))
            .collect()
    }

    #[test]
    fn recoverable_failure_is_logged_with_warning_and_run_continues() {
        let mut env = env_with(vec![Artifact::new("a1", "Lens shard", Rarity::Common)], 1);
        env.register(Explorer::new("Alice")).unwrap();
        env.register(Explorer::new("Boris")).unwrap();

        let report = run(&mut env).unwrap();

        assert_eq!(report.actors_played(), vec!["Alice", "Boris"]);
        assert_eq!(report.turns[0].kind, OutcomeKind::Success);
        assert_eq!(report.turns[1].kind, OutcomeKind::RecoverableFailure);
        assert_eq!(report.halted, HaltReason::RosterExhausted);
        assert!(messages(&env).contains(&"⚠ Boris could not find an artifact."));
    }

    #[test]
    fn fatal_failure_halts_remaining_turns() {
        let mut env = env_with(vec![Artifact::new("a3", "Kraken's eye", Rarity::Epic)], 2);
        for name in ["Alice", "Boris", "Katya"] {
            env.register(Explorer::new(name)).unwrap();
        }

        let report = run(&mut env).unwrap();

        assert_eq!(report.actors_played(), vec!["Alice"]);
        assert!(report.halted_by_fatal());
        assert_eq!(
            report.halted,
            HaltReason::Fatal {
                actor: "Alice".to_string()
            }
        );

        let msgs = messages(&env);
        let fatal_at = msgs
            .iter()
            .position(|m| *m == "💀 Alice ran into an ancient curse!")
            .unwrap();
        assert_eq!(msgs[fatal_at + 1], "Expedition ended due to a fatal failure!");
        assert!(!msgs.iter().any(|m| m.starts_with("Boris") || m.starts_with("Katya")));
    }

    #[test]
    fn summary_lists_found_artifacts_in_draw_order() {
        let mut env = env_with(
            vec![
                Artifact::new("a1", "Lighthouse figurine", Rarity::Common),
                Artifact::new("a2", "Storm rune", Rarity::Rare),
            ],
            3,
        );
        env.register(Explorer::new("Alice")).unwrap();
        env.register(Explorer::new("Boris")).unwrap();

        let report = run(&mut env).unwrap();
        let msgs = messages(&env);

        let header = msgs.iter().position(|m| *m == "\nExpedition summary:").unwrap();
        let bullets: Vec<String> = report.found.iter().map(|a| format!("• {a}")).collect();
        assert_eq!(msgs[header + 1], bullets[0]);
        assert_eq!(msgs[header + 2], bullets[1]);
        assert_eq!(msgs.last(), Some(&"\nRun complete."));
    }

    #[test]
    fn invariant_violation_aborts_the_run() {
        let mut env = env_with(vec![Artifact::new("a1", "Lens shard", Rarity::Common)], 4);
        env.register(Looter).unwrap();
        env.register(Explorer::new("Alice")).unwrap();

        let err = run(&mut env).unwrap_err();
        assert!(err.is_invariant_violation());
        assert!(!messages(&env).iter().any(|m| m.starts_with("Alice")));
        assert_eq!(env.state(), RunState::Finished);
        assert!(matches!(run(&mut env), Err(ExpeditionError::AlreadyRun)));
    }

    #[test]
    fn environment_runs_only_once() {
        let mut env = env_with(Vec::new(), 5);
        env.register(Explorer::new("Alice")).unwrap();

        run(&mut env).unwrap();
        assert!(matches!(run(&mut env), Err(ExpeditionError::AlreadyRun)));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut env = env_with(vec![Artifact::new("a3", "Kraken's eye", Rarity::Epic)], 6);
        env.register(Explorer::new("Alice")).unwrap();

        let report = run(&mut env).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["halted"]["reason"], "fatal");
        assert_eq!(json["halted"]["actor"], "Alice");
        assert_eq!(json["turns"][0]["kind"], "fatal_failure");
        assert_eq!(json["found"][0]["id"], "a3");
        assert_eq!(json["remaining"], 0);
    }
}
