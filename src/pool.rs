//! The pool of artifacts not yet found.

use std::collections::HashSet;

use rand::Rng;

use crate::artifact::{Artifact, ArtifactId};
use crate::error::ValidationError;

/// Ordered collection of remaining artifacts.
///
/// The pool is filled once and only shrinks. Each successful draw moves one
/// artifact out to the caller.
#[derive(Debug, Clone, Default)]
pub struct ArtifactPool {
    remaining: Vec<Artifact>,
    initial_len: usize,
}

impl ArtifactPool {
    /// Creates a pool from a fixed list of artifacts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateArtifactId` if two artifacts share
    /// an id.
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(artifacts.len());
        for artifact in &artifacts {
            if !seen.insert(&artifact.id) {
                return Err(ValidationError::DuplicateArtifactId {
                    id: artifact.id.clone(),
                });
            }
        }

        Ok(Self {
            initial_len: artifacts.len(),
            remaining: artifacts,
        })
    }

    /// Removes and returns a uniformly chosen artifact.
    ///
    /// Returns `None` once the pool is empty; that is a normal state, not a
    /// failure. The relative order of the remaining artifacts is preserved.
    pub fn draw_random<R: Rng>(&mut self, rng: &mut R) -> Option<Artifact> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.remove(index))
    }

    /// Number of artifacts still in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns true once every artifact has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Size of the pool when it was created.
    #[must_use]
    pub const fn initial_len(&self) -> usize {
        self.initial_len
    }

    /// Returns true if an artifact with this id is still in the pool.
    #[must_use]
    pub fn contains(&self, id: &ArtifactId) -> bool {
        self.remaining.iter().any(|artifact| &artifact.id == id)
    }

    /// Iterates the remaining artifacts in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.remaining.iter()
    }
}
