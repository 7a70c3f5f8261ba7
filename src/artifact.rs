//! Artifact types.
//!
//! An artifact is an immutable value: once created it is only ever moved,
//! first owned by the pool and then by the found list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable artifact identifier.
///
/// # Examples
///
/// ```
/// use lighthouse_expedition::ArtifactId;
///
/// let id = ArtifactId::new("a1");
/// assert_eq!(id.as_str(), "a1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Creates an artifact ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ArtifactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Rarity tier of an artifact.
///
/// Tiers are ordered `Common < Rare < Epic`. Finding the top tier ends the
/// expedition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Everyday finds
    Common,
    /// Uncommon finds
    Rare,
    /// Top tier; cursed
    Epic,
}

impl Rarity {
    /// Returns true for the top tier.
    #[must_use]
    pub const fn is_top_tier(self) -> bool {
        matches!(self, Self::Epic)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Rare => write!(f, "Rare"),
            Self::Epic => write!(f, "Epic"),
        }
    }
}

/// An item hidden around the lighthouse.
///
/// # Examples
///
/// ```
/// use lighthouse_expedition::{Artifact, Rarity};
///
/// let artifact = Artifact::new("a2", "Storm rune", Rarity::Rare);
/// assert_eq!(artifact.to_string(), "Storm rune (Rare)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    /// Unique identifier.
    pub id: ArtifactId,

    /// Display name.
    pub name: String,

    /// Rarity tier.
    pub rarity: Rarity,
}

impl Artifact {
    /// Creates a new artifact.
    #[must_use]
    pub fn new(id: impl Into<ArtifactId>, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_is_ordered_by_tier() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert_eq!(
            [Rarity::Epic, Rarity::Common, Rarity::Rare].iter().max(),
            Some(&Rarity::Epic)
        );
    }

    #[test]
    fn only_epic_is_top_tier() {
        assert!(!Rarity::Common.is_top_tier());
        assert!(!Rarity::Rare.is_top_tier());
        assert!(Rarity::Epic.is_top_tier());
    }

    #[test]
    fn artifact_display_shows_name_and_rarity() {
        let artifact = Artifact::new("a3", "Kraken's eye", Rarity::Epic);
        assert_eq!(format!("{artifact}"), "Kraken's eye (Epic)");
    }

    #[test]
    fn artifact_serializes_with_transparent_id() {
        let artifact = Artifact::new("a1", "Lighthouse figurine", Rarity::Common);
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["id"], "a1");
        assert_eq!(json["rarity"], "Common");

        let back: Artifact = serde_json::from_value(json).unwrap();
        assert_eq!(back, artifact);
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(ArtifactId::new("  ").is_blank());
        assert!(!ArtifactId::new("a4").is_blank());
    }
}
