//! Identifier newtypes for the camera director
//!
//! Shot ids and focus tags are host-authored string tokens - level-design
//! content, not generated ids. They are trimmed on construction but
//! otherwise unvalidated; an empty id is representable and acts as a
//! sentinel the director rejects at its surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered camera shot.
///
/// Ordered lexically; shot cycling relies on this ordering being total and
/// stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShotId(String);

impl ShotId {
    /// Create a shot id, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty sentinel (never a valid registry key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShotId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ShotId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ShotId> for String {
    fn from(id: ShotId) -> String {
        id.0
    }
}

/// Gameplay tag used to collect focus-target candidates from the scene.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FocusTag(String);

impl FocusTag {
    /// Create a focus tag, trimming surrounding whitespace.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_string())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FocusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FocusTag {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for FocusTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<FocusTag> for String {
    fn from(tag: FocusTag) -> String {
        tag.0
    }
}
