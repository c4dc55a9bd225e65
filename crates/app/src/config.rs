//! Runtime configuration for the camera director
//!
//! Read once at composition time from whatever serde format the host uses,
//! and mutable afterwards through [`crate::CameraDirector::config_mut`].

use camdir_domain::{BlendParams, FocusTag, ShotId};
use serde::{Deserialize, Serialize};

/// Shot requested by `request_overview` when none is configured.
pub const DEFAULT_OVERVIEW_SHOT_ID: &str = "Overview_Static_01";

/// How focus-target candidates are selected from the scene.
///
/// The single-tag and multi-tag modes are the same algorithm over one or
/// several tags; keeping both spellings lets simple arenas configure a bare
/// tag without wrapping it in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusSelection {
    /// A single tag names every candidate.
    SingleTag(FocusTag),
    /// Union of several tags, queried in listed order.
    Tags(Vec<FocusTag>),
}

impl FocusSelection {
    /// The configured tags, in query order.
    pub fn tags(&self) -> &[FocusTag] {
        match self {
            FocusSelection::SingleTag(tag) => std::slice::from_ref(tag),
            FocusSelection::Tags(tags) => tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags().is_empty()
    }
}

impl Default for FocusSelection {
    fn default() -> Self {
        FocusSelection::Tags(Vec::new())
    }
}

/// Director configuration surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DirectorConfig {
    /// Shot used as the wide/establishing fallback view.
    pub overview_shot_id: ShotId,
    /// Where focus-target candidates come from.
    pub focus: FocusSelection,
    /// Verbose per-operation logging toggle.
    pub log_debug: bool,
    /// Blend applied when the caller does not specify one, and the curve
    /// used for every transition.
    pub default_blend: BlendParams,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            overview_shot_id: ShotId::new(DEFAULT_OVERVIEW_SHOT_ID),
            focus: FocusSelection::default(),
            log_debug: false,
            default_blend: BlendParams::default(),
        }
    }
}
