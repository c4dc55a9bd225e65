//! Scene query port - tag-based actor enumeration
//!
//! The only coupling the director has to gameplay-side actor classification
//! is a tag query. Keeping the query behind this port keeps the director
//! agnostic of combat logic: it never knows *why* an actor carries a tag.

use camdir_domain::{ActorRef, FocusTag};

/// Port for enumerating world actors by gameplay tag
///
/// # Determinism
///
/// Implementations must return actors in a stable order for unchanged world
/// state (e.g. spawn order). Focus cycling is only deterministic if the
/// underlying query is.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ScenePort: Send + Sync {
    /// All live actors currently carrying `tag`.
    ///
    /// An actor carrying several of the director's configured tags will be
    /// returned by several calls; deduplication is the caller's job.
    fn actors_with_tag(&self, tag: &FocusTag) -> Vec<ActorRef>;
}
