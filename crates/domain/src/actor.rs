//! Non-owning references to host-owned scene actors
//!
//! The host world owns every actor; the director only observes them. Actors
//! cross the boundary as `Arc<dyn SceneActor>` and are stored internally as
//! `Weak` handles, so a stored reference silently reports invalid once the
//! host drops the actor - the director never extends an actor's lifetime
//! and never dereferences without a liveness check.

use std::sync::{Arc, Weak};

use crate::ids::FocusTag;

/// Host-side view of an actor the director may reference.
///
/// Implemented by the host for its actor type. `set_focus_target` is the
/// optional "this shot can track a target" capability: shots that cannot
/// track simply inherit the no-op default.
pub trait SceneActor: Send + Sync {
    /// Stable human-readable label, used only in log output.
    fn debug_name(&self) -> &str;

    /// Whether the actor currently carries the given gameplay tag.
    fn has_tag(&self, tag: &FocusTag) -> bool;

    /// Point this shot at `target`. No-op for shots without the capability.
    fn set_focus_target(&self, _target: ActorRef) {}
}

/// Shared handle to a live actor, as handed over by the host.
pub type ActorRef = Arc<dyn SceneActor>;

/// Non-owning handle stored inside director collections.
pub type WeakActorRef = Weak<dyn SceneActor>;

/// Identity comparison between a stored weak handle and a live actor.
///
/// A dead weak handle equals nothing, including a handle to the actor it
/// used to point at.
pub fn weak_refers_to(weak: &WeakActorRef, actor: &ActorRef) -> bool {
    weak.upgrade().is_some_and(|live| Arc::ptr_eq(&live, actor))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::ids::FocusTag;

    /// Minimal host actor for domain tests: a name and a tag set.
    pub struct StubActor {
        name: String,
        tags: Vec<FocusTag>,
    }

    impl StubActor {
        pub fn new(name: &str, tags: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                tags: tags.iter().map(|t| FocusTag::new(*t)).collect(),
            })
        }

        pub fn as_actor(self: &Arc<Self>) -> ActorRef {
            self.clone()
        }
    }

    impl SceneActor for StubActor {
        fn debug_name(&self) -> &str {
            &self.name
        }

        fn has_tag(&self, tag: &FocusTag) -> bool {
            self.tags.contains(tag)
        }
    }
}
