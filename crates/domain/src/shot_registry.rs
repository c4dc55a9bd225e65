//! Registry of named camera shots
//!
//! Maps shot ids to weak actor handles. The registry never owns a shot
//! actor: the host world does. A lookup on an id whose actor has been
//! destroyed behaves exactly like a lookup on an unknown id.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::actor::{weak_refers_to, ActorRef, WeakActorRef};
use crate::ids::ShotId;

/// Shot id -> weak actor handle map.
///
/// Backed by a `BTreeMap` so id iteration is lexical, which makes both
/// reverse lookup and shot cycling deterministic.
#[derive(Default)]
pub struct ShotRegistry {
    shots: BTreeMap<ShotId, WeakActorRef>,
}

impl ShotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `actor` under `id`, overwriting any prior entry.
    ///
    /// Last write wins; re-registering an id is how a respawned shot rig
    /// reclaims its slot.
    pub fn register(&mut self, id: ShotId, actor: &ActorRef) {
        self.shots.insert(id, Arc::downgrade(actor));
    }

    /// Resolve an id to its live actor.
    ///
    /// Returns `None` both for ids never registered and for ids whose actor
    /// has since been destroyed; callers cannot (and must not) tell the two
    /// apart.
    pub fn lookup(&self, id: &ShotId) -> Option<ActorRef> {
        self.shots.get(id).and_then(WeakActorRef::upgrade)
    }

    /// Find the id under which a live actor was registered.
    ///
    /// Linear scan in lexical id order; the first match wins if the same
    /// actor was registered under several ids.
    pub fn reverse_lookup(&self, actor: &ActorRef) -> Option<ShotId> {
        self.shots
            .iter()
            .find(|(_, weak)| weak_refers_to(weak, actor))
            .map(|(id, _)| id.clone())
    }

    /// All registered ids in lexical order, including entries whose actor
    /// may already be dead.
    pub fn sorted_ids(&self) -> Vec<ShotId> {
        self.shots.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Drop every entry. Actor lifetimes are unaffected.
    pub fn clear(&mut self) {
        self.shots.clear();
    }
}
