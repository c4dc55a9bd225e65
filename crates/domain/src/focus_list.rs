//! Ordered, deduplicated list of focus-target candidates
//!
//! Rebuilt wholesale from a world tag query and traversed with a persistent
//! wrap-around cursor. Entries are weak handles: an actor dying between
//! rebuilds leaves a tombstone that is skipped at read time and swept out by
//! the next rebuild.

use std::sync::Arc;

use crate::actor::{ActorRef, WeakActorRef};

/// Sentinel-aware cyclic list of candidate focus targets.
#[derive(Default)]
pub struct FocusTargetList {
    targets: Vec<WeakActorRef>,
    /// Cursor of the most recently returned position; `None` until the
    /// first cycle after a rebuild.
    cursor: Option<usize>,
}

impl FocusTargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with `candidates`, deduplicated by actor
    /// identity (first occurrence wins, order otherwise preserved).
    ///
    /// The cursor resets to the sentinel, so the next cycle starts from the
    /// front. Feeding candidates in a deterministic query order makes
    /// cycling deterministic across rebuilds of an unchanged world.
    pub fn rebuild(&mut self, candidates: impl IntoIterator<Item = ActorRef>) {
        let mut unique: Vec<ActorRef> = Vec::new();
        for candidate in candidates {
            if !unique.iter().any(|kept| Arc::ptr_eq(kept, &candidate)) {
                unique.push(candidate);
            }
        }
        self.targets = unique.iter().map(Arc::downgrade).collect();
        self.cursor = None;
    }

    /// Advance to the next live target, wrapping at the end of the list.
    ///
    /// Equivalent to `cycle_next_where(|_| true)`.
    pub fn cycle_next(&mut self) -> Option<ActorRef> {
        self.cycle_next_where(|_| true)
    }

    /// Advance to the next live target accepted by `filter`.
    ///
    /// Tries at most one full lap: dead entries and rejected candidates are
    /// skipped within this single call, and after `len` attempts the search
    /// gives up with `None`, leaving the cursor wherever it advanced to.
    /// This guarantees cycling never gets stuck re-returning a dead slot.
    pub fn cycle_next_where(&mut self, filter: impl Fn(&ActorRef) -> bool) -> Option<ActorRef> {
        let count = self.targets.len();
        for _ in 0..count {
            let next = match self.cursor {
                Some(current) => (current + 1) % count,
                None => 0,
            };
            self.cursor = Some(next);

            let Some(candidate) = self.targets[next].upgrade() else {
                continue;
            };
            if filter(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Empty the list and reset the cursor. Actor lifetimes are unaffected.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::test_support::StubActor;

    #[test]
    fn rebuild_deduplicates_by_identity() {
        // X matched by two tags shows up twice in the query union.
        let x = StubActor::new("X", &[]);
        let y = StubActor::new("Y", &[]);
        let mut list = FocusTargetList::new();

        list.rebuild(vec![x.as_actor(), y.as_actor(), x.as_actor()]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn rebuild_is_deterministic_for_unchanged_input() {
        let a = StubActor::new("A", &[]);
        let b = StubActor::new("B", &[]);
        let c = StubActor::new("C", &[]);
        let world = vec![a.as_actor(), b.as_actor(), c.as_actor()];

        let mut list = FocusTargetList::new();
        list.rebuild(world.clone());
        let first_lap: Vec<String> = (0..3)
            .filter_map(|_| list.cycle_next())
            .map(|t| t.debug_name().to_string())
            .collect();

        list.rebuild(world);
        let second_lap: Vec<String> = (0..3)
            .filter_map(|_| list.cycle_next())
            .map(|t| t.debug_name().to_string())
            .collect();

        assert_eq!(first_lap, vec!["A", "B", "C"]);
        assert_eq!(first_lap, second_lap);
    }

    #[test]
    fn cycle_visits_each_live_entry_once_per_lap() {
        let a = StubActor::new("A", &[]);
        let b = StubActor::new("B", &[]);
        let mut list = FocusTargetList::new();
        list.rebuild(vec![a.as_actor(), b.as_actor()]);

        let lap: Vec<String> = (0..4)
            .filter_map(|_| list.cycle_next())
            .map(|t| t.debug_name().to_string())
            .collect();
        assert_eq!(lap, vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn cycle_skips_dead_entries_within_one_call() {
        let a = StubActor::new("A", &[]);
        let c = StubActor::new("C", &[]);
        let mut list = FocusTargetList::new();
        {
            let b = StubActor::new("B", &[]);
            list.rebuild(vec![a.as_actor(), b.as_actor(), c.as_actor()]);
        }

        assert!(list.cycle_next().is_some_and(|t| t.debug_name() == "A"));
        // B died after the rebuild; a single call hops over its slot.
        assert!(list.cycle_next().is_some_and(|t| t.debug_name() == "C"));
    }

    #[test]
    fn cycle_gives_up_after_one_full_lap_of_dead_entries() {
        let mut list = FocusTargetList::new();
        {
            let a = StubActor::new("A", &[]);
            let b = StubActor::new("B", &[]);
            list.rebuild(vec![a.as_actor(), b.as_actor()]);
        }

        assert!(list.cycle_next().is_none());
        assert!(!list.is_empty());
    }

    #[test]
    fn cycle_on_empty_list_returns_none() {
        let mut list = FocusTargetList::new();
        assert!(list.cycle_next().is_none());
    }

    #[test]
    fn filter_rejection_advances_past_candidate() {
        let a = StubActor::new("A", &["Combatant"]);
        let b = StubActor::new("B", &[]);
        let c = StubActor::new("C", &["Combatant"]);
        let mut list = FocusTargetList::new();
        list.rebuild(vec![a.as_actor(), b.as_actor(), c.as_actor()]);

        let tag = crate::ids::FocusTag::new("Combatant");
        let hits: Vec<String> = (0..2)
            .filter_map(|_| list.cycle_next_where(|t| t.has_tag(&tag)))
            .map(|t| t.debug_name().to_string())
            .collect();
        assert_eq!(hits, vec!["A", "C"]);
    }

    #[test]
    fn clear_resets_cursor() {
        let a = StubActor::new("A", &[]);
        let mut list = FocusTargetList::new();
        list.rebuild(vec![a.as_actor()]);
        let _ = list.cycle_next();

        list.clear();
        assert!(list.is_empty());
        assert!(list.cycle_next().is_none());
    }
}
