//! Last-two-shots history used for cycling and debugging.

use crate::ids::ShotId;

/// Tracks the current and previous resolved shot ids.
///
/// `None` means "never requested" or "requested via an actor that resolved
/// to no registered id"; history records what could be resolved, nothing
/// more.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShotHistory {
    current: Option<ShotId>,
    last: Option<ShotId>,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the current id into `last` and adopt `resolved` as current.
    pub fn record(&mut self, resolved: Option<ShotId>) {
        self.last = self.current.take();
        self.current = resolved;
    }

    pub fn current(&self) -> Option<&ShotId> {
        self.current.as_ref()
    }

    pub fn last(&self) -> Option<&ShotId> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.last = None;
    }
}
