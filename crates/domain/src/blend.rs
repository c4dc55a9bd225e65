//! Blend-state machine
//!
//! At most one view transition may be in flight. The gate reserves the
//! blending slot for a bounded window; the host's timer callback releases
//! it, and a deadline check backs the timer up so a misfired callback can
//! never wedge the director in the blending state.

use serde::{Deserialize, Serialize};

/// Interpolation curve applied by the view-rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendCurve {
    Linear,
    #[default]
    Cubic,
    EaseIn,
    EaseOut,
}

/// Parameters of a single view transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendParams {
    /// How long the transition takes, in host game seconds.
    pub duration_seconds: f64,
    pub curve: BlendCurve,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            // Matches the stock rig blend the level designers tuned for.
            duration_seconds: 0.8,
            curve: BlendCurve::Cubic,
        }
    }
}

/// Idle/Blending gate enforcing at-most-one-transition-at-a-time.
///
/// Time is the host's monotonic game clock in seconds; the gate never reads
/// a clock itself, callers pass `now` in.
#[derive(Debug, Default)]
pub struct BlendGate {
    /// Game time at which the current blend ends; `None` while idle.
    unlock_at: Option<f64>,
}

impl BlendGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to reserve the blending slot for `duration_seconds` starting at
    /// `now`.
    ///
    /// Returns `false` without any state change while a blend is still in
    /// flight. A reservation whose deadline has already passed counts as
    /// expired and is replaced; this is the fallback for a host timer that
    /// never fired.
    pub fn try_begin(&mut self, now: f64, duration_seconds: f64) -> bool {
        if let Some(unlock_at) = self.unlock_at {
            if now < unlock_at {
                return false;
            }
        }
        self.unlock_at = Some(now + duration_seconds.max(0.0));
        true
    }

    /// Release the blending slot unconditionally.
    ///
    /// Called by the host's blend-unlock timer, and by the director itself
    /// when a request fails after the slot was already reserved.
    pub fn finish(&mut self) {
        self.unlock_at = None;
    }

    /// Whether a blend reservation is currently in force at `now`.
    pub fn is_blending(&self, now: f64) -> bool {
        self.unlock_at.is_some_and(|unlock_at| now < unlock_at)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn second_begin_is_rejected_until_finished() {
        let mut gate = BlendGate::new();
        assert!(gate.try_begin(0.0, 1.0));
        assert!(!gate.try_begin(0.1, 1.0));
        assert!(gate.is_blending(0.1));

        gate.finish();
        assert!(!gate.is_blending(0.2));
        assert!(gate.try_begin(0.2, 1.0));
    }

    #[test]
    fn reservation_expires_at_deadline_without_callback() {
        let mut gate = BlendGate::new();
        assert!(gate.try_begin(0.0, 1.0));
        assert!(gate.is_blending(0.99));
        assert!(!gate.is_blending(1.0));
        // The timer never fired, but the slot is reclaimable.
        assert!(gate.try_begin(1.0, 0.5));
    }

    #[test]
    fn zero_and_negative_durations_do_not_lock() {
        let mut gate = BlendGate::new();
        assert!(gate.try_begin(5.0, 0.0));
        assert!(!gate.is_blending(5.0));
        assert!(gate.try_begin(5.0, -1.0));
        assert!(!gate.is_blending(5.0));
    }

    #[test]
    fn finish_is_idempotent() {
        let mut gate = BlendGate::new();
        gate.finish();
        assert!(!gate.is_blending(0.0));
        assert!(gate.try_begin(0.0, 1.0));
        gate.finish();
        gate.finish();
        assert!(!gate.is_blending(0.0));
    }

    #[test]
    fn blend_params_serde_round_trip() {
        let params = BlendParams::default();
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"cubic\""));
        let back: BlendParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
