//! Clock port - the host's game-time counter.

/// Port for reading the host's monotonic game time, in seconds.
///
/// Blend reservations are stamped with this clock, so it must be the same
/// time base the host's timer facility uses.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now_seconds(&self) -> f64;
}
