//! Timer port - scheduling the blend-unlock callback
//!
//! The director runs on the host's frame thread and never blocks; the only
//! asynchrony in the whole subsystem is the unlock callback scheduled here.

/// Port for the host's delayed-callback facility
///
/// # Host contract
///
/// When the scheduled delay elapses the host must call
/// `CameraDirector::on_blend_finished` on the same logical thread the
/// director runs on. A host that drops the callback does not wedge the
/// director - the blend gate also expires by deadline - but until the
/// deadline passes new requests are rejected as busy.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TimerPort: Send + Sync {
    /// Schedule the blend-unlock callback `delay_seconds` from now.
    fn schedule_blend_unlock(&self, delay_seconds: f64);
}
