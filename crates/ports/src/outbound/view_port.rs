//! View transition port - the actual camera blend
//!
//! The director decides *what* to look at and for how long; the rendering
//! side performs the interpolated move. Fire-and-forget: no completion
//! callback comes back through this port, the director self-times the
//! unlock via [`super::TimerPort`]. The configured blend duration must
//! therefore match what the renderer actually takes.

use camdir_domain::{ActorRef, BlendParams};

/// Port for commanding the host's view-rendering transition mechanism
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ViewPort: Send + Sync {
    /// Begin an interpolated transition of the active view to `target`.
    fn transition_view(&self, target: ActorRef, params: BlendParams);
}
