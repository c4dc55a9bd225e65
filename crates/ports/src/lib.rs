//! Camera Director Ports - traits the director needs from its host
//!
//! The director never talks to the engine directly: actor/tag queries, view
//! transitions, and timing all go through the outbound traits defined here.
//! Hosts implement them once at composition time; tests use the mockall
//! mocks behind the `testing` feature.

pub mod outbound;

// Re-export mocks for test builds
#[cfg(any(test, feature = "testing"))]
pub use outbound::{MockClockPort, MockScenePort, MockTimerPort, MockViewPort};
