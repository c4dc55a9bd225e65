//! Outbound ports - contracts implemented by the host

mod clock_port;
mod scene_port;
mod timer_port;
mod view_port;

pub use clock_port::ClockPort;
pub use scene_port::ScenePort;
pub use timer_port::TimerPort;
pub use view_port::ViewPort;

#[cfg(any(test, feature = "testing"))]
pub use clock_port::MockClockPort;
#[cfg(any(test, feature = "testing"))]
pub use scene_port::MockScenePort;
#[cfg(any(test, feature = "testing"))]
pub use timer_port::MockTimerPort;
#[cfg(any(test, feature = "testing"))]
pub use view_port::MockViewPort;
