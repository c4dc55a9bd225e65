//! Camera Director App - the orchestrator
//!
//! Wires the domain pieces (shot registry, focus list, blend gate, history)
//! to the host through the outbound ports and exposes the director's
//! operations as plain methods. One instance per play session, driven
//! synchronously from the host's frame thread.

pub mod config;
pub mod director;

pub use config::{DirectorConfig, FocusSelection, DEFAULT_OVERVIEW_SHOT_ID};
pub use director::CameraDirector;
