//! Camera Director Domain - core types and invariants
//!
//! Pure in-memory state for the combat camera director: shot registry,
//! focus-target list, blend gate, and shot history. No I/O and no host
//! coupling; everything here is driven by the application layer through
//! explicit arguments (actors, time, query results).

pub mod actor;
pub mod blend;
pub mod error;
pub mod focus_list;
pub mod history;
pub mod ids;
pub mod shot_registry;

pub use actor::{ActorRef, SceneActor, WeakActorRef};
pub use blend::{BlendCurve, BlendGate, BlendParams};
pub use error::DirectorError;
pub use focus_list::FocusTargetList;
pub use history::ShotHistory;
pub use ids::{FocusTag, ShotId};
pub use shot_registry::ShotRegistry;
