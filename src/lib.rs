//! Sprint-button dodge core.
//!
//! Portable logic for repurposing a game's sprint button as a combined
//! sprint/dodge control: a tap performs an eight-directional dodge, a hold
//! sprints as before. The host engine (input delivery, player state,
//! animation graph) is injected through the traits in [`host`]; nothing in
//! this crate touches the host binary directly.
//!
//! Two pieces do the actual work:
//!
//! - [`direction`] classifies the player's 2D movement vector into one of
//!   nine dodge directions plus a signed angle.
//! - [`sprint::SprintDisambiguator`] wraps the host's native sprint handler
//!   and decides, per button event, between "dodge now", "let sprint
//!   proceed", and "suppress the sprint transition in progress".
//!
//! Everything runs synchronously on the host's input thread; the only state
//! that outlives a single event is the disambiguator's suppression flag.

pub mod anim;
pub mod config;
pub mod direction;
pub mod dodge;
pub mod events;
pub mod host;
pub mod input;
pub mod sprint;

pub use config::{ConfigError, DodgeConfig};
pub use direction::{classify, Direction, InputVector};
pub use dodge::try_dodge;
pub use events::DodgeKeySink;
pub use host::{AnimationGraph, DodgeGates, Host, SprintHandler};
pub use input::{ButtonEvent, ButtonPhase, DeviceClass};
pub use sprint::SprintDisambiguator;
