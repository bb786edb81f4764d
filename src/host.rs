//! Injected host capabilities
//!
//! Everything the core needs from the game engine, expressed as traits so
//! the host-binary plumbing (memory offsets, engine singletons, animation
//! internals) stays outside this crate. A host port implements these three
//! traits; the core never reaches around them.

use crate::direction::InputVector;
use crate::input::ButtonEvent;

/// Raw facts the host reports before a dodge is permitted.
///
/// The policy lives in [`DodgeGates::permits_dodge`]; the host only fills
/// in what it observes.
#[derive(Debug, Clone, Copy)]
pub struct DodgeGates {
    pub game_paused: bool,
    pub movement_controls_enabled: bool,
    pub look_controls_enabled: bool,
    pub dialogue_menu_open: bool,
    pub sitting_or_sleeping: bool,
    pub stamina: f32,
    /// Invincible/unlimited-resources mode; waives the stamina check.
    pub unlimited_resources: bool,
}

impl DodgeGates {
    pub fn permits_dodge(&self) -> bool {
        !self.game_paused
            && self.movement_controls_enabled
            && self.look_controls_enabled
            && !self.dialogue_menu_open
            && !self.sitting_or_sleeping
            && (self.unlimited_resources || self.stamina > 0.0)
    }
}

/// Read-side view of the player and game session.
pub trait Host {
    /// Raw 2D movement intent for the current tick, or `None` when no
    /// player entity is active.
    fn movement_input(&self) -> Option<InputVector>;

    /// Whether the player is currently in the sprinting state.
    ///
    /// `None` means the state cannot be read at all: either the platform
    /// variant does not expose the flag or there is no player. The
    /// disambiguator falls back to pure pass-through in that case.
    fn is_sprinting(&self) -> Option<bool>;

    fn gates(&self) -> DodgeGates;
}

/// The host's animation graph: named variables plus notification events.
pub trait AnimationGraph {
    fn set_float(&mut self, var: &str, value: f32);
    fn set_int(&mut self, var: &str, value: i32);
    fn notify(&mut self, event: &str);
}

/// The host's unmodified sprint-button handler.
///
/// The disambiguator decorates this: events it does not consume are
/// forwarded here, possibly with the held-duration rewritten.
pub trait SprintHandler {
    fn process_button(&mut self, event: &mut ButtonEvent);
}
