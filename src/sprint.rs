//! Sprint-button tap/hold disambiguation
//!
//! [`SprintDisambiguator`] decorates the host's native sprint handler for
//! the one logical control it is bound to. Per press cycle it produces
//! exactly one outcome: a tap (released before the hold threshold) dodges
//! and never reaches the native handler; a hold sprints, with the event's
//! accumulated hold timer zeroed until the threshold passes so the host
//! cannot engage sprint early.
//!
//! A press that starts while the player is already sprinting is a sprint
//! cancel, not a dodge: the suppression flag marks the rest of that cycle
//! as host-owned, and clears on release.

use tracing::debug;

use crate::config::DodgeConfig;
use crate::dodge::try_dodge;
use crate::host::{AnimationGraph, Host, SprintHandler};
use crate::input::ButtonEvent;

/// Tap/hold state machine for the repurposed sprint button.
///
/// One instance per player; the suppression flag is the only state that
/// outlives a single event.
pub struct SprintDisambiguator {
    config: DodgeConfig,
    /// True while the current press cycle is cancelling an in-progress
    /// sprint rather than starting a new action.
    stopping_sprint: bool,
}

impl SprintDisambiguator {
    pub fn new(config: DodgeConfig) -> Self {
        Self { config, stopping_sprint: false }
    }

    /// Whether the current press cycle is marked as a sprint cancel.
    pub fn is_suppressing(&self) -> bool {
        self.stopping_sprint
    }

    /// Process one button event for the bound control.
    ///
    /// Events the disambiguator does not consume are forwarded to
    /// `sprint`, the host's unmodified handler, possibly with `held_secs`
    /// rewritten. Disambiguation runs only when the sprint button is
    /// repurposed and the host can read its sprint state; otherwise this
    /// is a pure pass-through.
    pub fn process_button<H, A, S>(
        &mut self,
        event: &mut ButtonEvent,
        host: &H,
        graph: &mut A,
        sprint: &mut S,
    ) where
        H: Host,
        A: AnimationGraph,
        S: SprintHandler,
    {
        if self.config.use_sprint_button {
            if let Some(sprinting) = host.is_sprinting() {
                let threshold = self.config.sprint_hold_duration;

                if event.is_down() && sprinting {
                    // Tapping out of an active sprint; hand the whole
                    // cycle back to the host.
                    debug!("Sprint cancel press, suppressing dodge for this cycle");
                    self.stopping_sprint = true;
                } else if event.held_secs < threshold && !self.stopping_sprint {
                    if event.is_up() {
                        try_dodge(host, graph);
                        self.stopping_sprint = false;
                    }
                    // Consumed either way: a sub-threshold down/held waits
                    // for the release, and the release itself must not
                    // reach the native sprint handler.
                    return;
                } else if event.held_secs >= threshold && !sprinting && !self.stopping_sprint {
                    // The press has graduated to a sprint hold. Zero the
                    // accumulated timer so the host's own hold logic
                    // starts counting from here instead of engaging
                    // retroactively.
                    event.held_secs = 0.0;
                } else if event.is_up() {
                    self.stopping_sprint = false;
                }
            }
        }

        sprint.process_button(event);
    }
}
