//! Dedicated dodge key
//!
//! When the sprint button is not repurposed, the operator can bind a
//! separate control instead: a press of that key dodges immediately, with
//! no tap/hold disambiguation. Release and held events are ignored, as are
//! events from controls other than the bound one.

use tracing::debug;

use crate::config::DodgeConfig;
use crate::dodge::try_dodge;
use crate::host::{AnimationGraph, Host};
use crate::input::{flatten, ButtonEvent};

/// Input sink for the dedicated dodge key.
pub struct DodgeKeySink {
    config: DodgeConfig,
}

impl DodgeKeySink {
    pub fn new(config: DodgeConfig) -> Self {
        Self { config }
    }

    /// Handle one button event; returns whether a dodge was emitted.
    ///
    /// Inactive when no key is bound or when the sprint button is
    /// repurposed (the disambiguator owns dodging then). Unrecognized
    /// key codes are simply not the bound control.
    pub fn handle_event<H, A>(&self, event: &ButtonEvent, host: &H, graph: &mut A) -> bool
    where
        H: Host,
        A: AnimationGraph,
    {
        let Some(bound) = self.config.dodge_key else {
            return false;
        };
        if self.config.use_sprint_button || !event.is_down() {
            return false;
        }

        match flatten(event.device, event.raw_code) {
            Some(code) if code == bound => {
                debug!("Dodge key pressed (code {})", code);
                try_dodge(host, graph).is_some()
            }
            _ => false,
        }
    }
}
