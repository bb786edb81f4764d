//! Dodge orchestration
//!
//! Ties the pieces together for one dodge attempt: check the environment
//! gates, read the player's movement intent, classify it, and hand the
//! result to the animation graph.

use tracing::debug;

use crate::anim::emit_dodge;
use crate::direction::{classify, Direction};
use crate::host::{AnimationGraph, Host};

/// Attempt a dodge against the current game state.
///
/// Returns the emitted `(Direction, angle)` pair, or `None` when an
/// environment gate blocked the dodge or no player entity is active.
/// A blocked dodge is silent by design: the caller still consumes the
/// triggering event, so the tap simply does nothing.
pub fn try_dodge<H: Host, A: AnimationGraph>(host: &H, graph: &mut A) -> Option<(Direction, f32)> {
    if !host.gates().permits_dodge() {
        debug!("Dodge blocked by environment gates");
        return None;
    }

    let input = host.movement_input()?;
    let (direction, angle) = classify(input);
    debug!("Dodge: direction={:?} angle={:.4}", direction, angle);

    emit_dodge(graph, direction, angle);
    Some((direction, angle))
}
