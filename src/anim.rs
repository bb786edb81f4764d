//! Animation-graph protocol
//!
//! The names below are an external protocol: the host's animation assets
//! pattern-match on these exact strings, so they must stay bit-exact. A
//! dodge writes both graph variables, then fires the direction-specific
//! notification followed by the generic one; the assets require the pair
//! to register the dodge visually.

use crate::direction::Direction;
use crate::host::AnimationGraph;

/// Graph variable holding the dodge angle in radians.
pub const VAR_DODGE_ANGLE: &str = "DodgeAngle";

/// Graph variable holding the integer direction code (0-8).
pub const VAR_DODGE_DIRECTION: &str = "DodgeDirection";

/// Generic dodge notification, sent after the direction-specific one.
pub const NOTIFY_DODGE: &str = "Dodge";

impl Direction {
    /// Direction-specific notification event name.
    pub fn notify_event(self) -> &'static str {
        match self {
            Direction::Neutral => "Dodge_N",
            Direction::Forward => "Dodge_F",
            Direction::RightForward => "Dodge_RF",
            Direction::Right => "Dodge_R",
            Direction::RightBackward => "Dodge_RB",
            Direction::Backward => "Dodge_B",
            Direction::LeftBackward => "Dodge_LB",
            Direction::Left => "Dodge_L",
            Direction::LeftForward => "Dodge_LF",
        }
    }
}

/// Send one dodge to the animation graph: variables first, then the
/// direction-specific notification, then the generic `Dodge`.
pub fn emit_dodge<A: AnimationGraph>(graph: &mut A, direction: Direction, angle: f32) {
    graph.set_float(VAR_DODGE_ANGLE, angle);
    graph.set_int(VAR_DODGE_DIRECTION, direction.code());
    graph.notify(direction.notify_event());
    graph.notify(NOTIFY_DODGE);
}
