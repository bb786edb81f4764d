//! Dodge direction classification
//!
//! Maps the player's 2D movement-intent vector to one of nine discrete
//! dodge directions plus a continuous signed angle. The angle is measured
//! from the forward axis (0, 1); positive is clockwise (rightward),
//! negative counter-clockwise, range (-π, π]. The eight compass sectors
//! are 45° wide and centered on the compass points, with Forward centered
//! at angle 0.

use std::f32::consts::{FRAC_PI_8, PI};

/// Player movement intent for the current simulation tick.
///
/// Components are lateral (x, rightward positive) and forward (y).
/// Magnitude is at most 1.0 in the unmodified flow, but [`classify`]
/// normalizes internally so any finite vector is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVector {
    pub x: f32,
    pub y: f32,
}

impl InputVector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One of the nine dodge variants.
///
/// The integer codes are part of the animation-graph protocol (written to
/// the `DodgeDirection` graph variable) and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Direction {
    Neutral = 0,
    Forward = 1,
    RightForward = 2,
    Right = 3,
    RightBackward = 4,
    Backward = 5,
    LeftBackward = 6,
    Left = 7,
    LeftForward = 8,
}

impl Direction {
    /// Integer code sent to the animation graph.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Bucket a signed angle from the forward axis into a compass sector.
    ///
    /// Sector bounds are inclusive below, exclusive above; Backward covers
    /// the wraparound (θ ≥ 7π/8 and θ < -7π/8), so θ = π and θ = -π land
    /// in the same sector.
    pub fn from_angle(theta: f32) -> Self {
        if theta >= -FRAC_PI_8 && theta < FRAC_PI_8 {
            Direction::Forward
        } else if theta >= FRAC_PI_8 && theta < 3.0 * FRAC_PI_8 {
            Direction::RightForward
        } else if theta >= 3.0 * FRAC_PI_8 && theta < 5.0 * FRAC_PI_8 {
            Direction::Right
        } else if theta >= 5.0 * FRAC_PI_8 && theta < 7.0 * FRAC_PI_8 {
            Direction::RightBackward
        } else if theta >= 7.0 * FRAC_PI_8 || theta < -7.0 * FRAC_PI_8 {
            Direction::Backward
        } else if theta >= -7.0 * FRAC_PI_8 && theta < -5.0 * FRAC_PI_8 {
            Direction::LeftBackward
        } else if theta >= -5.0 * FRAC_PI_8 && theta < -3.0 * FRAC_PI_8 {
            Direction::Left
        } else {
            Direction::LeftForward
        }
    }
}

/// Angle reported alongside [`Direction::Neutral`] for zero input.
///
/// A sentinel, not a measured value; the animation assets expect π here.
pub const NEUTRAL_ANGLE: f32 = PI;

/// Classify a movement vector into a dodge direction and angle.
///
/// Returns `(Neutral, π)` for exactly-zero input. Otherwise the angle is
/// `atan2(x, y)`: the signed clockwise angle between the normalized vector
/// and the forward axis, in (-π, π]. Pure and deterministic; no side
/// effects.
pub fn classify(v: InputVector) -> (Direction, f32) {
    let magnitude = (v.x * v.x + v.y * v.y).sqrt();
    if magnitude == 0.0 {
        return (Direction::Neutral, NEUTRAL_ANGLE);
    }

    // atan2 is scale-invariant, so dividing by the magnitude first would
    // change nothing; the zero check above is the whole normalization story.
    let theta = v.x.atan2(v.y);
    (Direction::from_angle(theta), theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_zero_input_is_neutral_with_sentinel_angle() {
        let (dir, angle) = classify(InputVector::new(0.0, 0.0));
        assert_eq!(dir, Direction::Neutral);
        assert_eq!(angle, PI);
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(classify(InputVector::new(0.0, 1.0)).0, Direction::Forward);
        assert_eq!(classify(InputVector::new(1.0, 0.0)).0, Direction::Right);
        assert_eq!(classify(InputVector::new(0.0, -1.0)).0, Direction::Backward);
        assert_eq!(classify(InputVector::new(-1.0, 0.0)).0, Direction::Left);
    }

    #[test]
    fn test_diagonal_directions() {
        assert_eq!(classify(InputVector::new(1.0, 1.0)).0, Direction::RightForward);
        assert_eq!(classify(InputVector::new(1.0, -1.0)).0, Direction::RightBackward);
        assert_eq!(classify(InputVector::new(-1.0, -1.0)).0, Direction::LeftBackward);
        assert_eq!(classify(InputVector::new(-1.0, 1.0)).0, Direction::LeftForward);
    }

    #[test]
    fn test_due_right_angle_is_half_pi() {
        let (dir, angle) = classify(InputVector::new(1.0, 0.0));
        assert_eq!(dir, Direction::Right);
        assert!((angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_sector_lower_bound_inclusive() {
        // Exactly π/8 belongs to RightForward; just below stays Forward.
        assert_eq!(Direction::from_angle(FRAC_PI_8), Direction::RightForward);
        let just_below = f32::from_bits(FRAC_PI_8.to_bits() - 1);
        assert_eq!(Direction::from_angle(just_below), Direction::Forward);
    }

    #[test]
    fn test_backward_wraparound() {
        assert_eq!(Direction::from_angle(PI), Direction::Backward);
        assert_eq!(Direction::from_angle(-PI), Direction::Backward);
    }

    #[test]
    fn test_all_sector_boundaries() {
        let cases = [
            (-FRAC_PI_8, Direction::Forward),
            (FRAC_PI_8, Direction::RightForward),
            (3.0 * FRAC_PI_8, Direction::Right),
            (5.0 * FRAC_PI_8, Direction::RightBackward),
            (7.0 * FRAC_PI_8, Direction::Backward),
            (-7.0 * FRAC_PI_8, Direction::LeftBackward),
            (-5.0 * FRAC_PI_8, Direction::Left),
            (-3.0 * FRAC_PI_8, Direction::LeftForward),
        ];
        for (theta, expected) in cases {
            assert_eq!(Direction::from_angle(theta), expected, "theta = {theta}");
        }
    }

    #[test]
    fn test_magnitude_does_not_change_direction() {
        let small = classify(InputVector::new(0.01, 0.02));
        let large = classify(InputVector::new(10.0, 20.0));
        assert_eq!(small.0, large.0);
        assert!((small.1 - large.1).abs() < 1e-6);
    }

    #[test]
    fn test_direction_codes_match_protocol() {
        assert_eq!(Direction::Neutral.code(), 0);
        assert_eq!(Direction::Forward.code(), 1);
        assert_eq!(Direction::Right.code(), 3);
        assert_eq!(Direction::Backward.code(), 5);
        assert_eq!(Direction::LeftForward.code(), 8);
    }

    proptest! {
        #[test]
        fn prop_classify_is_deterministic(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
            let a = classify(InputVector::new(x, y));
            let b = classify(InputVector::new(x, y));
            prop_assert_eq!(a.0, b.0);
            prop_assert_eq!(a.1.to_bits(), b.1.to_bits());
        }

        #[test]
        fn prop_nonzero_angle_in_range(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
            prop_assume!(x != 0.0 || y != 0.0);
            let (_, angle) = classify(InputVector::new(x, y));
            prop_assert!(angle > -PI - 1e-6 && angle <= PI);
        }
    }
}
