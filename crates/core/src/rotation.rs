//! Quarter-turn rotations about the cardinal axes.
//!
//! Rotations are 3x3 matrices restricted to multiples of 90 degrees, so every
//! entry is exactly 0.0 or +-1.0 and products of any number of them stay
//! exact in `f32`. This is what makes rotate-then-rollback and four-turn
//! closure hold with no accumulated error.

use crate::types::{Axis, Vec3};

/// An accumulated rotation, always a product of cardinal quarter turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation3 {
    m: [[f32; 3]; 3],
}

impl Rotation3 {
    pub const IDENTITY: Rotation3 = Rotation3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// One positive (right-handed) quarter turn about `axis`.
    pub const fn quarter_turn(axis: Axis) -> Rotation3 {
        match axis {
            Axis::X => Rotation3 {
                m: [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
            },
            Axis::Y => Rotation3 {
                m: [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]],
            },
            Axis::Z => Rotation3 {
                m: [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            },
        }
    }

    /// Rotation about `axis` by `angle_degrees` snapped to the nearest
    /// quarter turn. Negative angles turn the other way; any multiple of
    /// 360 collapses to the identity.
    pub fn from_angle(axis: Axis, angle_degrees: f32) -> Rotation3 {
        let turns = (angle_degrees / 90.0).round() as i32;
        let turns = turns.rem_euclid(4);
        let mut out = Rotation3::IDENTITY;
        for _ in 0..turns {
            out = Rotation3::quarter_turn(axis) * out;
        }
        out
    }

    /// Apply this rotation to a vector.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }
}

impl Default for Rotation3 {
    fn default() -> Self {
        Rotation3::IDENTITY
    }
}

/// Matrix product: `a * b` applies `b` first, then `a`.
impl std::ops::Mul for Rotation3 {
    type Output = Rotation3;

    fn mul(self, rhs: Rotation3) -> Rotation3 {
        let mut m = [[0.0f32; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j];
            }
        }
        Rotation3 { m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_directions() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        // Right-handed: +90 about z sends x to y, +90 about x sends y to z,
        // +90 about y sends z to x.
        assert_eq!(Rotation3::quarter_turn(Axis::Z).apply(x), y);
        assert_eq!(Rotation3::quarter_turn(Axis::X).apply(y), z);
        assert_eq!(Rotation3::quarter_turn(Axis::Y).apply(z), x);
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let q = Rotation3::quarter_turn(axis);
            assert_eq!(q * q * q * q, Rotation3::IDENTITY);
        }
    }

    #[test]
    fn test_from_angle_quantizes_to_quarter_turns() {
        assert_eq!(Rotation3::from_angle(Axis::Z, 0.0), Rotation3::IDENTITY);
        assert_eq!(Rotation3::from_angle(Axis::Z, 360.0), Rotation3::IDENTITY);
        assert_eq!(
            Rotation3::from_angle(Axis::Z, 90.0),
            Rotation3::quarter_turn(Axis::Z)
        );
        assert_eq!(
            Rotation3::from_angle(Axis::Z, 89.0),
            Rotation3::quarter_turn(Axis::Z)
        );
        assert_eq!(
            Rotation3::from_angle(Axis::Y, 180.0),
            Rotation3::quarter_turn(Axis::Y) * Rotation3::quarter_turn(Axis::Y)
        );
    }

    #[test]
    fn test_negative_angle_is_exact_inverse() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for angle in [90.0, 180.0, 270.0] {
                let fwd = Rotation3::from_angle(axis, angle);
                let back = Rotation3::from_angle(axis, -angle);
                assert_eq!(back * fwd, Rotation3::IDENTITY);
                assert_eq!(fwd * back, Rotation3::IDENTITY);
            }
        }
    }

    #[test]
    fn test_entries_stay_exact_under_long_products() {
        let mut acc = Rotation3::IDENTITY;
        for i in 0..64 {
            let axis = match i % 3 {
                0 => Axis::X,
                1 => Axis::Y,
                _ => Axis::Z,
            };
            acc = Rotation3::quarter_turn(axis) * acc;
        }
        for row in 0..3 {
            let v = match row {
                0 => Vec3::new(1.0, 0.0, 0.0),
                1 => Vec3::new(0.0, 1.0, 0.0),
                _ => Vec3::new(0.0, 0.0, 1.0),
            };
            let r = acc.apply(v);
            for c in [r.x, r.y, r.z] {
                assert!(c == 0.0 || c == 1.0 || c == -1.0, "inexact entry {c}");
            }
        }
    }
}
