//! Shared data types and constants for the cubewell workspace.
//!
//! Everything in this crate is a pure value type with no dependencies, usable
//! from the simulation core, the input layer, and the terminal renderer alike.
//!
//! # Well dimensions
//!
//! The classic cubewell playfield is a narrow square shaft:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WELL_WIDTH` | 4 | cells along x |
//! | `DEFAULT_WELL_HEIGHT` | 16 | cells along y (up) |
//! | `DEFAULT_WELL_DEPTH` | 4 | cells along z |
//!
//! A *layer* is a horizontal (fixed-y) slice of width x depth cells; clearing
//! a layer requires all of its cells to be occupied.
//!
//! # Gravity and scoring defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_SECONDS` | 0.8 | gravity interval at level 0 |
//! | `LEVEL_SPEED_FACTOR` | 15 | levels from initial interval to zero |
//! | `MIN_FALL_SECONDS` | 0.01 | interval floor at high levels |
//! | `LINES_PER_LEVEL` | 10 | layers cleared per level step |
//! | `LINE_SCORES` | [0, 40, 100, 300, 1200] | base points by layers cleared |
//!
//! Line scores are multiplied by `(level + 1)` at award time.
//!
//! # Examples
//!
//! ```
//! use cubewell_types::{ShapeKind, Vec3};
//!
//! let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(0.0, -1.0, 0.0);
//! assert_eq!(v, Vec3::new(1.0, 1.0, 3.0));
//!
//! assert_eq!(ShapeKind::from_index(3), Some(ShapeKind::O));
//! assert_eq!(ShapeKind::O.index(), 3);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Default well width in cells (x axis).
pub const DEFAULT_WELL_WIDTH: i32 = 4;

/// Default well height in cells (y axis, up).
pub const DEFAULT_WELL_HEIGHT: i32 = 16;

/// Default well depth in cells (z axis).
pub const DEFAULT_WELL_DEPTH: i32 = 4;

/// Gravity interval at level 0, in seconds.
pub const INITIAL_FALL_SECONDS: f32 = 0.8;

/// How many levels it takes for the gravity interval to decay from
/// `INITIAL_FALL_SECONDS` to zero (the floor clamps it first).
pub const LEVEL_SPEED_FACTOR: f32 = 15.0;

/// Gravity interval floor, in seconds.
pub const MIN_FALL_SECONDS: f32 = 0.01;

/// Layers cleared per level step.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points by layers cleared in a single lock (index = layer count).
///
/// Multiplied by `(level + 1)` when awarded.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Fixed timestep interval for the terminal shell, in milliseconds.
pub const TICK_MS: u32 = 16;

/// DAS (delayed auto shift) default in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (auto repeat rate) default in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop DAS in milliseconds (repeats start immediately).
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop ARR in milliseconds.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// A 3-component `f32` vector over grid space.
///
/// Value type with componentwise arithmetic. Piece positions stay
/// integer-valued; the fractional range only appears transiently inside
/// rotation math before snapping.
///
/// # Examples
///
/// ```
/// use cubewell_types::Vec3;
///
/// let d = Vec3::new(0.0, -1.0, 0.0);
/// let p = Vec3::new(2.0, 16.0, 2.0) + d;
/// assert_eq!(p, Vec3::new(2.0, 15.0, 2.0));
/// assert_eq!(p - d, Vec3::new(2.0, 16.0, 2.0));
/// assert_eq!(-d, Vec3::new(0.0, 1.0, 0.0));
/// assert_eq!(d * 3.0, Vec3::new(0.0, -3.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise round to nearest, ties to even.
    ///
    /// ```
    /// use cubewell_types::Vec3;
    ///
    /// let snapped = Vec3::new(0.5, 1.5, -0.3).rounded();
    /// assert_eq!(snapped, Vec3::new(0.0, 2.0, 0.0));
    /// ```
    pub fn rounded(self) -> Self {
        Self {
            x: self.x.round_ties_even(),
            y: self.y.round_ties_even(),
            z: self.z.round_ties_even(),
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// A cardinal rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The seven piece shapes, indexed 0 through 6.
///
/// Every shape is a planar arrangement of 4 unit cells; rotation about the
/// cardinal axes is what takes them out of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// All shapes in index order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    /// Shape for an index in `0..7`.
    ///
    /// ```
    /// use cubewell_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_index(6), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of this shape in `0..7`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter display name.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::T => "T",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `num / den`.
    ///
    /// Used to dim cells by depth in the terminal renderer.
    ///
    /// ```
    /// use cubewell_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(200, 100, 0).scaled(1, 2), Rgb::new(100, 50, 0));
    /// ```
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        Self {
            r: ((self.r as u16 * num) / den) as u8,
            g: ((self.g as u16 * num) / den) as u8,
            b: ((self.b as u16 * num) / den) as u8,
        }
    }
}

/// Semantic game actions produced by the input layer.
///
/// Movement is in well space: x runs left to right across the front view,
/// z runs from the viewer into the screen, y is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell in -x.
    MoveLeft,
    /// Move piece one cell in +x.
    MoveRight,
    /// Move piece one cell in -z (toward the viewer).
    MoveForward,
    /// Move piece one cell in +z (deeper into the well).
    MoveBackward,
    /// Drop piece one cell down.
    SoftDrop,
    /// Teleport piece to its projected landing position.
    HardDrop,
    /// Rotate piece 90 degrees about the x axis.
    RotateX,
    /// Rotate piece 90 degrees about the y axis.
    RotateY,
    /// Rotate piece 90 degrees about the z axis.
    RotateZ,
    /// Toggle pause (handled by the shell, not the engine).
    Pause,
    /// Restart the session.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_componentwise_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, Vec3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(2.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn vec3_rounding_is_ties_to_even() {
        assert_eq!(Vec3::new(0.5, 1.5, 2.5).rounded(), Vec3::new(0.0, 2.0, 2.0));
        assert_eq!(
            Vec3::new(-0.5, -1.5, 0.25).rounded(),
            Vec3::new(0.0, -2.0, 0.0)
        );
    }

    #[test]
    fn shape_indices_round_trip() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeKind::from_index(i), Some(*kind));
        }
        assert_eq!(ShapeKind::from_index(7), None);
    }

    #[test]
    fn rgb_scaling() {
        assert_eq!(Rgb::new(255, 255, 255).scaled(3, 4), Rgb::new(191, 191, 191));
        assert_eq!(Rgb::new(0, 0, 0).scaled(1, 2), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::new(8, 16, 24).scaled(1, 1), Rgb::new(8, 16, 24));
    }
}
