//! Falling pieces and their canonical shapes.
//!
//! Each piece is four unit cubes. Shapes are authored flat in the z = 0
//! plane and turned into arbitrary orientations by quarter-turn rotations
//! about the piece pivot. The pivot is fixed when the piece is built (the
//! rounded mean of the canonical layout) and from then on translates with
//! the piece, so rotating +90 and then -90 about any axis always restores
//! the exact block positions.

use crate::rotation::Rotation3;
use crate::types::{Axis, Rgb, ShapeKind, Vec3};

/// Canonical block layouts, indexed by [`ShapeKind::index`].
const SHAPE_CELLS: [[Vec3; 4]; 7] = [
    // I
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ],
    // J
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
    ],
    // L
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ],
    // O
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ],
    // S
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
    ],
    // Z
    [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ],
    // T
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ],
];

/// Canonical layout for `kind`, anchored at the origin in the z = 0 plane.
pub fn shape_cells(kind: ShapeKind) -> [Vec3; 4] {
    SHAPE_CELLS[kind.index()]
}

/// Rounded mean of the canonical layout; the point the piece rotates about.
fn base_pivot(kind: ShapeKind) -> Vec3 {
    let cells = SHAPE_CELLS[kind.index()];
    ((cells[0] + cells[1] + cells[2] + cells[3]) / 4.0).rounded()
}

/// One colored unit cube of a piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub position: Vec3,
    pub color: Rgb,
}

impl Block {
    pub const fn new(position: Vec3, color: Rgb) -> Block {
        Block { position, color }
    }
}

/// A four-block piece with a position and an accumulated orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tetromino {
    kind: ShapeKind,
    pivot: Vec3,
    orientation: Rotation3,
    blocks: [Block; 4],
}

impl Tetromino {
    /// A fresh, unrotated piece at the canonical origin.
    pub fn new(kind: ShapeKind, color: Rgb) -> Tetromino {
        let blocks = shape_cells(kind).map(|cell| Block::new(cell, color));
        Tetromino {
            kind,
            pivot: base_pivot(kind),
            orientation: Rotation3::IDENTITY,
            blocks,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.blocks[0].color
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Move every block (and the pivot) by `direction`.
    pub fn translate(&mut self, direction: Vec3) {
        for block in &mut self.blocks {
            block.position = block.position + direction;
        }
        self.pivot = self.pivot + direction;
    }

    /// Rotate in place by `angle_degrees` (snapped to a quarter turn)
    /// about the axis through the pivot.
    ///
    /// Block positions are rebuilt from the canonical layout through the
    /// accumulated orientation rather than rotated incrementally, so a
    /// rejected rotation rolled back with the opposite angle leaves the
    /// piece bit-for-bit where it started.
    pub fn rotate(&mut self, angle_degrees: f32, axis: Axis) {
        let step = Rotation3::from_angle(axis, angle_degrees);
        self.orientation = step * self.orientation;
        let pivot0 = base_pivot(self.kind);
        let cells = shape_cells(self.kind);
        for (block, cell) in self.blocks.iter_mut().zip(cells) {
            let local = cell - pivot0;
            block.position = (self.pivot + self.orientation.apply(local)).rounded();
        }
    }

    /// Lowest y coordinate over all blocks.
    pub fn min_y(&self) -> f32 {
        self.blocks
            .iter()
            .map(|b| b.position.y)
            .fold(f32::INFINITY, f32::min)
    }
}
