//! The well: a dense three-dimensional occupancy grid.
//!
//! Cells live in a single flat vector, layer-major (all of layer y = 0,
//! then y = 1, ...), with each layer scanned z-row by z-row. A per-layer
//! occupancy counter is kept in lockstep with the cells so full-layer
//! detection never rescans the grid.

use crate::piece::Tetromino;
use crate::types::Rgb;

/// Playfield of `width * height * depth` cells, empty or holding a color.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    depth: i32,
    cells: Vec<Option<Rgb>>,
    layer_counts: Vec<u32>,
}

impl Grid {
    /// An empty well. Dimensions must already be validated positive.
    pub fn new(width: i32, height: i32, depth: i32) -> Grid {
        let volume = (width * height * depth) as usize;
        Grid {
            width,
            height,
            depth,
            cells: vec![None; volume],
            layer_counts: vec![0; height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if self.in_bounds(x, y, z) {
            Some(((y * self.depth + z) * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Whether the cell holds a settled block. Out-of-range coordinates
    /// read as empty.
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z)
            .map_or(false, |i| self.cells[i].is_some())
    }

    /// Color of the settled block at the cell, if any.
    pub fn color_at(&self, x: i32, y: i32, z: i32) -> Option<Rgb> {
        self.index(x, y, z).and_then(|i| self.cells[i])
    }

    /// Occupied-cell count of horizontal layer `y`.
    pub fn layer_count(&self, y: i32) -> u32 {
        if y >= 0 && y < self.height {
            self.layer_counts[y as usize]
        } else {
            0
        }
    }

    /// Total settled blocks in the well.
    pub fn occupied_cells(&self) -> usize {
        self.layer_counts.iter().map(|&c| c as usize).sum()
    }

    /// Whether any block of `piece` is outside the well or on a settled
    /// cell. Block positions are integral, so the float coordinates cast
    /// losslessly.
    pub fn collides(&self, piece: &Tetromino) -> bool {
        piece.blocks().iter().any(|block| {
            let x = block.position.x as i32;
            let y = block.position.y as i32;
            let z = block.position.z as i32;
            if block.position.x < 0.0 || block.position.y < 0.0 || block.position.z < 0.0 {
                return true;
            }
            match self.index(x, y, z) {
                Some(i) => self.cells[i].is_some(),
                None => true,
            }
        })
    }

    /// Write the piece's blocks into the well. Blocks that fall outside
    /// the bounds or land on an already-settled cell are skipped.
    pub fn place(&mut self, piece: &Tetromino) {
        for block in piece.blocks() {
            let x = block.position.x as i32;
            let y = block.position.y as i32;
            let z = block.position.z as i32;
            if let Some(i) = self.index(x, y, z) {
                if self.cells[i].is_none() {
                    self.cells[i] = Some(block.color);
                    self.layer_counts[y as usize] += 1;
                }
            }
        }
    }

    /// Remove every completely full horizontal layer, shifting all layers
    /// above straight down, and return how many were removed.
    pub fn clear_full_layers(&mut self) -> u32 {
        let stride = (self.width * self.depth) as usize;
        let full = (self.width * self.depth) as u32;
        let h = self.height as usize;
        let mut cleared = 0;
        let mut y = 0;
        while y < h {
            if self.layer_counts[y] != full {
                y += 1;
                continue;
            }
            // Shift everything above down one layer and empty the vacated
            // top. The scan index stays put so the layer that just moved
            // into this slot is examined on the next pass.
            self.cells.copy_within((y + 1) * stride..h * stride, y * stride);
            self.cells[(h - 1) * stride..].fill(None);
            self.layer_counts.copy_within(y + 1..h, y);
            self.layer_counts[h - 1] = 0;
            cleared += 1;
        }
        cleared
    }

    /// Empty the well.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.layer_counts.fill(0);
    }

    #[cfg(test)]
    pub(crate) fn fill_cell(&mut self, x: i32, y: i32, z: i32, color: Rgb) {
        let i = self.index(x, y, z).unwrap();
        if self.cells[i].is_none() {
            self.layer_counts[y as usize] += 1;
        }
        self.cells[i] = Some(color);
    }
}
