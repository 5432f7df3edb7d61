//! Grid module - the 10x20 playfield.
//!
//! Each cell is empty or holds the color of a locked block. Uses a flat
//! array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Dimensions never change after construction; only cell
//! contents mutate.

use arrayvec::ArrayVec;

use crate::types::{Cell, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (COLS * ROWS) as usize;

/// Capacity of the cleared-row list. A lock clears at most 4 rows, but the
/// grid itself accepts arbitrary cell edits, so size for the full height.
const CLEAR_CAPACITY: usize = ROWS as usize;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    /// Grid width in cells
    pub fn width(&self) -> u8 {
        COLS
    }

    /// Grid height in cells
    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }
        let start = y * COLS as usize;
        let end = start + COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove a row: rows above shift down by one and an empty row enters
    /// at the top. Relative order of the remaining rows is preserved.
    pub fn remove_row(&mut self, y: usize) {
        if y >= ROWS as usize {
            return;
        }

        let width = COLS as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Remove every full row and return the indices at which rows were
    /// removed, in clearing order (bottom to top).
    ///
    /// Scans bottom-to-top; after removing a row the same index is examined
    /// again, because the row that shifted into it may also be full (two
    /// adjacent full rows must both clear in one call).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, CLEAR_CAPACITY> {
        let mut cleared = ArrayVec::new();

        let mut y = ROWS as usize;
        while y > 0 {
            y -= 1;
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared.push(y);
                // Re-examine the same index: a new row shifted into it.
                y += 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells slice (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the grid as palette indices (0 = empty, 1..=7 = color) into a
    /// 2D array, for snapshots and presentation layers.
    pub fn write_index_grid(&self, out: &mut [[u8; COLS as usize]; ROWS as usize]) {
        for y in 0..ROWS as usize {
            for x in 0..COLS as usize {
                out[y][x] = match self.cells[y * COLS as usize + x] {
                    Some(color) => color.index(),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
