use bevy::prelude::*;

use crate::piece::{ColorIndex, Piece};

/// One grid position. `color` is `None` while the cell is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub color: Option<ColorIndex>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { color: None };

    pub fn filled(color: ColorIndex) -> Self {
        Self { color: Some(color) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// Square playing field of `cell_count * cell_count` cells, stored row-major.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Board {
    cells: Vec<Cell>,
    cell_count: usize,
    cell_size: f32,
}

impl Board {
    pub fn new(cell_count: usize, cell_size: f32) -> Self {
        Self {
            cells: vec![Cell::EMPTY; cell_count * cell_count],
            cell_count,
            cell_size,
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cell_count + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.cell_count && col < self.cell_count
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Option<ColorIndex>) {
        let idx = self.index(row, col);
        self.cells[idx].color = color;
    }

    pub fn clear_cell(&mut self, row: usize, col: usize) {
        self.set(row, col, None);
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Replace the whole grid at once.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not hold exactly `cell_count²` entries.
    pub fn replace_cells(&mut self, cells: Vec<Cell>) {
        assert_eq!(
            cells.len(),
            self.cells.len(),
            "replacement grid must match board dimensions"
        );
        self.cells = cells;
    }

    /// Screen-space origin of a cell relative to the board origin.
    pub fn cell_position(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether `piece` can be placed with its top-left corner at `(row, col)`.
    pub fn piece_fits(&self, piece: &Piece, row: usize, col: usize) -> bool {
        piece.shape.filled_cells().all(|(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            self.in_bounds(r, c) && self.get(r, c).is_empty()
        })
    }

    /// Place `piece` at `(row, col)`. Returns `false` and leaves the board
    /// untouched when it does not fit.
    pub fn put_piece(&mut self, piece: &Piece, row: usize, col: usize) -> bool {
        if !self.piece_fits(piece, row, col) {
            return false;
        }
        for (dr, dc) in piece.shape.filled_cells() {
            self.set(row + dr, col + dc, Some(piece.color));
        }
        true
    }
}
