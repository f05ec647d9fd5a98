//! Pieces the player places on the board.
//!
//! A piece is a small boolean shape grid plus a color index. Pieces are plain
//! values: the hand, the board and undo snapshots each hold their own copies.

use rand::Rng;

use crate::config::{COLOR_COUNT, MAX_PIECE_SIDE};

/// Index into the theme palette.
pub type ColorIndex = u8;

/// Row-major boolean occupancy grid of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceShape {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl PieceShape {
    /// Build a shape from raw cells. Returns `None` when a side is outside
    /// `1..=MAX_PIECE_SIDE` or `cells` does not hold `cols * rows` entries.
    pub fn new(cols: usize, rows: usize, cells: Vec<bool>) -> Option<Self> {
        let side_ok = |n: usize| (1..=MAX_PIECE_SIDE).contains(&n);
        if !side_ok(cols) || !side_ok(rows) || cells.len() != cols * rows {
            return None;
        }
        Some(Self { cols, rows, cells })
    }

    /// A fully filled rectangle.
    pub fn filled(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![true; cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// `(row, col)` offsets of every filled cell.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_filled(r, c))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// The shape turned 90 degrees clockwise.
    pub fn rotated(&self) -> Self {
        let (cols, rows) = (self.rows, self.cols);
        let mut cells = vec![false; cols * rows];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = self.is_filled(self.rows - 1 - c, r);
            }
        }
        Self { cols, rows, cells }
    }
}

/// The catalogue of shapes a hand can be dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Filled square with the given side (1..=3).
    Square(usize),
    /// Straight line with the given length (2..=5).
    Line(usize),
    /// L-shaped corner with the given arm length (2..=3).
    Corner(usize),
}

impl PieceKind {
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Square(1),
        PieceKind::Square(2),
        PieceKind::Square(3),
        PieceKind::Line(2),
        PieceKind::Line(3),
        PieceKind::Line(4),
        PieceKind::Line(5),
        PieceKind::Corner(2),
        PieceKind::Corner(3),
    ];

    /// Every kind has its own palette color.
    pub fn color(self) -> ColorIndex {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        (idx as u8) % COLOR_COUNT
    }

    fn base_shape(self) -> PieceShape {
        match self {
            PieceKind::Square(side) => PieceShape::filled(side, side),
            PieceKind::Line(len) => PieceShape::filled(len, 1),
            PieceKind::Corner(arm) => {
                let mut cells = vec![false; arm * arm];
                for i in 0..arm {
                    cells[i * arm] = true;
                    cells[(arm - 1) * arm + i] = true;
                }
                PieceShape {
                    cols: arm,
                    rows: arm,
                    cells,
                }
            }
        }
    }
}

/// A colored shape. Rotation is kept alongside the already-rotated shape so
/// a piece can be written and read back without recomputing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: ColorIndex,
    pub rotation: u8,
    pub shape: PieceShape,
}

impl Piece {
    pub fn new(color: ColorIndex, rotation: u8, shape: PieceShape) -> Self {
        Self {
            color,
            rotation: rotation % 4,
            shape,
        }
    }

    pub fn from_kind(kind: PieceKind, rotation: u8) -> Self {
        let rotation = rotation % 4;
        let mut shape = kind.base_shape();
        for _ in 0..rotation {
            shape = shape.rotated();
        }
        Self {
            color: kind.color(),
            rotation,
            shape,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
        Self::from_kind(kind, rng.gen_range(0..4))
    }

    /// Number of board cells this piece occupies.
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shape_new_rejects_bad_dimensions() {
        assert!(PieceShape::new(0, 1, vec![]).is_none());
        assert!(PieceShape::new(6, 1, vec![true; 6]).is_none());
        assert!(PieceShape::new(2, 2, vec![true; 3]).is_none());
        assert!(PieceShape::new(2, 1, vec![true, false]).is_some());
    }

    #[test]
    fn test_line_rotation_swaps_axes() {
        let horizontal = Piece::from_kind(PieceKind::Line(4), 0);
        assert_eq!((horizontal.shape.cols(), horizontal.shape.rows()), (4, 1));
        let vertical = Piece::from_kind(PieceKind::Line(4), 1);
        assert_eq!((vertical.shape.cols(), vertical.shape.rows()), (1, 4));
        assert_eq!(vertical.cell_count(), 4);
    }

    #[test]
    fn test_corner_has_expected_cells() {
        let corner = Piece::from_kind(PieceKind::Corner(3), 0);
        assert_eq!(corner.cell_count(), 5);
        assert!(corner.shape.is_filled(0, 0));
        assert!(corner.shape.is_filled(2, 2));
        assert!(!corner.shape.is_filled(0, 2));
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        let corner = PieceKind::Corner(2).base_shape();
        let back = corner.rotated().rotated().rotated().rotated();
        assert_eq!(back, corner);
    }

    #[test]
    fn test_rotation_is_normalized() {
        assert_eq!(Piece::from_kind(PieceKind::Corner(2), 5).rotation, 1);
        assert_eq!(Piece::new(0, 7, PieceShape::filled(1, 1)).rotation, 3);
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(Piece::random(&mut a), Piece::random(&mut b));
        }
    }

    #[test]
    fn test_kind_colors_fit_palette() {
        for kind in PieceKind::ALL {
            assert!(kind.color() < COLOR_COUNT);
        }
    }
}
