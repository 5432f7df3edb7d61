//! Piece shapes and rotation.
//!
//! Shapes are immutable boolean matrices over the piece's bounding box:
//! table index 0 is an unused empty placeholder (kept for indexing parity
//! with the color palette), indices 1..=7 are the seven tetrominoes. Rotation is computed from the matrix, not from per-rotation
//! tables: a 90° clockwise turn swaps the dimensions and maps
//! `new[r][c] = old[rows - 1 - c][r]`.

/// Largest bounding box any shape occupies (the I piece spans 4 cells).
const SHAPE_BOX: usize = 4;

/// An immutable piece shape: a `rows x cols` boolean matrix stored in a
/// fixed 4x4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; SHAPE_BOX]; SHAPE_BOX],
}

impl Shape {
    /// The empty placeholder at table index 0.
    pub const EMPTY: Shape = Shape {
        rows: 0,
        cols: 0,
        cells: [[false; SHAPE_BOX]; SHAPE_BOX],
    };

    /// Build a shape from a 0/1 pattern; rows/cols give the bounding box.
    const fn from_pattern(rows: u8, cols: u8, pattern: [[u8; SHAPE_BOX]; SHAPE_BOX]) -> Self {
        let mut cells = [[false; SHAPE_BOX]; SHAPE_BOX];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                cells[r][c] = pattern[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Shape { rows, cols, cells }
    }

    /// Height of the bounding box.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Width of the bounding box.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is filled.
    ///
    /// Out-of-box coordinates are simply not filled.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Number of filled cells (4 for every real piece, 0 for the placeholder).
    pub fn cell_count(&self) -> u32 {
        let mut count = 0;
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// The shape rotated 90° clockwise.
    ///
    /// Dimensions swap; `new[r][c] = old[old_rows - 1 - c][r]`. Four
    /// applications return the original shape.
    pub fn rotated_cw(&self) -> Shape {
        let old_rows = self.rows as usize;
        let old_cols = self.cols as usize;

        let mut cells = [[false; SHAPE_BOX]; SHAPE_BOX];
        for r in 0..old_cols {
            for c in 0..old_rows {
                cells[r][c] = self.cells[old_rows - 1 - c][r];
            }
        }

        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The shape table.
///
/// `SHAPES[0]` is the empty placeholder; `SHAPES[k]` for k in 1..=7 is the
/// spawn orientation of piece kind k.
pub const SHAPES: [Shape; 8] = [
    Shape::EMPTY,
    // I
    Shape::from_pattern(1, 4, [[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // O
    Shape::from_pattern(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // T
    Shape::from_pattern(2, 3, [[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // J
    Shape::from_pattern(2, 3, [[1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // L
    Shape::from_pattern(2, 3, [[1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // S
    Shape::from_pattern(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // Z
    Shape::from_pattern(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
];

/// The seven tetromino piece kinds.
///
/// Discriminants are the shape table indices (1..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    O = 2,
    T = 3,
    J = 4,
    L = 5,
    S = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Look up a kind by shape table index (1..=7).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Shape table index of this kind (1..=7).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Spawn-orientation shape for this kind.
    pub fn shape(&self) -> Shape {
        SHAPES[*self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_empty() {
        assert_eq!(SHAPES[0], Shape::EMPTY);
        assert_eq!(SHAPES[0].cell_count(), 0);
    }

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.shape().cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn kind_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(0), None);
        assert_eq!(PieceKind::from_index(8), None);
    }

    #[test]
    fn i_piece_dimensions() {
        let i = PieceKind::I.shape();
        assert_eq!((i.rows(), i.cols()), (1, 4));
        for c in 0..4 {
            assert!(i.filled(0, c));
        }
    }

    #[test]
    fn rotate_i_piece() {
        let i = PieceKind::I.shape();
        let vertical = i.rotated_cw();

        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        for r in 0..4 {
            assert!(vertical.filled(r, 0));
        }
    }

    #[test]
    fn rotate_t_piece() {
        // T: [[1,1,1],[0,1,0]] rotated clockwise becomes
        //    [[0,1],[1,1],[0,1]]
        let t = PieceKind::T.shape().rotated_cw();

        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert!(!t.filled(0, 0));
        assert!(t.filled(0, 1));
        assert!(t.filled(1, 0));
        assert!(t.filled(1, 1));
        assert!(!t.filled(2, 0));
        assert!(t.filled(2, 1));
    }

    #[test]
    fn four_rotations_roundtrip() {
        for kind in PieceKind::ALL {
            let original = kind.shape();
            let rotated = original
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(rotated, original, "{:?}", kind);
        }
    }

    #[test]
    fn filled_outside_box_is_false() {
        let o = PieceKind::O.shape();
        assert!(!o.filled(2, 0));
        assert!(!o.filled(0, 2));
        assert!(!o.filled(7, 7));
    }
}
