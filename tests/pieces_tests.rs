//! Pieces tests - shape table and rotation

use tetris_engine::{PieceKind, Shape, SHAPES};

/// Collect a shape's filled cells as (row, col) pairs.
fn filled_cells(shape: &Shape) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for r in 0..shape.rows() as usize {
        for c in 0..shape.cols() as usize {
            if shape.filled(r, c) {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn test_shape_table_has_empty_placeholder() {
    assert_eq!(SHAPES[0], Shape::EMPTY);
    assert_eq!(SHAPES[0].cell_count(), 0);
    assert_eq!((SHAPES[0].rows(), SHAPES[0].cols()), (0, 0));
}

#[test]
fn test_all_pieces_have_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(kind.shape().cell_count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_shape_table_matches_kind_indices() {
    for kind in PieceKind::ALL {
        assert_eq!(SHAPES[kind.index() as usize], kind.shape());
    }
}

#[test]
fn test_canonical_shape_matrices() {
    // I: one row of four
    assert_eq!(filled_cells(&PieceKind::I.shape()), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    // O: 2x2 block
    assert_eq!(filled_cells(&PieceKind::O.shape()), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    // T: bar with a stem below the middle
    assert_eq!(filled_cells(&PieceKind::T.shape()), [(0, 0), (0, 1), (0, 2), (1, 1)]);
    // J: bar with a stem below the left end
    assert_eq!(filled_cells(&PieceKind::J.shape()), [(0, 0), (0, 1), (0, 2), (1, 0)]);
    // L: bar with a stem below the right end
    assert_eq!(filled_cells(&PieceKind::L.shape()), [(0, 0), (0, 1), (0, 2), (1, 2)]);
    // S and Z: offset pairs
    assert_eq!(filled_cells(&PieceKind::S.shape()), [(0, 0), (0, 1), (1, 1), (1, 2)]);
    assert_eq!(filled_cells(&PieceKind::Z.shape()), [(0, 1), (0, 2), (1, 0), (1, 1)]);
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = kind.shape();
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.rows(), shape.cols(), "{:?}", kind);
        assert_eq!(rotated.cols(), shape.rows(), "{:?}", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = kind.shape();
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.cell_count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_rotation_formula() {
    // new[r][c] = old[old_rows - 1 - c][r], checked cell by cell
    for kind in PieceKind::ALL {
        let old = kind.shape();
        let new = old.rotated_cw();
        let old_rows = old.rows() as usize;

        for r in 0..new.rows() as usize {
            for c in 0..new.cols() as usize {
                assert_eq!(
                    new.filled(r, c),
                    old.filled(old_rows - 1 - c, r),
                    "{:?} at ({}, {})",
                    kind,
                    r,
                    c
                );
            }
        }
    }
}

#[test]
fn test_four_rotations_roundtrip() {
    for kind in PieceKind::ALL {
        let original = kind.shape();
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn test_i_rotation_sequence() {
    let horizontal = PieceKind::I.shape();
    let vertical = horizontal.rotated_cw();

    assert_eq!(filled_cells(&vertical), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    // Second rotation brings it back to a horizontal bar
    assert_eq!(filled_cells(&vertical.rotated_cw()), filled_cells(&horizontal));
}

#[test]
fn test_o_rotation_is_identity() {
    let o = PieceKind::O.shape();
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_kind_from_index() {
    assert_eq!(PieceKind::from_index(1), Some(PieceKind::I));
    assert_eq!(PieceKind::from_index(7), Some(PieceKind::Z));
    assert_eq!(PieceKind::from_index(0), None);
    assert_eq!(PieceKind::from_index(8), None);

    for kind in PieceKind::ALL {
        assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
    }
}
