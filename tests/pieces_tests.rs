//! Pieces tests - spawn shapes and quarter-turn rotation

use term_tetris::core::{base_offsets, Piece};
use term_tetris::types::PieceKind;

#[test]
fn test_spawn_shapes() {
    assert_eq!(base_offsets(PieceKind::I), [(0, -1), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(base_offsets(PieceKind::O), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(base_offsets(PieceKind::T), [(0, 0), (-1, 0), (1, 0), (0, 1)]);
    assert_eq!(base_offsets(PieceKind::S), [(0, 0), (1, 0), (0, 1), (-1, 1)]);
    assert_eq!(base_offsets(PieceKind::Z), [(0, 0), (-1, 0), (0, 1), (1, 1)]);
    assert_eq!(base_offsets(PieceKind::J), [(0, 0), (0, -1), (0, 1), (-1, 1)]);
    assert_eq!(base_offsets(PieceKind::L), [(0, 0), (0, -1), (0, 1), (1, 1)]);
}

#[test]
fn test_every_shape_contains_its_anchor() {
    for kind in PieceKind::ALL {
        assert!(base_offsets(kind).contains(&(0, 0)), "{:?}", kind);
    }
}

#[test]
fn test_blocks_are_absolute() {
    let piece = Piece::new(PieceKind::T, 4, 7);
    assert_eq!(piece.blocks(), [(4, 7), (3, 7), (5, 7), (4, 8)]);
}

#[test]
fn test_rotate_i_clockwise() {
    let mut piece = Piece::new(PieceKind::I, 5, 5);
    piece.rotate_cw();
    // Vertical bar becomes horizontal: (dx, dy) -> (-dy, dx)
    assert_eq!(piece.offsets(), &[(1, 0), (0, 0), (-1, 0), (-2, 0)]);
    assert_eq!((piece.x, piece.y), (5, 5));
}

#[test]
fn test_rotate_t_clockwise() {
    let mut piece = Piece::new(PieceKind::T, 0, 0);
    piece.rotate_cw();
    assert_eq!(piece.offsets(), &[(0, 0), (0, -1), (0, 1), (-1, 0)]);
}

#[test]
fn test_o_piece_never_rotates() {
    let mut piece = Piece::new(PieceKind::O, 3, 3);
    let before = piece;
    piece.rotate_cw();
    assert_eq!(piece, before);
    piece.rotate_ccw();
    assert_eq!(piece, before);
}

#[test]
fn test_shifted_leaves_original_untouched() {
    let piece = Piece::new(PieceKind::S, 2, 2);
    let moved = piece.shifted(1, 3);
    assert_eq!((moved.x, moved.y), (3, 5));
    assert_eq!((piece.x, piece.y), (2, 2));
    assert_eq!(moved.offsets(), piece.offsets());
}
