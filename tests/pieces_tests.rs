//! Piece catalog tests - shapes, colors and clockwise rotation

use ziqi_tetris::core::{catalog, piece_def, rotate_cw, ActivePiece};
use ziqi_tetris::types::{Color, PieceKind};

#[test]
fn test_catalog_shapes() {
    assert_eq!(piece_def(PieceKind::I).shape, [(0, -1), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(piece_def(PieceKind::O).shape, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(piece_def(PieceKind::T).shape, [(0, 0), (-1, 0), (1, 0), (0, -1)]);
    assert_eq!(piece_def(PieceKind::S).shape, [(0, 0), (1, 0), (0, 1), (-1, 1)]);
    assert_eq!(piece_def(PieceKind::Z).shape, [(0, 0), (-1, 0), (0, 1), (1, 1)]);
    assert_eq!(piece_def(PieceKind::J).shape, [(0, 0), (-1, 0), (1, 0), (-1, -1)]);
    assert_eq!(piece_def(PieceKind::L).shape, [(0, 0), (-1, 0), (1, 0), (1, -1)]);
}

#[test]
fn test_catalog_colors() {
    let colors: Vec<Color> = catalog().iter().map(|d| d.color).collect();
    assert_eq!(
        colors,
        vec![
            Color::Cyan,
            Color::Yellow,
            Color::Accent,
            Color::Green,
            Color::Pink,
            Color::Blue,
            Color::Orange
        ]
    );
    assert_eq!(Color::Accent.label(), "ziqi-accent");
}

#[test]
fn test_i_rotation_turns_horizontal() {
    let i = piece_def(PieceKind::I);
    assert_eq!(rotate_cw(&i.shape), [(1, 0), (0, 0), (-1, 0), (-2, 0)]);
}

#[test]
fn test_o_piece_rotates_like_the_rest() {
    let o = piece_def(PieceKind::O);
    let turned = rotate_cw(&o.shape);
    assert_eq!(turned, [(0, 0), (-1, 0), (0, 1), (-1, 1)]);
}

#[test]
fn test_active_piece_cells_follow_pivot() {
    let piece = ActivePiece::spawn(piece_def(PieceKind::S)).translated(-2, 10);
    assert_eq!(piece.cells(), [(3, 10), (4, 10), (3, 11), (2, 11)]);
}
