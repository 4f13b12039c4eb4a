//! Collision module - active pieces and placement checks

use crate::board::Board;
use crate::pieces::PieceDef;
use crate::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// A falling piece: its (possibly rotated) definition plus the pivot position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub def: PieceDef,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a definition at the spawn pivot (top-center)
    pub fn spawn(def: PieceDef) -> Self {
        Self {
            def,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.def.kind
    }

    pub fn color(&self) -> Color {
        self.def.color
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.def.shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same pivot, shape turned 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            def: self.def.rotated_cw(),
            ..*self
        }
    }
}

/// Check whether `piece` shifted by `offset` fits on `board`.
///
/// Columns must lie in [0, W) and rows below H. Rows above the top edge are
/// allowed and skip the occupancy check; every other target cell must be empty.
pub fn is_valid_placement(board: &Board, piece: &ActivePiece, offset: (i8, i8)) -> bool {
    let (ox, oy) = offset;
    piece.cells().iter().all(|&(x, y)| {
        let x = x + ox;
        let y = y + oy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// How many rows the piece can fall before it would collide
pub fn drop_distance(board: &Board, piece: &ActivePiece) -> i8 {
    let mut distance: i8 = 0;
    while is_valid_placement(board, piece, (0, distance + 1)) {
        distance += 1;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_def;

    #[test]
    fn test_spawn_position() {
        let piece = ActivePiece::spawn(piece_def(PieceKind::O));
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(piece.cells(), [(5, 0), (5, 1), (6, 0), (6, 1)]);
    }

    #[test]
    fn test_negative_rows_are_allowed() {
        let board = Board::new();
        let piece = ActivePiece::spawn(piece_def(PieceKind::I));
        // I spawns with its top mino at row -1
        assert!(piece.cells().contains(&(5, -1)));
        assert!(is_valid_placement(&board, &piece, (0, 0)));
        assert!(is_valid_placement(&board, &piece, (0, -5)));
    }

    #[test]
    fn test_horizontal_bounds() {
        let board = Board::new();
        let piece = ActivePiece::spawn(piece_def(PieceKind::T));
        // T spans x-1..=x+1
        assert!(is_valid_placement(&board, &piece, (-4, 0)));
        assert!(!is_valid_placement(&board, &piece, (-5, 0)));
        assert!(is_valid_placement(&board, &piece, (3, 0)));
        assert!(!is_valid_placement(&board, &piece, (4, 0)));
    }

    #[test]
    fn test_floor_bound() {
        let board = Board::new();
        let piece = ActivePiece::spawn(piece_def(PieceKind::T));
        assert!(is_valid_placement(&board, &piece, (0, 19)));
        assert!(!is_valid_placement(&board, &piece, (0, 20)));
    }

    #[test]
    fn test_occupied_cell_blocks() {
        let mut board = Board::new();
        board.set(5, 3, Some(Color::Blue));
        let piece = ActivePiece::spawn(piece_def(PieceKind::O));
        assert!(is_valid_placement(&board, &piece, (0, 1)));
        assert!(!is_valid_placement(&board, &piece, (0, 2)));
        assert!(!is_valid_placement(&board, &piece, (0, 3)));
    }

    #[test]
    fn test_drop_distance_empty_board() {
        let board = Board::new();
        assert_eq!(drop_distance(&board, &ActivePiece::spawn(piece_def(PieceKind::O))), 18);
        assert_eq!(drop_distance(&board, &ActivePiece::spawn(piece_def(PieceKind::T))), 19);
        assert_eq!(drop_distance(&board, &ActivePiece::spawn(piece_def(PieceKind::I))), 17);
    }

    #[test]
    fn test_rotation_keeps_pivot() {
        let piece = ActivePiece::spawn(piece_def(PieceKind::J)).translated(1, 4);
        let turned = piece.rotated_cw();
        assert_eq!((turned.x, turned.y), (6, 4));
        assert_ne!(turned.def.shape, piece.def.shape);
    }
}
