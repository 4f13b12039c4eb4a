//! Pieces module - the fixed catalog of seven tetrominoes
//!
//! Shapes are offsets relative to a pivot. Rotation computes a new shape
//! with `(x, y) -> (-y, x)`; catalog entries themselves never change.

use crate::rng::PieceSource;
use crate::types::{Color, PieceKind};

/// Offset of a single mino relative to the pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// A piece definition: kind, shape and color tag.
///
/// Catalog entries hold the spawn shape. Active pieces carry their own
/// (possibly rotated) copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub color: Color,
}

impl PieceDef {
    /// Same piece, shape rotated 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: rotate_cw(&self.shape),
            ..*self
        }
    }
}

const CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: [(0, -1), (0, 0), (0, 1), (0, 2)],
        color: Color::Cyan,
    },
    PieceDef {
        kind: PieceKind::O,
        shape: [(0, 0), (0, 1), (1, 0), (1, 1)],
        color: Color::Yellow,
    },
    PieceDef {
        kind: PieceKind::T,
        shape: [(0, 0), (-1, 0), (1, 0), (0, -1)],
        color: Color::Accent,
    },
    PieceDef {
        kind: PieceKind::S,
        shape: [(0, 0), (1, 0), (0, 1), (-1, 1)],
        color: Color::Green,
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: [(0, 0), (-1, 0), (0, 1), (1, 1)],
        color: Color::Pink,
    },
    PieceDef {
        kind: PieceKind::J,
        shape: [(0, 0), (-1, 0), (1, 0), (-1, -1)],
        color: Color::Blue,
    },
    PieceDef {
        kind: PieceKind::L,
        shape: [(0, 0), (-1, 0), (1, 0), (1, -1)],
        color: Color::Orange,
    },
];

/// All seven definitions, in [`PieceKind::ALL`] order
pub fn catalog() -> &'static [PieceDef; 7] {
    &CATALOG
}

/// Catalog definition for a kind
pub fn piece_def(kind: PieceKind) -> PieceDef {
    CATALOG[kind.index()]
}

/// Rotate every offset 90° clockwise: (x, y) -> (-y, x)
pub fn rotate_cw(shape: &PieceShape) -> PieceShape {
    shape.map(|(x, y)| (-y, x))
}

/// Pick one catalog entry through the injected source
pub fn random_piece(source: &mut impl PieceSource) -> PieceDef {
    piece_def(source.next_kind())
}
