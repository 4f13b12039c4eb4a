use crate::collision::ActivePiece;
use crate::pieces::PieceDef;
use crate::scoring::Stats;
use crate::types::{Cell, Color, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub x: i8,
    pub y: i8,
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Everything a view needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece merged in
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Pivot of the hard-drop landing spot
    pub ghost: Option<(i8, i8)>,
    pub ghost_cells: Option<[(i8, i8); 4]>,
    pub next: Option<PieceDef>,
    pub status: GameStatus,
    pub stats: Stats,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// True when (x, y) is a ghost cell not covered by the merged board
    pub fn is_ghost_cell(&self, x: i8, y: i8) -> bool {
        let Some(cells) = self.ghost_cells else {
            return false;
        };
        if !cells.contains(&(x, y)) || x < 0 || y < 0 {
            return false;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .is_some_and(|cell| cell.is_none())
    }
}

#[cfg(test)]
mod tests {
    use crate::rng::ScriptedSource;
    use crate::types::{GameStatus, PieceKind};
    use crate::GameState;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut source = ScriptedSource::new([PieceKind::O, PieceKind::Z]);
        let state = GameState::new(7, &mut source).start();
        let snap = state.snapshot();

        assert!(snap.playable());
        assert!(!snap.game_over());
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.active.unwrap().kind, PieceKind::O);
        assert_eq!(snap.next.unwrap().kind, PieceKind::Z);
        assert_eq!(snap.ghost, Some((5, 18)));
        assert_eq!(snap.stats.high_score, 7);
        assert!(snap.board[0][5].is_some());
    }

    #[test]
    fn test_ghost_cells_hidden_under_active() {
        let mut source = ScriptedSource::repeat(PieceKind::O);
        let state = GameState::new(0, &mut source).start();
        let snap = state.snapshot();

        assert!(snap.is_ghost_cell(5, 19));
        assert!(snap.is_ghost_cell(6, 18));
        assert!(!snap.is_ghost_cell(5, 0));
        assert!(!snap.is_ghost_cell(-1, 19));
    }

    #[test]
    fn test_ghost_overlapping_active_not_drawn() {
        let mut source = ScriptedSource::repeat(PieceKind::O);
        let mut state = GameState::new(0, &mut source).start();
        for _ in 0..18 {
            state = state.move_piece(crate::types::Direction::Down, &mut source);
        }
        let snap = state.snapshot();

        assert_eq!(snap.ghost, Some((5, 18)));
        assert!(!snap.is_ghost_cell(5, 19));
    }
}
