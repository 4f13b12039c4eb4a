//! Game state module - the immutable snapshot and its transitions
//!
//! A [`GameState`] is a plain value. Every transition borrows the current
//! state and returns a brand-new one; a rejected action (a blocked move, a
//! rotation with no valid kick, any gameplay action outside `Playing`) simply
//! returns an equal copy of the input.

use crate::board::Board;
use crate::collision::{drop_distance, is_valid_placement, ActivePiece};
use crate::pieces::{random_piece, PieceDef};
use crate::rng::PieceSource;
use crate::scoring::{drop_interval_ms, hard_drop_bonus, Stats};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<PieceDef>,
    status: GameStatus,
    stats: Stats,
    /// Incremented on every lock; the active piece's spawn sequence number.
    piece_id: u32,
}

impl GameState {
    /// Fresh idle game: empty board, active and next piece already rolled
    pub fn new(high_score: u32, source: &mut impl PieceSource) -> Self {
        let first = random_piece(source);
        let next = random_piece(source);

        Self {
            board: Board::new(),
            active: Some(ActivePiece::spawn(first)),
            next: Some(next),
            status: GameStatus::Idle,
            stats: Stats::new(high_score),
            piece_id: 0,
        }
    }

    /// Assemble a state from its parts (scenario setup, tools, replays)
    pub fn from_parts(
        board: Board,
        active: Option<ActivePiece>,
        next: Option<PieceDef>,
        status: GameStatus,
        stats: Stats,
    ) -> Self {
        Self {
            board,
            active,
            next,
            status,
            stats,
            piece_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next(&self) -> Option<PieceDef> {
        self.next
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    pub fn high_score(&self) -> u32 {
        self.stats.high_score
    }

    /// Number of pieces locked since the game was created
    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Auto-drop interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.stats.level)
    }

    /// Translate the active piece one step.
    ///
    /// A blocked `Down` locks the piece; blocked `Left`/`Right` are ignored.
    pub fn move_piece(&self, direction: Direction, source: &mut impl PieceSource) -> Self {
        let Some(active) = self.playable_piece() else {
            return self.clone();
        };

        let (dx, dy) = direction.offset();
        if is_valid_placement(&self.board, &active, (dx, dy)) {
            return Self {
                active: Some(active.translated(dx, dy)),
                ..self.clone()
            };
        }

        if direction == Direction::Down {
            return self.lock(active, 0, source);
        }

        self.clone()
    }

    /// Rotate 90° clockwise, trying each wall kick offset in order
    pub fn rotate(&self) -> Self {
        let Some(active) = self.playable_piece() else {
            return self.clone();
        };

        let rotated = active.rotated_cw();
        KICK_OFFSETS
            .iter()
            .find(|&&offset| is_valid_placement(&self.board, &rotated, offset))
            .map(|&(dx, dy)| Self {
                active: Some(rotated.translated(dx, dy)),
                ..self.clone()
            })
            .unwrap_or_else(|| self.clone())
    }

    /// Drop to the deepest valid row and lock, scoring 2 points per row
    pub fn hard_drop(&self, source: &mut impl PieceSource) -> Self {
        let Some(active) = self.playable_piece() else {
            return self.clone();
        };

        let distance = drop_distance(&self.board, &active);
        self.lock(
            active.translated(0, distance),
            hard_drop_bonus(distance as u32),
            source,
        )
    }

    /// Timer tick: one step down while playing
    pub fn auto_drop(&self, source: &mut impl PieceSource) -> Self {
        if !self.is_playing() {
            return self.clone();
        }
        self.move_piece(Direction::Down, source)
    }

    /// Idle → Playing
    pub fn start(&self) -> Self {
        self.with_status_from(GameStatus::Idle, GameStatus::Playing)
    }

    /// Playing → Paused
    pub fn pause(&self) -> Self {
        self.with_status_from(GameStatus::Playing, GameStatus::Paused)
    }

    /// Paused → Playing
    pub fn resume(&self) -> Self {
        self.with_status_from(GameStatus::Paused, GameStatus::Playing)
    }

    /// Brand-new idle game carrying only the high score forward
    pub fn restart(&self, source: &mut impl PieceSource) -> Self {
        Self::new(self.stats.high_score, source)
    }

    /// Dispatch an action to its transition
    pub fn apply(&self, action: GameAction, source: &mut impl PieceSource) -> Self {
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left, source),
            GameAction::MoveRight => self.move_piece(Direction::Right, source),
            GameAction::MoveDown => self.move_piece(Direction::Down, source),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(source),
            GameAction::Tick => self.auto_drop(source),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::Restart => self.restart(source),
        }
    }

    /// Where the active piece would come to rest if hard-dropped now
    pub fn ghost_position(&self) -> Option<(i8, i8)> {
        let active = self.active?;
        Some((active.x, active.y + drop_distance(&self.board, &active)))
    }

    /// Cells of the ghost piece
    pub fn ghost_cells(&self) -> Option<[(i8, i8); 4]> {
        let active = self.active?;
        Some(active.translated(0, drop_distance(&self.board, &active)).cells())
    }

    /// Locked cells with the active piece merged in (clipped to the board)
    pub fn render_board(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = self.board.to_grid();
        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    grid[y as usize][x as usize] = Some(active.color());
                }
            }
        }
        grid
    }

    /// Read-only render surface
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.render_board(),
            active: self.active.map(ActiveSnapshot::from),
            ghost: self.ghost_position(),
            ghost_cells: self.ghost_cells(),
            next: self.next,
            status: self.status,
            stats: self.stats,
        }
    }

    fn playable_piece(&self) -> Option<ActivePiece> {
        if !self.is_playing() {
            return None;
        }
        self.active
    }

    fn with_status_from(&self, from: GameStatus, to: GameStatus) -> Self {
        if self.status != from {
            return self.clone();
        }
        Self {
            status: to,
            ..self.clone()
        }
    }

    /// Stamp `piece`, clear rows, score, promote the next piece and check for game over.
    ///
    /// The game ends only when the top two rows hold cells after the clear. A promoted
    /// piece that overlaps locked cells below row 1 stays in play.
    fn lock(&self, piece: ActivePiece, bonus: u32, source: &mut impl PieceSource) -> Self {
        let stamped = self.board.stamp(piece.cells(), piece.color());
        let (board, cleared) = stamped.clear_full_rows();
        let stats = self.stats.after_lock(cleared.len(), bonus);

        let promoted = self.next.unwrap_or_else(|| random_piece(source));
        let spawned = ActivePiece::spawn(promoted);
        let next = random_piece(source);

        let status = if board.is_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };

        Self {
            board,
            active: Some(spawned),
            next: Some(next),
            status,
            stats,
            piece_id: self.piece_id.wrapping_add(1),
        }
    }
}
