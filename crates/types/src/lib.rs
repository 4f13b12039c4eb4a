//! Shared types module - data structures and constants used by every crate
//!
//! All types here are plain data with no external dependencies, so they can be
//! used from the engine, the session controller, the terminal renderer and the
//! input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: pivot at (5, 0), the top-center column
//!
//! # Scoring and Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_SCORES` | `[0, 100, 300, 500, 800]` | Points per simultaneous clear, times level |
//! | `LEVEL_LINES` | 10 | Lines per level |
//! | `HARD_DROP_POINTS_PER_ROW` | 2 | Hard drop bonus per row descended |
//! | `INITIAL_DROP_MS` | 1000 | Auto-drop interval at level 1 |
//! | `DROP_DECREASE_MS` | 50 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use ziqi_tetris_types::{Color, Direction, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Color::Cyan.label(), "ziqi-cyan");
//! assert_eq!(Direction::Down.offset(), (0, 1));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Pivot column for newly spawned pieces (top-center)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Pivot row for newly spawned pieces
pub const SPAWN_Y: i8 = 0;

/// Number of rows at the top that end the game when occupied after a lock
pub const GAME_OVER_ROWS: u8 = 2;

/// Line clear scoring table, indexed by lines cleared in one lock (0-4).
///
/// The value is multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed per level
pub const LEVEL_LINES: u32 = 10;

/// Hard drop bonus per row descended (not multiplied by level)
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Auto-drop interval at level 1
pub const INITIAL_DROP_MS: u32 = 1000;

/// Auto-drop interval reduction per level above 1
pub const DROP_DECREASE_MS: u32 = 50;

/// Fastest auto-drop interval
pub const MIN_DROP_MS: u32 = 100;

/// Wall kick offsets tried in order after a rotation
pub const KICK_OFFSETS: [(i8, i8); 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use ziqi_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Color tag stamped into board cells.
///
/// Each tag has a stable string label so renderers outside this workspace
/// (a browser stylesheet, for example) can map it to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Accent,
    Green,
    Pink,
    Blue,
    Orange,
}

impl Color {
    /// Stable string label of the tag
    pub fn label(&self) -> &'static str {
        match self {
            Color::Cyan => "ziqi-cyan",
            Color::Yellow => "ziqi-yellow",
            Color::Accent => "ziqi-accent",
            Color::Green => "ziqi-green",
            Color::Pink => "ziqi-pink",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }

    /// Parse a label produced by [`Color::label`]
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "ziqi-cyan" => Some(Color::Cyan),
            "ziqi-yellow" => Some(Color::Yellow),
            "ziqi-accent" => Some(Color::Accent),
            "ziqi-green" => Some(Color::Green),
            "ziqi-pink" => Some(Color::Pink),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Color)`: filled with the color of the piece that locked there
pub type Cell = Option<Color>;

/// Translation directions accepted by `move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Board offset (dx, dy) for one step in this direction
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Lifecycle state of a game
///
/// `Idle → Playing → {Paused ⇄ Playing} → GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Inputs the engine accepts.
///
/// Human input, the auto-drop timer and lifecycle controls all funnel through
/// this one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    MoveDown,
    /// Rotate piece 90° clockwise with wall kicks
    Rotate,
    /// Drop to the lowest valid row and lock
    HardDrop,
    /// Timer-driven auto drop
    Tick,
    Start,
    Pause,
    Resume,
    /// Discard the session and roll a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use ziqi_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("TICK"), Some(GameAction::Tick));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "tick" => Some(GameAction::Tick),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Tick => "tick",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::Restart => "restart",
        }
    }
}
